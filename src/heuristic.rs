//! The numeric contract heuristics must satisfy for A* search.
//!
//! A heuristic estimates the cost remaining from a state to the
//! nearest goal. Estimates are `usize`, so non-negativity holds by
//! construction. For the A* optimality guarantee the estimate must
//! additionally be admissible (never overestimate the true remaining
//! cost) and consistent (satisfy the triangle inequality across every
//! edge). Neither property can be checked here; violating them still
//! produces a path, just not necessarily a cheapest one.

use crate::problem::SearchProblem;

/// An estimate of the cost remaining to reach a goal.
///
/// Implemented for any `Fn(&State, &Problem) -> usize` closure, so
/// most callers never implement this trait by hand.
pub trait Heuristic<P>
where
    P: SearchProblem,
{
    fn estimate(&self, state: &P::State, problem: &P) -> usize;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem,
    F: Fn(&P::State, &P) -> usize,
{
    fn estimate(&self, state: &P::State, problem: &P) -> usize {
        (self)(state, problem)
    }
}

/// A heuristic as a plain function pointer.
///
/// This is the form the fixed-strategy searches use to hand the
/// engine [null_heuristic] without an extra type parameter.
pub type Estimate<P> = fn(&<P as SearchProblem>::State, &P) -> usize;

/// The trivial heuristic: zero everywhere.
///
/// Always admissible and consistent. A* with this heuristic is
/// exactly uniform-cost search.
pub fn null_heuristic<P>(_state: &P::State, _problem: &P) -> usize
where
    P: SearchProblem,
{
    0
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::problem::Successor;

    #[derive(Debug)]
    struct Line;

    impl SearchProblem for Line {
        type State = usize;
        type Action = usize;

        fn start_state(&self) -> usize {
            0
        }

        fn is_goal(&self, state: &usize) -> bool {
            *state == 5
        }

        fn successors(&self, state: &usize) -> Vec<Successor<usize, usize>> {
            vec![Successor::new(state + 1, state + 1, 1)]
        }
    }

    #[test]
    fn null_heuristic_is_zero() {
        assert_eq!(null_heuristic(&3, &Line), 0);
    }

    #[test]
    fn closures_are_heuristics() {
        let remaining = |state: &usize, _problem: &Line| 5usize.saturating_sub(*state);
        assert_eq!(remaining.estimate(&2, &Line), 3);
        assert_eq!(remaining.estimate(&5, &Line), 0);
    }
}
