use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::{Result, SearchError};

/// A single transition out of a state: the state reached, the action
/// which reaches it, and the cost of taking that step.
///
/// Step costs are `usize`, so negative costs are unrepresentable; the
/// cost-ordered searches are only correct without them anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: usize,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: usize) -> Self {
        Successor {
            state,
            action,
            cost,
        }
    }
}

/// Interface which poses a problem to the search algorithms.
///
/// The searches never look inside a state or an action: states only
/// need equality and hashing (for visited-state bookkeeping) and
/// actions are carried opaquely into the resulting plan. Everything
/// the algorithms know about the search space comes through
/// [SearchProblem::successors].
pub trait SearchProblem {
    type State: Debug + Clone + Eq + Hash;
    type Action: Debug + Clone;

    /// The unique state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Whether a state satisfies the goal. Must be a pure predicate.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All one-step transitions out of a state. May be empty at a
    /// dead end. The order of the returned vector fixes the tie-break
    /// order between otherwise equally ranked frontier entries, which
    /// makes each search deterministic for a given problem.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of a legal action sequence, for validating plans
    /// outside of a search. None of the search algorithms call this;
    /// problems with no use for it may keep the default, which reports
    /// the contract as unimplemented rather than inventing an answer.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Result<usize> {
        let _ = actions;
        Err(SearchError::Unimplemented("cost_of_actions"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug)]
    struct Trivial;

    impl SearchProblem for Trivial {
        type State = u32;
        type Action = u32;

        fn start_state(&self) -> u32 {
            0
        }

        fn is_goal(&self, state: &u32) -> bool {
            *state == 0
        }

        fn successors(&self, _state: &u32) -> Vec<Successor<u32, u32>> {
            Vec::new()
        }
    }

    #[derive(Debug)]
    struct Counted;

    impl SearchProblem for Counted {
        type State = u32;
        type Action = u32;

        fn start_state(&self) -> u32 {
            0
        }

        fn is_goal(&self, state: &u32) -> bool {
            *state == 0
        }

        fn successors(&self, _state: &u32) -> Vec<Successor<u32, u32>> {
            Vec::new()
        }

        fn cost_of_actions(&self, actions: &[u32]) -> Result<usize> {
            Ok(actions.iter().map(|a| *a as usize).sum())
        }
    }

    #[test]
    fn cost_of_actions_defaults_to_unimplemented() {
        let err = Trivial.cost_of_actions(&[1, 2]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Problem does not implement cost_of_actions"
        );
    }

    #[test]
    fn cost_of_actions_override_is_used() {
        assert_eq!(Counted.cost_of_actions(&[1, 2, 3]).unwrap(), 6);
    }

    #[test]
    fn successor_carries_the_triple() {
        let successor = Successor::new(4u32, 7u32, 2);
        assert_eq!(successor.state, 4);
        assert_eq!(successor.action, 7);
        assert_eq!(successor.cost, 2);
    }
}
