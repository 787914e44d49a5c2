//! A* search: cheapest-first expansion guided by a heuristic.

use crate::algorithm::uniform::CostFrontier;
use crate::algorithm::visited::DeferredMarking;
use crate::algorithm::{Plan, SearchAlgorithm};
use crate::errors::Result;
use crate::heuristic::Heuristic;
use crate::problem::SearchProblem;

pub type AStarSearcher<'p, P, H> =
    SearchAlgorithm<'p, P, CostFrontier, DeferredMarking<<P as SearchProblem>::State>, H>;

pub fn build<P, H>(problem: &P, heuristic: H) -> AStarSearcher<P, H>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    SearchAlgorithm::new(problem, heuristic)
}

/// A* search: expands the node with the smallest accumulated cost plus
/// heuristic estimate.
///
/// With an admissible, consistent heuristic (see the
/// [heuristic contract](crate::heuristic)) the returned path is a
/// cheapest path, matching
/// [uniform_cost_search](crate::uniform_cost_search) while typically
/// expanding fewer states. With a heuristic violating the contract a
/// path is still returned, without the optimality guarantee.
pub fn a_star_search<P, H>(problem: &P, heuristic: H) -> Result<Plan<P::Action>>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    build(problem, heuristic).run()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::problem::Successor;
    use crate::uniform_cost_search;

    /// States are positions on a 1-D track from 0 to `goal`; each step
    /// moves one position left or right at cost 1, with a costly jump
    /// of two positions available as a decoy.
    #[derive(Debug)]
    struct Track {
        goal: i64,
    }

    impl SearchProblem for Track {
        type State = i64;
        type Action = i64;

        fn start_state(&self) -> i64 {
            0
        }

        fn is_goal(&self, state: &i64) -> bool {
            *state == self.goal
        }

        fn successors(&self, state: &i64) -> Vec<Successor<i64, i64>> {
            vec![
                Successor::new(state - 1, -1, 1),
                Successor::new(state + 1, 1, 1),
                Successor::new(state + 2, 2, 5),
            ]
        }
    }

    /// Remaining distance to the goal. Admissible and consistent for
    /// unit step costs.
    fn distance(state: &i64, problem: &Track) -> usize {
        (problem.goal - state).abs() as usize
    }

    #[test]
    fn guided_search_matches_uniform_cost() {
        let problem = Track { goal: 6 };

        let guided = a_star_search(&problem, distance).unwrap();
        let unguided = uniform_cost_search(&problem).unwrap();

        assert_eq!(guided.cost, unguided.cost);
        assert_eq!(guided.cost, 6);
        assert_eq!(guided.actions, vec![1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn heuristic_closures_are_accepted() {
        let problem = Track { goal: 2 };
        let plan = a_star_search(&problem, |state: &i64, problem: &Track| {
            (problem.goal - state).abs() as usize
        })
        .unwrap();
        assert_eq!(plan.cost, 2);
    }
}
