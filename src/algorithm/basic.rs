pub use breadth::{breadth_first_search, BreadthFrontier};
pub use depth::{depth_first_search, DepthFrontier};

mod depth {
    use std::collections::VecDeque;

    use crate::algorithm::visited::ExpandMarking;
    use crate::algorithm::{Frontier, NodeId, Plan, SearchAlgorithm};
    use crate::errors::Result;
    use crate::heuristic::{null_heuristic, Estimate};
    use crate::problem::SearchProblem;

    /// Last-in-first-out frontier: pop yields the most recent push.
    #[derive(Debug)]
    pub struct DepthFrontier {
        queue: VecDeque<NodeId>,
    }

    impl Default for DepthFrontier {
        fn default() -> Self {
            DepthFrontier {
                queue: VecDeque::new(),
            }
        }
    }

    impl Frontier for DepthFrontier {
        fn push(&mut self, id: NodeId, _key: usize) {
            self.queue.push_front(id);
        }

        fn pop(&mut self) -> Option<NodeId> {
            self.queue.pop_front()
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    pub type DepthFirstSearcher<'p, P> = SearchAlgorithm<
        'p,
        P,
        DepthFrontier,
        ExpandMarking<<P as SearchProblem>::State>,
        Estimate<P>,
    >;

    pub fn build<P>(problem: &P) -> DepthFirstSearcher<P>
    where
        P: SearchProblem,
    {
        let estimate: Estimate<P> = null_heuristic;
        SearchAlgorithm::new(problem, estimate)
    }

    /// Depth-first search: always expands the deepest discovered node
    /// next, in the order the problem returns successors.
    ///
    /// Finds *a* path, with no cost or length guarantee.
    pub fn depth_first_search<P>(problem: &P) -> Result<Plan<P::Action>>
    where
        P: SearchProblem,
    {
        build(problem).run()
    }

    #[cfg(test)]
    mod test {
        use super::*;

        #[test]
        fn pops_most_recent_push_first() {
            let mut frontier = DepthFrontier::default();
            frontier.push(1, 0);
            frontier.push(2, 0);
            frontier.push(3, 0);

            assert_eq!(frontier.pop(), Some(3));
            assert_eq!(frontier.pop(), Some(2));
            frontier.push(4, 0);
            assert_eq!(frontier.pop(), Some(4));
            assert_eq!(frontier.pop(), Some(1));
            assert!(frontier.is_empty());
        }
    }
}

mod breadth {
    use std::collections::VecDeque;

    use crate::algorithm::visited::EnqueueMarking;
    use crate::algorithm::{Frontier, NodeId, Plan, SearchAlgorithm};
    use crate::errors::Result;
    use crate::heuristic::{null_heuristic, Estimate};
    use crate::problem::SearchProblem;

    /// First-in-first-out frontier: pop yields the earliest push still
    /// present.
    #[derive(Debug)]
    pub struct BreadthFrontier {
        queue: VecDeque<NodeId>,
    }

    impl Default for BreadthFrontier {
        fn default() -> Self {
            BreadthFrontier {
                queue: VecDeque::new(),
            }
        }
    }

    impl Frontier for BreadthFrontier {
        fn push(&mut self, id: NodeId, _key: usize) {
            self.queue.push_back(id);
        }

        fn pop(&mut self) -> Option<NodeId> {
            self.queue.pop_front()
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    pub type BreadthFirstSearcher<'p, P> = SearchAlgorithm<
        'p,
        P,
        BreadthFrontier,
        EnqueueMarking<<P as SearchProblem>::State>,
        Estimate<P>,
    >;

    pub fn build<P>(problem: &P) -> BreadthFirstSearcher<P>
    where
        P: SearchProblem,
    {
        let estimate: Estimate<P> = null_heuristic;
        SearchAlgorithm::new(problem, estimate)
    }

    /// Breadth-first search: expands states in discovery order, so the
    /// returned path has the fewest actions of any path to a goal.
    ///
    /// Minimizes action count, not cost.
    pub fn breadth_first_search<P>(problem: &P) -> Result<Plan<P::Action>>
    where
        P: SearchProblem,
    {
        build(problem).run()
    }

}
