//! Uniform-cost search: Dijkstra's algorithm over the problem's
//! implicit graph.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::algorithm::visited::DeferredMarking;
use crate::algorithm::{Frontier, NodeId, Plan, SearchAlgorithm};
use crate::errors::Result;
use crate::heuristic::{null_heuristic, Estimate};
use crate::problem::SearchProblem;

/// A frontier entry which sorts appropriately for cheapest-first
/// popping out of a max-heap: key order reversed, with the insertion
/// stamp breaking ties so equal keys pop in insertion order.
#[derive(Debug)]
struct CostedEntry {
    key: usize,
    stamp: usize,
    id: NodeId,
}

impl PartialEq for CostedEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.stamp == other.stamp
    }
}

impl Eq for CostedEntry {}

impl Ord for CostedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then(self.stamp.cmp(&other.stamp))
            .reverse()
    }
}

impl PartialOrd for CostedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority frontier which always yields the entry with the smallest
/// key, breaking key ties in insertion order.
///
/// There is no decrease-key: a state rediscovered more cheaply is
/// simply pushed again, and the visited policy discards the stale
/// entry when it eventually pops.
#[derive(Debug)]
pub struct CostFrontier {
    heap: BinaryHeap<CostedEntry>,
    stamp: usize,
}

impl Default for CostFrontier {
    fn default() -> Self {
        CostFrontier {
            heap: BinaryHeap::new(),
            stamp: 0,
        }
    }
}

impl Frontier for CostFrontier {
    fn push(&mut self, id: NodeId, key: usize) {
        let stamp = self.stamp;
        self.stamp += 1;
        self.heap.push(CostedEntry { key, stamp, id });
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

pub type UniformCostSearcher<'p, P> = SearchAlgorithm<
    'p,
    P,
    CostFrontier,
    DeferredMarking<<P as SearchProblem>::State>,
    Estimate<P>,
>;

pub fn build<P>(problem: &P) -> UniformCostSearcher<P>
where
    P: SearchProblem,
{
    let estimate: Estimate<P> = null_heuristic;
    SearchAlgorithm::new(problem, estimate)
}

/// Uniform-cost search: always expands the node with the cheapest
/// accumulated path cost, so the first goal expansion is via a
/// cheapest path.
///
/// Exactly [a_star_search](crate::a_star_search) with the
/// [null_heuristic](crate::null_heuristic), which is how it is built.
pub fn uniform_cost_search<P>(problem: &P) -> Result<Plan<P::Action>>
where
    P: SearchProblem,
{
    build(problem).run()
}
