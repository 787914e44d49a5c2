//! Provides the building blocks for search algorithms.
//!
//! Every strategy here is the same loop over different components: a
//! [Frontier] which orders the discovered-but-unexpanded nodes, and a
//! [VisitPolicy](visited::VisitPolicy) which decides when a state is
//! committed to. The per-strategy modules pick concrete components and
//! expose an entry point.

use log::trace;

use crate::errors::{Result, SearchError};
use crate::heuristic::Heuristic;
use crate::problem::SearchProblem;

use self::visited::VisitPolicy;

pub mod astar;
pub mod basic;
pub mod uniform;
pub mod visited;

/// Index of a node in the engine's arena.
pub type NodeId = usize;

/// Trait used to implement frontiers of pending search nodes.
///
/// `key` ranks entries in orderings which use one (the priority
/// frontier); the insertion-ordered frontiers ignore it.
pub trait Frontier: Default {
    fn push(&mut self, id: NodeId, key: usize);

    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A discovered state, with a back-link to the node which discovered
/// it and the action taken on that step.
///
/// Nodes are immutable once created. The engine keeps every node in an
/// arena for the duration of one run and rebuilds the action path by
/// walking back-links when a goal is popped, rather than carrying a
/// growing path copy inside every frontier entry.
#[derive(Debug)]
struct SearchNode<S, A> {
    state: S,
    link: Option<(NodeId, A)>,
    cost: usize,
}

/// A successful search outcome.
///
/// `actions` is empty only when the start state already satisfied the
/// goal; an exhausted search is [SearchError::NoPathFound] instead, so
/// the two cases cannot be confused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<A> {
    /// Actions which lead from the start state to a goal state.
    pub actions: Vec<A>,
    /// Total step cost accumulated along those actions.
    pub cost: usize,
}

/// Implementation of search, using generic components.
///
/// Uses a generic frontier (F) and a generic visited policy (V) to
/// provide a single foundation for the four search strategies. The
/// heuristic (H) feeds the frontier key; strategies without one pass
/// [null_heuristic](crate::heuristic::null_heuristic).
pub struct SearchAlgorithm<'p, P, F, V, H>
where
    P: SearchProblem,
    F: Frontier,
    V: VisitPolicy<P::State>,
    H: Heuristic<P>,
{
    problem: &'p P,
    frontier: F,
    visited: V,
    nodes: Vec<SearchNode<P::State, P::Action>>,
    estimate: H,
}

impl<'p, P, F, V, H> SearchAlgorithm<'p, P, F, V, H>
where
    P: SearchProblem,
    F: Frontier,
    V: VisitPolicy<P::State>,
    H: Heuristic<P>,
{
    fn new(problem: &'p P, estimate: H) -> Self {
        let mut search = SearchAlgorithm {
            problem,
            frontier: F::default(),
            visited: V::default(),
            nodes: Vec::new(),
            estimate,
        };

        let start = problem.start_state();
        if search.visited.admit_enqueue(&start) {
            let key = search.estimate.estimate(&start, problem);
            search.nodes.push(SearchNode {
                state: start,
                link: None,
                cost: 0,
            });
            search.frontier.push(0, key);
        }
        search
    }

    /// Run the search to completion.
    ///
    /// Pops until a goal state is expanded or the frontier empties.
    /// Each run owns its frontier, visited set and node arena, so
    /// nothing persists between runs on the same problem.
    pub fn run(mut self) -> Result<Plan<P::Action>> {
        let mut expanded = 0usize;

        while let Some(id) = self.frontier.pop() {
            if !self.visited.admit_expansion(&self.nodes[id].state) {
                continue;
            }

            if self.problem.is_goal(&self.nodes[id].state) {
                return Ok(self.plan(id));
            }

            expanded += 1;
            if expanded % 10_000 == 0 {
                trace!(
                    "expanded {} states, frontier holds {}",
                    expanded,
                    self.frontier.len()
                );
            }

            let cost = self.nodes[id].cost;
            for successor in self.problem.successors(&self.nodes[id].state) {
                if !self.visited.admit_enqueue(&successor.state) {
                    continue;
                }

                let total = cost + successor.cost;
                let key = total + self.estimate.estimate(&successor.state, self.problem);
                let child = self.nodes.len();
                self.nodes.push(SearchNode {
                    state: successor.state,
                    link: Some((id, successor.action)),
                    cost: total,
                });
                self.frontier.push(child, key);
            }
        }

        Err(SearchError::NoPathFound)
    }

    fn plan(&self, goal: NodeId) -> Plan<P::Action> {
        let mut actions = Vec::new();
        let mut cursor = goal;
        while let Some((parent, action)) = &self.nodes[cursor].link {
            actions.push(action.clone());
            cursor = *parent;
        }
        actions.reverse();

        Plan {
            actions,
            cost: self.nodes[goal].cost,
        }
    }
}
