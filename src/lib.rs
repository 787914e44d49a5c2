//! Generalized search algorithms over abstract problem descriptions.
//!
//! Implement [SearchProblem] for your domain — a start state, a goal
//! predicate, and a successor generator — and hand it to one of four
//! strategies:
//!
//! - [depth_first_search] (alias [dfs]) follows the deepest branch first
//! - [breadth_first_search] (alias [bfs]) returns a fewest-actions path
//! - [uniform_cost_search] (alias [ucs]) returns a cheapest path
//! - [a_star_search] (alias [astar]) returns a cheapest path, guided by
//!   a [Heuristic] satisfying the contract documented in [heuristic](crate::heuristic)
//!
//! Searches are synchronous and run to completion on the calling
//! thread; each call owns its own frontier and visited set, so nothing
//! persists between calls. A successful search yields a [Plan] holding
//! the action sequence and its total cost; an exhausted frontier is
//! [SearchError::NoPathFound], so an empty plan always means the start
//! state was already a goal.

pub mod algorithm;
mod errors;
pub mod heuristic;
mod problem;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use heuristic::{null_heuristic, Heuristic};
pub use problem::{SearchProblem, Successor};

pub use algorithm::astar::a_star_search;
pub use algorithm::basic::{breadth_first_search, depth_first_search};
pub use algorithm::uniform::uniform_cost_search;
pub use algorithm::{Frontier, Plan};

// Abbreviations
pub use algorithm::astar::a_star_search as astar;
pub use algorithm::basic::breadth_first_search as bfs;
pub use algorithm::basic::depth_first_search as dfs;
pub use algorithm::uniform::uniform_cost_search as ucs;
