//! Visited-state bookkeeping, which keeps a search from re-expanding
//! work it has already committed to.
//!
//! The strategies disagree on *when* a state is committed to, and the
//! disagreement matters: marking at enqueue time keeps the frontier
//! small but freezes the first path found to each state, which is only
//! correct when that ordering guarantees the first path is the one to
//! keep (breadth-first). The cost-ordered searches must mark at
//! expansion time instead, because a cheaper route to a state already
//! sitting in the frontier can still be discovered.

use std::collections::HashSet;
use std::hash::Hash;

/// Defines when a search marks states as visited.
///
/// The engine consults [admit_expansion](VisitPolicy::admit_expansion)
/// for every popped node and [admit_enqueue](VisitPolicy::admit_enqueue)
/// for every candidate push (the start node included); each may mark
/// the state as a side effect.
pub trait VisitPolicy<S>: Default {
    /// Called with a popped state before it is expanded. Returning
    /// false discards the node unexpanded.
    fn admit_expansion(&mut self, state: &S) -> bool;

    /// Called with a discovered state before it is enqueued. Returning
    /// false drops the successor.
    fn admit_enqueue(&mut self, state: &S) -> bool;
}

/// Marks states when they are expanded, and refuses to enqueue a state
/// which has already been expanded.
///
/// Duplicate frontier entries for not-yet-expanded states are
/// tolerated; whichever pops second is discarded here. Used by
/// depth-first search.
#[derive(Debug)]
pub struct ExpandMarking<S> {
    seen: HashSet<S>,
}

impl<S> Default for ExpandMarking<S> {
    fn default() -> Self {
        ExpandMarking {
            seen: HashSet::new(),
        }
    }
}

impl<S> VisitPolicy<S> for ExpandMarking<S>
where
    S: Clone + Eq + Hash,
{
    fn admit_expansion(&mut self, state: &S) -> bool {
        self.seen.insert(state.clone())
    }

    fn admit_enqueue(&mut self, state: &S) -> bool {
        !self.seen.contains(state)
    }
}

/// Marks states the moment they are enqueued.
///
/// Each reachable state enters the frontier at most once, so the first
/// path which discovers it is the one kept. Used by breadth-first
/// search, where that first path has the fewest edges.
#[derive(Debug)]
pub struct EnqueueMarking<S> {
    seen: HashSet<S>,
}

impl<S> Default for EnqueueMarking<S> {
    fn default() -> Self {
        EnqueueMarking {
            seen: HashSet::new(),
        }
    }
}

impl<S> VisitPolicy<S> for EnqueueMarking<S>
where
    S: Clone + Eq + Hash,
{
    fn admit_expansion(&mut self, _state: &S) -> bool {
        true
    }

    fn admit_enqueue(&mut self, state: &S) -> bool {
        self.seen.insert(state.clone())
    }
}

/// Enqueues unconditionally and marks states at their first expansion.
///
/// A state may sit in the frontier several times under different keys;
/// only the first pop is honored, and under a cheapest-first ordering
/// that pop arrives via the cheapest discovered path. Used by
/// uniform-cost and A* search.
#[derive(Debug)]
pub struct DeferredMarking<S> {
    seen: HashSet<S>,
}

impl<S> Default for DeferredMarking<S> {
    fn default() -> Self {
        DeferredMarking {
            seen: HashSet::new(),
        }
    }
}

impl<S> VisitPolicy<S> for DeferredMarking<S>
where
    S: Clone + Eq + Hash,
{
    fn admit_expansion(&mut self, state: &S) -> bool {
        self.seen.insert(state.clone())
    }

    fn admit_enqueue(&mut self, _state: &S) -> bool {
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn expand_marking_discards_duplicate_expansions() {
        let mut policy = ExpandMarking::default();
        assert!(policy.admit_enqueue(&"a"));
        assert!(policy.admit_expansion(&"a"));
        assert!(!policy.admit_expansion(&"a"));
        assert!(!policy.admit_enqueue(&"a"));
    }

    #[test]
    fn enqueue_marking_admits_each_state_once() {
        let mut policy = EnqueueMarking::default();
        assert!(policy.admit_enqueue(&"a"));
        assert!(!policy.admit_enqueue(&"a"));
        // Expansion is unconditional; the frontier holds no duplicates.
        assert!(policy.admit_expansion(&"a"));
        assert!(policy.admit_expansion(&"a"));
    }

    #[test]
    fn deferred_marking_honors_only_the_first_pop() {
        let mut policy = DeferredMarking::default();
        assert!(policy.admit_enqueue(&"a"));
        assert!(policy.admit_enqueue(&"a"));
        assert!(policy.admit_expansion(&"a"));
        assert!(!policy.admit_expansion(&"a"));
        assert!(policy.admit_enqueue(&"a"));
    }
}
