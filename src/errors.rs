use thiserror::Error;

/// Error produced when a search fails.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The frontier was exhausted without reaching a goal state.
    ///
    /// Distinct from a successful search whose plan happens to be
    /// empty, which means the start state already satisfied the goal.
    #[error("No path to a goal state was found")]
    NoPathFound,

    /// A problem method without a concrete implementation was invoked.
    #[error("Problem does not implement {0}")]
    Unimplemented(&'static str),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
