//! Error types shared by the core and the client crate.

/// Why a search produced no usable candidate set.
///
/// Both variants are recovered locally by the controller and surface to the
/// user exactly like a zero-match search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The request never completed (connection refused, reset, timeout).
    #[error("search request failed: {0}")]
    Network(String),
    /// The endpoint answered, but not with a JSON array of records.
    #[error("malformed search response: {0}")]
    MalformedResponse(String),
}

/// Failure reading or writing the session-local store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session store I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Keys become file names, so only `[A-Za-z0-9_-]` is accepted.
    #[error("invalid session key {0:?}")]
    InvalidKey(String),
}
