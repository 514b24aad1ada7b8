//! Error types for the taskwell-search crate.
//!
//! [`SearchError::Cancelled`] is the only error the scan itself raises, and
//! it is non-fatal by contract: callers void the attempt and move on. The
//! remaining variants come from entry-point validation or from host record
//! stores. Record text and query text never appear in error messages.

/// Errors that can occur during record search operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The search was cancelled before or during the scan. The attempt is
    /// void; no partial results exist.
    #[error("search cancelled")]
    Cancelled,

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Rejected query input (blank text).
    #[error("query error: {0}")]
    Query(String),

    /// The record store failed to supply the candidate set.
    #[error("record store error: {0}")]
    Store(String),
}

impl SearchError {
    /// Returns `true` when this error means the attempt was superseded or
    /// aborted rather than failed. Callers silently drop such attempts
    /// instead of surfacing them.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Convenience type alias for taskwell-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
