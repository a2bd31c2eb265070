//! Error types for the query crate.

/// Errors from building or running a query pattern.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A pattern must always specify at least one segment. An empty
    /// pattern is rejected immediately, never treated as "match nothing".
    #[error("pattern must have at least one segment")]
    EmptyPattern,

    /// A dotted pattern segment could not be parsed.
    #[error("invalid pattern segment {0:?}")]
    InvalidSegment(String),
}

/// Convenience alias for query results.
pub type QueryResult<T> = Result<T, QueryError>;
