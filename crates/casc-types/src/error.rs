//! Error types for the foundation crate.

/// Errors from parsing foundation types.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// A dotted key path contained an empty segment.
    #[error("empty segment in key path {0:?}")]
    EmptyPathSegment(String),
}
