//! Error types for the diff crate.

/// Errors that can occur during comparison.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The comparator was handed a non-mapping root. Comparison is defined
    /// over mapping trees; incompatible root shapes are a hard error rather
    /// than an empty result.
    #[error("comparison roots must be mappings, got {old} and {new}")]
    RootNotMapping {
        old: &'static str,
        new: &'static str,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
