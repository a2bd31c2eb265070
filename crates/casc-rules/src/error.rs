//! Error types for the rules crate.

/// Errors from loading or building a rules configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The rules file was not valid TOML for [`crate::RulesConfig`].
    #[error("invalid rules file: {0}")]
    Toml(#[from] toml::de::Error),

    /// A configured pattern string did not parse.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] casc_query::QueryError),

    /// A configured ignore path did not parse.
    #[error("invalid ignore path: {0}")]
    Path(#[from] casc_types::TypeError),
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
