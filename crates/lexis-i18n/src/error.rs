//! Error types.
//!
//! Only loading can fail. Lookup, interpolation, and message formatting
//! always return a string and report problems through `tracing` instead.

/// Errors from building or loading translation data.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    /// A dictionary was not valid JSON.
    #[error("dictionary parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// A dictionary entry is neither a string nor an object.
    #[error("invalid entry at {path:?}: expected a string or an object, found {found}")]
    InvalidEntry { path: String, found: &'static str },
    /// A dictionary file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The manager configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors from loading or validating an [`I18nConfig`](crate::I18nConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "toml-config")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
