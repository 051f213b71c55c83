//! Manager configuration.
//!
//! Every tunable of a [`TranslationManager`](crate::TranslationManager) in
//! one [`I18nConfig`], loadable from JSON or, with the `toml-config`
//! feature, TOML.
//!
//! ```toml
//! # lexis.toml
//! default_locale = "de"
//! fallback_locale = "en"
//! cache_capacity = 5000
//! placeholder = "double_brace"
//! ```
//!
//! ```rust,ignore
//! let config = I18nConfig::from_toml_file("lexis.toml")?.validated()?;
//! ```
//!
//! Missing fields take their defaults, so `{}` is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_CAPACITY;
use crate::error::ConfigError;
use crate::icu::DEFAULT_MESSAGE_CACHE_CAPACITY;
use crate::interpolate::PlaceholderSyntax;

/// Configuration for a [`TranslationManager`](crate::TranslationManager).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale used when a call passes an empty locale tag.
    pub default_locale: String,
    /// Locale consulted when the requested one lacks a key.
    pub fallback_locale: String,
    /// Maximum cached translation results.
    pub cache_capacity: usize,
    /// Maximum cached number formatters.
    pub formatter_cache_capacity: usize,
    /// Maximum cached parsed ICU messages; `0` disables that cache.
    pub message_cache_capacity: usize,
    /// Placeholder delimiters for dictionary strings.
    pub placeholder: PlaceholderSyntax,
    /// Check dictionaries for plural entries without `other` when loaded.
    pub validate_on_load: bool,
    /// `false` forces the manual fallback number formatter.
    pub native_formatting: bool,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            fallback_locale: "en".into(),
            cache_capacity: DEFAULT_CAPACITY,
            formatter_cache_capacity: lexis_format::DEFAULT_CACHE_CAPACITY,
            message_cache_capacity: DEFAULT_MESSAGE_CACHE_CAPACITY,
            placeholder: PlaceholderSyntax::DoubleBrace,
            validate_on_load: true,
            native_formatting: true,
        }
    }
}

impl I18nConfig {
    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Load from a TOML string.
    #[cfg(feature = "toml-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "toml-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Range errors; an empty list means the config is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.default_locale.trim().is_empty() {
            errors.push("default_locale must not be empty".into());
        }
        if self.fallback_locale.trim().is_empty() {
            errors.push("fallback_locale must not be empty".into());
        }
        if self.cache_capacity == 0 {
            errors.push("cache_capacity must be > 0".into());
        }
        if self.formatter_cache_capacity == 0 {
            errors.push("formatter_cache_capacity must be > 0".into());
        }

        errors
    }

    /// `self` if [`validate`](Self::validate) finds nothing.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}
