//! Errors raised while compiling a number formatter.
//!
//! These never reach callers of [`NumberFormatter::format`](crate::NumberFormatter::format):
//! the formatter logs them and falls back to manual formatting. They are
//! public so [`CompiledFormatter::new`](crate::CompiledFormatter::new) can be
//! used directly when a hard failure is preferred.

/// Invalid or unsupported formatter configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid currency code {0:?}: expected three ASCII letters")]
    InvalidCurrency(String),
    #[error("unknown unit {0:?}")]
    UnknownUnit(String),
    #[error("currency style requires a currency code")]
    MissingCurrency,
    #[error("unit style requires a unit")]
    MissingUnit,
    #[error("invalid digit bounds: {0}")]
    InvalidDigits(String),
    #[error("{feature} is not available for locale {locale:?}")]
    Unsupported {
        feature: &'static str,
        locale: String,
    },
}
