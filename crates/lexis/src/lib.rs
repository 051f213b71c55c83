#![forbid(unsafe_code)]

//! Lexis public facade crate.
//!
//! Re-exports the translation manager, ICU-style message formatter, plural
//! rules, number and ordinal formatters, and the caches underneath them,
//! plus a prelude for day-to-day use.
//!
//! ```
//! use lexis::prelude::*;
//!
//! let tree = TranslationTree::from_json_str(r#"{
//!     "en": { "cart": { "one": "{{count}} item", "other": "{{count}} items" } }
//! }"#).unwrap();
//! let i18n = TranslationManager::new(tree);
//!
//! assert_eq!(i18n.translate_plural("en", "cart", 2.0, &params! {}), "2 items");
//! assert_eq!(
//!     i18n.format_message("en", "{n, selectordinal, one {#st} two {#nd} few {#rd} other {#th}}",
//!         &params! { "n" => 22 }),
//!     "22nd"
//! );
//! assert_eq!(
//!     i18n.format_number(1234.56, "de-DE", &NumberFormatOptions::default()),
//!     "1.234,56"
//! );
//! ```

// --- Core re-exports -------------------------------------------------------

pub use lexis_core::{FifoCache, FifoStats, LruCache, PluralCategory};

// --- Format re-exports -----------------------------------------------------

pub use lexis_format::{
    CompactDisplay, FormatError, Notation, NumberFormatOptions, NumberFormatter, NumberStyle,
    OrdinalFormatter, OrdinalRule, SignDisplay, UnitDisplay,
};

// --- I18n re-exports -------------------------------------------------------

pub use lexis_i18n::{
    CacheStats, ConfigError, CoverageReport, I18nConfig, I18nError, LocaleCoverage,
    MessageFormatter, MissingReason, MissingTranslation, ParamValue, Params, PlaceholderSyntax,
    PluralForms, PluralRule, PluralRules, TranslationManager, TranslationManagerBuilder,
    TranslationNode, TranslationTree, TranslationValue, ValidationIssue, ValidationReport,
    interpolate, params, select_category,
};

pub use lexis_core as core;
pub use lexis_format as format;
pub use lexis_i18n as i18n;

/// Result type for loading translations and configuration.
pub type Result<T> = std::result::Result<T, I18nError>;

pub mod prelude {
    pub use crate::{
        I18nConfig, MessageFormatter, NumberFormatOptions, NumberFormatter, OrdinalFormatter,
        Params, PluralCategory, Result, TranslationManager, TranslationTree, params,
    };

    pub use crate::{core, format, i18n};
}
