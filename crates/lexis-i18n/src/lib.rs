#![forbid(unsafe_code)]

//! Translation lookup for Lexis.
//!
//! A [`TranslationManager`] resolves dotted keys against a nested
//! [`TranslationTree`] with a single fallback locale, picks plural variants
//! with CLDR-style rules, fills `{{placeholders}}` from a typed [`Params`]
//! bag, and caches finished strings in an LRU cache. [`MessageFormatter`]
//! evaluates ICU-style messages with nested `plural`, `selectordinal`,
//! `select` and `number` clauses.
//!
//! Lookups never fail. Missing keys come back verbatim, and problems with
//! dictionaries or parameters are reported through `tracing` under the
//! `lexis.*` targets.
//!
//! ```
//! use lexis_i18n::{TranslationManager, TranslationTree, params};
//!
//! let tree = TranslationTree::from_json_str(r##"{
//!     "en": { "nav": { "home": "Home" }, "welcome": { "one": "# item", "other": "# items" } },
//!     "de": { "nav": { "home": "Startseite" } }
//! }"##).unwrap();
//! let i18n = TranslationManager::new(tree);
//!
//! assert_eq!(i18n.t("de", "nav.home"), "Startseite");
//! assert_eq!(i18n.translate_plural("de", "welcome", 5.0, &params! {}), "# items");
//! assert_eq!(
//!     i18n.format_message("en", "{n, plural, =0 {none} other {# left}}", &params! { "n" => 3 }),
//!     "3 left"
//! );
//! ```

pub mod cache;
pub mod config;
pub mod coverage;
pub mod error;
pub mod icu;
pub mod interpolate;
pub mod manager;
pub mod plural;
pub mod resolver;
pub mod tree;
pub mod validate;
pub mod value;

pub use cache::{CacheStats, TranslationCache};
pub use config::I18nConfig;
pub use coverage::{CoverageReport, LocaleCoverage};
pub use error::{ConfigError, I18nError};
pub use icu::MessageFormatter;
pub use interpolate::{PlaceholderSyntax, interpolate};
pub use manager::{
    MissingHandler, MissingReason, MissingTranslation, TranslationManager,
    TranslationManagerBuilder,
};
pub use plural::{PluralForms, PluralRule, PluralRules, select_category};
pub use resolver::{Resolution, Resolved, resolve};
pub use tree::{TranslationNode, TranslationTree, TranslationValue};
pub use validate::{ValidationIssue, ValidationReport, validate_tree};
pub use value::{ParamValue, Params};

pub use lexis_core::PluralCategory;
