//! Ordinal numbers: `1st`, `2nd`, `1er`, `3º`.
//!
//! Native rules come from the CLDR ordinal categories for the languages
//! Lexis has data for. The manual path only knows the English last-digit
//! heuristic and a generic Romance `º` suffix.

use std::sync::Mutex;

use lexis_core::locale::{is_romance, language};
use lexis_core::{FifoCache, FifoStats, PluralCategory, display_number};

use crate::number::DEFAULT_CACHE_CAPACITY;

/// Ordinal rule for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdinalRule {
    /// `one` ends in 1, `two` ends in 2, `few` ends in 3; 11–13 are `other`.
    English,
    /// `one` for 1 only.
    French,
    /// Single `other` category with a masculine ordinal indicator.
    Romance,
    /// No ordinal marking.
    Plain,
}

impl OrdinalRule {
    /// Native rule for a locale tag.
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        match language(locale).as_str() {
            "en" => Self::English,
            "fr" => Self::French,
            "es" | "it" | "pt" => Self::Romance,
            _ => Self::Plain,
        }
    }

    /// Rule the manual path uses for a locale tag.
    #[must_use]
    pub fn fallback_for_locale(locale: &str) -> Self {
        if language(locale) == "en" {
            Self::English
        } else if is_romance(locale) {
            Self::Romance
        } else {
            Self::Plain
        }
    }

    /// Ordinal category of `n`. Fractions are always `other`.
    #[must_use]
    pub fn category(self, n: f64) -> PluralCategory {
        if !n.is_finite() || n.fract() != 0.0 {
            return PluralCategory::Other;
        }
        let n = n.abs().min(u64::MAX as f64) as u64;
        match self {
            Self::English => match (n % 10, n % 100) {
                (_, 11..=13) => PluralCategory::Other,
                (1, _) => PluralCategory::One,
                (2, _) => PluralCategory::Two,
                (3, _) => PluralCategory::Few,
                _ => PluralCategory::Other,
            },
            Self::French if n == 1 => PluralCategory::One,
            Self::French | Self::Romance | Self::Plain => PluralCategory::Other,
        }
    }

    /// Suffix appended for a category.
    #[must_use]
    pub fn suffix(self, category: PluralCategory) -> &'static str {
        match (self, category) {
            (Self::English, PluralCategory::One) => "st",
            (Self::English, PluralCategory::Two) => "nd",
            (Self::English, PluralCategory::Few) => "rd",
            (Self::English, _) => "th",
            (Self::French, PluralCategory::One) => "er",
            (Self::French, _) => "e",
            (Self::Romance, _) => "º",
            (Self::Plain, _) => "",
        }
    }
}

/// Formats ordinals, caching the resolved rule per locale tag.
pub struct OrdinalFormatter {
    rules: Mutex<FifoCache<String, OrdinalRule>>,
    native: bool,
}

impl OrdinalFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rules: Mutex::new(FifoCache::new(capacity)),
            native: true,
        }
    }

    /// Manual heuristics only.
    #[must_use]
    pub fn manual() -> Self {
        Self {
            rules: Mutex::new(FifoCache::new(DEFAULT_CACHE_CAPACITY)),
            native: false,
        }
    }

    fn rule(&self, locale: &str) -> OrdinalRule {
        let mut rules = self.rules.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(rule) = rules.get(&locale.to_string()) {
            return *rule;
        }
        let rule = if self.native {
            OrdinalRule::for_locale(locale)
        } else {
            OrdinalRule::fallback_for_locale(locale)
        };
        rules.insert(locale.to_string(), rule);
        rule
    }

    /// Ordinal category of `value` in `locale`.
    #[must_use]
    pub fn category(&self, value: f64, locale: &str) -> PluralCategory {
        self.rule(locale).category(value)
    }

    /// `value` followed by its ordinal suffix. Non-finite values get none.
    #[must_use]
    pub fn format(&self, value: f64, locale: &str) -> String {
        if !value.is_finite() {
            return display_number(value);
        }
        let rule = self.rule(locale);
        let suffix = rule.suffix(rule.category(value));
        format!("{}{suffix}", display_number(value))
    }

    /// `{size, max_size}` of the rule cache.
    #[must_use]
    pub fn cache_stats(&self) -> FifoStats {
        self.rules.lock().unwrap_or_else(|e| e.into_inner()).stats()
    }

    pub fn clear_cache(&self) {
        self.rules.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl Default for OrdinalFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OrdinalFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdinalFormatter")
            .field("native", &self.native)
            .field("cache", &self.cache_stats())
            .finish()
    }
}
