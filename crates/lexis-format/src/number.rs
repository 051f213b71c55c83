//! Cached, locale-aware number formatting.
//!
//! A [`CompiledFormatter`] is built once per distinct `(locale, options)`
//! signature and kept in a [`FifoCache`]. The cache never promotes on read:
//! formatters are cheap to rebuild, and the read path stays free of
//! bookkeeping.
//!
//! When a formatter cannot be compiled, or the instance was created with
//! [`NumberFormatter::manual`], output comes from the manual
//! [`fallback`](crate::fallback) path instead. Formatting never fails.

use std::sync::{Arc, Mutex};

use lexis_core::{FifoCache, FifoStats, display_number};

use crate::compiled::CompiledFormatter;
use crate::fallback;
use crate::options::{Notation, NumberFormatOptions, NumberStyle};

/// Formatter cache capacity used by [`NumberFormatter::new`].
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FormatterKey {
    locale: String,
    options: NumberFormatOptions,
}

/// Locale-aware number formatter with a bounded instance cache.
///
/// Cheap to share: wrap it in an `Arc` and hand it to every component that
/// formats numbers so they reuse one cache.
pub struct NumberFormatter {
    cache: Mutex<FifoCache<FormatterKey, Arc<CompiledFormatter>>>,
    native: bool,
}

impl NumberFormatter {
    /// Native formatting with the default cache capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Native formatting holding at most `capacity` compiled formatters.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: Mutex::new(FifoCache::new(capacity)),
            native: true,
        }
    }

    /// Manual formatting only; no locale data is consulted.
    #[must_use]
    pub fn manual() -> Self {
        Self {
            cache: Mutex::new(FifoCache::new(0)),
            native: false,
        }
    }

    /// Whether native formatting is enabled.
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.native
    }

    /// Cached formatter for the signature, compiling it on a miss.
    ///
    /// Returns `None` when native formatting is off or compilation failed.
    fn formatter(&self, locale: &str, options: &NumberFormatOptions) -> Option<Arc<CompiledFormatter>> {
        if !self.native {
            return None;
        }
        let key = FormatterKey {
            locale: locale.to_string(),
            options: options.clone(),
        };
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(hit) = cache.get(&key) {
            return Some(Arc::clone(hit));
        }
        match CompiledFormatter::new(locale, options) {
            Ok(compiled) => {
                let compiled = Arc::new(compiled);
                cache.insert(key, Arc::clone(&compiled));
                tracing::debug!(
                    target: "lexis.format",
                    locale = %locale,
                    cached = cache.len(),
                    "number formatter compiled"
                );
                Some(compiled)
            }
            Err(err) => {
                tracing::warn!(
                    target: "lexis.format",
                    locale = %locale,
                    error = %err,
                    "number formatter unavailable, using manual formatting"
                );
                None
            }
        }
    }

    /// Format `value` for `locale`.
    ///
    /// Non-finite values render as `NaN`, `Infinity`, or `-Infinity`.
    #[must_use]
    pub fn format(&self, value: f64, locale: &str, options: &NumberFormatOptions) -> String {
        if !value.is_finite() {
            return display_number(value);
        }
        match self.formatter(locale, options) {
            Some(formatter) => formatter.format(value),
            None => fallback::format(value, options),
        }
    }

    /// Currency style with the currency's default fraction digits.
    #[must_use]
    pub fn format_currency(&self, value: f64, locale: &str, currency: &str) -> String {
        self.format(value, locale, &NumberFormatOptions::currency(currency))
    }

    /// Percent style; `0.25` renders as `25%`.
    #[must_use]
    pub fn format_percent(&self, value: f64, locale: &str) -> String {
        self.format(value, locale, &NumberFormatOptions::percent())
    }

    /// Compact notation, short display (`1.5M`).
    #[must_use]
    pub fn format_compact(&self, value: f64, locale: &str) -> String {
        self.format(value, locale, &NumberFormatOptions::compact())
    }

    /// Unit style, short display (`12 km`).
    #[must_use]
    pub fn format_unit(&self, value: f64, locale: &str, unit: &str) -> String {
        self.format(value, locale, &NumberFormatOptions::unit(unit))
    }

    /// Format a range of two values.
    ///
    /// Native output joins plain decimals with a bare en dash (`3–5`) and
    /// anything carrying a symbol or suffix with a spaced one (`$3.00 – $5.00`).
    /// When both ends render identically the result is approximate (`~5`).
    /// The manual path always uses the spaced dash.
    #[must_use]
    pub fn format_range(
        &self,
        start: f64,
        end: f64,
        locale: &str,
        options: &NumberFormatOptions,
    ) -> String {
        let Some(formatter) = self.formatter(locale, options) else {
            return fallback::format_range(
                &fallback::format(start, options),
                &fallback::format(end, options),
            );
        };
        let from = formatter.format(start);
        let to = formatter.format(end);
        if from == to {
            return format!("~{from}");
        }
        let bare = options.style == NumberStyle::Decimal && options.notation == Notation::Standard;
        if bare {
            format!("{from}–{to}")
        } else {
            format!("{from} – {to}")
        }
    }

    /// `{size, max_size}` of the formatter cache.
    #[must_use]
    pub fn cache_stats(&self) -> FifoStats {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).stats()
    }

    /// Drop every compiled formatter.
    pub fn clear_cache(&self) {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NumberFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumberFormatter")
            .field("native", &self.native)
            .field("cache", &self.cache_stats())
            .finish()
    }
}
