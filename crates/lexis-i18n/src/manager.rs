//! The translation manager.
//!
//! Ties the dictionary, key resolver, plural rules, interpolator, ICU
//! evaluator and result cache together behind string-returning calls.
//!
//! # Invariants
//!
//! 1. Lookups never fail: an unresolved key comes back verbatim.
//! 2. Only successful results are cached, so the missing-translation
//!    handler fires on every occurrence.
//! 3. Caching never changes output. Replacing or extending the dictionary
//!    empties the cache, and a result computed against an older dictionary
//!    is never stored.
//! 4. The plural rule is the one of the locale that supplied the entry.
//!
//! # Locking
//!
//! The cache lock is always taken before the dictionary lock.

use std::sync::{Arc, Mutex, RwLock};

use lexis_core::PluralCategory;
use lexis_format::{NumberFormatOptions, NumberFormatter};

use crate::cache::{CacheKey, CacheStats, LookupKind, TranslationCache};
use crate::config::I18nConfig;
use crate::coverage::{CoverageReport, coverage_report};
use crate::error::I18nError;
use crate::icu::MessageFormatter;
use crate::interpolate::interpolate;
use crate::plural::{PluralRules, normalize_count};
use crate::resolver::{Resolution, Resolved, resolve};
use crate::tree::TranslationTree;
use crate::validate::{ValidationReport, validate_tree};
use crate::value::Params;

/// Why a lookup returned its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingReason {
    /// Neither the locale nor the fallback has the key.
    NotFound,
    /// A plural entry has neither the selected category nor `other`.
    IncompletePlural,
}

/// Passed to the missing-translation handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslation {
    pub locale: String,
    pub key: String,
    pub reason: MissingReason,
}

/// Missing-translation callback.
pub type MissingHandler = Box<dyn Fn(&MissingTranslation) + Send + Sync>;

struct CacheSlot {
    entries: TranslationCache,
    /// Bumped on every dictionary change.
    generation: u64,
}

/// Thread-safe translation front end.
///
/// ```
/// use lexis_i18n::{TranslationManager, TranslationTree, params};
///
/// let tree = TranslationTree::from_json_str(r#"{
///     "en": {
///         "greeting": "Hello, {{name}}!",
///         "items": { "one": "{{count}} item", "other": "{{count}} items" }
///     }
/// }"#).unwrap();
/// let i18n = TranslationManager::new(tree);
///
/// assert_eq!(i18n.translate("en", "greeting", &params! { "name" => "Ann" }), "Hello, Ann!");
/// assert_eq!(i18n.translate_plural("en", "items", 3.0, &params! {}), "3 items");
/// assert_eq!(i18n.t("en", "missing.key"), "missing.key");
/// ```
pub struct TranslationManager {
    config: I18nConfig,
    translations: RwLock<Arc<TranslationTree>>,
    rules: PluralRules,
    numbers: Arc<NumberFormatter>,
    messages: MessageFormatter,
    cache: Mutex<CacheSlot>,
    on_missing: Option<MissingHandler>,
    last_report: Mutex<ValidationReport>,
}

/// Builder for [`TranslationManager`].
#[derive(Default)]
pub struct TranslationManagerBuilder {
    config: I18nConfig,
    translations: TranslationTree,
    rules: PluralRules,
    numbers: Option<Arc<NumberFormatter>>,
    on_missing: Option<MissingHandler>,
}

impl TranslationManagerBuilder {
    #[must_use]
    pub fn config(mut self, config: I18nConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn translations(mut self, tree: TranslationTree) -> Self {
        self.translations = tree;
        self
    }

    /// Plural rules, including any per-language overrides.
    #[must_use]
    pub fn plural_rules(mut self, rules: PluralRules) -> Self {
        self.rules = rules;
        self
    }

    /// Share an existing number formatter (and its cache). Overrides
    /// `formatter_cache_capacity` and `native_formatting`.
    #[must_use]
    pub fn number_formatter(mut self, numbers: Arc<NumberFormatter>) -> Self {
        self.numbers = Some(numbers);
        self
    }

    /// Called once for every lookup that returns its key.
    #[must_use]
    pub fn on_missing(
        mut self,
        handler: impl Fn(&MissingTranslation) + Send + Sync + 'static,
    ) -> Self {
        self.on_missing = Some(Box::new(handler));
        self
    }

    /// Validate the configuration and build the manager.
    pub fn build(self) -> Result<TranslationManager, I18nError> {
        let config = self.config.validated()?;
        Ok(TranslationManager::assemble(
            config,
            self.translations,
            self.rules,
            self.numbers,
            self.on_missing,
        ))
    }
}

impl TranslationManager {
    /// Manager over `tree` with the default configuration.
    #[must_use]
    pub fn new(tree: TranslationTree) -> Self {
        Self::assemble(I18nConfig::default(), tree, PluralRules::default(), None, None)
    }

    #[must_use]
    pub fn builder() -> TranslationManagerBuilder {
        TranslationManagerBuilder::default()
    }

    fn assemble(
        config: I18nConfig,
        tree: TranslationTree,
        rules: PluralRules,
        numbers: Option<Arc<NumberFormatter>>,
        on_missing: Option<MissingHandler>,
    ) -> Self {
        let report = if config.validate_on_load {
            validate_tree(&tree)
        } else {
            ValidationReport::default()
        };
        let numbers = numbers.unwrap_or_else(|| {
            Arc::new(if config.native_formatting {
                NumberFormatter::with_capacity(config.formatter_cache_capacity)
            } else {
                NumberFormatter::manual()
            })
        });
        let messages = MessageFormatter::with_parts(
            Arc::clone(&numbers),
            rules.clone(),
            config.message_cache_capacity,
        );
        Self {
            cache: Mutex::new(CacheSlot {
                entries: TranslationCache::new(config.cache_capacity),
                generation: 0,
            }),
            translations: RwLock::new(Arc::new(tree)),
            rules,
            numbers,
            messages,
            on_missing,
            last_report: Mutex::new(report),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &I18nConfig {
        &self.config
    }

    /// The shared number formatter.
    #[must_use]
    pub fn number_formatter(&self) -> &Arc<NumberFormatter> {
        &self.numbers
    }

    /// Snapshot of the current dictionary.
    #[must_use]
    pub fn translations(&self) -> Arc<TranslationTree> {
        Arc::clone(&self.translations.read().unwrap_or_else(|e| e.into_inner()))
    }

    /// Translate `key`. A plural entry yields its `other` variant.
    #[must_use]
    pub fn translate(&self, locale: &str, key: &str, params: &Params) -> String {
        let locale = self.effective_locale(locale);
        self.cached(LookupKind::Singular, locale, key, params, |tree| {
            let found = resolve(tree, locale, &self.config.fallback_locale, key);
            self.render(locale, key, found, PluralCategory::Other, params, |text, p| {
                interpolate(text, p, self.config.placeholder)
            })
        })
    }

    /// Translate `key` without parameters.
    #[must_use]
    pub fn t(&self, locale: &str, key: &str) -> String {
        self.translate(locale, key, &Params::new())
    }

    /// Translate `key` for `count`, with `count` added to the parameters.
    ///
    /// A non-finite `count` is treated as `0`.
    #[must_use]
    pub fn translate_plural(&self, locale: &str, key: &str, count: f64, params: &Params) -> String {
        let locale = self.effective_locale(locale);
        let count = if count.is_finite() {
            count
        } else {
            normalize_count(count) as f64
        };
        let params = params.merged("count", count);
        self.cached(LookupKind::Plural, locale, key, &params, |tree| {
            let found = resolve(tree, locale, &self.config.fallback_locale, key);
            let category = found.map_or(PluralCategory::Other, |hit| {
                self.rules.select(hit.locale, count)
            });
            self.render(locale, key, found, category, &params, |text, p| {
                interpolate(text, p, self.config.placeholder)
            })
        })
    }

    /// Translate `key` whose entry is an ICU-style message.
    #[must_use]
    pub fn translate_message(&self, locale: &str, key: &str, params: &Params) -> String {
        let locale = self.effective_locale(locale);
        self.cached(LookupKind::Message, locale, key, params, |tree| {
            let found = resolve(tree, locale, &self.config.fallback_locale, key);
            let source = found.map_or(locale, |hit| hit.locale);
            self.render(locale, key, found, PluralCategory::Other, params, |text, p| {
                self.messages.format(text, p, source)
            })
        })
    }

    /// Format an ICU-style `message` directly.
    #[must_use]
    pub fn format_message(&self, locale: &str, message: &str, params: &Params) -> String {
        let locale = self.effective_locale(locale);
        self.messages.format(message, params, locale)
    }

    /// Format a number with the shared formatter.
    #[must_use]
    pub fn format_number(&self, value: f64, locale: &str, options: &NumberFormatOptions) -> String {
        self.numbers
            .format(value, self.effective_locale(locale), options)
    }

    /// Whether `locale` itself (not the fallback) has `key`.
    #[must_use]
    pub fn has_translation(&self, locale: &str, key: &str) -> bool {
        let locale = self.effective_locale(locale);
        let tree = self.translations();
        resolve(&tree, locale, locale, key).is_some()
    }

    /// Locale tags with a dictionary, sorted.
    #[must_use]
    pub fn available_locales(&self) -> Vec<String> {
        self.translations().locales().map(str::to_string).collect()
    }

    /// Deep-merge `tree` into the dictionary. Outstanding
    /// [`translations`](Self::translations) snapshots are left untouched.
    ///
    /// Returns the validation findings for `tree` (empty when
    /// `validate_on_load` is off).
    pub fn add_translations(&self, tree: TranslationTree) -> ValidationReport {
        let report = self.incoming_report(&tree);
        self.update(|current| {
            let current = Arc::make_mut(current);
            for (locale, node) in tree.iter() {
                current.merge_locale(locale, node.clone());
            }
        });
        self.record_report(&report);
        report
    }

    /// Replace the whole dictionary.
    pub fn replace_translations(&self, tree: TranslationTree) -> ValidationReport {
        let report = self.incoming_report(&tree);
        self.update(|current| *current = Arc::new(tree));
        self.record_report(&report);
        report
    }

    /// Findings from the most recent load: the builder's tree, or the last
    /// [`add_translations`](Self::add_translations) /
    /// [`replace_translations`](Self::replace_translations) call.
    #[must_use]
    pub fn last_validation(&self) -> ValidationReport {
        self.last_report
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Per-locale coverage against every key in the dictionary.
    #[must_use]
    pub fn coverage(&self) -> CoverageReport {
        coverage_report(&self.translations(), &self.config.fallback_locale)
    }

    /// Drop cached translations and parsed messages. Counters are kept.
    pub fn clear_cache(&self) {
        self.lock_cache().entries.clear();
        self.messages.clear_cache();
        tracing::debug!(target: "lexis.translate", "translation cache cleared");
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.lock_cache().entries.stats()
    }

    pub fn reset_cache_stats(&self) {
        self.lock_cache().entries.reset_stats();
    }

    fn effective_locale<'a>(&'a self, locale: &'a str) -> &'a str {
        if locale.is_empty() {
            &self.config.default_locale
        } else {
            locale
        }
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, CacheSlot> {
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn incoming_report(&self, tree: &TranslationTree) -> ValidationReport {
        if self.config.validate_on_load {
            validate_tree(tree)
        } else {
            ValidationReport::default()
        }
    }

    fn record_report(&self, report: &ValidationReport) {
        *self.last_report.lock().unwrap_or_else(|e| e.into_inner()) = report.clone();
    }

    fn update(&self, change: impl FnOnce(&mut Arc<TranslationTree>)) {
        let mut slot = self.lock_cache();
        {
            let mut current = self.translations.write().unwrap_or_else(|e| e.into_inner());
            change(&mut current);
        }
        slot.generation += 1;
        slot.entries.clear();
        self.messages.clear_cache();
    }

    /// Serve from the cache or run `compute` against a dictionary snapshot.
    /// `None` results are returned as `key` and never cached.
    fn cached(
        &self,
        kind: LookupKind,
        locale: &str,
        key: &str,
        params: &Params,
        compute: impl FnOnce(&TranslationTree) -> Option<String>,
    ) -> String {
        let cache_key = CacheKey {
            kind,
            locale: locale.to_string(),
            key: key.to_string(),
            params: params.cache_fingerprint(),
        };
        let (generation, tree) = {
            let mut slot = self.lock_cache();
            if let Some(hit) = slot.entries.get(&cache_key) {
                return hit;
            }
            (slot.generation, self.translations())
        };

        let Some(text) = compute(&*tree) else {
            return key.to_string();
        };

        let mut slot = self.lock_cache();
        if slot.generation == generation {
            slot.entries.insert(cache_key, text.clone());
        }
        text
    }

    /// Turn a resolution into text, reporting misses.
    fn render(
        &self,
        locale: &str,
        key: &str,
        found: Option<Resolution<'_>>,
        category: PluralCategory,
        params: &Params,
        finish: impl FnOnce(&str, &Params) -> String,
    ) -> Option<String> {
        let text = match found {
            None => {
                self.report_missing(locale, key, MissingReason::NotFound);
                return None;
            }
            Some(Resolution {
                value: Resolved::Text(text),
                ..
            }) => text,
            Some(Resolution {
                value: Resolved::Plural(forms),
                ..
            }) => match forms.select(category) {
                Some(text) => text,
                None => {
                    self.report_missing(locale, key, MissingReason::IncompletePlural);
                    return None;
                }
            },
        };
        Some(finish(text, params))
    }

    fn report_missing(&self, locale: &str, key: &str, reason: MissingReason) {
        tracing::warn!(
            target: "lexis.translate",
            locale = %locale,
            fallback = %self.config.fallback_locale,
            key = %key,
            reason = ?reason,
            "missing translation"
        );
        if let Some(handler) = &self.on_missing {
            handler(&MissingTranslation {
                locale: locale.to_string(),
                key: key.to_string(),
                reason,
            });
        }
    }
}

impl Default for TranslationManager {
    fn default() -> Self {
        Self::new(TranslationTree::new())
    }
}

impl std::fmt::Debug for TranslationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationManager")
            .field("config", &self.config)
            .field("locales", &self.available_locales())
            .field("cache", &self.cache_stats())
            .field("on_missing", &self.on_missing.is_some())
            .finish()
    }
}
