//! Message evaluation.
//!
//! # Failure Modes
//!
//! | Failure | Behavior | Diagnostic |
//! |---------|----------|------------|
//! | `{name}` absent | Placeholder kept | `debug` |
//! | `{name}` nested/unsupported | Placeholder kept | `warn` |
//! | Plural variable absent or non-numeric | Treated as `0` | `warn` |
//! | Select variable absent | `other` branch | none |
//! | `{n, number}` variable absent | Clause text kept | `debug` |

use std::sync::{Arc, Mutex};

use lexis_core::LruCache;
use lexis_format::{NumberFormatOptions, NumberFormatter, OrdinalFormatter};

use super::ast::{Message, MessageNode, NumberArg};
use super::parser::parse;
use crate::interpolate::resolve_placeholder;
use crate::plural::PluralRules;
use crate::value::Params;

/// Default number of parsed messages kept.
pub const DEFAULT_MESSAGE_CACHE_CAPACITY: usize = 256;

/// Formats ICU-style messages.
///
/// Parsing is stateless; an optional LRU cache of parsed messages only
/// saves work and never changes output.
///
/// ```
/// use lexis_i18n::{MessageFormatter, params};
///
/// let mf = MessageFormatter::new();
/// let msg = "{count, plural, =0 {No items} one {# item} other {# items}}";
/// assert_eq!(mf.format(msg, &params! { "count" => 0 }, "en"), "No items");
/// assert_eq!(mf.format(msg, &params! { "count" => 1 }, "en"), "1 item");
/// assert_eq!(mf.format(msg, &params! { "count" => 1200 }, "en"), "1,200 items");
/// ```
pub struct MessageFormatter {
    numbers: Arc<NumberFormatter>,
    ordinals: OrdinalFormatter,
    rules: PluralRules,
    cache: Option<Mutex<LruCache<String, Arc<Message>>>>,
}

struct Scope<'a> {
    params: &'a Params,
    locale: &'a str,
    /// Value `#` stands for in the innermost plural branch.
    pound: Option<f64>,
}

impl MessageFormatter {
    /// Own number formatter, default rules, default parse cache.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(NumberFormatter::new()),
            PluralRules::default(),
            DEFAULT_MESSAGE_CACHE_CAPACITY,
        )
    }

    /// Share `numbers` and `rules`; `cache_capacity` of 0 disables the parse
    /// cache.
    #[must_use]
    pub fn with_parts(
        numbers: Arc<NumberFormatter>,
        rules: PluralRules,
        cache_capacity: usize,
    ) -> Self {
        let ordinals = if numbers.is_native() {
            OrdinalFormatter::new()
        } else {
            OrdinalFormatter::manual()
        };
        Self {
            numbers,
            ordinals,
            rules,
            cache: (cache_capacity > 0).then(|| Mutex::new(LruCache::new(cache_capacity))),
        }
    }

    /// Parse `message`, consulting the parse cache when enabled.
    #[must_use]
    pub fn parse(&self, message: &str) -> Arc<Message> {
        let Some(cache) = &self.cache else {
            return Arc::new(parse(message));
        };
        let mut cache = cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(parsed) = cache.get(&message.to_string()) {
            return Arc::clone(parsed);
        }
        let parsed = Arc::new(parse(message));
        cache.set(message.to_string(), Arc::clone(&parsed));
        parsed
    }

    /// Number of cached parsed messages.
    #[must_use]
    pub fn cached_messages(&self) -> usize {
        self.cache
            .as_ref()
            .map_or(0, |c| c.lock().unwrap_or_else(|e| e.into_inner()).len())
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().unwrap_or_else(|e| e.into_inner()).clear();
        }
    }

    /// Format `message` with `params` for `locale`.
    #[must_use]
    pub fn format(&self, message: &str, params: &Params, locale: &str) -> String {
        let parsed = self.parse(message);
        let scope = Scope {
            params,
            locale,
            pound: None,
        };
        let mut out = String::with_capacity(message.len());
        self.render(&parsed.nodes, &scope, &mut out);
        out
    }

    fn render(&self, nodes: &[MessageNode], scope: &Scope<'_>, out: &mut String) {
        for node in nodes {
            match node {
                MessageNode::Text(text) => out.push_str(text),
                MessageNode::Variable { name, source } => {
                    match resolve_placeholder(name, scope.params) {
                        Some(text) => out.push_str(&text),
                        None => out.push_str(source),
                    }
                }
                MessageNode::Pound => match scope.pound {
                    Some(value) => out.push_str(&self.numbers.format(
                        value,
                        scope.locale,
                        &NumberFormatOptions::default(),
                    )),
                    None => out.push('#'),
                },
                MessageNode::Number {
                    name,
                    style,
                    source,
                } => {
                    let value = scope
                        .params
                        .lookup_path(name)
                        .and_then(|v| v.as_number());
                    match value {
                        Some(value) => {
                            out.push_str(&self.numbers.format(value, scope.locale, &options(style)));
                        }
                        None => {
                            tracing::debug!(
                                target: "lexis.icu",
                                name = %name,
                                "number argument missing or not numeric"
                            );
                            out.push_str(source);
                        }
                    }
                }
                MessageNode::Plural {
                    name,
                    ordinal,
                    exact,
                    categories,
                    other,
                } => {
                    let value = plural_value(name, scope.params);
                    let branch = exact_key(value)
                        .and_then(|n| exact.get(&n))
                        .or_else(|| {
                            let category = if *ordinal {
                                self.ordinals.category(value, scope.locale)
                            } else {
                                self.rules.select(scope.locale, value)
                            };
                            categories.get(&category)
                        })
                        .unwrap_or(other);
                    let inner = Scope {
                        params: scope.params,
                        locale: scope.locale,
                        pound: Some(value),
                    };
                    self.render(branch, &inner, out);
                }
                MessageNode::Select { name, cases, other } => {
                    let branch = scope
                        .params
                        .lookup_path(name)
                        .and_then(|v| v.display())
                        .and_then(|key| cases.get(&key))
                        .unwrap_or(other);
                    self.render(branch, scope, out);
                }
            }
        }
    }
}

fn options(style: &NumberArg) -> NumberFormatOptions {
    match style {
        NumberArg::Default => NumberFormatOptions::default(),
        NumberArg::Integer => NumberFormatOptions::integer(),
        NumberArg::Percent => NumberFormatOptions::percent(),
        NumberArg::Compact => NumberFormatOptions::compact(),
        NumberArg::Currency(code) => NumberFormatOptions::currency(code.as_str()),
    }
}

/// Plural selector value; absent, non-numeric, or non-finite reads as `0`.
fn plural_value(name: &str, params: &Params) -> f64 {
    match params.lookup_path(name).and_then(|v| v.as_number()) {
        Some(value) if value.is_finite() => value,
        found => {
            tracing::warn!(
                target: "lexis.icu",
                name = %name,
                found = ?found,
                "plural argument missing or not a finite number, using 0"
            );
            0.0
        }
    }
}

/// Integer key for `=N` matching.
fn exact_key(value: f64) -> Option<i64> {
    (value.fract() == 0.0 && value.abs() < i64::MAX as f64).then_some(value as i64)
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MessageFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageFormatter")
            .field("numbers", &self.numbers)
            .field("rules", &self.rules)
            .field("cached_messages", &self.cached_messages())
            .finish()
    }
}
