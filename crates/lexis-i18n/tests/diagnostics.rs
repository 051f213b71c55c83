//! Diagnostics emitted through `tracing`.
//!
//! A capturing layer records every event's target, level, and fields so
//! tests can assert that data problems are reported without changing the
//! returned strings.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use lexis_format::{NumberFormatOptions, NumberFormatter};
use lexis_i18n::{
    MessageFormatter, Params, TranslationManager, TranslationTree, params, select_category,
};
use serde_json::json;
use tracing::{Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

#[derive(Debug, Clone)]
struct Captured {
    target: String,
    level: Level,
    fields: BTreeMap<String, String>,
}

impl Captured {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: BTreeMap<String, String>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_owned(), format!("{value:?}"));
    }
}

struct EventCapture {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl<S> Layer<S> for EventCapture
where
    S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().expect("capture lock").push(Captured {
            target: event.metadata().target().to_owned(),
            level: *event.metadata().level(),
            fields: visitor.fields,
        });
    }
}

/// Run `f` with a capturing subscriber and return its result and events.
fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<Captured>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(EventCapture {
        events: Arc::clone(&events),
    });
    let out = tracing::subscriber::with_default(subscriber, f);
    let events = events.lock().expect("capture lock").clone();
    (out, events)
}

fn on<'a>(events: &'a [Captured], target: &str, level: Level) -> Vec<&'a Captured> {
    events
        .iter()
        .filter(|e| e.target == target && e.level == level)
        .collect()
}

fn tree() -> TranslationTree {
    TranslationTree::from_json_value(&json!({
        "en": {
            "hello": "Hello, {{user}}!",
            "nav": { "home": "Home" },
            "cart": { "one": "one thing" }
        }
    }))
    .expect("fixture parses")
}

#[test]
fn missing_translation_warns() {
    let i18n = TranslationManager::new(TranslationTree::new());
    let (out, events) = capture(|| i18n.t("de", "missing.key"));
    assert_eq!(out, "missing.key");
    let warnings = on(&events, "lexis.translate", Level::WARN);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field("key"), Some("missing.key"));
    assert_eq!(warnings[0].field("locale"), Some("de"));
    assert_eq!(warnings[0].field("reason"), Some("NotFound"));
}

#[test]
fn missing_translation_warns_on_every_call() {
    let i18n = TranslationManager::new(TranslationTree::new());
    let (_, events) = capture(|| {
        let _ = i18n.t("en", "a");
        let _ = i18n.t("en", "a");
    });
    assert_eq!(on(&events, "lexis.translate", Level::WARN).len(), 2);
}

#[test]
fn fallback_hit_is_debug_only() {
    let i18n = TranslationManager::new(tree());
    let (out, events) = capture(|| i18n.t("de", "nav.home"));
    assert_eq!(out, "Home");
    assert!(on(&events, "lexis.translate", Level::WARN).is_empty());
    let debug = on(&events, "lexis.resolve", Level::DEBUG);
    assert_eq!(debug.len(), 1);
    assert_eq!(debug[0].field("fallback"), Some("en"));
}

#[test]
fn object_parameter_warns_and_stays_literal() {
    let i18n = TranslationManager::new(tree());
    let p = params! { "user" => params! { "name" => "Ann" } };
    let (out, events) = capture(|| i18n.translate("en", "hello", &p));
    assert_eq!(out, "Hello, {{user}}!");
    let warnings = on(&events, "lexis.interpolate", Level::WARN);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field("path"), Some("user"));
    assert_eq!(warnings[0].field("kind"), Some("object"));
}

#[test]
fn missing_parameter_is_debug() {
    let i18n = TranslationManager::new(tree());
    let (out, events) = capture(|| i18n.t("en", "hello"));
    assert_eq!(out, "Hello, {{user}}!");
    assert!(on(&events, "lexis.interpolate", Level::WARN).is_empty());
    assert_eq!(on(&events, "lexis.interpolate", Level::DEBUG).len(), 1);
}

#[test]
fn non_finite_count_warns() {
    let (category, events) = capture(|| select_category("en", f64::INFINITY));
    assert_eq!(category, lexis_i18n::PluralCategory::Other);
    let warnings = on(&events, "lexis.plural", Level::WARN);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field("count"), Some("inf"));
}

#[test]
fn incomplete_plural_warns_at_load_and_lookup() {
    let (i18n, events) = capture(|| TranslationManager::new(tree()));
    let load = on(&events, "lexis.validate", Level::WARN);
    assert_eq!(load.len(), 1);
    assert_eq!(load[0].field("key"), Some("cart"));
    assert_eq!(load[0].field("locale"), Some("en"));

    let (out, events) = capture(|| i18n.translate_plural("en", "cart", 4.0, &Params::new()));
    assert_eq!(out, "cart");
    let warnings = on(&events, "lexis.translate", Level::WARN);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field("reason"), Some("IncompletePlural"));
}

#[test]
fn malformed_icu_warns() {
    let mf = MessageFormatter::new();
    let (out, events) = capture(|| mf.format("a {n, bogus, x} b", &Params::new(), "en"));
    assert_eq!(out, "a {n, bogus, x} b");
    assert_eq!(on(&events, "lexis.icu", Level::WARN).len(), 1);
}

#[test]
fn missing_plural_argument_warns() {
    let mf = MessageFormatter::new();
    let (out, events) = capture(|| {
        mf.format("{n, plural, =0 {none} other {#}}", &Params::new(), "en")
    });
    assert_eq!(out, "none");
    let warnings = on(&events, "lexis.icu", Level::WARN);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field("name"), Some("n"));
}

#[test]
fn formatter_fallback_warns() {
    let nf = NumberFormatter::new();
    let (out, events) = capture(|| {
        nf.format(5.0, "en", &NumberFormatOptions::currency("EURO"))
    });
    assert_eq!(out, "$5.00");
    assert_eq!(on(&events, "lexis.format", Level::WARN).len(), 1);
}

#[test]
fn clean_lookup_is_silent_at_warn() {
    let i18n = TranslationManager::new(tree());
    let (_, events) = capture(|| {
        let _ = i18n.translate("en", "hello", &params! { "user" => "Ann" });
        let _ = i18n.translate("en", "hello", &params! { "user" => "Ann" });
    });
    assert!(events.iter().all(|e| e.level != Level::WARN));
}
