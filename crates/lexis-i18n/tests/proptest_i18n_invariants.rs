//! Property-based invariant tests for lookup, plural rules, and messages.
//!
//! 1. Every supported locale maps every count to a category it uses
//! 2. Count normalization: sign and fraction never change the category
//! 3. Interpolation without placeholders is the identity
//! 4. Interpolation with no parameters leaves the template unchanged
//! 5. The ICU parser and evaluator never panic on arbitrary input
//! 6. Plain text without braces evaluates to itself
//! 7. Caching never changes translation output
//! 8. Unknown keys always come back verbatim

use lexis_i18n::interpolate::{PlaceholderSyntax, interpolate};
use lexis_i18n::{
    MessageFormatter, Params, PluralCategory, TranslationManager, TranslationTree, params,
    select_category,
};
use proptest::prelude::*;
use serde_json::json;

fn locale_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("en"),
        Just("es-MX"),
        Just("de"),
        Just("fr-CA"),
        Just("ar"),
        Just("ru"),
        Just("pl"),
        Just("zh-Hans"),
        Just("ja"),
        Just("xx"),
    ]
}

fn allowed(locale: &str) -> &'static [PluralCategory] {
    use PluralCategory::*;
    match locale.split('-').next().unwrap_or(locale) {
        "ar" => &[Zero, One, Two, Few, Many, Other],
        "ru" | "pl" => &[One, Few, Many],
        "zh" | "ja" => &[Other],
        _ => &[One, Other],
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Plural rules
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn category_is_one_the_locale_uses(locale in locale_strategy(), n in 0u64..1_000_000) {
        let category = select_category(locale, n as f64);
        prop_assert!(allowed(locale).contains(&category), "{locale} {n} -> {category:?}");
    }

    #[test]
    fn sign_and_fraction_are_ignored(
        locale in locale_strategy(),
        n in 0u64..100_000,
        frac in 0.0f64..0.999,
    ) {
        let base = select_category(locale, n as f64);
        prop_assert_eq!(select_category(locale, n as f64 + frac), base);
        prop_assert_eq!(select_category(locale, -(n as f64)), base);
        // -(n + frac) floors to -(n + 1) when frac > 0.
        let negative = if frac > 0.0 {
            select_category(locale, (n + 1) as f64)
        } else {
            base
        };
        prop_assert_eq!(select_category(locale, -(n as f64) - frac), negative);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3–4. Interpolation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn text_without_braces_is_unchanged(text in "[^{}]{0,64}") {
        let p = params! { "name" => "Ann" };
        prop_assert_eq!(interpolate(&text, &p, PlaceholderSyntax::DoubleBrace), text.clone());
        prop_assert_eq!(interpolate(&text, &p, PlaceholderSyntax::SingleBrace), text);
    }

    #[test]
    fn no_params_means_no_change(template in "[a-z{} .]{0,64}") {
        prop_assert_eq!(
            interpolate(&template, &Params::new(), PlaceholderSyntax::DoubleBrace),
            template.clone()
        );
        prop_assert_eq!(
            interpolate(&template, &Params::new(), PlaceholderSyntax::SingleBrace),
            template
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5–6. ICU messages
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn icu_never_panics(
        message in "[a-z0-9{}#=, ]{0,96}",
        n in -5i64..50,
        locale in locale_strategy(),
    ) {
        let mf = MessageFormatter::new();
        let p = params! { "n" => n, "g" => "male", "name" => "Ann" };
        let _ = mf.format(&message, &p, locale);
    }

    #[test]
    fn icu_deep_nesting_never_panics(depth in 0usize..80) {
        let mut message = String::from("x");
        for _ in 0..depth {
            message = format!("{{n, plural, one {{{message}}} other {{#}}}}");
        }
        let _ = MessageFormatter::new().format(&message, &params! { "n" => 1 }, "en");
    }

    #[test]
    fn icu_plain_text_is_identity(text in "[^{}#']{0,64}") {
        let mf = MessageFormatter::new();
        prop_assert_eq!(mf.format(&text, &Params::new(), "en"), text);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7–8. Manager
// ═════════════════════════════════════════════════════════════════════════

fn manager() -> TranslationManager {
    let tree = TranslationTree::from_json_value(&json!({
        "en": {
            "greet": "Hi {{name}}",
            "items": { "one": "{{count}} item", "other": "{{count}} items" }
        },
        "ru": {
            "items": { "one": "{{count}} штука", "few": "{{count}} штуки", "many": "{{count}} штук" , "other": "{{count}} штуки" }
        }
    }))
    .unwrap();
    TranslationManager::new(tree)
}

proptest! {
    #[test]
    fn cache_never_changes_output(
        calls in proptest::collection::vec((0u32..30, prop_oneof![Just("en"), Just("ru"), Just("de")]), 1..60),
    ) {
        let cached = manager();
        for (n, locale) in &calls {
            let first = cached.translate_plural(locale, "items", f64::from(*n), &Params::new());
            let again = cached.translate_plural(locale, "items", f64::from(*n), &Params::new());
            let fresh = manager().translate_plural(locale, "items", f64::from(*n), &Params::new());
            prop_assert_eq!(&first, &again);
            prop_assert_eq!(first, fresh);
        }
        cached.clear_cache();
        prop_assert_eq!(cached.cache_stats().size, 0);
    }

    #[test]
    fn unknown_keys_come_back_verbatim(key in "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}") {
        prop_assume!(key != "greet" && key != "items");
        let i18n = manager();
        prop_assert_eq!(i18n.t("en", &key), key.clone());
        prop_assert_eq!(i18n.translate_plural("ru", &key, 3.0, &Params::new()), key);
    }
}
