//! The prelude is enough for a complete round trip.

use lexis::prelude::*;
use serde_json::json;

fn load() -> Result<TranslationManager> {
    let tree = TranslationTree::from_json_value(&json!({
        "en": {
            "inbox": "{n, plural, =0 {No mail} one {# message} other {# messages}}",
            "hello": "Hello, {{name}}"
        },
        "fr": { "hello": "Bonjour, {{name}}" }
    }))?;
    let config = I18nConfig::from_json_str(r#"{ "default_locale": "fr" }"#)?;
    Ok(TranslationManager::builder()
        .translations(tree)
        .config(config)
        .build()?)
}

#[test]
fn end_to_end() {
    let i18n = load().expect("loads");
    assert_eq!(i18n.translate("", "hello", &params! { "name" => "Zoé" }), "Bonjour, Zoé");
    assert_eq!(i18n.translate_message("fr", "inbox", &params! { "n" => 0 }), "No mail");
    assert_eq!(
        i18n.translate_message("en", "inbox", &params! { "n" => 1500 }),
        "1,500 messages"
    );
    assert_eq!(OrdinalFormatter::new().format(3.0, "en"), "3rd");
    assert_eq!(
        NumberFormatter::new().format_currency(9.5, "en-US", "USD"),
        "$9.50"
    );
    assert_eq!(lexis::select_category("ru", 22.0), PluralCategory::Few);
}

#[test]
fn config_errors_surface_as_i18n_errors() {
    let err = I18nConfig::from_json_str("{").map_err(lexis::I18nError::from);
    assert!(matches!(err, Err(lexis::I18nError::Config(_))));
}
