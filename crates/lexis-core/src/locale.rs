//! Locale tag helpers.
//!
//! Only the primary language subtag matters for rule selection, so these
//! helpers stay string-based instead of parsing full BCP 47 tags.

/// Primary language subtag, lowercased: `"en-US"` → `"en"`.
///
/// Underscore separators (`"pt_BR"`) are accepted as well. An empty tag
/// yields an empty string.
#[must_use]
pub fn language(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Whether `locale` names a Romance language.
#[must_use]
pub fn is_romance(locale: &str) -> bool {
    matches!(
        language(locale).as_str(),
        "es" | "fr" | "it" | "pt" | "ro" | "ca" | "gl"
    )
}
