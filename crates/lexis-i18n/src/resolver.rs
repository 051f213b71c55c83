//! Dotted-key lookup with a single fallback locale.
//!
//! The requested locale is tried first, then the fallback (skipped when the
//! two are equal). Only text and plural entries count as hits; a key that
//! lands on a nested node resolves to nothing.

use crate::plural::PluralForms;
use crate::tree::{TranslationTree, TranslationValue};

/// What a key resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Text(&'a str),
    Plural(&'a PluralForms),
}

/// A resolved entry and the locale that supplied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub value: Resolved<'a>,
    pub locale: &'a str,
}

fn lookup<'a>(tree: &'a TranslationTree, locale: &str, key: &str) -> Option<Resolution<'a>> {
    let (tag, node) = tree.locale_entry(locale)?;
    let value = match node.lookup(key)? {
        TranslationValue::Text(text) => Resolved::Text(text),
        TranslationValue::Plural(forms) => Resolved::Plural(forms),
        TranslationValue::Node(_) => return None,
    };
    Some(Resolution { value, locale: tag })
}

/// Resolve `key` in `locale`, then in `fallback`.
///
/// A miss is a normal outcome and is only logged at debug level.
#[must_use]
pub fn resolve<'a>(
    tree: &'a TranslationTree,
    locale: &str,
    fallback: &str,
    key: &str,
) -> Option<Resolution<'a>> {
    if let Some(hit) = lookup(tree, locale, key) {
        return Some(hit);
    }
    if fallback != locale
        && let Some(hit) = lookup(tree, fallback, key)
    {
        tracing::debug!(
            target: "lexis.resolve",
            locale = %locale,
            fallback = %fallback,
            key = %key,
            "resolved from fallback locale"
        );
        return Some(hit);
    }
    tracing::debug!(
        target: "lexis.resolve",
        locale = %locale,
        fallback = %fallback,
        key = %key,
        "key not found"
    );
    None
}
