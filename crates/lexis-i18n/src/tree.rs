//! Translation dictionaries.
//!
//! A [`TranslationTree`] maps locale tags to [`TranslationNode`]s. Nodes map
//! keys to plain strings, plural variants, or further nodes:
//!
//! ```json
//! {
//!   "en": {
//!     "nav": { "home": "Home" },
//!     "items": { "one": "{{count}} item", "other": "{{count}} items" }
//!   }
//! }
//! ```
//!
//! An object is read as plural variants when it is non-empty and every key
//! is a CLDR category keyword mapped to a string. Anything else that is an
//! object is a nested node.

use std::collections::BTreeMap;
use std::path::Path;

use lexis_core::PluralCategory;
use serde_json::Value;

use crate::error::I18nError;
use crate::plural::PluralForms;

/// A dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationValue {
    Text(String),
    Plural(PluralForms),
    Node(TranslationNode),
}

/// Keys to entries, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationNode {
    entries: BTreeMap<String, TranslationValue>,
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn plural_forms(map: &serde_json::Map<String, Value>) -> Option<PluralForms> {
    if map.is_empty() {
        return None;
    }
    let mut forms = PluralForms::default();
    for (key, value) in map {
        let category: PluralCategory = key.parse().ok()?;
        let text = value.as_str()?;
        *forms.slot_mut(category) = Some(text.to_string());
    }
    Some(forms)
}

impl TranslationNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a node from a JSON object.
    ///
    /// # Errors
    ///
    /// [`I18nError::InvalidEntry`] when `value` is not an object or any
    /// entry is neither a string nor an object.
    pub fn from_json(value: &Value) -> Result<Self, I18nError> {
        Self::from_json_at(value, "")
    }

    fn from_json_at(value: &Value, path: &str) -> Result<Self, I18nError> {
        let Value::Object(map) = value else {
            return Err(I18nError::InvalidEntry {
                path: path.to_string(),
                found: json_kind(value),
            });
        };
        let mut node = Self::new();
        for (key, child) in map {
            let child_path = join_path(path, key);
            let entry = match child {
                Value::String(text) => TranslationValue::Text(text.clone()),
                Value::Object(inner) => match plural_forms(inner) {
                    Some(forms) => TranslationValue::Plural(forms),
                    None => TranslationValue::Node(Self::from_json_at(child, &child_path)?),
                },
                other => {
                    return Err(I18nError::InvalidEntry {
                        path: child_path,
                        found: json_kind(other),
                    });
                }
            };
            node.entries.insert(key.clone(), entry);
        }
        Ok(node)
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: TranslationValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: TranslationValue) {
        self.entries.insert(key.into(), value);
    }

    #[must_use]
    pub fn with_text(self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.with(key, TranslationValue::Text(text.into()))
    }

    #[must_use]
    pub fn with_plural(self, key: impl Into<String>, forms: PluralForms) -> Self {
        self.with(key, TranslationValue::Plural(forms))
    }

    #[must_use]
    pub fn with_node(self, key: impl Into<String>, node: TranslationNode) -> Self {
        self.with(key, TranslationValue::Node(node))
    }

    /// Direct child.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TranslationValue> {
        self.entries.get(key)
    }

    /// Descend a dotted key (`"nav.home"`).
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&TranslationValue> {
        let mut segments = key.split('.');
        let mut current = self.entries.get(segments.next()?)?;
        for segment in segments {
            match current {
                TranslationValue::Node(node) => current = node.entries.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TranslationValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deep-merge `other` into `self`. Nodes merge recursively; any other
    /// entry in `other` replaces the existing one.
    pub fn merge(&mut self, other: TranslationNode) {
        for (key, incoming) in other.entries {
            if let TranslationValue::Node(node) = incoming {
                if let Some(TranslationValue::Node(existing)) = self.entries.get_mut(&key) {
                    existing.merge(node);
                    continue;
                }
                self.entries.insert(key, TranslationValue::Node(node));
            } else {
                self.entries.insert(key, incoming);
            }
        }
    }

    /// Dotted paths of every text and plural entry, sorted.
    #[must_use]
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        self.collect_leaf_keys("", &mut keys);
        keys
    }

    fn collect_leaf_keys(&self, prefix: &str, out: &mut Vec<String>) {
        for (key, value) in &self.entries {
            let path = join_path(prefix, key);
            match value {
                TranslationValue::Node(node) => node.collect_leaf_keys(&path, out),
                TranslationValue::Text(_) | TranslationValue::Plural(_) => out.push(path),
            }
        }
    }
}

/// Locale tags to dictionaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTree {
    locales: BTreeMap<String, TranslationNode>,
}

impl TranslationTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `{ "<locale>": { ... }, ... }`.
    ///
    /// # Errors
    ///
    /// [`I18nError::Json`] for malformed JSON, [`I18nError::InvalidEntry`]
    /// for entries that are neither strings nor objects.
    pub fn from_json_str(json: &str) -> Result<Self, I18nError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(&value)
    }

    /// Build from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// [`I18nError::InvalidEntry`] when the value or a locale entry is not
    /// an object, or a nested entry is neither a string nor an object.
    pub fn from_json_value(value: &Value) -> Result<Self, I18nError> {
        let Value::Object(map) = value else {
            return Err(I18nError::InvalidEntry {
                path: String::new(),
                found: json_kind(value),
            });
        };
        let mut tree = Self::new();
        for (locale, dictionary) in map {
            let node = TranslationNode::from_json_at(dictionary, locale)?;
            tree.locales.insert(locale.clone(), node);
        }
        Ok(tree)
    }

    /// Read and parse a JSON file.
    ///
    /// # Errors
    ///
    /// [`I18nError::Io`] when the file cannot be read, otherwise as
    /// [`from_json_str`](Self::from_json_str).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, I18nError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Builder-style insert of a whole locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>, node: TranslationNode) -> Self {
        self.insert(locale, node);
        self
    }

    /// Insert or replace a locale's dictionary.
    pub fn insert(&mut self, locale: impl Into<String>, node: TranslationNode) {
        self.locales.insert(locale.into(), node);
    }

    /// Deep-merge `node` into `locale`'s dictionary, creating it if absent.
    pub fn merge_locale(&mut self, locale: &str, node: TranslationNode) {
        self.locales.entry(locale.to_string()).or_default().merge(node);
    }

    #[must_use]
    pub fn locale(&self, locale: &str) -> Option<&TranslationNode> {
        self.locales.get(locale)
    }

    /// The stored tag and dictionary for `locale`.
    #[must_use]
    pub fn locale_entry(&self, locale: &str) -> Option<(&str, &TranslationNode)> {
        self.locales
            .get_key_value(locale)
            .map(|(tag, node)| (tag.as_str(), node))
    }

    /// Locale tags, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TranslationNode)> {
        self.locales.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_text_plural_and_nodes() {
        let tree = TranslationTree::from_json_value(&json!({
            "en": {
                "nav": { "home": "Home" },
                "items": { "one": "# item", "other": "# items" },
                "mixed": { "one": "x", "label": "y" }
            }
        }))
        .unwrap();
        let en = tree.locale("en").unwrap();
        assert_eq!(
            en.lookup("nav.home"),
            Some(&TranslationValue::Text("Home".into()))
        );
        assert!(matches!(en.lookup("items"), Some(TranslationValue::Plural(_))));
        assert!(matches!(en.lookup("mixed"), Some(TranslationValue::Node(_))));
        assert!(en.lookup("nav.home.deeper").is_none());
        assert!(en.lookup("nav.missing").is_none());
    }

    #[test]
    fn plural_without_other_is_still_plural() {
        let node = TranslationNode::from_json(&json!({ "n": { "one": "x" } })).unwrap();
        match node.get("n") {
            Some(TranslationValue::Plural(forms)) => assert!(!forms.is_complete()),
            other => panic!("expected plural, got {other:?}"),
        }
    }

    #[test]
    fn empty_object_is_node() {
        let node = TranslationNode::from_json(&json!({ "empty": {} })).unwrap();
        assert!(matches!(node.get("empty"), Some(TranslationValue::Node(n)) if n.is_empty()));
    }

    #[test]
    fn rejects_non_string_leaves() {
        let err = TranslationTree::from_json_value(&json!({
            "en": { "a": { "b": 42 } }
        }))
        .unwrap_err();
        match err {
            I18nError::InvalidEntry { path, found } => {
                assert_eq!(path, "en.a.b");
                assert_eq!(found, "number");
            }
            other => panic!("unexpected error {other}"),
        }
        assert!(matches!(
            TranslationTree::from_json_str("[1]"),
            Err(I18nError::InvalidEntry { .. })
        ));
        assert!(matches!(
            TranslationTree::from_json_str("{"),
            Err(I18nError::Json(_))
        ));
    }

    #[test]
    fn merge_is_deep() {
        let mut base = TranslationNode::from_json(&json!({
            "nav": { "home": "Home", "back": "Back" },
            "title": "Old"
        }))
        .unwrap();
        base.merge(
            TranslationNode::from_json(&json!({
                "nav": { "home": "Start" },
                "title": "New"
            }))
            .unwrap(),
        );
        assert_eq!(base.lookup("nav.home"), Some(&TranslationValue::Text("Start".into())));
        assert_eq!(base.lookup("nav.back"), Some(&TranslationValue::Text("Back".into())));
        assert_eq!(base.lookup("title"), Some(&TranslationValue::Text("New".into())));
    }

    #[test]
    fn leaf_keys_are_dotted_and_sorted() {
        let node = TranslationNode::from_json(&json!({
            "b": "B",
            "a": { "y": "Y", "x": { "one": "1", "other": "n" } }
        }))
        .unwrap();
        assert_eq!(node.leaf_keys(), ["a.x", "a.y", "b"]);
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en.json");
        std::fs::write(&path, r#"{"en":{"hello":"Hello"}}"#).unwrap();
        let tree = TranslationTree::from_json_file(&path).unwrap();
        assert_eq!(tree.locales().collect::<Vec<_>>(), ["en"]);
        assert!(matches!(
            TranslationTree::from_json_file(dir.path().join("missing.json")),
            Err(I18nError::Io(_))
        ));
    }
}
