//! Tagged parameter values for interpolation.
//!
//! Parameters are a closed set of variants rather than arbitrary JSON so the
//! interpolator can tell apart values it can print (`String`, `Number`,
//! `Boolean`, `Date`) from values it must leave alone (`Nested`,
//! `Unsupported`).

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use lexis_core::display_number;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
    /// A nested bag, reachable through dotted paths (`{{user.name}}`).
    Nested(Params),
    /// A value with no text form (JSON `null` or an array). Names the kind.
    Unsupported(&'static str),
}

impl ParamValue {
    /// Convert a JSON value. `null` and arrays become [`Unsupported`](Self::Unsupported).
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::String(s) => Self::String(s.clone()),
            Value::Number(n) => n.as_f64().map_or(Self::Unsupported("number"), Self::Number),
            Value::Bool(b) => Self::Boolean(*b),
            Value::Object(map) => Self::Nested(Params(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::from_json(v)))
                    .collect(),
            )),
            Value::Null => Self::Unsupported("null"),
            Value::Array(_) => Self::Unsupported("array"),
        }
    }

    /// Locale-agnostic text form, or `None` for nested and unsupported values.
    ///
    /// Numbers print like an untyped string conversion (`5`, `1.5`, `NaN`);
    /// dates print as RFC 3339 with millisecond precision.
    #[must_use]
    pub fn display(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Number(n) => Some(display_number(*n)),
            Self::Boolean(b) => Some(b.to_string()),
            Self::Date(d) => Some(d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::Nested(_) | Self::Unsupported(_) => None,
        }
    }

    /// Numeric reading: numbers as-is, numeric strings parsed.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Short name of the variant, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::Date(_) => "date",
            Self::Nested(_) => "object",
            Self::Unsupported(kind) => kind,
        }
    }
}

macro_rules! from_number {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ParamValue {
            fn from(n: $ty) -> Self {
                Self::Number(n as f64)
            }
        })*
    };
}

from_number!(f32, f64, i32, i64, u32, u64, usize);

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(d: DateTime<Utc>) -> Self {
        Self::Date(d)
    }
}

impl From<Params> for ParamValue {
    fn from(p: Params) -> Self {
        Self::Nested(p)
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(s) => serializer.serialize_str(s),
            Self::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            // Non-finite numbers print the same as their string form.
            Self::Number(n) => serializer.serialize_str(&display_number(*n)),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Date(d) => serializer.serialize_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::Nested(p) => p.serialize(serializer),
            Self::Unsupported(_) => serializer.serialize_unit(),
        }
    }
}

/// A parameter bag: names to [`ParamValue`]s, ordered by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    /// Descend a dotted path (`"user.name"`) through nested bags.
    ///
    /// Segments are trimmed. Returns `None` when any segment is missing or
    /// an intermediate value is not nested.
    #[must_use]
    pub fn lookup_path(&self, path: &str) -> Option<&ParamValue> {
        let mut segments = path.split('.').map(str::trim);
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            match current {
                ParamValue::Nested(inner) => current = inner.0.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Copy of this bag with one more entry, replacing any existing one.
    #[must_use]
    pub fn merged(&self, name: &str, value: impl Into<ParamValue>) -> Self {
        let mut copy = self.clone();
        copy.insert(name, value);
        copy
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Convert a JSON object. Any other JSON value yields an empty bag.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        match ParamValue::from_json(value) {
            ParamValue::Nested(params) => params,
            _ => Self::default(),
        }
    }

    /// Canonical serialization used in cache keys; empty for an empty bag.
    ///
    /// Keys are ordered, so bags built in any order share one fingerprint.
    #[must_use]
    pub fn cache_fingerprint(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Build a [`Params`] bag inline.
///
/// ```
/// use lexis_i18n::params;
///
/// let p = params! { "name" => "Ann", "count" => 3 };
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => { $crate::Params::new() };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::Params::new();
        $(params.insert($name, $value);)+
        params
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dotted_lookup() {
        let p = Params::new().with("user", Params::new().with("name", "Ann"));
        assert_eq!(p.lookup_path("user.name"), Some(&ParamValue::from("Ann")));
        assert_eq!(p.lookup_path(" user . name "), Some(&ParamValue::from("Ann")));
        assert!(p.lookup_path("user.age").is_none());
        assert!(p.lookup_path("user.name.first").is_none());
        assert!(matches!(p.lookup_path("user"), Some(ParamValue::Nested(_))));
    }

    #[test]
    fn display_forms() {
        assert_eq!(ParamValue::from(5).display().as_deref(), Some("5"));
        assert_eq!(ParamValue::from(1.5).display().as_deref(), Some("1.5"));
        assert_eq!(ParamValue::from(true).display().as_deref(), Some("true"));
        assert_eq!(ParamValue::Number(f64::NAN).display().as_deref(), Some("NaN"));
        assert!(ParamValue::Nested(Params::new()).display().is_none());
        assert!(ParamValue::Unsupported("null").display().is_none());
    }

    #[test]
    fn from_json_tags_values() {
        let p = Params::from_json(&json!({
            "name": "Ann",
            "n": 3,
            "ok": false,
            "nothing": null,
            "list": [1, 2],
            "user": {"id": 7}
        }));
        assert_eq!(p.get("n"), Some(&ParamValue::Number(3.0)));
        assert_eq!(p.get("nothing"), Some(&ParamValue::Unsupported("null")));
        assert_eq!(p.get("list").map(ParamValue::kind), Some("array"));
        assert_eq!(p.lookup_path("user.id"), Some(&ParamValue::Number(7.0)));
        assert!(Params::from_json(&json!("scalar")).is_empty());
    }

    #[test]
    fn fingerprint_is_order_independent() {
        let a = params! { "b" => 2, "a" => "x" };
        let b = params! { "a" => "x", "b" => 2 };
        assert_eq!(a.cache_fingerprint(), b.cache_fingerprint());
        assert_eq!(a.cache_fingerprint(), r#"{"a":"x","b":2.0}"#);
        assert_eq!(Params::new().cache_fingerprint(), "");
        assert_ne!(
            params! { "n" => 1 }.cache_fingerprint(),
            params! { "n" => "1" }.cache_fingerprint()
        );
    }

    #[test]
    fn merged_overrides() {
        let p = params! { "count" => "many" };
        let merged = p.merged("count", 3);
        assert_eq!(merged.get("count"), Some(&ParamValue::Number(3.0)));
        assert_eq!(p.get("count"), Some(&ParamValue::from("many")));
    }

    #[test]
    fn numeric_reading() {
        assert_eq!(ParamValue::from(" 4 ").as_number(), Some(4.0));
        assert_eq!(ParamValue::from("four").as_number(), None);
        assert_eq!(ParamValue::from(true).as_number(), None);
    }
}
