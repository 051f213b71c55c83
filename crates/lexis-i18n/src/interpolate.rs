//! Placeholder substitution.
//!
//! # Invariants
//!
//! 1. **Single pass**: substituted text is never rescanned, so a parameter
//!    whose value contains `{{x}}` is inserted verbatim.
//! 2. **Unresolvable placeholders survive**: a missing path, a nested bag,
//!    or an unsupported value leaves the original placeholder text in place.
//! 3. **Unclosed placeholders are text**: `"{{name"` is copied unchanged.
//!
//! # Failure Modes
//!
//! | Failure | Behavior | Diagnostic |
//! |---------|----------|------------|
//! | Missing path | Placeholder left as-is | `debug` |
//! | Nested or unsupported value | Placeholder left as-is | `warn` |

use serde::{Deserialize, Serialize};

use crate::value::{ParamValue, Params};

/// Placeholder delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderSyntax {
    /// `{{name}}`, used by translation dictionaries.
    #[default]
    DoubleBrace,
    /// `{name}`, used by ICU-style messages.
    SingleBrace,
}

impl PlaceholderSyntax {
    fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::DoubleBrace => ("{{", "}}"),
            Self::SingleBrace => ("{", "}"),
        }
    }
}

/// Substitute placeholders in `template` from `params`.
///
/// ```
/// use lexis_i18n::interpolate::{PlaceholderSyntax, interpolate};
/// use lexis_i18n::params;
///
/// let p = params! { "user" => params! { "name" => "Ann" } };
/// assert_eq!(
///     interpolate("Hi {{user.name}}, {{missing}}", &p, PlaceholderSyntax::DoubleBrace),
///     "Hi Ann, {{missing}}"
/// );
/// ```
#[must_use]
pub fn interpolate(template: &str, params: &Params, syntax: PlaceholderSyntax) -> String {
    let (open, close) = syntax.delimiters();
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(open) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + open.len()..];
        let Some(end) = after_open.find(close) else {
            out.push_str(&rest[start..]);
            return out;
        };
        let placeholder = &rest[start..start + open.len() + end + close.len()];
        let path = after_open[..end].trim();
        match resolve_placeholder(path, params) {
            Some(text) => out.push_str(&text),
            None => out.push_str(placeholder),
        }
        rest = &after_open[end + close.len()..];
    }
    out.push_str(rest);
    out
}

/// Text for a placeholder path, or `None` to leave the placeholder literal.
pub(crate) fn resolve_placeholder(path: &str, params: &Params) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    match params.lookup_path(path) {
        None => {
            tracing::debug!(
                target: "lexis.interpolate",
                path = %path,
                "placeholder has no matching parameter"
            );
            None
        }
        Some(value @ (ParamValue::Nested(_) | ParamValue::Unsupported(_))) => {
            tracing::warn!(
                target: "lexis.interpolate",
                path = %path,
                kind = value.kind(),
                "parameter cannot be interpolated, placeholder left as-is"
            );
            None
        }
        Some(value) => value.display(),
    }
}
