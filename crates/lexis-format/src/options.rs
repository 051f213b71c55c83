//! Number formatting options.
//!
//! Field names and enum spellings follow the familiar `Intl.NumberFormat`
//! option bag so dictionaries and configuration written for it deserialize
//! unchanged:
//!
//! ```
//! use lexis_format::options::{NumberFormatOptions, NumberStyle};
//!
//! let opts: NumberFormatOptions =
//!     serde_json::from_str(r#"{"style":"currency","currency":"EUR"}"#).unwrap();
//! assert_eq!(opts.style, NumberStyle::Currency);
//! ```

use serde::{Deserialize, Serialize};

/// What kind of quantity is being formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumberStyle {
    #[default]
    Decimal,
    Currency,
    Percent,
    Unit,
}

/// Standard, compact (`1.5M`) or scientific (`1.5E6`) rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Notation {
    #[default]
    Standard,
    Compact,
    Scientific,
}

/// Compact suffix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompactDisplay {
    #[default]
    Short,
    Long,
}

/// When to show the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignDisplay {
    /// Negative numbers only (including negative zero).
    #[default]
    Auto,
    /// Never.
    Never,
    /// Always, `+0` included.
    Always,
    /// Positive and negative numbers, but not zero.
    ExceptZero,
}

/// Unit label length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitDisplay {
    #[default]
    Short,
    Long,
    Narrow,
}

/// Option bag for [`NumberFormatter`](crate::NumberFormatter).
///
/// Options are hashed as a whole to key the formatter cache, so two bags
/// that compare equal always share one compiled formatter regardless of the
/// order in which their fields were set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberFormatOptions {
    pub style: NumberStyle,
    /// ISO 4217 code, required for [`NumberStyle::Currency`].
    pub currency: Option<String>,
    /// Unit identifier (`"kilometer"`), required for [`NumberStyle::Unit`].
    pub unit: Option<String>,
    pub unit_display: UnitDisplay,
    pub notation: Notation,
    pub compact_display: CompactDisplay,
    pub sign_display: SignDisplay,
    pub use_grouping: bool,
    pub minimum_integer_digits: Option<u8>,
    pub minimum_fraction_digits: Option<u8>,
    pub maximum_fraction_digits: Option<u8>,
    pub minimum_significant_digits: Option<u8>,
    pub maximum_significant_digits: Option<u8>,
}

impl Default for NumberFormatOptions {
    fn default() -> Self {
        Self {
            style: NumberStyle::Decimal,
            currency: None,
            unit: None,
            unit_display: UnitDisplay::Short,
            notation: Notation::Standard,
            compact_display: CompactDisplay::Short,
            sign_display: SignDisplay::Auto,
            use_grouping: true,
            minimum_integer_digits: None,
            minimum_fraction_digits: None,
            maximum_fraction_digits: None,
            minimum_significant_digits: None,
            maximum_significant_digits: None,
        }
    }
}

impl NumberFormatOptions {
    /// Currency style for an ISO 4217 code.
    #[must_use]
    pub fn currency(code: impl Into<String>) -> Self {
        Self {
            style: NumberStyle::Currency,
            currency: Some(code.into()),
            ..Self::default()
        }
    }

    /// Percent style (`0.25` → `25%`).
    #[must_use]
    pub fn percent() -> Self {
        Self {
            style: NumberStyle::Percent,
            ..Self::default()
        }
    }

    /// Compact notation, short display.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            notation: Notation::Compact,
            ..Self::default()
        }
    }

    /// Unit style for a unit identifier such as `"kilometer"`.
    #[must_use]
    pub fn unit(unit: impl Into<String>) -> Self {
        Self {
            style: NumberStyle::Unit,
            unit: Some(unit.into()),
            ..Self::default()
        }
    }

    /// Integer rendering: no fraction digits.
    #[must_use]
    pub fn integer() -> Self {
        Self {
            maximum_fraction_digits: Some(0),
            ..Self::default()
        }
    }

    /// Set both fraction-digit bounds.
    #[must_use]
    pub fn with_fraction_digits(mut self, min: u8, max: u8) -> Self {
        self.minimum_fraction_digits = Some(min);
        self.maximum_fraction_digits = Some(max);
        self
    }

    /// Set both significant-digit bounds.
    #[must_use]
    pub fn with_significant_digits(mut self, min: u8, max: u8) -> Self {
        self.minimum_significant_digits = Some(min);
        self.maximum_significant_digits = Some(max);
        self
    }

    #[must_use]
    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    #[must_use]
    pub fn with_compact_display(mut self, display: CompactDisplay) -> Self {
        self.compact_display = display;
        self
    }

    #[must_use]
    pub fn with_sign_display(mut self, sign: SignDisplay) -> Self {
        self.sign_display = sign;
        self
    }

    #[must_use]
    pub fn with_unit_display(mut self, display: UnitDisplay) -> Self {
        self.unit_display = display;
        self
    }

    #[must_use]
    pub fn with_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = use_grouping;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_intl_option_names() {
        let opts: NumberFormatOptions = serde_json::from_str(
            r#"{
                "style": "unit",
                "unit": "kilometer",
                "unitDisplay": "long",
                "signDisplay": "exceptZero",
                "maximumFractionDigits": 1
            }"#,
        )
        .unwrap();
        assert_eq!(opts.style, NumberStyle::Unit);
        assert_eq!(opts.unit.as_deref(), Some("kilometer"));
        assert_eq!(opts.unit_display, UnitDisplay::Long);
        assert_eq!(opts.sign_display, SignDisplay::ExceptZero);
        assert_eq!(opts.maximum_fraction_digits, Some(1));
        assert!(opts.use_grouping, "missing fields take defaults");
    }

    #[test]
    fn equal_bags_hash_equal() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let a = NumberFormatOptions::currency("EUR").with_fraction_digits(0, 2);
        let mut b = NumberFormatOptions::default().with_fraction_digits(0, 2);
        b.currency = Some("EUR".into());
        b.style = NumberStyle::Currency;

        let hash = |o: &NumberFormatOptions| {
            let mut h = DefaultHasher::new();
            o.hash(&mut h);
            h.finish()
        };
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));
    }
}
