//! A formatter compiled for one `(locale, options)` signature.
//!
//! Compiling resolves every default and validates the option bag once, so
//! the per-call path is just rounding and string assembly.

use lexis_core::display_number;

use crate::data::{self, CompactTiers, CurrencyPlacement, LocaleData, UnitLabels};
use crate::digits::Digits;
use crate::error::FormatError;
use crate::options::{
    CompactDisplay, Notation, NumberFormatOptions, NumberStyle, SignDisplay, UnitDisplay,
};

const NBSP: &str = "\u{a0}";
const MAX_FRACTION_DIGITS: u8 = 20;
const MAX_SIGNIFICANT_DIGITS: u8 = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rounding {
    Fraction { min: usize, max: usize },
    Significant { min: usize, max: usize },
    /// Two significant digits below 100, whole numbers above.
    CompactAuto,
}

#[derive(Debug, Clone)]
enum Affix {
    None,
    Percent,
    Currency { symbol: String },
    Unit { labels: UnitLabels, display: UnitDisplay },
}

/// Locale-bound formatter with resolved defaults.
#[derive(Debug, Clone)]
pub struct CompiledFormatter {
    data: &'static LocaleData,
    rounding: Rounding,
    min_integer: usize,
    grouping: bool,
    notation: Notation,
    compact: Option<CompactTiers>,
    sign: SignDisplay,
    scale: f64,
    affix: Affix,
}

impl CompiledFormatter {
    /// Validate `options` for `locale` and resolve defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] for malformed currency codes, unknown units,
    /// inconsistent digit bounds, or features the locale has no data for
    /// (compact notation in CJK locales, long unit names outside English).
    pub fn new(locale: &str, options: &NumberFormatOptions) -> Result<Self, FormatError> {
        let data = data::for_locale(locale);

        let (affix, default_frac) = match options.style {
            NumberStyle::Decimal => (Affix::None, (0, 3)),
            NumberStyle::Percent => (Affix::Percent, (0, 0)),
            NumberStyle::Currency => {
                let code = options
                    .currency
                    .as_deref()
                    .ok_or(FormatError::MissingCurrency)?;
                if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(FormatError::InvalidCurrency(code.to_string()));
                }
                let code = code.to_ascii_uppercase();
                let digits = data::currency_digits(&code) as usize;
                let symbol = data::currency_symbol(&code).to_string();
                (Affix::Currency { symbol }, (digits, digits))
            }
            NumberStyle::Unit => {
                let unit = options.unit.as_deref().ok_or(FormatError::MissingUnit)?;
                let labels = data::unit_labels(unit)
                    .ok_or_else(|| FormatError::UnknownUnit(unit.to_string()))?;
                if options.unit_display == UnitDisplay::Long && data.language != "en" {
                    return Err(FormatError::Unsupported {
                        feature: "long unit names",
                        locale: locale.to_string(),
                    });
                }
                (
                    Affix::Unit {
                        labels,
                        display: options.unit_display,
                    },
                    (0, 3),
                )
            }
        };

        let compact = match options.notation {
            Notation::Compact => {
                let tiers = match options.compact_display {
                    CompactDisplay::Short => data.compact_short,
                    CompactDisplay::Long => data.compact_long,
                };
                let tiers = tiers.ok_or_else(|| FormatError::Unsupported {
                    feature: "compact notation",
                    locale: locale.to_string(),
                })?;
                Some(tiers)
            }
            Notation::Standard | Notation::Scientific => None,
        };

        let rounding = resolve_rounding(options, default_frac)?;
        let min_integer = match options.minimum_integer_digits {
            None => 1,
            Some(n @ 1..=21) => n as usize,
            Some(n) => {
                return Err(FormatError::InvalidDigits(format!(
                    "minimumIntegerDigits {n} is outside 1..=21"
                )));
            }
        };

        let rounding = match options.notation {
            Notation::Compact if no_digit_options(options) => Rounding::CompactAuto,
            Notation::Scientific if no_digit_options(options) => {
                Rounding::Fraction { min: 0, max: 3 }
            }
            _ => rounding,
        };

        Ok(Self {
            data,
            rounding,
            min_integer,
            grouping: options.use_grouping,
            notation: options.notation,
            compact,
            sign: options.sign_display,
            scale: if options.style == NumberStyle::Percent {
                100.0
            } else {
                1.0
            },
            affix,
        })
    }

    /// Format one value. Non-finite values render as `NaN`/`Infinity`.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return display_number(value);
        }
        let negative = value.is_sign_negative();
        let abs = (value * self.scale).abs();

        let (digits, suffix, exponent) = match self.notation {
            Notation::Standard => (self.round(abs), None, None),
            Notation::Compact => {
                let (digits, suffix) = self.compact(abs);
                (digits, suffix, None)
            }
            Notation::Scientific => {
                let (digits, exp) = self.scientific(abs);
                (digits, None, Some(exp))
            }
        };

        // Compact patterns never group four-digit numbers.
        let min_grouping = match self.notation {
            Notation::Compact => self.data.min_grouping_digits.max(2),
            _ => self.data.min_grouping_digits,
        };
        let grouping = (self.grouping && exponent.is_none())
            .then_some((self.data.group, min_grouping));
        let mut number = digits.render(grouping, self.data.decimal);
        if let Some(suffix) = suffix {
            number.push_str(suffix);
        }
        if let Some(exp) = exponent {
            number.push('E');
            number.push_str(&exp.to_string());
        }

        let sign = match self.sign {
            SignDisplay::Never => "",
            SignDisplay::Auto if negative => "-",
            SignDisplay::Auto => "",
            SignDisplay::Always if negative => "-",
            SignDisplay::Always => "+",
            SignDisplay::ExceptZero if digits.is_zero() => "",
            SignDisplay::ExceptZero if negative => "-",
            SignDisplay::ExceptZero => "+",
        };

        self.attach(sign, number, &digits)
    }

    fn attach(&self, sign: &str, number: String, digits: &Digits) -> String {
        match &self.affix {
            Affix::None => format!("{sign}{number}"),
            Affix::Percent => format!("{sign}{number}{}%", self.data.percent_separator),
            Affix::Currency { symbol } => {
                let alphabetic = symbol.chars().all(|c| c.is_ascii_alphabetic());
                match self.data.currency {
                    CurrencyPlacement::Prefix if alphabetic => {
                        format!("{sign}{symbol}{NBSP}{number}")
                    }
                    CurrencyPlacement::Prefix => format!("{sign}{symbol}{number}"),
                    CurrencyPlacement::PrefixSpaced => format!("{sign}{symbol}{NBSP}{number}"),
                    CurrencyPlacement::SuffixSpaced => format!("{sign}{number}{NBSP}{symbol}"),
                }
            }
            Affix::Unit { labels, display } => match display {
                UnitDisplay::Short if labels.attached => format!("{sign}{number}{}", labels.short),
                UnitDisplay::Short => format!("{sign}{number} {}", labels.short),
                UnitDisplay::Narrow => format!("{sign}{number}{}", labels.narrow),
                UnitDisplay::Long => {
                    let label = if digits.int == "1" && digits.frac.is_empty() {
                        labels.long_one
                    } else {
                        labels.long_other
                    };
                    format!("{sign}{number} {label}")
                }
            },
        }
    }

    fn round(&self, abs: f64) -> Digits {
        let mut digits = match self.rounding {
            Rounding::Fraction { min, max } => Digits::fixed(abs, min, max),
            Rounding::Significant { min, max } => Digits::significant(abs, min, max),
            Rounding::CompactAuto if abs < 100.0 => Digits::significant(abs, 1, 2),
            Rounding::CompactAuto => Digits::fixed(abs, 0, 0),
        };
        digits.pad_integer(self.min_integer);
        digits
    }

    fn compact(&self, abs: f64) -> (Digits, Option<&'static str>) {
        let Some(tiers) = self.compact else {
            return (self.round(abs), None);
        };
        let mut tier = 0usize;
        while tier < tiers.len() && abs >= 1000f64.powi(tier as i32 + 1) {
            tier += 1;
        }
        loop {
            // Locales that leave a tier unabbreviated render the full number.
            if tier > 0 && tiers[tier - 1].is_none() {
                return (self.round(abs), None);
            }
            let scaled = abs / 1000f64.powi(tier as i32);
            let digits = self.round(scaled);
            if tier < tiers.len() && digits.value() >= 1000.0 {
                tier += 1;
                continue;
            }
            let suffix = tier.checked_sub(1).and_then(|t| tiers[t]);
            return (digits, suffix);
        }
    }

    fn scientific(&self, abs: f64) -> (Digits, i32) {
        if abs == 0.0 {
            return (self.round(0.0), 0);
        }
        let mut exp = abs.log10().floor() as i32;
        let mut digits = self.round(abs / 10f64.powi(exp));
        if digits.value() >= 10.0 {
            exp += 1;
            digits = self.round(abs / 10f64.powi(exp));
        }
        (digits, exp)
    }
}

fn no_digit_options(options: &NumberFormatOptions) -> bool {
    options.minimum_fraction_digits.is_none()
        && options.maximum_fraction_digits.is_none()
        && options.minimum_significant_digits.is_none()
        && options.maximum_significant_digits.is_none()
}

fn resolve_rounding(
    options: &NumberFormatOptions,
    (default_min, default_max): (usize, usize),
) -> Result<Rounding, FormatError> {
    if options.minimum_significant_digits.is_some() || options.maximum_significant_digits.is_some()
    {
        let min = options.minimum_significant_digits.unwrap_or(1);
        let max = options
            .maximum_significant_digits
            .unwrap_or(MAX_SIGNIFICANT_DIGITS);
        if min == 0 || max > MAX_SIGNIFICANT_DIGITS || min > max {
            return Err(FormatError::InvalidDigits(format!(
                "significant digits {min}..={max}"
            )));
        }
        return Ok(Rounding::Significant {
            min: min as usize,
            max: max as usize,
        });
    }

    let (min, max) = match (
        options.minimum_fraction_digits,
        options.maximum_fraction_digits,
    ) {
        (None, None) => return Ok(Rounding::Fraction {
            min: default_min,
            max: default_max,
        }),
        (Some(min), None) => (min, (default_max as u8).max(min)),
        (None, Some(max)) => ((default_min as u8).min(max), max),
        (Some(min), Some(max)) => (min, max),
    };
    if max > MAX_FRACTION_DIGITS || min > max {
        return Err(FormatError::InvalidDigits(format!(
            "fraction digits {min}..={max}"
        )));
    }
    Ok(Rounding::Fraction {
        min: min as usize,
        max: max as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(locale: &str, options: &NumberFormatOptions, value: f64) -> String {
        CompiledFormatter::new(locale, options)
            .unwrap()
            .format(value)
    }

    #[test]
    fn decimal_grouping_per_locale() {
        let opts = NumberFormatOptions::default();
        assert_eq!(fmt("en-US", &opts, 1234.56), "1,234.56");
        assert_eq!(fmt("de-DE", &opts, 1234.56), "1.234,56");
        assert_eq!(fmt("fr-FR", &opts, 1234.5), "1\u{202f}234,5");
        assert_eq!(fmt("es-ES", &opts, 1234.0), "1234");
        assert_eq!(fmt("es-ES", &opts, 12345.0), "12.345");
        assert_eq!(fmt("en-US", &opts, 0.12345), "0.123");
    }

    #[test]
    fn unknown_locale_uses_english_data() {
        let opts = NumberFormatOptions::default();
        assert_eq!(fmt("xx", &opts, 1234.5), "1,234.5");
    }

    #[test]
    fn currency_placement() {
        let usd = NumberFormatOptions::currency("USD");
        let eur = NumberFormatOptions::currency("EUR");
        assert_eq!(fmt("en-US", &usd, 1234.5), "$1,234.50");
        assert_eq!(fmt("en-US", &usd, -5.0), "-$5.00");
        assert_eq!(fmt("de-DE", &eur, 1234.5), "1.234,50\u{a0}€");
        assert_eq!(fmt("en-US", &NumberFormatOptions::currency("CHF"), 3.0), "CHF\u{a0}3.00");
        assert_eq!(fmt("en-US", &NumberFormatOptions::currency("jpy"), 1234.4), "¥1,234");
    }

    #[test]
    fn percent_scales() {
        let opts = NumberFormatOptions::percent();
        assert_eq!(fmt("en", &opts, 0.256), "26%");
        assert_eq!(fmt("de", &opts, 0.25), "25\u{a0}%");
        let precise = NumberFormatOptions::percent().with_fraction_digits(1, 1);
        assert_eq!(fmt("en", &precise, 0.1234), "12.3%");
    }

    #[test]
    fn compact_tiers() {
        let short = NumberFormatOptions::compact();
        assert_eq!(fmt("en-US", &short, 1_500_000.0), "1.5M");
        assert_eq!(fmt("en-US", &short, 1234.0), "1.2K");
        assert_eq!(fmt("en-US", &short, 123_456.0), "123K");
        assert_eq!(fmt("en-US", &short, 999_999.0), "1M");
        assert_eq!(fmt("en-US", &short, 42.0), "42");
        assert_eq!(fmt("de-DE", &short, 1234.0), "1234");
        assert_eq!(fmt("de-DE", &short, 12_345.0), "12.345");
        assert_eq!(fmt("de-DE", &short, 2_500_000.0), "2,5\u{a0}Mio.");
        let long = short.clone().with_compact_display(CompactDisplay::Long);
        assert_eq!(fmt("en-US", &long, 2_000_000.0), "2 million");
    }

    #[test]
    fn compact_unsupported_for_cjk() {
        let err = CompiledFormatter::new("ja-JP", &NumberFormatOptions::compact()).unwrap_err();
        assert!(matches!(err, FormatError::Unsupported { .. }));
    }

    #[test]
    fn scientific_mantissa() {
        let opts = NumberFormatOptions::default().with_notation(Notation::Scientific);
        assert_eq!(fmt("en", &opts, 1234.56), "1.235E3");
        assert_eq!(fmt("en", &opts, 0.0), "0E0");
        assert_eq!(fmt("en", &opts, 0.00012), "1.2E-4");
        assert_eq!(fmt("en", &opts, 9999.9), "1E4");
    }

    #[test]
    fn sign_display_modes() {
        let with = |s| NumberFormatOptions::default().with_sign_display(s);
        assert_eq!(fmt("en", &with(SignDisplay::Always), 5.0), "+5");
        assert_eq!(fmt("en", &with(SignDisplay::Always), 0.0), "+0");
        assert_eq!(fmt("en", &with(SignDisplay::Never), -5.0), "5");
        assert_eq!(fmt("en", &with(SignDisplay::ExceptZero), 0.0), "0");
        assert_eq!(fmt("en", &with(SignDisplay::ExceptZero), -2.0), "-2");
        assert_eq!(fmt("en", &with(SignDisplay::ExceptZero), 0.0001), "0");
    }

    #[test]
    fn units() {
        let km = NumberFormatOptions::unit("kilometer");
        assert_eq!(fmt("en", &km, 12.5), "12.5 km");
        assert_eq!(
            fmt("en", &km.clone().with_unit_display(UnitDisplay::Long), 1.0),
            "1 kilometer"
        );
        assert_eq!(
            fmt("en", &km.clone().with_unit_display(UnitDisplay::Long), 3.0),
            "3 kilometers"
        );
        assert_eq!(fmt("en", &NumberFormatOptions::unit("celsius"), 21.0), "21°C");
    }

    #[test]
    fn invalid_configurations() {
        let missing = NumberFormatOptions {
            style: NumberStyle::Currency,
            ..NumberFormatOptions::default()
        };
        assert_eq!(
            CompiledFormatter::new("en", &missing).unwrap_err(),
            FormatError::MissingCurrency
        );
        assert!(matches!(
            CompiledFormatter::new("en", &NumberFormatOptions::currency("DOLLARS")),
            Err(FormatError::InvalidCurrency(_))
        ));
        assert!(matches!(
            CompiledFormatter::new("en", &NumberFormatOptions::unit("furlong")),
            Err(FormatError::UnknownUnit(_))
        ));
        assert!(matches!(
            CompiledFormatter::new("en", &NumberFormatOptions::default().with_fraction_digits(3, 1)),
            Err(FormatError::InvalidDigits(_))
        ));
        assert!(matches!(
            CompiledFormatter::new(
                "de",
                &NumberFormatOptions::unit("meter").with_unit_display(UnitDisplay::Long)
            ),
            Err(FormatError::Unsupported { .. })
        ));
    }

    #[test]
    fn minimum_integer_digits_pad() {
        let opts = NumberFormatOptions {
            minimum_integer_digits: Some(3),
            ..NumberFormatOptions::default()
        };
        assert_eq!(fmt("en", &opts, 7.0), "007");
    }
}
