//! Built-in locale data for native formatting.
//!
//! Separators, currency placement, percent spacing, and compact suffixes for
//! the languages Lexis ships data for. Languages without an entry resolve to
//! English data, which mirrors how platform formatters fall back to their
//! default locale.

const NBSP: &str = "\u{a0}";
const NNBSP: &str = "\u{202f}";

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CurrencyPlacement {
    /// `$1.00`; alphabetic symbols get a separating space (`CHF 1.00`).
    Prefix,
    /// `R$ 1,00`.
    PrefixSpaced,
    /// `1,00 €`.
    SuffixSpaced,
}

/// Compact suffixes for thousand, million, billion, trillion.
///
/// `None` means the tier is not abbreviated in this locale; the number is
/// rendered in full instead.
pub(crate) type CompactTiers = [Option<&'static str>; 4];

/// Formatting data for one language.
#[derive(Debug)]
pub(crate) struct LocaleData {
    pub language: &'static str,
    pub group: &'static str,
    pub decimal: &'static str,
    /// Minimum integer digits before grouping kicks in (`es`: 1234 stays
    /// ungrouped).
    pub min_grouping_digits: usize,
    pub currency: CurrencyPlacement,
    /// Text between the number and `%`.
    pub percent_separator: &'static str,
    pub compact_short: Option<CompactTiers>,
    pub compact_long: Option<CompactTiers>,
}

static LOCALES: &[LocaleData] = &[
    LocaleData {
        language: "en",
        group: ",",
        decimal: ".",
        min_grouping_digits: 1,
        currency: CurrencyPlacement::Prefix,
        percent_separator: "",
        compact_short: Some([Some("K"), Some("M"), Some("B"), Some("T")]),
        compact_long: Some([
            Some(" thousand"),
            Some(" million"),
            Some(" billion"),
            Some(" trillion"),
        ]),
    },
    LocaleData {
        language: "de",
        group: ".",
        decimal: ",",
        min_grouping_digits: 1,
        currency: CurrencyPlacement::SuffixSpaced,
        percent_separator: NBSP,
        compact_short: Some([
            None,
            Some("\u{a0}Mio."),
            Some("\u{a0}Mrd."),
            Some("\u{a0}Bio."),
        ]),
        compact_long: Some([
            Some(" Tausend"),
            Some(" Millionen"),
            Some(" Milliarden"),
            Some(" Billionen"),
        ]),
    },
    LocaleData {
        language: "fr",
        group: NNBSP,
        decimal: ",",
        min_grouping_digits: 1,
        currency: CurrencyPlacement::SuffixSpaced,
        percent_separator: NNBSP,
        compact_short: Some([
            Some("\u{a0}k"),
            Some("\u{a0}M"),
            Some("\u{a0}Md"),
            Some("\u{a0}Bn"),
        ]),
        compact_long: Some([
            Some(" mille"),
            Some(" millions"),
            Some(" milliards"),
            Some(" billions"),
        ]),
    },
    LocaleData {
        language: "es",
        group: ".",
        decimal: ",",
        min_grouping_digits: 2,
        currency: CurrencyPlacement::SuffixSpaced,
        percent_separator: NBSP,
        compact_short: Some([
            Some("\u{a0}mil"),
            Some("\u{a0}M"),
            Some("\u{a0}mil\u{a0}M"),
            Some("\u{a0}B"),
        ]),
        compact_long: Some([
            Some(" mil"),
            Some(" millones"),
            Some(" mil millones"),
            Some(" billones"),
        ]),
    },
    LocaleData {
        language: "it",
        group: ".",
        decimal: ",",
        min_grouping_digits: 1,
        currency: CurrencyPlacement::SuffixSpaced,
        percent_separator: "",
        compact_short: Some([
            None,
            Some("\u{a0}Mln"),
            Some("\u{a0}Mrd"),
            Some("\u{a0}Bln"),
        ]),
        compact_long: Some([
            Some(" mila"),
            Some(" milioni"),
            Some(" miliardi"),
            Some(" mila miliardi"),
        ]),
    },
    LocaleData {
        language: "pt",
        group: ".",
        decimal: ",",
        min_grouping_digits: 1,
        currency: CurrencyPlacement::PrefixSpaced,
        percent_separator: "",
        compact_short: Some([
            Some("\u{a0}mil"),
            Some("\u{a0}mi"),
            Some("\u{a0}bi"),
            Some("\u{a0}tri"),
        ]),
        compact_long: Some([
            Some(" mil"),
            Some(" milhões"),
            Some(" bilhões"),
            Some(" trilhões"),
        ]),
    },
    LocaleData {
        language: "nl",
        group: ".",
        decimal: ",",
        min_grouping_digits: 1,
        currency: CurrencyPlacement::PrefixSpaced,
        percent_separator: "",
        compact_short: Some([
            Some("K"),
            Some("\u{a0}mln."),
            Some("\u{a0}mld."),
            Some("\u{a0}bln."),
        ]),
        compact_long: Some([
            Some(" duizend"),
            Some(" miljoen"),
            Some(" miljard"),
            Some(" biljoen"),
        ]),
    },
    LocaleData {
        language: "ru",
        group: NBSP,
        decimal: ",",
        min_grouping_digits: 1,
        currency: CurrencyPlacement::SuffixSpaced,
        percent_separator: NBSP,
        compact_short: Some([
            Some("\u{a0}тыс."),
            Some("\u{a0}млн"),
            Some("\u{a0}млрд"),
            Some("\u{a0}трлн"),
        ]),
        compact_long: Some([
            Some(" тысячи"),
            Some(" миллиона"),
            Some(" миллиарда"),
            Some(" триллиона"),
        ]),
    },
    LocaleData {
        language: "pl",
        group: NBSP,
        decimal: ",",
        min_grouping_digits: 2,
        currency: CurrencyPlacement::SuffixSpaced,
        percent_separator: "",
        compact_short: Some([
            Some("\u{a0}tys."),
            Some("\u{a0}mln"),
            Some("\u{a0}mld"),
            Some("\u{a0}bln"),
        ]),
        compact_long: Some([
            Some(" tysiąca"),
            Some(" miliona"),
            Some(" miliarda"),
            Some(" biliona"),
        ]),
    },
    // CJK compact notation groups by 10^4, which these tiers cannot express.
    LocaleData {
        language: "ja",
        group: ",",
        decimal: ".",
        min_grouping_digits: 1,
        currency: CurrencyPlacement::Prefix,
        percent_separator: "",
        compact_short: None,
        compact_long: None,
    },
    LocaleData {
        language: "zh",
        group: ",",
        decimal: ".",
        min_grouping_digits: 1,
        currency: CurrencyPlacement::Prefix,
        percent_separator: "",
        compact_short: None,
        compact_long: None,
    },
];

/// Data for a locale tag, falling back to English for unknown languages.
pub(crate) fn for_locale(locale: &str) -> &'static LocaleData {
    let lang = lexis_core::locale::language(locale);
    LOCALES
        .iter()
        .find(|data| data.language == lang)
        .unwrap_or(&LOCALES[0])
}

/// Currency symbol for an ISO 4217 code. Unknown codes render as the code.
pub(crate) fn currency_symbol(code: &str) -> &str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CNY" => "CN¥",
        "INR" => "₹",
        "KRW" => "₩",
        "RUB" => "₽",
        "PLN" => "zł",
        "BRL" => "R$",
        "CAD" => "CA$",
        "AUD" => "A$",
        "MXN" => "MX$",
        other => other,
    }
}

/// Default fraction digits for an ISO 4217 code.
pub(crate) fn currency_digits(code: &str) -> u8 {
    match code {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" => 0,
        "BHD" | "KWD" | "OMR" | "JOD" | "TND" => 3,
        _ => 2,
    }
}

/// Labels for a unit identifier.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UnitLabels {
    pub short: &'static str,
    pub narrow: &'static str,
    pub long_one: &'static str,
    pub long_other: &'static str,
    /// Short form attaches without a space (`5°C`, `5%`).
    pub attached: bool,
}

const fn unit(
    short: &'static str,
    narrow: &'static str,
    long_one: &'static str,
    long_other: &'static str,
) -> UnitLabels {
    UnitLabels {
        short,
        narrow,
        long_one,
        long_other,
        attached: false,
    }
}

/// English unit labels for the sanctioned simple units Lexis knows.
pub(crate) fn unit_labels(unit_id: &str) -> Option<UnitLabels> {
    let labels = match unit_id {
        "meter" => unit("m", "m", "meter", "meters"),
        "kilometer" => unit("km", "km", "kilometer", "kilometers"),
        "centimeter" => unit("cm", "cm", "centimeter", "centimeters"),
        "mile" => unit("mi", "mi", "mile", "miles"),
        "foot" => unit("ft", "′", "foot", "feet"),
        "inch" => unit("in", "″", "inch", "inches"),
        "gram" => unit("g", "g", "gram", "grams"),
        "kilogram" => unit("kg", "kg", "kilogram", "kilograms"),
        "pound" => unit("lb", "lb", "pound", "pounds"),
        "liter" => unit("L", "L", "liter", "liters"),
        "second" => unit("sec", "s", "second", "seconds"),
        "minute" => unit("min", "m", "minute", "minutes"),
        "hour" => unit("hr", "h", "hour", "hours"),
        "day" => unit("day", "d", "day", "days"),
        "byte" => unit("byte", "B", "byte", "bytes"),
        "kilobyte" => unit("kB", "kB", "kilobyte", "kilobytes"),
        "megabyte" => unit("MB", "MB", "megabyte", "megabytes"),
        "gigabyte" => unit("GB", "GB", "gigabyte", "gigabytes"),
        "percent" => UnitLabels {
            attached: true,
            ..unit("%", "%", "percent", "percent")
        },
        "celsius" => UnitLabels {
            attached: true,
            ..unit("°C", "°C", "degree Celsius", "degrees Celsius")
        },
        "fahrenheit" => UnitLabels {
            attached: true,
            ..unit("°F", "°", "degree Fahrenheit", "degrees Fahrenheit")
        },
        _ => return None,
    };
    Some(labels)
}
