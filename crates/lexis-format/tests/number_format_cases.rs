//! End-to-end formatting cases across locales and styles.

use lexis_format::{
    CompactDisplay, Notation, NumberFormatOptions, NumberFormatter, OrdinalFormatter, SignDisplay,
    UnitDisplay,
};
use proptest::prelude::*;

fn decimal() -> NumberFormatOptions {
    NumberFormatOptions::default()
}

#[test]
fn grouping_and_decimal_separators() {
    let nf = NumberFormatter::new();
    let cases = [
        ("en-US", "1,234,567.89"),
        ("de-DE", "1.234.567,89"),
        ("fr-FR", "1\u{202f}234\u{202f}567,89"),
        ("ru", "1\u{a0}234\u{a0}567,89"),
        ("ja-JP", "1,234,567.89"),
        ("pt-BR", "1.234.567,89"),
    ];
    for (locale, expected) in cases {
        assert_eq!(nf.format(1_234_567.89, locale, &decimal()), expected, "{locale}");
    }
}

#[test]
fn compact_short_matches_expected_shape() {
    let nf = NumberFormatter::new();
    let out = nf.format_compact(1_500_000.0, "en-US");
    assert!(out.starts_with("1.5") && out.trim_start_matches("1.5").trim().eq_ignore_ascii_case("m"));
    assert_eq!(nf.format_compact(2_300_000_000.0, "en"), "2.3B");
    assert_eq!(nf.format_compact(7_100_000_000_000.0, "en"), "7.1T");
    assert_eq!(nf.format_compact(-1_500.0, "en"), "-1.5K");
}

#[test]
fn compact_long_display() {
    let nf = NumberFormatter::new();
    let opts = NumberFormatOptions::compact().with_compact_display(CompactDisplay::Long);
    assert_eq!(nf.format(4_200.0, "en", &opts), "4.2 thousand");
}

#[test]
fn currency_across_locales() {
    let nf = NumberFormatter::new();
    assert_eq!(nf.format_currency(1234.5, "en-US", "EUR"), "€1,234.50");
    assert_eq!(nf.format_currency(1234.5, "fr-FR", "EUR"), "1\u{202f}234,50\u{a0}€");
    assert_eq!(nf.format_currency(1234.5, "pt-BR", "BRL"), "R$\u{a0}1.234,50");
    assert_eq!(nf.format_currency(1234.0, "ja-JP", "JPY"), "¥1,234");
}

#[test]
fn significant_digits_override_fraction_digits() {
    let nf = NumberFormatter::new();
    let opts = decimal().with_significant_digits(1, 3);
    assert_eq!(nf.format(123_456.0, "en", &opts), "123,000");
    assert_eq!(nf.format(0.012345, "en", &opts), "0.0123");
}

#[test]
fn scientific_and_signs() {
    let nf = NumberFormatter::new();
    let sci = decimal().with_notation(Notation::Scientific);
    assert_eq!(nf.format(-1500.0, "en", &sci), "-1.5E3");
    let always = decimal().with_sign_display(SignDisplay::Always);
    assert_eq!(nf.format(1234.5, "de", &always), "+1.234,5");
}

#[test]
fn grouping_can_be_disabled() {
    let nf = NumberFormatter::new();
    assert_eq!(nf.format(1234567.0, "en", &decimal().with_grouping(false)), "1234567");
}

#[test]
fn narrow_units() {
    let nf = NumberFormatter::new();
    let opts = NumberFormatOptions::unit("kilogram").with_unit_display(UnitDisplay::Narrow);
    assert_eq!(nf.format(70.0, "en", &opts), "70kg");
}

#[test]
fn ordinals_via_shared_formatter() {
    let of = OrdinalFormatter::new();
    assert_eq!(of.format(42.0, "en-GB"), "42nd");
    assert_eq!(of.format(113.0, "en"), "113th");
}

proptest! {
    #[test]
    fn integers_round_trip_without_separators(n in 0u32..10_000_000) {
        let nf = NumberFormatter::new();
        let out = nf.format(f64::from(n), "en", &decimal());
        let digits: String = out.chars().filter(|c| *c != ',').collect();
        prop_assert_eq!(digits, n.to_string());
    }

    #[test]
    fn cache_never_exceeds_capacity(locales in proptest::collection::vec("[a-z]{2}", 0..40)) {
        let nf = NumberFormatter::with_capacity(5);
        for locale in &locales {
            let _ = nf.format(1.0, locale, &decimal());
            prop_assert!(nf.cache_stats().size <= 5);
        }
    }

    #[test]
    fn english_ordinal_suffix_is_one_of_four(n in 0u32..100_000) {
        let out = OrdinalFormatter::new().format(f64::from(n), "en");
        prop_assert!(["st", "nd", "rd", "th"].iter().any(|s| out.ends_with(s)));
    }
}
