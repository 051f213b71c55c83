#![no_main]

use arbitrary::Arbitrary;
use lexis_format::{Notation, NumberFormatOptions, NumberFormatter, OrdinalFormatter, SignDisplay};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    value: f64,
    locale: &'a str,
    currency: &'a str,
    unit: &'a str,
    min_frac: u8,
    max_frac: u8,
    significant: Option<(u8, u8)>,
    notation: u8,
    sign: u8,
}

fuzz_target!(|input: Input<'_>| {
    let nf = NumberFormatter::with_capacity(8);
    let mut options = NumberFormatOptions::default();
    options.minimum_fraction_digits = Some(input.min_frac);
    options.maximum_fraction_digits = Some(input.max_frac);
    if let Some((min, max)) = input.significant {
        options.minimum_significant_digits = Some(min);
        options.maximum_significant_digits = Some(max);
    }
    options.notation = match input.notation % 3 {
        0 => Notation::Standard,
        1 => Notation::Compact,
        _ => Notation::Scientific,
    };
    options.sign_display = match input.sign % 4 {
        0 => SignDisplay::Auto,
        1 => SignDisplay::Never,
        2 => SignDisplay::Always,
        _ => SignDisplay::ExceptZero,
    };

    // Formatting never fails, whatever the options.
    let _ = nf.format(input.value, input.locale, &options);
    let _ = nf.format_currency(input.value, input.locale, input.currency);
    let _ = nf.format_unit(input.value, input.locale, input.unit);
    let _ = nf.format_range(input.value, -input.value, input.locale, &options);
    let _ = OrdinalFormatter::new().format(input.value, input.locale);
});
