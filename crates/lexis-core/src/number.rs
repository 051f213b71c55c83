//! Locale-agnostic number display.

/// Render a number the way an untyped `String(value)` conversion would:
/// integers without a trailing `.0`, `NaN`, `Infinity`, `-Infinity`, and
/// negative zero as `0`. Magnitudes of `1e21` and above, or below `1e-6`,
/// switch to exponent form with an explicit sign (`1e+21`, `1.5e-7`).
///
/// This is the plain rendering used when interpolating parameters. Locale
/// aware output goes through the number formatter instead.
#[must_use]
pub fn display_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        return exponent_form(value);
    }
    format!("{value}")
}

fn exponent_form(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(display_number(5.0), "5");
        assert_eq!(display_number(-42.0), "-42");
        assert_eq!(display_number(1234567.0), "1234567");
    }

    #[test]
    fn fractions_are_shortest_round_trip() {
        assert_eq!(display_number(1.5), "1.5");
        assert_eq!(display_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn special_values() {
        assert_eq!(display_number(f64::NAN), "NaN");
        assert_eq!(display_number(f64::INFINITY), "Infinity");
        assert_eq!(display_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(display_number(-0.0), "0");
    }

    #[test]
    fn exponent_form_at_the_edges() {
        assert_eq!(display_number(1e21), "1e+21");
        assert_eq!(display_number(-2.5e22), "-2.5e+22");
        assert_eq!(display_number(1e20), "100000000000000000000");
        assert_eq!(display_number(1e-7), "1e-7");
        assert_eq!(display_number(-1.5e-7), "-1.5e-7");
        assert_eq!(display_number(1e-6), "0.000001");
        assert_eq!(display_number(1.5e-6), "0.0000015");
    }
}
