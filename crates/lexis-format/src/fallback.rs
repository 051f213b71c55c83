//! Manual formatting used when native formatting is unavailable.
//!
//! Output is English-shaped regardless of locale: a small currency symbol
//! table, `%` after a scaled value, `K`/`M`/`B` compact suffixes with one
//! decimal, and comma-grouped digits for everything else.

use lexis_core::display_number;

use crate::digits::Digits;
use crate::options::{Notation, NumberFormatOptions, NumberStyle};

fn symbol(code: Option<&str>) -> &'static str {
    match code.map(str::to_ascii_uppercase).as_deref() {
        Some("EUR") => "€",
        Some("GBP") => "£",
        Some("JPY") => "¥",
        _ => "$",
    }
}

fn sign(value: f64) -> &'static str {
    if value < 0.0 { "-" } else { "" }
}

fn grouped(abs: f64, min_frac: usize, max_frac: usize) -> String {
    Digits::fixed(abs, min_frac, max_frac).render(Some((",", 1)), ".")
}

/// Format `value` without locale data.
#[must_use]
pub fn format(value: f64, options: &NumberFormatOptions) -> String {
    if !value.is_finite() {
        return display_number(value);
    }
    let abs = value.abs();
    let max_frac = options.maximum_fraction_digits.map(usize::from);

    match options.style {
        NumberStyle::Currency => {
            let digits = max_frac.unwrap_or(2);
            format!(
                "{}{}{}",
                sign(value),
                symbol(options.currency.as_deref()),
                grouped(abs, digits, digits)
            )
        }
        NumberStyle::Percent => {
            let digits = max_frac.unwrap_or(0);
            format!("{}{:.*}%", sign(value), digits, abs * 100.0)
        }
        _ if options.notation == Notation::Compact => {
            const TIERS: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];
            let mut tier = TIERS.iter().position(|&(scale, _)| abs >= scale);
            // 999.96K rounds to 1000.0K; show it as 1.0M instead.
            if let Some(i) = tier
                && i > 0
                && (abs / TIERS[i].0 * 10.0).round() >= 10_000.0
            {
                tier = Some(i - 1);
            }
            match tier {
                Some(i) => {
                    let (scale, suffix) = TIERS[i];
                    format!("{}{:.1}{suffix}", sign(value), abs / scale)
                }
                None => format!("{}{}", sign(value), grouped(abs, 0, 3)),
            }
        }
        _ => {
            let min_frac = options.minimum_fraction_digits.map_or(0, usize::from);
            let max_frac = max_frac.unwrap_or(3).max(min_frac);
            format!("{}{}", sign(value), grouped(abs, min_frac, max_frac))
        }
    }
}

/// Join two already-formatted values with an en dash.
#[must_use]
pub fn format_range(start: &str, end: &str) -> String {
    format!("{start} – {end}")
}
