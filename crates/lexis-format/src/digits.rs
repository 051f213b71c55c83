//! Decimal digit rounding and grouping.
//!
//! Rounding goes through `core::fmt`, which rounds the exact binary value of
//! the float. `1.005` therefore rounds to `1.00`, the same answer platform
//! number formatters give.

/// A non-negative number split into integer and fraction digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Digits {
    pub int: String,
    pub frac: String,
}

impl Digits {
    /// Round `abs` to at most `max_frac` fraction digits, then drop trailing
    /// zeros down to `min_frac`.
    pub fn fixed(abs: f64, min_frac: usize, max_frac: usize) -> Self {
        let text = format!("{abs:.max_frac$}");
        let (int, frac) = match text.split_once('.') {
            Some((int, frac)) => (int.to_string(), frac.to_string()),
            None => (text, String::new()),
        };
        let mut digits = Self { int, frac };
        digits.trim_fraction(min_frac);
        digits
    }

    /// Round `abs` to at most `max_sig` significant digits and keep at least
    /// `min_sig` of them.
    pub fn significant(abs: f64, min_sig: usize, max_sig: usize) -> Self {
        let max_sig = max_sig.max(1);
        let mut digits = if abs == 0.0 {
            Self {
                int: "0".to_string(),
                frac: String::new(),
            }
        } else {
            let text = format!("{:.*e}", max_sig - 1, abs);
            let (mantissa, exp) = text.split_once('e').unwrap_or((text.as_str(), "0"));
            let exp: i64 = exp.parse().unwrap_or(0);
            let body: String = mantissa.chars().filter(char::is_ascii_digit).collect();
            Self::place_point(&body, exp + 1)
        };
        while digits.frac.ends_with('0') && digits.significant_count() > min_sig {
            digits.frac.pop();
        }
        while digits.significant_count() < min_sig {
            digits.frac.push('0');
        }
        digits
    }

    /// Digits `body` with the decimal point after `point` digits.
    fn place_point(body: &str, point: i64) -> Self {
        let len = body.len() as i64;
        if point <= 0 {
            Self {
                int: "0".to_string(),
                frac: "0".repeat(point.unsigned_abs() as usize) + body,
            }
        } else if point >= len {
            Self {
                int: body.to_string() + &"0".repeat((point - len) as usize),
                frac: String::new(),
            }
        } else {
            let (int, frac) = body.split_at(point as usize);
            Self {
                int: int.to_string(),
                frac: frac.to_string(),
            }
        }
    }

    fn significant_count(&self) -> usize {
        let all = self.int.chars().chain(self.frac.chars());
        all.skip_while(|c| *c == '0').count()
    }

    pub fn trim_fraction(&mut self, min_frac: usize) {
        while self.frac.len() > min_frac && self.frac.ends_with('0') {
            self.frac.pop();
        }
    }

    pub fn pad_integer(&mut self, min_int: usize) {
        if self.int.len() < min_int {
            self.int = "0".repeat(min_int - self.int.len()) + &self.int;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.int.chars().chain(self.frac.chars()).all(|c| c == '0')
    }

    /// Value of the rounded digits.
    pub fn value(&self) -> f64 {
        let text = if self.frac.is_empty() {
            self.int.clone()
        } else {
            format!("{}.{}", self.int, self.frac)
        };
        text.parse().unwrap_or(0.0)
    }

    /// Join with the given separators.
    pub fn render(&self, group: Option<(&str, usize)>, decimal: &str) -> String {
        let mut out = match group {
            Some((separator, min_grouping)) => group_integer(&self.int, separator, min_grouping),
            None => self.int.clone(),
        };
        if !self.frac.is_empty() {
            out.push_str(decimal);
            out.push_str(&self.frac);
        }
        out
    }
}

/// Insert `separator` every three digits from the right.
///
/// Grouping only applies once the leading group would hold at least
/// `min_grouping` digits beyond the first three (`es`: `1234` stays whole,
/// `12.345` is grouped).
pub(crate) fn group_integer(int: &str, separator: &str, min_grouping: usize) -> String {
    if int.len() < 3 + min_grouping.max(1) {
        return int.to_string();
    }
    let lead = int.len() % 3;
    let mut out = String::with_capacity(int.len() + int.len() / 3 * separator.len());
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
