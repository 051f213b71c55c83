//! CLDR cardinal plural rules.
//!
//! # Invariants
//!
//! 1. Every rule maps any count to exactly one [`PluralCategory`].
//! 2. Counts are normalized before evaluation: non-finite counts become `0`
//!    (with a warning), then `abs(floor(n))` is taken.
//! 3. Unknown languages use the English rule.
//!
//! | lang | rule |
//! |------|------|
//! | en, es, de | `one` for 1, else `other` |
//! | fr | `one` for 0 and 1, else `other` |
//! | ar | `zero`, `one`, `two`, `few` (3–10), `many` (11–99), `other` |
//! | ru | `one`, `few` (2–4), `many`, by last two digits |
//! | pl | `one` for 1 only, `few` (2–4), `many` |
//! | zh, ja | always `other` |

use std::collections::HashMap;

use lexis_core::PluralCategory;
use lexis_core::locale::language;

/// A plural rule mapping a normalized count to a category.
#[derive(Clone, Copy)]
pub enum PluralRule {
    /// `one` for 1, `other` for everything else.
    English,
    /// `one` for 0 and 1, `other` for everything else.
    French,
    /// `zero`, `one`, `two`, `few` for n%100 in 3..=10, `many` for
    /// n%100 >= 11, `other` otherwise.
    Arabic,
    /// `one` for n%10 == 1 except 11, `few` for n%10 in 2..=4 except
    /// 12..=14, `many` for everything else.
    Russian,
    /// Like Russian, but `one` only for exactly 1.
    Polish,
    /// Always `other`.
    Cjk,
    /// Caller-supplied rule.
    Custom(fn(u64) -> PluralCategory),
}

impl std::fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::English => write!(f, "English"),
            Self::French => write!(f, "French"),
            Self::Arabic => write!(f, "Arabic"),
            Self::Russian => write!(f, "Russian"),
            Self::Polish => write!(f, "Polish"),
            Self::Cjk => write!(f, "Cjk"),
            Self::Custom(_) => write!(f, "Custom(<fn>)"),
        }
    }
}

impl PluralRule {
    /// Built-in rule for a locale tag.
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        match language(locale).as_str() {
            "fr" => Self::French,
            "ar" => Self::Arabic,
            "ru" => Self::Russian,
            "pl" => Self::Polish,
            "zh" | "ja" => Self::Cjk,
            _ => Self::English,
        }
    }

    /// Category for an already normalized count.
    #[must_use]
    pub fn categorize(&self, n: u64) -> PluralCategory {
        match self {
            Self::English => {
                if n == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::French => {
                if n <= 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::Arabic => match (n, n % 100) {
                (0, _) => PluralCategory::Zero,
                (1, _) => PluralCategory::One,
                (2, _) => PluralCategory::Two,
                (_, 3..=10) => PluralCategory::Few,
                (_, 11..) => PluralCategory::Many,
                _ => PluralCategory::Other,
            },
            Self::Russian => {
                let (m10, m100) = (n % 10, n % 100);
                if m10 == 1 && m100 != 11 {
                    PluralCategory::One
                } else if slavic_few(m10, m100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Polish => {
                if n == 1 {
                    PluralCategory::One
                } else if slavic_few(n % 10, n % 100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Cjk => PluralCategory::Other,
            Self::Custom(f) => f(n),
        }
    }
}

fn slavic_few(m10: u64, m100: u64) -> bool {
    (2..=4).contains(&m10) && !(12..=14).contains(&m100)
}

/// Normalize a count for rule evaluation: non-finite → `0` with a warning,
/// then `abs(floor(n))`, saturating at `u64::MAX`.
#[must_use]
pub fn normalize_count(count: f64) -> u64 {
    if !count.is_finite() {
        tracing::warn!(
            target: "lexis.plural",
            count = %count,
            "non-finite plural count treated as 0"
        );
        return 0;
    }
    // `as` saturates for out-of-range floats.
    count.floor().abs() as u64
}

/// Plural category for `count` in `locale` using the built-in rules.
#[must_use]
pub fn select_category(locale: &str, count: f64) -> PluralCategory {
    PluralRule::for_locale(locale).categorize(normalize_count(count))
}

/// Rule registry: built-in rules plus per-language overrides.
#[derive(Debug, Clone, Default)]
pub struct PluralRules {
    overrides: HashMap<String, PluralRule>,
}

impl PluralRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `rule` for every locale whose language subtag is `lang`.
    #[must_use]
    pub fn with_override(mut self, lang: &str, rule: PluralRule) -> Self {
        self.set_override(lang, rule);
        self
    }

    pub fn set_override(&mut self, lang: &str, rule: PluralRule) {
        self.overrides.insert(language(lang), rule);
    }

    /// Effective rule for a locale tag.
    #[must_use]
    pub fn rule_for(&self, locale: &str) -> PluralRule {
        self.overrides
            .get(&language(locale))
            .copied()
            .unwrap_or_else(|| PluralRule::for_locale(locale))
    }

    /// Category for `count` in `locale`.
    #[must_use]
    pub fn select(&self, locale: &str, count: f64) -> PluralCategory {
        self.rule_for(locale).categorize(normalize_count(count))
    }
}

/// Plural variants keyed by category. `other` is the catch-all.
///
/// `other` is optional here only so an incomplete dictionary entry can be
/// represented and reported; [`select`](Self::select) returns `None` when
/// neither the requested category nor `other` exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralForms {
    pub zero: Option<String>,
    pub one: Option<String>,
    pub two: Option<String>,
    pub few: Option<String>,
    pub many: Option<String>,
    pub other: Option<String>,
}

impl PluralForms {
    /// Forms with only the mandatory `other` variant.
    #[must_use]
    pub fn new(other: impl Into<String>) -> Self {
        Self {
            other: Some(other.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with(mut self, category: PluralCategory, text: impl Into<String>) -> Self {
        *self.slot_mut(category) = Some(text.into());
        self
    }

    /// Variant for `category` exactly, without falling back.
    #[must_use]
    pub fn get(&self, category: PluralCategory) -> Option<&str> {
        match category {
            PluralCategory::Zero => self.zero.as_deref(),
            PluralCategory::One => self.one.as_deref(),
            PluralCategory::Two => self.two.as_deref(),
            PluralCategory::Few => self.few.as_deref(),
            PluralCategory::Many => self.many.as_deref(),
            PluralCategory::Other => self.other.as_deref(),
        }
    }

    pub(crate) fn slot_mut(&mut self, category: PluralCategory) -> &mut Option<String> {
        match category {
            PluralCategory::Zero => &mut self.zero,
            PluralCategory::One => &mut self.one,
            PluralCategory::Two => &mut self.two,
            PluralCategory::Few => &mut self.few,
            PluralCategory::Many => &mut self.many,
            PluralCategory::Other => &mut self.other,
        }
    }

    /// Variant for `category`, falling back to `other`.
    #[must_use]
    pub fn select(&self, category: PluralCategory) -> Option<&str> {
        self.get(category).or(self.other.as_deref())
    }

    /// Whether the mandatory `other` variant is present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.other.is_some()
    }

    /// Categories that have a variant, in CLDR order.
    pub fn categories(&self) -> impl Iterator<Item = PluralCategory> + '_ {
        PluralCategory::ALL
            .into_iter()
            .filter(|c| self.get(*c).is_some())
    }
}
