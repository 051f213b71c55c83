//! Key extraction and per-locale coverage.

use crate::resolver::resolve;
use crate::tree::TranslationTree;

/// Coverage of the full key set across locales.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// Unique leaf keys across all locales.
    pub total_keys: usize,
    /// One entry per locale, sorted by tag.
    pub locales: Vec<LocaleCoverage>,
}

/// Coverage of one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleCoverage {
    pub locale: String,
    /// Reference keys that resolve, fallback included.
    pub present: usize,
    /// Reference keys that do not resolve even after fallback, sorted.
    pub missing: Vec<String>,
    /// `0.0..=100.0`; `100.0` when there are no keys at all.
    pub coverage_percent: f32,
}

/// Every leaf key of every locale, sorted and deduplicated.
#[must_use]
pub fn all_keys(tree: &TranslationTree) -> Vec<String> {
    let mut keys: Vec<String> = tree
        .iter()
        .flat_map(|(_, node)| node.leaf_keys())
        .collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}

/// Keys from `reference` that resolve neither in `locale` nor `fallback`.
#[must_use]
pub fn missing_keys(
    tree: &TranslationTree,
    locale: &str,
    fallback: &str,
    reference: &[&str],
) -> Vec<String> {
    let mut missing: Vec<String> = reference
        .iter()
        .filter(|key| resolve(tree, locale, fallback, key).is_none())
        .map(|key| (*key).to_string())
        .collect();
    missing.sort_unstable();
    missing
}

/// Coverage of every locale against [`all_keys`].
#[must_use]
pub fn coverage_report(tree: &TranslationTree, fallback: &str) -> CoverageReport {
    let all = all_keys(tree);
    let reference: Vec<&str> = all.iter().map(String::as_str).collect();
    let total = reference.len();

    let locales = tree
        .locales()
        .map(|tag| {
            let missing = missing_keys(tree, tag, fallback, &reference);
            let present = total.saturating_sub(missing.len());
            let coverage_percent = if total == 0 {
                100.0
            } else {
                (present as f32 / total as f32) * 100.0
            };
            LocaleCoverage {
                locale: tag.to_string(),
                present,
                missing,
                coverage_percent,
            }
        })
        .collect();

    CoverageReport {
        total_keys: total,
        locales,
    }
}
