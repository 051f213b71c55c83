//! Load-time dictionary checks.
//!
//! Flags every object that holds at least one plural category key but no
//! `other`. Findings are logged and returned; they never block loading, and
//! lookups do not re-check them.

use lexis_core::PluralCategory;

use crate::tree::{TranslationNode, TranslationTree, TranslationValue};

/// One object with plural keys but no `other`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ValidationIssue {
    pub locale: String,
    /// Dotted key of the offending object; empty for the locale root.
    pub key: String,
}

/// Findings from [`validate_tree`], sorted by locale then key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub(crate) fn extend(&mut self, other: ValidationReport) {
        self.issues.extend(other.issues);
        self.issues.sort();
    }
}

/// Check every locale in `tree`, logging one warning per finding.
#[must_use]
pub fn validate_tree(tree: &TranslationTree) -> ValidationReport {
    let mut report = ValidationReport::default();
    for (locale, node) in tree.iter() {
        report.extend(validate_node(locale, node));
    }
    report
}

/// Check one locale's dictionary.
#[must_use]
pub fn validate_node(locale: &str, node: &TranslationNode) -> ValidationReport {
    let mut issues = Vec::new();
    walk(locale, node, "", &mut issues);
    issues.sort();
    for issue in &issues {
        tracing::warn!(
            target: "lexis.validate",
            locale = %issue.locale,
            key = %issue.key,
            "plural entry has no `other` variant"
        );
    }
    ValidationReport { issues }
}

fn walk(locale: &str, node: &TranslationNode, prefix: &str, issues: &mut Vec<ValidationIssue>) {
    let mut has_category = false;
    let mut has_other = false;
    for (key, value) in node.iter() {
        if let Ok(category) = key.parse::<PluralCategory>() {
            has_category = true;
            has_other |= category == PluralCategory::Other;
        }
        let path = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            TranslationValue::Node(child) => walk(locale, child, &path, issues),
            TranslationValue::Plural(forms) if !forms.is_complete() => {
                issues.push(ValidationIssue {
                    locale: locale.to_string(),
                    key: path,
                });
            }
            TranslationValue::Plural(_) | TranslationValue::Text(_) => {}
        }
    }
    if has_category && !has_other {
        issues.push(ValidationIssue {
            locale: locale.to_string(),
            key: prefix.to_string(),
        });
    }
}
