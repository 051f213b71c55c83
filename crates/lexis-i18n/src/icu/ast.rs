//! Parsed message tree.

use std::collections::BTreeMap;

use lexis_core::PluralCategory;

/// Style argument of a `{name, number, <style>}` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberArg {
    /// `{n, number}`
    Default,
    /// `{n, number, integer}`
    Integer,
    /// `{n, number, percent}`
    Percent,
    /// `{n, number, compact}`
    Compact,
    /// `{n, number, currency/EUR}`
    Currency(String),
}

/// One node of a parsed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageNode {
    Text(String),
    /// `{name}`; `name` may be a dotted path.
    Variable {
        name: String,
        /// Clause text, emitted when the variable is absent.
        source: String,
    },
    /// `#` inside a plural branch.
    Pound,
    Number {
        name: String,
        style: NumberArg,
        /// Clause text, emitted when the variable is absent.
        source: String,
    },
    /// `plural` or, with `ordinal`, `selectordinal`.
    Plural {
        name: String,
        ordinal: bool,
        /// `=N` branches.
        exact: BTreeMap<i64, Vec<MessageNode>>,
        categories: BTreeMap<PluralCategory, Vec<MessageNode>>,
        other: Vec<MessageNode>,
    },
    Select {
        name: String,
        cases: BTreeMap<String, Vec<MessageNode>>,
        other: Vec<MessageNode>,
    },
}

/// A parsed message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub nodes: Vec<MessageNode>,
}

impl Message {
    /// Whether the message is one text run with no clauses.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.nodes
            .iter()
            .all(|node| matches!(node, MessageNode::Text(_)))
    }
}
