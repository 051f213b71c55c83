//! Recursive-descent parser for ICU-style messages.
//!
//! Grammar (whitespace allowed between tokens inside clauses):
//!
//! ```text
//! message   := (text | '#' | clause)*
//! clause    := '{' name '}'
//!            | '{' name ',' 'number' (',' style)? '}'
//!            | '{' name ',' ('plural' | 'selectordinal') ',' branch+ '}'
//!            | '{' name ',' 'select' ',' branch+ '}'
//! branch    := selector '{' message '}'
//! ```
//!
//! Parsing never fails as a whole. A clause that does not match the grammar
//! (unbalanced braces, unknown keyword, bad selector, no `other` branch) is
//! kept as literal text up to its matching `}`, or to the end of input when
//! there is none. `#` is literal outside plural branches.

use std::collections::BTreeMap;

use lexis_core::PluralCategory;

use super::ast::{Message, MessageNode, NumberArg};

/// Deepest branch nesting accepted before a clause is treated as malformed.
const MAX_DEPTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Malformed {
    Unclosed,
    BadName,
    UnknownKeyword,
    UnknownStyle,
    BadSelector,
    MissingOther,
    TooDeep,
}

impl Malformed {
    fn as_str(self) -> &'static str {
        match self {
            Self::Unclosed => "unclosed clause",
            Self::BadName => "missing or invalid argument name",
            Self::UnknownKeyword => "unknown clause keyword",
            Self::UnknownStyle => "unknown number style",
            Self::BadSelector => "invalid branch selector",
            Self::MissingOther => "missing `other` branch",
            Self::TooDeep => "clauses nested too deeply",
        }
    }
}

type Branches = Vec<(String, Vec<MessageNode>)>;

#[derive(Clone, Copy)]
enum BranchKind {
    Plural,
    Select,
}

struct Parser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

/// Parse `src` into a [`Message`]. Malformed clauses become text.
#[must_use]
pub fn parse(src: &str) -> Message {
    let mut parser = Parser {
        src,
        bytes: src.as_bytes(),
        pos: 0,
    };
    let nodes = match parser.nodes(false, false, 0) {
        Ok(nodes) => nodes,
        // Unreachable at top level; keep the source verbatim.
        Err(_) => vec![MessageNode::Text(src.to_string())],
    };
    Message {
        nodes: coalesce(nodes),
    }
}

/// Merge adjacent text runs.
fn coalesce(nodes: Vec<MessageNode>) -> Vec<MessageNode> {
    let mut out: Vec<MessageNode> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let MessageNode::Text(text) = &node
            && let Some(MessageNode::Text(prev)) = out.last_mut()
        {
            prev.push_str(text);
            continue;
        }
        out.push(node);
    }
    out
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Read until whitespace or one of `stops`.
    fn token(&mut self, stops: &[u8]) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() || stops.contains(&b) {
                break;
            }
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    /// Message body. Inside a branch, stops before the closing `}`.
    fn nodes(
        &mut self,
        in_branch: bool,
        in_plural: bool,
        depth: usize,
    ) -> Result<Vec<MessageNode>, Malformed> {
        let mut nodes = Vec::new();
        let mut text_start = self.pos;

        loop {
            let Some(b) = self.peek() else {
                if in_branch {
                    return Err(Malformed::Unclosed);
                }
                break;
            };
            match b {
                b'}' if in_branch => break,
                b'{' => {
                    push_text(&mut nodes, &self.src[text_start..self.pos]);
                    let start = self.pos;
                    match self.clause(in_plural, depth) {
                        Ok(node) => nodes.push(node),
                        Err(reason) => {
                            let end = matching_brace(self.bytes, start);
                            tracing::warn!(
                                target: "lexis.icu",
                                reason = reason.as_str(),
                                clause = %&self.src[start..end],
                                "malformed message clause kept as text"
                            );
                            push_text(&mut nodes, &self.src[start..end]);
                            self.pos = end;
                            if end == self.bytes.len() && in_branch {
                                return Err(Malformed::Unclosed);
                            }
                        }
                    }
                    text_start = self.pos;
                }
                b'#' if in_plural => {
                    push_text(&mut nodes, &self.src[text_start..self.pos]);
                    nodes.push(MessageNode::Pound);
                    self.pos += 1;
                    text_start = self.pos;
                }
                _ => self.pos += 1,
            }
        }
        push_text(&mut nodes, &self.src[text_start..self.pos]);
        Ok(nodes)
    }

    /// A clause starting at `{`.
    fn clause(&mut self, in_plural: bool, depth: usize) -> Result<MessageNode, Malformed> {
        let clause_start = self.pos;
        self.pos += 1;
        self.skip_ws();
        let name = self.token(b"{},#").to_string();
        if name.is_empty() {
            return Err(Malformed::BadName);
        }
        self.skip_ws();
        if self.eat(b'}') {
            return Ok(MessageNode::Variable {
                name,
                source: self.src[clause_start..self.pos].to_string(),
            });
        }
        if !self.eat(b',') {
            return Err(Malformed::BadName);
        }
        self.skip_ws();
        let keyword = self.token(b"{},");
        self.skip_ws();
        match keyword {
            "number" => {
                let style = if self.eat(b',') {
                    self.skip_ws();
                    let style = number_style(self.token(b"{}"))?;
                    self.skip_ws();
                    style
                } else {
                    NumberArg::Default
                };
                if !self.eat(b'}') {
                    return Err(Malformed::Unclosed);
                }
                Ok(MessageNode::Number {
                    name,
                    style,
                    source: self.src[clause_start..self.pos].to_string(),
                })
            }
            "plural" | "selectordinal" => {
                if !self.eat(b',') {
                    return Err(Malformed::UnknownKeyword);
                }
                let (branches, other) = self.branches(BranchKind::Plural, true, depth)?;
                let mut exact = BTreeMap::new();
                let mut categories = BTreeMap::new();
                for (selector, body) in branches {
                    if let Some(n) = selector.strip_prefix('=') {
                        let n: i64 = n.parse().map_err(|_| Malformed::BadSelector)?;
                        exact.insert(n, body);
                    } else {
                        let category: PluralCategory =
                            selector.parse().map_err(|_| Malformed::BadSelector)?;
                        categories.insert(category, body);
                    }
                }
                Ok(MessageNode::Plural {
                    name,
                    ordinal: keyword == "selectordinal",
                    exact,
                    categories,
                    other,
                })
            }
            "select" => {
                if !self.eat(b',') {
                    return Err(Malformed::UnknownKeyword);
                }
                let (branches, other) = self.branches(BranchKind::Select, in_plural, depth)?;
                Ok(MessageNode::Select {
                    name,
                    cases: branches.into_iter().collect(),
                    other,
                })
            }
            _ => Err(Malformed::UnknownKeyword),
        }
    }

    /// `selector {body}` pairs up to the clause's closing `}`.
    ///
    /// Returns the non-`other` branches in source order plus `other`.
    fn branches(
        &mut self,
        kind: BranchKind,
        in_plural: bool,
        depth: usize,
    ) -> Result<(Branches, Vec<MessageNode>), Malformed> {
        if depth >= MAX_DEPTH {
            return Err(Malformed::TooDeep);
        }
        let mut branches = Vec::new();
        let mut other = None;
        loop {
            self.skip_ws();
            match self.peek() {
                None => return Err(Malformed::Unclosed),
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                Some(_) => {}
            }
            let selector = self.token(b"{}").to_string();
            if selector.is_empty() {
                return Err(Malformed::BadSelector);
            }
            if matches!(kind, BranchKind::Plural)
                && !selector.starts_with('=')
                && !PluralCategory::is_keyword(&selector)
            {
                return Err(Malformed::BadSelector);
            }
            self.skip_ws();
            if !self.eat(b'{') {
                return Err(Malformed::BadSelector);
            }
            let body = coalesce(self.nodes(true, in_plural, depth + 1)?);
            if !self.eat(b'}') {
                return Err(Malformed::Unclosed);
            }
            if selector == "other" {
                other = Some(body);
            } else {
                branches.push((selector, body));
            }
        }
        let other = other.ok_or(Malformed::MissingOther)?;
        Ok((branches, other))
    }
}

fn number_style(style: &str) -> Result<NumberArg, Malformed> {
    match style {
        "integer" => Ok(NumberArg::Integer),
        "percent" => Ok(NumberArg::Percent),
        "compact" => Ok(NumberArg::Compact),
        _ => match style.strip_prefix("currency/") {
            Some(code) if !code.is_empty() => Ok(NumberArg::Currency(code.to_string())),
            _ => Err(Malformed::UnknownStyle),
        },
    }
}

fn push_text(nodes: &mut Vec<MessageNode>, text: &str) {
    if !text.is_empty() {
        nodes.push(MessageNode::Text(text.to_string()));
    }
}

/// End (exclusive) of the clause opening at `start`: just past its matching
/// `}`, or the end of input when it never balances.
fn matching_brace(bytes: &[u8], start: usize) -> usize {
    let mut depth = 0usize;
    for (offset, b) in bytes[start..].iter().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return start + offset + 1;
                }
            }
            _ => {}
        }
    }
    bytes.len()
}
