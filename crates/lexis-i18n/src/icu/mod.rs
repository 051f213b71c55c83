//! ICU-style message formatting.
//!
//! Supported clauses: `{name}`, `{name, number[, style]}`,
//! `{name, plural, ...}`, `{name, selectordinal, ...}` and
//! `{name, select, ...}`, nested to any reasonable depth. See
//! [`parser`] for the grammar and [`MessageFormatter`] for evaluation.

pub mod ast;
mod eval;
pub mod parser;

pub use ast::{Message, MessageNode, NumberArg};
pub use eval::{DEFAULT_MESSAGE_CACHE_CAPACITY, MessageFormatter};
pub use parser::parse;
