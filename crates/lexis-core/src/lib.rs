#![forbid(unsafe_code)]

//! Core building blocks for Lexis.
//!
//! Two bounded caches with deliberately different eviction disciplines,
//! the CLDR plural category type, and small locale/number helpers shared by
//! the formatting and translation crates.
//!
//! | Cache | Eviction | Read path |
//! |-------|----------|-----------|
//! | [`LruCache`] | least recently used | promotes |
//! | [`FifoCache`] | oldest insertion | never promotes |

pub mod fifo;
pub mod locale;
pub mod lru;
pub mod number;
pub mod plural;

pub use fifo::{FifoCache, FifoStats};
pub use lru::LruCache;
pub use number::display_number;
pub use plural::PluralCategory;
