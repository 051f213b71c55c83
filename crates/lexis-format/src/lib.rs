#![forbid(unsafe_code)]

//! Locale-aware number formatting for Lexis.
//!
//! [`NumberFormatter`] formats decimals, currency, percentages, units, and
//! compact or scientific notation from built-in locale data, caching one
//! [`CompiledFormatter`] per `(locale, options)` signature in a FIFO cache.
//! Anything it cannot handle natively drops to a manual English-shaped
//! formatter, so formatting never fails.
//!
//! [`OrdinalFormatter`] appends ordinal suffixes (`1st`, `1er`, `1º`).
//!
//! ```
//! use lexis_format::{NumberFormatOptions, NumberFormatter};
//!
//! let nf = NumberFormatter::new();
//! assert_eq!(nf.format(1234.56, "en-US", &NumberFormatOptions::default()), "1,234.56");
//! assert_eq!(nf.format(1234.56, "de-DE", &NumberFormatOptions::default()), "1.234,56");
//! assert_eq!(nf.format_compact(1_500_000.0, "en-US"), "1.5M");
//! ```

mod compiled;
mod data;
mod digits;
pub mod error;
pub mod fallback;
pub mod number;
pub mod options;
pub mod ordinal;

pub use compiled::CompiledFormatter;
pub use error::FormatError;
pub use number::{DEFAULT_CACHE_CAPACITY, NumberFormatter};
pub use options::{
    CompactDisplay, Notation, NumberFormatOptions, NumberStyle, SignDisplay, UnitDisplay,
};
pub use ordinal::{OrdinalFormatter, OrdinalRule};
