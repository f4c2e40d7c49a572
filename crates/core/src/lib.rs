//! Czech numerals and crown amounts spelled out in words.
//!
//! This crate contains the conversion logic with ZERO I/O. All word tables are
//! `'static` constants and every conversion is a pure function of its input,
//! output mode, and separator.
//!
//! # Modules
//!
//! - `spelling` - Word tables, agreement, magnitude and fraction spelling
//! - `formatter` - Number and currency formatting, public entry points
//!
//! # Example
//!
//! ```
//! use slovy_core::{currency_to_words, number_to_words};
//!
//! assert_eq!(number_to_words(2564, " ").unwrap(), "dva tisíce pět set šedesát čtyři");
//! assert_eq!(currency_to_words(10.01, " ").unwrap(), "deset korun jeden haléř");
//! ```
//!
//! Exact decimal input goes through the re-exported `Decimal`:
//!
//! ```
//! use std::str::FromStr;
//!
//! use slovy_core::{Decimal, number_to_words};
//!
//! let value = Decimal::from_str("6.66").unwrap();
//! assert_eq!(number_to_words(value, " ").unwrap(), "šest celých šedesát šest");
//! ```

pub mod formatter;
pub mod spelling;

pub use rust_decimal::Decimal;

pub use formatter::{DEFAULT_SEPARATOR, WordsService, currency_to_words, number_to_words};
pub use slovy_shared::{Amount, SlovyConfig, WordsError, WordsResult};
pub use spelling::Mode;
