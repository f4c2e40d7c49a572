//! Number and currency formatting on top of the spelling bands.

pub mod currency;
pub mod number;
pub mod service;

#[cfg(test)]
mod props;

pub use currency::format_currency;
pub use number::format_number;
pub use service::{DEFAULT_SEPARATOR, WordsService, currency_to_words, number_to_words};
