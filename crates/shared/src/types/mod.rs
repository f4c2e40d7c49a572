//! Common types used across the converters.

pub mod amount;

pub use amount::{Amount, MAX_FRACTION_DIGITS, MAX_MAGNITUDE, MinorUnits, ValidatedAmount};
