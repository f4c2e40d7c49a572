//! Numeric input accepted by the converters.
//!
//! CRITICAL: Never use floating-point for the spelled value.
//! Float inputs are converted once, through their shortest round-trip
//! decimal text, and every later step works on `rust_decimal::Decimal`.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{WordsError, WordsResult};

/// Largest magnitude that can be spelled.
pub const MAX_MAGNITUDE: u32 = 999_999_999;

/// Maximum number of fractional digits (thousandths).
pub const MAX_FRACTION_DIGITS: u32 = 3;

/// A numeric value waiting to be validated and spelled.
///
/// The inner decimal is always normalized, so `1.50` and `1.5` are the same
/// amount and trailing zeros never count as fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(Decimal);

/// An amount that passed range and fraction checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAmount {
    value: Decimal,
    integer_part: u32,
    fraction_digits: Option<String>,
}

/// An amount split into major and minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinorUnits {
    /// Whole units, without sign.
    pub major: u32,
    /// Hundredths, 0 to 99.
    pub minor: u32,
}

impl Amount {
    /// Creates an amount from a decimal value.
    #[must_use]
    pub fn new(value: Decimal) -> Self {
        Self(value.normalize())
    }

    /// Returns the normalized decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Checks magnitude and fractional precision.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when `|value| > 999 999 999` and
    /// `FractionOutOfRange` when more than three fractional digits remain.
    pub fn validate(self) -> WordsResult<ValidatedAmount> {
        let abs = self.0.abs();
        if abs > Decimal::from(MAX_MAGNITUDE) {
            return Err(WordsError::OutOfRange(self.0.to_string()));
        }

        let scale = self.0.scale();
        if scale > MAX_FRACTION_DIGITS {
            return Err(WordsError::FractionOutOfRange(self.0.to_string()));
        }

        let integer_part = abs
            .trunc()
            .to_u32()
            .ok_or_else(|| WordsError::OutOfRange(self.0.to_string()))?;

        let fraction_digits = if scale == 0 {
            None
        } else {
            let unit = 10_i128.pow(scale);
            let digits = abs.mantissa() % unit;
            Some(format!("{digits:0width$}", width = scale as usize))
        };

        Ok(ValidatedAmount {
            value: self.0,
            integer_part,
            fraction_digits,
        })
    }
}

impl ValidatedAmount {
    /// Returns true for values below zero; negative zero is not negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.value.is_sign_negative() && !self.value.is_zero()
    }

    /// Whole part of the absolute value.
    #[must_use]
    pub const fn integer_part(&self) -> u32 {
        self.integer_part
    }

    /// Whole part with the sign applied.
    #[must_use]
    pub fn signed_integer_part(&self) -> i64 {
        let integer = i64::from(self.integer_part);
        if self.is_negative() { -integer } else { integer }
    }

    /// Fractional digits as written, 1 to 3 characters, leading zeros kept.
    #[must_use]
    pub fn fraction_digits(&self) -> Option<&str> {
        self.fraction_digits.as_deref()
    }

    /// Rounds the absolute value to hundredths, half away from zero, and
    /// splits it into major and minor units.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the rounded value no longer fits a `u32`.
    pub fn to_minor_units(&self) -> WordsResult<MinorUnits> {
        let rounded = self
            .value
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let out_of_range = || WordsError::OutOfRange(self.value.to_string());

        let major = rounded.trunc().to_u32().ok_or_else(out_of_range)?;
        let minor = (rounded.fract() * Decimal::from(100))
            .to_u32()
            .ok_or_else(out_of_range)?;

        Ok(MinorUnits { major, minor })
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

macro_rules! amount_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Amount {
                fn from(value: $ty) -> Self {
                    Self::new(Decimal::from(value))
                }
            }
        )*
    };
}

amount_from_integer!(i32, i64, u32, u64);

impl TryFrom<f64> for Amount {
    type Error = WordsError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(WordsError::InvalidType(value.to_string()));
        }
        if value.abs() > f64::from(MAX_MAGNITUDE) {
            return Err(WordsError::OutOfRange(value.to_string()));
        }

        // Display never uses exponent notation and prints the shortest
        // text that round-trips, so 3.145 stays 3.145.
        parse_plain(&value.to_string())
    }
}

impl FromStr for Amount {
    type Err = WordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if !looks_numeric(text) {
            return Err(WordsError::InvalidType(s.to_string()));
        }
        parse_plain(text)
    }
}

impl TryFrom<&str> for Amount {
    type Error = WordsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Amount {
    type Error = WordsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parses plain decimal notation without rounding.
///
/// Text `Decimal` cannot hold exactly is rejected: too many whole digits is
/// `OutOfRange`, too many fractional digits is `FractionOutOfRange`.
fn parse_plain(text: &str) -> WordsResult<Amount> {
    Decimal::from_str_exact(text).map(Amount::new).map_err(|_| {
        let body = text.trim_start_matches(['-', '+']);
        let whole = body.split('.').next().unwrap_or_default();
        if whole.trim_start_matches('0').len() > 9 {
            WordsError::OutOfRange(text.to_string())
        } else {
            WordsError::FractionOutOfRange(text.to_string())
        }
    })
}

/// Plain decimal notation: optional sign, digits, at most one point.
fn looks_numeric(text: &str) -> bool {
    let body = text.strip_prefix(['-', '+']).unwrap_or(text);
    body.chars().any(|c| c.is_ascii_digit())
        && body.chars().all(|c| c.is_ascii_digit() || c == '.')
        && body.matches('.').count() <= 1
}
