//! Conversion error types.

use std::convert::Infallible;

use thiserror::Error;

/// Result type alias using `WordsError`.
pub type WordsResult<T> = Result<T, WordsError>;

/// Errors raised while validating input for a conversion.
///
/// Every variant carries the offending input as text. Validation runs before
/// any spelling starts, so a failed call never yields a partial phrase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordsError {
    /// Input is not an integer or decimal value.
    #[error("Input type must be integer or decimal: {0}")]
    InvalidType(String),

    /// Input magnitude exceeds 999 999 999.
    #[error("Input is out of available range: {0}")]
    OutOfRange(String),

    /// Fractional part is finer than thousandths.
    #[error("Decimals are out of available range: {0}")]
    FractionOutOfRange(String),
}

impl WordsError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidType(_) => "INVALID_TYPE",
            Self::OutOfRange(_) => "OUT_OF_RANGE",
            Self::FractionOutOfRange(_) => "FRACTION_OUT_OF_RANGE",
        }
    }
}

impl From<Infallible> for WordsError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
