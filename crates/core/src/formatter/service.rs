//! Conversion entry points.
//!
//! `number_to_words` and `currency_to_words` validate the input, spell it
//! with single spaces, then swap in the requested separator. Both are pure
//! functions; `WordsService` only remembers a default separator and can be
//! shared between threads freely.

use slovy_shared::{Amount, SlovyConfig, ValidatedAmount, WordsError, WordsResult};
use tracing::{debug, warn};

use super::currency::format_currency;
use super::number::format_number;
use crate::spelling::Mode;

/// Separator placed between words unless the caller asks for another one.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Spells a number in Czech words.
///
/// # Errors
///
/// Returns `InvalidType`, `OutOfRange` or `FractionOutOfRange` when the
/// input cannot be spelled.
///
/// # Example
///
/// ```
/// use slovy_core::number_to_words;
///
/// assert_eq!(number_to_words(38, " ").unwrap(), "třicet osm");
/// assert_eq!(number_to_words(1.04, " ").unwrap(), "jedna celá čtyři setiny");
/// ```
pub fn number_to_words<T>(value: T, separator: &str) -> WordsResult<String>
where
    T: TryInto<Amount>,
    WordsError: From<T::Error>,
{
    let amount = validate(value, Mode::Number)?;
    let words = format_number(&amount)?;
    Ok(apply_separator(words, separator))
}

/// Spells a crown amount in Czech words.
///
/// # Errors
///
/// Returns `InvalidType`, `OutOfRange` or `FractionOutOfRange` when the
/// input cannot be spelled.
///
/// # Example
///
/// ```
/// use slovy_core::currency_to_words;
///
/// assert_eq!(currency_to_words(3.145, " ").unwrap(), "tři koruny patnáct haléřů");
/// ```
pub fn currency_to_words<T>(value: T, separator: &str) -> WordsResult<String>
where
    T: TryInto<Amount>,
    WordsError: From<T::Error>,
{
    let amount = validate(value, Mode::Currency)?;
    let words = format_currency(&amount)?;
    Ok(apply_separator(words, separator))
}

fn validate<T>(value: T, mode: Mode) -> WordsResult<ValidatedAmount>
where
    T: TryInto<Amount>,
    WordsError: From<T::Error>,
{
    value
        .try_into()
        .map_err(WordsError::from)
        .and_then(Amount::validate)
        .inspect(|amount| debug!(?mode, ?amount, "converting amount to words"))
        .inspect_err(|err| warn!(?mode, code = err.error_code(), error = %err, "input rejected"))
}

/// Replaces every space of `words` with `separator`.
fn apply_separator(words: String, separator: &str) -> String {
    if separator == DEFAULT_SEPARATOR {
        words
    } else {
        words.replace(DEFAULT_SEPARATOR, separator)
    }
}

/// Converter bound to a default word separator.
///
/// # Example
///
/// ```
/// use slovy_core::WordsService;
///
/// let service = WordsService::with_separator("-");
/// assert_eq!(service.convert_currency(14).unwrap(), "čtrnáct-korun");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordsService {
    separator: String,
}

impl Default for WordsService {
    fn default() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }
}

impl WordsService {
    /// Creates a service that separates words with a single space.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service with a custom separator.
    #[must_use]
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Creates a service from loaded configuration.
    #[must_use]
    pub fn from_config(config: &SlovyConfig) -> Self {
        Self::with_separator(config.words.separator.clone())
    }

    /// Returns the configured separator.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Spells a number with the configured separator.
    ///
    /// # Errors
    ///
    /// See [`number_to_words`].
    pub fn convert_number<T>(&self, value: T) -> WordsResult<String>
    where
        T: TryInto<Amount>,
        WordsError: From<T::Error>,
    {
        number_to_words(value, &self.separator)
    }

    /// Spells a crown amount with the configured separator.
    ///
    /// # Errors
    ///
    /// See [`currency_to_words`].
    pub fn convert_currency<T>(&self, value: T) -> WordsResult<String>
    where
        T: TryInto<Amount>,
        WordsError: From<T::Error>,
    {
        currency_to_words(value, &self.separator)
    }
}
