//! Fractional part spelling.

use slovy_shared::{WordsError, WordsResult};
use slovy_shared::types::MAX_FRACTION_DIGITS;

use super::agreement::agreement;
use super::lexicon::{HUNDREDTHS, THOUSANDTHS};
use super::magnitude::{Mode, hundreds, tens_and_units};

/// Spells fractional digits as written after the decimal point.
///
/// Tenths are bare numerals. Hundredths below ten and thousandths below one
/// hundred are followed by their unit word ("čtyři setiny").
///
/// # Errors
///
/// Returns `FractionOutOfRange` if `digits` is empty, longer than three
/// characters, or not a number.
pub fn spell_fraction(digits: &str) -> WordsResult<String> {
    let out_of_range = || WordsError::FractionOutOfRange(digits.to_string());
    if digits.is_empty() || digits.len() > MAX_FRACTION_DIGITS as usize {
        return Err(out_of_range());
    }
    let value: u64 = digits.parse().map_err(|_| out_of_range())?;

    let mut words: Vec<String> = [hundreds(value), tens_and_units(value, Mode::Number)]
        .into_iter()
        .flatten()
        .collect();

    match digits.len() {
        2 if value < 10 => words.push(agreement(&HUNDREDTHS, value).to_string()),
        3 if value < 100 => words.push(agreement(&THOUSANDTHS, value).to_string()),
        _ => {}
    }

    Ok(words.join(" "))
}
