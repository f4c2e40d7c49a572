//! Number formatting.

use slovy_shared::{ValidatedAmount, WordsResult};

use crate::spelling::lexicon::{DECIMAL_POINT, MINUS, ZERO_NONE};
use crate::spelling::{Mode, agreement, spell, spell_fraction, spell_magnitude};

/// Spells a validated number with single spaces between words.
///
/// Decimals read as "<whole> <celá|celé|celých> <fraction>". A zero whole
/// part reads as "žádná" and the sign is written once, before everything.
///
/// # Errors
///
/// Propagates `FractionOutOfRange` from fraction spelling.
pub fn format_number(amount: &ValidatedAmount) -> WordsResult<String> {
    let Some(digits) = amount.fraction_digits() else {
        return Ok(spell(amount.signed_integer_part(), Mode::Number));
    };

    let integer = u64::from(amount.integer_part());
    let mut words = Vec::with_capacity(4);
    if amount.is_negative() {
        words.push(MINUS.to_string());
    }
    words.push(if integer == 0 {
        ZERO_NONE.to_string()
    } else {
        spell_magnitude(integer, Mode::Number)
    });
    words.push(agreement(&DECIMAL_POINT, integer).to_string());
    words.push(spell_fraction(digits)?);

    Ok(words.join(" "))
}
