//! Crown currency formatting.

use slovy_shared::{MinorUnits, ValidatedAmount, WordsResult};

use crate::spelling::lexicon::{CROWNS, HELLER_COUNTS, HELLERS, MINUS};
use crate::spelling::{Mode, agreement, spell, spell_magnitude};

/// Spells a validated amount as crowns and hellers.
///
/// Whole amounts read as "<amount> <koruna>". Amounts with a fractional part
/// are rounded to hellers first and always name both units, even when the
/// rounding carried into the crowns. The sign is written once, before the
/// crowns, and only when the rounded amount is not zero.
///
/// # Errors
///
/// Returns `OutOfRange` if rounding pushes the amount past `u32`.
pub fn format_currency(amount: &ValidatedAmount) -> WordsResult<String> {
    if amount.fraction_digits().is_none() {
        let crowns = agreement(&CROWNS, u64::from(amount.integer_part() % 100));
        return Ok(format!(
            "{} {crowns}",
            spell(amount.signed_integer_part(), Mode::Currency)
        ));
    }

    let MinorUnits { major, minor } = amount.to_minor_units()?;
    let (major, minor) = (u64::from(major), u64::from(minor));

    let mut words = Vec::with_capacity(5);
    if amount.is_negative() && (major, minor) != (0, 0) {
        words.push(MINUS.to_string());
    }
    words.push(spell_magnitude(major, Mode::Currency));
    words.push(agreement(&CROWNS, major % 100).to_string());
    words.push(spell_hellers(minor));
    words.push(agreement(&HELLERS, minor).to_string());

    Ok(words.join(" "))
}

/// Heller counts below three agree with the masculine noun.
fn spell_hellers(minor: u64) -> String {
    match HELLER_COUNTS.get(usize::try_from(minor).unwrap_or(usize::MAX)) {
        Some(word) => (*word).to_string(),
        None => spell_magnitude(minor, Mode::Currency),
    }
}
