//! Magnitude decomposition of whole numbers into Czech words.
//!
//! A number is split into millions, thousands, hundreds, and tens with units.
//! Each band spells its own three-digit group; thousand and million groups of
//! five and more recurse on the group value, so recursion depth is at most 2.

use tracing::trace;

use super::lexicon::{
    HUNDREDS, MILLIONS, MILLIONS_PLURAL, MINUS, TENS, THOUSANDS, THOUSANDS_PLURAL, TWO_DUAL, UNITS,
    ZERO,
};

/// Output mode of a conversion.
///
/// Currency amounts agree with the feminine "koruna", which changes how 2 is
/// spelled in the tens and units band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Plain number.
    Number,
    /// Crown amount.
    Currency,
}

/// Spells a signed whole number.
///
/// Negative values spell as "mínus" followed by the absolute value. The
/// caller is responsible for keeping the value within ±999 999 999.
#[must_use]
pub fn spell(amount: i64, mode: Mode) -> String {
    let magnitude = spell_magnitude(amount.unsigned_abs(), mode);
    if amount < 0 {
        format!("{MINUS} {magnitude}")
    } else {
        magnitude
    }
}

/// Spells a non-negative whole number.
#[must_use]
pub fn spell_magnitude(amount: u64, mode: Mode) -> String {
    match amount {
        0 => ZERO.to_string(),
        2 => TWO_DUAL.to_string(),
        _ => {
            let bands = [
                millions(amount, mode),
                thousands(amount, mode),
                hundreds(amount),
                tens_and_units(amount, mode),
            ];
            trace!(amount, ?mode, ?bands, "decomposed magnitude bands");
            bands.into_iter().flatten().collect::<Vec<_>>().join(" ")
        }
    }
}

/// Three-digit group of `amount` at `scale`.
fn group(amount: u64, scale: u64) -> u64 {
    amount / scale % 1000
}

/// Entry `value - 1` of a table starting at one.
#[allow(clippy::cast_possible_truncation)]
fn nth(table: &[&'static str], value: u64) -> &'static str {
    table[(value - 1) as usize]
}

fn millions(amount: u64, mode: Mode) -> Option<String> {
    match group(amount, 1_000_000) {
        0 => None,
        value @ 1..=4 => Some(nth(&MILLIONS, value).to_string()),
        value => Some(format!(
            "{} {MILLIONS_PLURAL}",
            spell_magnitude(value, mode)
        )),
    }
}

fn thousands(amount: u64, mode: Mode) -> Option<String> {
    match group(amount, 1000) {
        0 => None,
        value @ 1..=4 => Some(nth(&THOUSANDS, value).to_string()),
        value => {
            let suffix = if (2000..5000).contains(&amount) { "e" } else { "" };
            Some(format!(
                "{} {THOUSANDS_PLURAL}{suffix}",
                spell_magnitude(value, mode)
            ))
        }
    }
}

pub(crate) fn hundreds(amount: u64) -> Option<String> {
    match amount % 1000 / 100 {
        0 => None,
        value => Some(nth(&HUNDREDS, value).to_string()),
    }
}

pub(crate) fn tens_and_units(amount: u64, mode: Mode) -> Option<String> {
    let rest = amount % 100;
    match rest {
        0 => None,
        2 if mode == Mode::Currency => Some(TWO_DUAL.to_string()),
        1..=19 => Some(nth(&UNITS, rest).to_string()),
        _ => {
            let tens = nth(&TENS, rest / 10 - 1);
            match rest % 10 {
                0 => Some(tens.to_string()),
                units => Some(format!("{tens} {}", nth(&UNITS, units))),
            }
        }
    }
}
