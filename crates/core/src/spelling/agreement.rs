//! Grammatical agreement between a count and the word it counts.

/// Word forms for counts 0, 1, 2, 3, 4 and 5+.
pub type AgreementTable = [&'static str; 6];

/// Returns the agreement bucket for `value`: the value itself up to 4, then 5.
#[must_use]
pub fn bucket(value: u64) -> usize {
    usize::try_from(value.min(5)).unwrap_or(5)
}

/// Selects the form of `table` that agrees with `value`.
#[must_use]
pub fn agreement(table: &AgreementTable, value: u64) -> &'static str {
    table[bucket(value)]
}
