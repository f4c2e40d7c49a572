//! Property-based tests for the formatters.
//!
//! - Property 1: Phrase Shape
//! - Property 2: Sign Symmetry
//! - Property 3: Separator Substitution
//! - Property 4: Currency Rounding

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::{currency_to_words, number_to_words};

/// Strategy to generate whole numbers across the full range.
fn whole_number() -> impl Strategy<Value = i64> {
    -999_999_999i64..=999_999_999i64
}

/// Strategy to generate decimals with 1 to 3 fractional digits.
fn decimal_number() -> impl Strategy<Value = Decimal> {
    (-999_999_999_999i64..=999_999_999_999i64, 1u32..=3)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa / 10i64.pow(3 - scale), scale))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Property 1: Phrase Shape
    // =========================================================================

    /// *For any* whole number, the phrase SHALL have no doubled, leading or
    /// trailing spaces.
    #[test]
    fn prop_number_phrase_is_tight(n in whole_number()) {
        let words = number_to_words(n, " ").unwrap();
        prop_assert!(!words.is_empty());
        prop_assert!(!words.contains("  "), "double space in {:?}", words);
        prop_assert_eq!(words.trim(), words.as_str());
    }

    /// *For any* decimal, the phrase SHALL have no doubled, leading or
    /// trailing spaces.
    #[test]
    fn prop_decimal_phrase_is_tight(value in decimal_number()) {
        let words = number_to_words(value, " ").unwrap();
        prop_assert!(!words.contains("  "), "double space in {:?}", words);
        prop_assert_eq!(words.trim(), words.as_str());
    }

    /// *For any* crown amount with hellers, the phrase SHALL end with a heller word.
    #[test]
    fn prop_currency_ends_with_unit(value in decimal_number()) {
        prop_assume!(value.normalize().scale() > 0);
        let words = currency_to_words(value, " ").unwrap();
        prop_assert!(!words.contains("  "), "double space in {:?}", words);
        prop_assert!(
            words.ends_with("haléřů") || words.ends_with("haléř") || words.ends_with("haléře"),
            "missing heller word in {:?}", words
        );
    }

    // =========================================================================
    // Property 2: Sign Symmetry
    // =========================================================================

    /// *For any* n > 0, spelling -n SHALL be "mínus " followed by spelling n.
    #[test]
    fn prop_negative_is_minus_prefixed(n in 1i64..=999_999_999i64) {
        let positive = number_to_words(n, " ").unwrap();
        let negative = number_to_words(-n, " ").unwrap();
        prop_assert_eq!(negative, format!("mínus {positive}"));
    }

    /// *For any* negative crown amount, the minus word SHALL appear exactly
    /// once, unless the amount rounds to zero hellers.
    #[test]
    fn prop_currency_minus_appears_once(value in decimal_number()) {
        let words = currency_to_words(-value.abs(), " ").unwrap();
        let rounded = value.round_dp_with_strategy(
            2,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        );
        if rounded.is_zero() {
            prop_assert!(!words.contains("mínus"));
        } else {
            prop_assert!(words.starts_with("mínus "));
            prop_assert_eq!(words.matches("mínus").count(), 1);
        }
    }

    // =========================================================================
    // Property 3: Separator Substitution
    // =========================================================================

    /// *For any* number, a custom separator SHALL replace every space.
    #[test]
    fn prop_separator_replaces_spaces(n in whole_number(), separator in "[a-z_+-]{0,3}") {
        let spaced = number_to_words(n, " ").unwrap();
        let custom = number_to_words(n, &separator).unwrap();
        prop_assert_eq!(custom, spaced.replace(' ', &separator));
    }

    // =========================================================================
    // Property 4: Currency Rounding
    // =========================================================================

    /// *For any* amount, spelling SHALL match spelling of the amount rounded
    /// to hellers, half away from zero.
    #[test]
    fn prop_currency_rounds_before_spelling(value in decimal_number()) {
        let rounded = value.round_dp_with_strategy(
            2,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        );
        prop_assume!(rounded.normalize().scale() > 0);
        prop_assert_eq!(
            currency_to_words(value, " ").unwrap(),
            currency_to_words(rounded, " ").unwrap()
        );
    }
}
