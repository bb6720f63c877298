//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places monetary results are rounded to.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds a monetary value to cents, half-up.
///
/// Apply this once to a final amount. Intermediate sums and products stay
/// unrounded so that rounding error does not compound.
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("107.025").unwrap()), Decimal::from_str("107.03").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("324.6425").unwrap()), Decimal::from_str("324.64").unwrap());
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_midpoint_rounds_up() {
        assert_eq!(round_currency(dec("0.005")), dec("0.01"));
        assert_eq!(round_currency(dec("2.345")), dec("2.35"));
    }

    #[test]
    fn test_below_midpoint_rounds_down() {
        assert_eq!(round_currency(dec("2.3449999")), dec("2.34"));
    }

    #[test]
    fn test_already_rounded_value_unchanged() {
        assert_eq!(round_currency(dec("5000")), dec("5000"));
        assert_eq!(round_currency(dec("12.50")), dec("12.50"));
    }

    #[test]
    fn test_result_has_at_most_two_decimal_places() {
        let value = dec("101.91780821917808219178082192");
        assert!(round_currency(value).scale() <= CURRENCY_DECIMAL_PLACES);
    }
}
