//! Money type with decimal precision and currency.
//!
//! Tier prices are always `rust_decimal::Decimal`, never floating point.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units (e.g., 12.50).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro
    #[default]
    Eur,
    /// US Dollar
    Usd,
    /// Pound Sterling
    Gbp,
    /// Swiss Franc
    Chf,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative()
    }

    /// Formats the amount with exactly two decimal places (e.g. `"12.50"`).
    #[must_use]
    pub fn format_amount(&self) -> String {
        format!("{:.2}", self.amount.round_dp(2))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.format_amount(), self.currency)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eur => write!(f, "EUR"),
            Self::Usd => write!(f, "USD"),
            Self::Gbp => write!(f, "GBP"),
            Self::Chf => write!(f, "CHF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_is_negative() {
        assert!(!Money::new(dec!(10), Currency::Eur).is_negative());
        assert!(Money::new(dec!(-10), Currency::Eur).is_negative());
        assert!(!Money::new(Decimal::ZERO, Currency::Eur).is_negative());
    }

    #[rstest]
    #[case(dec!(12.5), "12.50")]
    #[case(dec!(7), "7.00")]
    #[case(dec!(3.456), "3.46")]
    fn test_format_amount(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(Money::new(amount, Currency::Eur).format_amount(), expected);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(dec!(4.9), Currency::Chf).to_string(), "4.90 CHF");
    }
}
