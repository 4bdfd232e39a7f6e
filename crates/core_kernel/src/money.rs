//! Money types with precise decimal arithmetic
//!
//! Claim amounts, payments and premiums are all carried as [`Money`] so
//! that totals and summaries never go through floating point.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// ISO 4217 currency of an amount
///
/// Every policy is written in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::USD
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Amount out of range: {0}")]
    Overflow(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// A monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value, rounded to four decimal places
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Creates a US dollar amount
    pub fn usd(amount: Decimal) -> Self {
        Self::new(amount, Currency::USD)
    }

    /// Creates Money from an integer amount in minor units (e.g., cents)
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        Self::new(Decimal::new(minor_units, currency.decimal_places()), currency)
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Rounds to the currency's standard decimal places
    pub fn round_to_currency(&self) -> Self {
        Self {
            amount: self.amount.round_dp(self.currency.decimal_places()),
            currency: self.currency,
        }
    }

    /// Addition that fails instead of overflowing the decimal range
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.amount
            .checked_add(other.amount)
            .map(|amount| Self::new(amount, self.currency))
            .ok_or_else(|| MoneyError::Overflow(format!("{} + {}", self.amount, other.amount)))
    }

    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.amount
            .checked_sub(other.amount)
            .map(|amount| Self::new(amount, self.currency))
            .ok_or_else(|| MoneyError::Overflow(format!("{} - {}", self.amount, other.amount)))
    }

    /// Sums a sequence of amounts, starting from zero in `currency`
    pub fn sum<'a, I>(amounts: I, currency: Currency) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.checked_add(m))
    }

    /// Parses a user-entered amount such as `"1250"` or `"89.99"`
    pub fn parse(input: &str, currency: Currency) -> Result<Money, MoneyError> {
        let trimmed = input.trim().trim_start_matches(currency.symbol()).replace(',', "");
        trimmed
            .parse::<Decimal>()
            .map(|amount| Money::new(amount, currency))
            .map_err(|_| MoneyError::InvalidAmount(input.to_string()))
    }
}

impl fmt::Display for Money {
    /// Formats as `$1,250.00`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.amount.round_dp(self.currency.decimal_places());
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        let text = format!("{:.2}", rounded.abs());
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{}{}{}.{}", sign, self.currency.symbol(), grouped, fraction)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sum_matches_decimal_sum(cents in proptest::collection::vec(0i64..10_000_000i64, 0..20)) {
            let amounts: Vec<Money> = cents.iter().map(|c| Money::from_minor(*c, Currency::USD)).collect();
            let total = Money::sum(&amounts, Currency::USD).unwrap();
            let expected: Decimal = amounts.iter().map(|m| m.amount()).sum();
            prop_assert_eq!(total.amount(), expected);
        }
    }
}
