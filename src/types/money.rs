//! Money-related types for the food till
//!
//! Prices are kept as whole dollars plus cents and every amount that flows
//! through the till is an integer number of cents. `rust_decimal` is only used
//! at the edges: parsing what the operator types and rendering currency.

use crate::types::TillError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Price of a food item
///
/// Stored as separate dollar and cent components, matching the
/// `dollars.cents` layout of the menu file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    /// Whole dollars
    pub dollars: u32,
    /// Cents, always in 0..=99
    pub cents: u8,
}

impl Price {
    /// Create a price from dollars and cents
    ///
    /// Cents above 99 are carried into the dollars.
    pub fn new(dollars: u32, cents: u32) -> Self {
        Price {
            dollars: dollars + cents / 100,
            cents: (cents % 100) as u8,
        }
    }

    /// Create a price from a total number of cents
    pub fn from_cents(total: u64) -> Self {
        Price {
            dollars: (total / 100) as u32,
            cents: (total % 100) as u8,
        }
    }

    /// Total value of the price in cents
    pub fn as_cents(&self) -> u64 {
        u64::from(self.dollars) * 100 + u64::from(self.cents)
    }

    /// Parse the `dollars.cents` field of a menu file line
    ///
    /// The decimal point is mandatory and the cents part must be exactly two
    /// digits, e.g. `3.50`.
    pub fn parse_file_field(value: &str) -> Result<Self, TillError> {
        let (dollars, cents) = value
            .split_once('.')
            .ok_or_else(|| TillError::invalid_price(value))?;

        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(dollars) || cents.len() != 2 || !all_digits(cents) {
            return Err(TillError::invalid_price(value));
        }

        let dollars = dollars
            .parse::<u32>()
            .map_err(|_| TillError::invalid_price(value))?;
        let cents = cents
            .parse::<u32>()
            .map_err(|_| TillError::invalid_price(value))?;

        Ok(Price::new(dollars, cents))
    }

    /// Parse a price typed by the operator
    ///
    /// Accepts any non-negative decimal with at most two fractional digits,
    /// such as `4`, `4.5` or `4.50`.
    pub fn parse_input(value: &str) -> Result<Self, TillError> {
        let trimmed = value.trim();
        let amount =
            Decimal::from_str(trimmed).map_err(|_| TillError::invalid_price(trimmed))?;

        if amount.is_sign_negative() || amount.scale() > 2 {
            return Err(TillError::invalid_price(trimmed));
        }

        let cents = (amount * Decimal::ONE_HUNDRED)
            .to_u64()
            .ok_or_else(|| TillError::invalid_price(trimmed))?;
        if cents / 100 > u64::from(u32::MAX) {
            return Err(TillError::invalid_price(trimmed));
        }

        Ok(Price::from_cents(cents))
    }

    /// Render the price in file form, `dollars.cents` with two-digit cents
    pub fn to_file_field(&self) -> String {
        format!("{}.{:02}", self.dollars, self.cents)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars, self.cents)
    }
}

/// Render an amount of cents as a dollar figure with two decimal places
///
/// Honours width and alignment flags, so `format!("{:>6}", ...)` lines up
/// columns in reports.
pub fn format_cents(cents: u64) -> String {
    format!("{:.2}", Decimal::from(cents) / Decimal::ONE_HUNDRED)
}
