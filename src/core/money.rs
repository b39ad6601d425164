use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{AppError, Result};

/// Decimal places used for every stored and displayed amount
pub const MONEY_SCALE: u32 = 2;

/// Rounds to two decimal places, half-up, and fixes the scale at two
///
/// Matches the currency formatting used by the client: `0.125` becomes `0.13`
/// (rust_decimal's default `round_dp` would give banker's `0.12`).
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Fixed two-decimal text form, e.g. `100` -> `"100.00"`
pub fn format_money(amount: Decimal) -> String {
    round_money(amount).to_string()
}

/// Parses a user-entered amount. Surrounding whitespace is ignored.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Amount is required"));
    }

    Decimal::from_str(trimmed)
        .map_err(|_| AppError::validation(format!("Invalid amount: {}", trimmed)))
}

/// Currency label shown next to amounts and stamped on created revenues
///
/// Only a display label: no ISO validation and no conversion between
/// currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayCurrency(String);

impl DisplayCurrency {
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into().trim().to_string();
        if code.is_empty() {
            return Err(AppError::validation("Display currency cannot be empty"));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats an amount for display, e.g. `USD 1000.50`
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!("{} {}", self.0, format_money(amount))
    }
}

impl fmt::Display for DisplayCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DisplayCurrency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
