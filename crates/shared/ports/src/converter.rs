use tally_core::{Amount, Currency, DEFAULT_MINOR_UNITS, Rate};

use crate::error::BankResult;

/// Result of converting an amount between currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    /// Converted amount, rounded to the target currency's minor units
    pub amount: Amount,
    /// Rate applied
    pub rate: Rate,
}

/// Port for currency conversion
///
/// Implementations must be deterministic:
/// - identical currencies convert at rate 1 with the amount unchanged
/// - an unknown pair fails with `RateUnavailable`
/// - an amount too large to convert fails with `InvalidAmount`
pub trait CurrencyConverter {
    /// Convert `amount` from one currency to another
    fn convert(&self, amount: Amount, from: &Currency, to: &Currency) -> BankResult<Conversion>;

    /// Decimal places amounts in `currency` are held at
    fn minor_units(&self, _currency: &Currency) -> u32 {
        DEFAULT_MINOR_UNITS
    }

    /// Get the converter's name for debugging
    fn name(&self) -> &str {
        "CurrencyConverter"
    }
}
