//! Currency exchange with a fixed rate table
//!
//! Rates are seed data: no network, no clock. Converted amounts are rounded
//! once, half-up, to the target currency's minor units.

use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use tally_core::{Amount, Currency, Rate};
use tally_ports::{BankResult, Conversion, CurrencyConverter, TransferError};

pub use tally_core::DEFAULT_MINOR_UNITS;

/// Rate table keyed by (from, to) currency pair
#[derive(Debug, Clone, Default)]
pub struct Exchange {
    rates: HashMap<(Currency, Currency), Rate>,
    minor_units: HashMap<Currency, u32>,
}

impl Exchange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rate for one direction of a pair (replaces an existing rate)
    pub fn add_rate(&mut self, from: impl Into<Currency>, to: impl Into<Currency>, rate: Rate) {
        self.rates.insert((from.into(), to.into()), rate);
    }

    /// Builder form of `add_rate`
    pub fn with_rate(
        mut self,
        from: impl Into<Currency>,
        to: impl Into<Currency>,
        rate: Rate,
    ) -> Self {
        self.add_rate(from, to, rate);
        self
    }

    /// Override the number of decimal places a currency is rounded to
    pub fn set_minor_units(&mut self, currency: impl Into<Currency>, decimal_places: u32) {
        self.minor_units.insert(currency.into(), decimal_places);
    }

    /// Look up the rate for a pair. Identical currencies always convert at 1.
    pub fn rate(&self, from: &Currency, to: &Currency) -> BankResult<Rate> {
        if from == to {
            return Ok(Decimal::ONE);
        }
        self.rates
            .get(&(from.clone(), to.clone()))
            .copied()
            .ok_or_else(|| TransferError::RateUnavailable {
                from: from.clone(),
                to: to.clone(),
            })
    }

    /// Round half-up to the currency's minor units
    pub fn round(&self, amount: Amount, currency: &Currency) -> Amount {
        amount.round_dp_with_strategy(
            self.minor_units(currency),
            RoundingStrategy::MidpointAwayFromZero,
        )
    }

    /// Number of known currency pairs
    pub fn pair_count(&self) -> usize {
        self.rates.len()
    }
}

impl CurrencyConverter for Exchange {
    fn convert(&self, amount: Amount, from: &Currency, to: &Currency) -> BankResult<Conversion> {
        if from == to {
            return Ok(Conversion {
                amount,
                rate: Decimal::ONE,
            });
        }

        let rate = self.rate(from, to)?;
        let product = amount.checked_mul(rate).ok_or_else(|| {
            TransferError::InvalidAmount(format!("{} {} at {} is out of range", amount, from, rate))
        })?;
        let converted = self.round(product, to);
        debug!(
            "Converted {} {} -> {} {} at {}",
            amount, from, converted, to, rate
        );

        Ok(Conversion {
            amount: converted,
            rate,
        })
    }

    fn minor_units(&self, currency: &Currency) -> u32 {
        self.minor_units
            .get(currency)
            .copied()
            .unwrap_or(DEFAULT_MINOR_UNITS)
    }

    fn name(&self) -> &str {
        "Exchange"
    }
}
