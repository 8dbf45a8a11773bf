use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tally_core::{AccountId, Currency};

/// Seed data for a fresh bank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub accounts: Vec<AccountSeed>,
    #[serde(default)]
    pub rates: Vec<RateSeed>,
    /// Decimal places per currency, for currencies not using the default of 2
    #[serde(default)]
    pub minor_units: HashMap<Currency, u32>,
}

/// An account and its opening balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSeed {
    pub id: AccountId,
    pub currency: Currency,
    pub balance: Decimal,
}

/// One direction of a currency pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSeed {
    pub from: Currency,
    pub to: Currency,
    pub rate: Decimal,
}
