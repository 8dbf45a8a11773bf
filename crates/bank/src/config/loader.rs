use log::debug;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::path::Path;
use tally_core::{Account, AccountId, Currency};
use tally_ports::TransferError;
use thiserror::Error;

use super::types::SeedConfig;
use crate::exchange::Exchange;
use crate::treasury::Treasury;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("No accounts in config")]
    NoAccounts,
    #[error("Duplicate account: {0}")]
    DuplicateAccount(AccountId),
    #[error("Negative opening balance for account {0}")]
    NegativeBalance(AccountId),
    #[error("Rate {from}->{to} must be positive")]
    InvalidRate { from: Currency, to: Currency },
    #[error("Failed to seed account: {0}")]
    Account(#[from] TransferError),
}

/// Load seed configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading seed config from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load seed configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<SeedConfig, ConfigError> {
    let config: SeedConfig = serde_json::from_str(json)?;
    Ok(config)
}

/// Load the default embedded seed
pub fn load_default_config() -> Result<SeedConfig, ConfigError> {
    let default_config = include_str!("default_seed.json");
    load_config_from_str(default_config)
}

impl SeedConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.accounts.is_empty() {
            return Err(ConfigError::NoAccounts);
        }

        let mut seen = HashSet::new();
        for account in &self.accounts {
            if !seen.insert(&account.id) {
                return Err(ConfigError::DuplicateAccount(account.id.clone()));
            }
            if account.balance < Decimal::ZERO {
                return Err(ConfigError::NegativeBalance(account.id.clone()));
            }
        }

        if let Some(rate) = self.rates.iter().find(|r| r.rate <= Decimal::ZERO) {
            return Err(ConfigError::InvalidRate {
                from: rate.from.clone(),
                to: rate.to.clone(),
            });
        }

        Ok(())
    }

    /// Build a treasury holding the seeded accounts
    pub fn build_treasury(&self) -> Result<Treasury, ConfigError> {
        let treasury = Treasury::new();
        for seed in &self.accounts {
            treasury.add_account(Account::new(
                seed.id.clone(),
                seed.currency.clone(),
                seed.balance,
            ))?;
        }
        Ok(treasury)
    }

    /// Build an exchange holding the seeded rates and precisions
    pub fn build_exchange(&self) -> Exchange {
        let mut exchange = Exchange::new();
        for seed in &self.rates {
            exchange.add_rate(seed.from.clone(), seed.to.clone(), seed.rate);
        }
        for (currency, decimal_places) in &self.minor_units {
            exchange.set_minor_units(currency.clone(), *decimal_places);
        }
        exchange
    }
}
