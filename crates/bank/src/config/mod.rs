//! Seed configuration: the accounts and rates a bank starts with

mod loader;
mod types;

pub use loader::{ConfigError, load_config, load_config_from_str, load_default_config};
pub use types::{AccountSeed, RateSeed, SeedConfig};
