//! Tally Bank
//!
//! The UI-agnostic transfer domain:
//! - **Exchange**: fixed rate table, converts amounts with half-up rounding
//! - **Treasury**: in-memory ledger with debit/credit primitives
//! - **Bank**: drives the 4-step transfer scenario and reports through a `TransferPort`
//!
//! ## Architecture
//!
//! ```text
//! Adapter (controller / presenter / view-model)
//!    │  TransferRequest                    ▲ progress, confirm, error, result
//!    ▼                                     │
//! ┌──────────────────────────────────────────────┐
//! │                    Bank                      │
//! │  1. validate ─► 2. quote/confirm ─►          │
//! │  3. debit+credit ─► 4. complete              │
//! └───────┬─────────────────────────┬────────────┘
//!         │                         │
//!     Treasury                  Exchange
//!   (accounts, balances)      (rate table)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_bank::{Bank, config::load_default_config};
//! use tally_core::TransferRequest;
//!
//! let bank = Bank::from_config(&load_default_config()?)?;
//! let request = TransferRequest::new("alice", "bob", dec!(10));
//! let result = bank.transfer(&request, &mut my_port);
//! ```

pub mod bank;
pub mod config;
pub mod exchange;
pub mod treasury;

// Re-export main types
pub use bank::{Bank, COMPLETED_MESSAGE, DECLINED_MESSAGE};
pub use config::{ConfigError, SeedConfig};
pub use exchange::{DEFAULT_MINOR_UNITS, Exchange};
pub use treasury::Treasury;
