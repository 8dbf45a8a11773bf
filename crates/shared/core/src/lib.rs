//! Tally Core Domain
//!
//! Pure domain types for the Tally transfer desk.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Account, ConversionQuote, TOTAL_STEPS, TransferRequest};
pub use values::{AccountId, Amount, Currency, DEFAULT_MINOR_UNITS, Money, Rate, TransferId};
