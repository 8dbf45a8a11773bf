//! Tally Ports
//!
//! Port definitions (traits) for the Tally transfer desk.
//! These define the boundaries between the domain core and the adapters
//! wired in by an entry point.

mod converter;
mod error;
mod transfer;

pub use converter::{Conversion, CurrencyConverter};
pub use error::{BankResult, ErrorKind, TransferError};
pub use transfer::{TransferOutcome, TransferPort, TransferResult};
