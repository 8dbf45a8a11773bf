mod account;
mod quote;
mod transfer;

pub use account::Account;
pub use quote::ConversionQuote;
pub use transfer::{TOTAL_STEPS, TransferRequest};
