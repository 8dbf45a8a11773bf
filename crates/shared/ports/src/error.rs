use serde::{Deserialize, Serialize};
use tally_core::{AccountId, Amount, Currency};
use thiserror::Error;

/// Domain-level errors for transfer operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("Account {0} does not exist")]
    AccountNotFound(AccountId),

    #[error("Insufficient funds in {account}: requested {requested}, available {available}")]
    InsufficientFunds {
        account: AccountId,
        requested: Amount,
        available: Amount,
    },

    #[error("Currency mismatch on {account}: account holds {expected}, got {actual}")]
    CurrencyMismatch {
        account: AccountId,
        expected: Currency,
        actual: Currency,
    },

    #[error("No conversion rate {from}->{to}")]
    RateUnavailable { from: Currency, to: Currency },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Account {0} already exists")]
    DuplicateAccount(AccountId),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TransferError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransferError::AccountNotFound(_) => ErrorKind::AccountNotFound,
            TransferError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            TransferError::CurrencyMismatch { .. } => ErrorKind::CurrencyMismatch,
            TransferError::RateUnavailable { .. } => ErrorKind::RateUnavailable,
            TransferError::InvalidAmount(_) => ErrorKind::InvalidAmount,
            TransferError::DuplicateAccount(_) => ErrorKind::DuplicateAccount,
            TransferError::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Payload-free error category, for matching and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    AccountNotFound,
    InsufficientFunds,
    CurrencyMismatch,
    RateUnavailable,
    InvalidAmount,
    DuplicateAccount,
    Internal,
}

pub type BankResult<T> = std::result::Result<T, TransferError>;
