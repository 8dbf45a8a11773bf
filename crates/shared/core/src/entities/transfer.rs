use serde::{Deserialize, Serialize};

use crate::values::{AccountId, Amount, TransferId};

/// Number of steps in the transfer scenario:
/// validate, quote/confirm, debit+credit, complete
pub const TOTAL_STEPS: u8 = 4;

/// A single transfer as requested by an adapter
///
/// The source currency is implied by the source account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub id: TransferId,
    pub from: AccountId,
    pub to: AccountId,
    pub amount: Amount,
}

impl TransferRequest {
    pub fn new(from: impl Into<AccountId>, to: impl Into<AccountId>, amount: Amount) -> Self {
        Self {
            id: TransferId::new(),
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}
