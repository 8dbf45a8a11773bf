use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::values::{AccountId, Amount, Currency, Money};

/// Ledger account holding a single-currency balance
///
/// Balances are never negative. Mutation goes through the treasury's
/// debit/credit operations only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier
    pub id: AccountId,

    /// Currency the balance is held in
    pub currency: Currency,

    /// Current balance
    pub balance: Amount,
}

impl Account {
    pub fn new(id: impl Into<AccountId>, currency: impl Into<Currency>, balance: Amount) -> Self {
        Self {
            id: id.into(),
            currency: currency.into(),
            balance,
        }
    }

    /// Balance as a tagged money value
    pub fn money(&self) -> Money {
        Money::new(self.balance, self.currency.clone())
    }

    /// Check if the account can cover a debit of `amount`
    pub fn can_cover(&self, amount: Amount) -> bool {
        amount <= self.balance
    }

    pub fn is_empty(&self) -> bool {
        self.balance == Decimal::ZERO
    }
}
