//! Treasury - the in-memory account ledger
//!
//! Owns every account balance. Each debit/credit is a single mutation of one
//! map entry, applied completely or not at all.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use log::debug;
use rust_decimal::Decimal;
use tally_core::{Account, AccountId, Amount, Currency};
use tally_ports::{BankResult, TransferError};

/// In-memory ledger keyed by account ID
#[derive(Debug, Default)]
pub struct Treasury {
    accounts: DashMap<AccountId, Account>,
}

impl Treasury {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account. Account IDs are unique.
    pub fn add_account(&self, account: Account) -> BankResult<()> {
        if account.balance < Decimal::ZERO {
            return Err(TransferError::InvalidAmount(format!(
                "opening balance of {} is negative",
                account.id
            )));
        }

        match self.accounts.entry(account.id.clone()) {
            Entry::Occupied(_) => Err(TransferError::DuplicateAccount(account.id)),
            Entry::Vacant(slot) => {
                debug!(
                    "Opened account {} with {}",
                    account.id,
                    account.money()
                );
                slot.insert(account);
                Ok(())
            }
        }
    }

    /// Get a snapshot of an account
    pub fn get_account(&self, id: &AccountId) -> BankResult<Account> {
        self.accounts
            .get(id)
            .map(|a| a.value().clone())
            .ok_or_else(|| TransferError::AccountNotFound(id.clone()))
    }

    /// Current balance of an account
    pub fn balance(&self, id: &AccountId) -> BankResult<Amount> {
        self.accounts
            .get(id)
            .map(|a| a.balance)
            .ok_or_else(|| TransferError::AccountNotFound(id.clone()))
    }

    /// All accounts, ordered by ID
    pub fn accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.accounts.iter().map(|e| e.value().clone()).collect();
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Withdraw `amount` from an account held in `currency`
    ///
    /// Refused when the currency differs from the account's or when the
    /// balance cannot cover the amount.
    pub fn debit(&self, id: &AccountId, amount: Amount, currency: &Currency) -> BankResult<()> {
        ensure_positive(amount)?;

        let mut entry = self
            .accounts
            .get_mut(id)
            .ok_or_else(|| TransferError::AccountNotFound(id.clone()))?;
        let account = entry.value_mut();

        ensure_currency(account, currency)?;
        if !account.can_cover(amount) {
            return Err(TransferError::InsufficientFunds {
                account: id.clone(),
                requested: amount,
                available: account.balance,
            });
        }

        account.balance = account
            .balance
            .checked_sub(amount)
            .ok_or_else(|| out_of_range(id, amount))?;
        debug!(
            "Debited {} {} from {}, balance={}",
            amount, currency, id, account.balance
        );
        Ok(())
    }

    /// Deposit `amount` into an account held in `currency`
    pub fn credit(&self, id: &AccountId, amount: Amount, currency: &Currency) -> BankResult<()> {
        ensure_positive(amount)?;

        let mut entry = self
            .accounts
            .get_mut(id)
            .ok_or_else(|| TransferError::AccountNotFound(id.clone()))?;
        let account = entry.value_mut();

        ensure_currency(account, currency)?;

        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| out_of_range(id, amount))?;
        debug!(
            "Credited {} {} to {}, balance={}",
            amount, currency, id, account.balance
        );
        Ok(())
    }
}

fn ensure_positive(amount: Amount) -> BankResult<()> {
    if amount <= Decimal::ZERO {
        return Err(TransferError::InvalidAmount(format!(
            "amount must be positive, got {}",
            amount
        )));
    }
    Ok(())
}

fn out_of_range(id: &AccountId, amount: Amount) -> TransferError {
    TransferError::InvalidAmount(format!("balance of {} cannot absorb {}", id, amount))
}

fn ensure_currency(account: &Account, currency: &Currency) -> BankResult<()> {
    if account.currency != *currency {
        return Err(TransferError::CurrencyMismatch {
            account: account.id.clone(),
            expected: account.currency.clone(),
            actual: currency.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tally_ports::ErrorKind;

    fn usd() -> Currency {
        Currency::new("USD")
    }

    fn create_test_treasury() -> Treasury {
        let treasury = Treasury::new();
        treasury
            .add_account(Account::new("alice", "USD", dec!(1000)))
            .unwrap();
        treasury
            .add_account(Account::new("bob", "EUR", dec!(100)))
            .unwrap();
        treasury
    }

    #[test]
    fn test_get_account() {
        let treasury = create_test_treasury();

        let alice = treasury.get_account(&AccountId::new("alice")).unwrap();
        assert_eq!(alice.currency, usd());
        assert_eq!(alice.balance, dec!(1000));

        let err = treasury.get_account(&AccountId::new("carol")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AccountNotFound);
    }

    #[test]
    fn test_duplicate_account_rejected() {
        let treasury = create_test_treasury();
        let err = treasury
            .add_account(Account::new("alice", "EUR", dec!(5)))
            .unwrap_err();

        assert_eq!(err, TransferError::DuplicateAccount(AccountId::new("alice")));
        // Existing account untouched
        assert_eq!(treasury.balance(&AccountId::new("alice")).unwrap(), dec!(1000));
    }

    #[test]
    fn test_negative_opening_balance_rejected() {
        let treasury = Treasury::new();
        let err = treasury
            .add_account(Account::new("carol", "USD", dec!(-1)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAmount);
        assert!(treasury.is_empty());
    }

    #[test]
    fn test_debit_reduces_balance() {
        let treasury = create_test_treasury();
        let alice = AccountId::new("alice");

        treasury.debit(&alice, dec!(250.50), &usd()).unwrap();
        assert_eq!(treasury.balance(&alice).unwrap(), dec!(749.50));
    }

    #[test]
    fn test_debit_entire_balance() {
        let treasury = create_test_treasury();
        let alice = AccountId::new("alice");

        treasury.debit(&alice, dec!(1000), &usd()).unwrap();
        assert!(treasury.get_account(&alice).unwrap().is_empty());
    }

    #[test]
    fn test_debit_insufficient_funds() {
        let treasury = create_test_treasury();
        let alice = AccountId::new("alice");

        let err = treasury.debit(&alice, dec!(1000.01), &usd()).unwrap_err();
        assert_eq!(
            err,
            TransferError::InsufficientFunds {
                account: alice.clone(),
                requested: dec!(1000.01),
                available: dec!(1000),
            }
        );
        assert_eq!(treasury.balance(&alice).unwrap(), dec!(1000));
    }

    #[test]
    fn test_debit_currency_mismatch() {
        let treasury = create_test_treasury();
        let alice = AccountId::new("alice");

        let err = treasury
            .debit(&alice, dec!(10), &Currency::new("EUR"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CurrencyMismatch);
        assert_eq!(treasury.balance(&alice).unwrap(), dec!(1000));
    }

    #[test]
    fn test_credit_increases_balance() {
        let treasury = create_test_treasury();
        let bob = AccountId::new("bob");

        treasury.credit(&bob, dec!(9.00), &Currency::new("EUR")).unwrap();
        assert_eq!(treasury.balance(&bob).unwrap(), dec!(109.00));
    }

    #[test]
    fn test_credit_currency_mismatch() {
        let treasury = create_test_treasury();
        let bob = AccountId::new("bob");

        let err = treasury.credit(&bob, dec!(9), &usd()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CurrencyMismatch);
        assert_eq!(treasury.balance(&bob).unwrap(), dec!(100));
    }

    #[test]
    fn test_non_positive_amounts_refused() {
        let treasury = create_test_treasury();
        let alice = AccountId::new("alice");

        assert_eq!(
            treasury.debit(&alice, dec!(0), &usd()).unwrap_err().kind(),
            ErrorKind::InvalidAmount
        );
        assert_eq!(
            treasury.credit(&alice, dec!(-5), &usd()).unwrap_err().kind(),
            ErrorKind::InvalidAmount
        );
        assert_eq!(treasury.balance(&alice).unwrap(), dec!(1000));
    }

    #[test]
    fn test_unknown_account_operations() {
        let treasury = create_test_treasury();
        let carol = AccountId::new("carol");

        assert_eq!(
            treasury.debit(&carol, dec!(1), &usd()).unwrap_err(),
            TransferError::AccountNotFound(carol.clone())
        );
        assert_eq!(
            treasury.credit(&carol, dec!(1), &usd()).unwrap_err(),
            TransferError::AccountNotFound(carol.clone())
        );
    }

    #[test]
    fn test_accounts_sorted() {
        let treasury = create_test_treasury();
        let ids: Vec<String> = treasury
            .accounts()
            .into_iter()
            .map(|a| a.id.to_string())
            .collect();

        assert_eq!(ids, vec!["alice", "bob"]);
        assert_eq!(treasury.len(), 2);
    }

    #[test]
    fn test_credit_out_of_range_leaves_balance() {
        let treasury = Treasury::new();
        treasury
            .add_account(Account::new("vault", "USD", Decimal::MAX))
            .unwrap();
        let vault = AccountId::new("vault");

        let err = treasury.credit(&vault, dec!(1), &usd()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidAmount);
        assert_eq!(treasury.balance(&vault).unwrap(), Decimal::MAX);
    }
}
