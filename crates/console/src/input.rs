//! Raw form input and its validation, done before the bank is ever called

use rust_decimal::Decimal;
use std::str::FromStr;
use tally_core::{Amount, TransferRequest};
use thiserror::Error;

/// Input rejected before reaching the bank
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Amount must be a number")]
    NotANumber(String),

    #[error("Amount must be positive")]
    NotPositive,

    #[error("{0} must not be empty")]
    MissingField(&'static str),
}

/// Text exactly as the user typed it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferForm {
    pub from_id: String,
    pub to_id: String,
    pub amount_text: String,
}

impl TransferForm {
    pub fn new(
        from_id: impl Into<String>,
        to_id: impl Into<String>,
        amount_text: impl Into<String>,
    ) -> Self {
        Self {
            from_id: from_id.into(),
            to_id: to_id.into(),
            amount_text: amount_text.into(),
        }
    }

    /// Validate the form into a transfer request
    pub fn to_request(&self) -> Result<TransferRequest, InputError> {
        let from_id = self.from_id.trim();
        let to_id = self.to_id.trim();
        if from_id.is_empty() {
            return Err(InputError::MissingField("From account"));
        }
        if to_id.is_empty() {
            return Err(InputError::MissingField("To account"));
        }

        let amount = parse_amount(&self.amount_text)?;
        Ok(TransferRequest::new(from_id, to_id, amount))
    }
}

/// Parse a strictly positive decimal amount
pub fn parse_amount(text: &str) -> Result<Amount, InputError> {
    let text = text.trim();
    let amount = Decimal::from_str(text).map_err(|_| InputError::NotANumber(text.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(InputError::NotPositive);
    }
    Ok(amount)
}

/// Only an explicit `y` accepts; anything else, including nothing, declines
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
