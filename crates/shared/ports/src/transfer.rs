use serde::{Deserialize, Serialize};
use tally_core::{ConversionQuote, TransferId};

use crate::error::{ErrorKind, TransferError};

/// Port the bank reports through while a transfer runs
///
/// Implemented by whichever adapter (controller, presenter, view-model)
/// the entry point wires in. The bank never names a concrete adapter.
///
/// Call order per transfer:
/// - `report_transfer_progress` with strictly increasing steps, starting at 1
/// - `confirm_currency_conversion` at most once, only when currencies differ
/// - on abort: `report_error` (domain failures only), then `discard_transfer`
/// - `report_transfer_result` exactly once, always last
pub trait TransferPort {
    /// A step of the scenario has started
    fn report_transfer_progress(&mut self, step: u8, total: u8);

    /// Ask whether the quoted conversion may go ahead
    ///
    /// Blocks the transfer until the adapter decides. `false` discards it.
    fn confirm_currency_conversion(&mut self, quote: &ConversionQuote) -> bool;

    /// Detail of the domain failure about to discard the transfer
    fn report_error(&mut self, _error: &TransferError) {}

    /// The transfer is being discarded; no balance was changed
    fn discard_transfer(&mut self) {}

    /// Final notification with a human-readable outcome
    fn report_transfer_result(&mut self, success: bool, message: &str);
}

/// How a transfer ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferOutcome {
    /// Both legs applied
    Completed,
    /// Nothing applied. `kind` is `None` when the conversion was declined.
    Discarded { kind: Option<ErrorKind> },
}

/// Returned by the bank once the terminal notification has been sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferResult {
    pub transfer_id: TransferId,
    pub outcome: TransferOutcome,
    pub message: String,
    /// Quote used for the transfer, if currencies differed and pricing succeeded
    pub quote: Option<ConversionQuote>,
}

impl TransferResult {
    pub fn is_completed(&self) -> bool {
        self.outcome == TransferOutcome::Completed
    }

    /// Error category of a discarded transfer, if it failed on a domain error
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self.outcome {
            TransferOutcome::Completed => None,
            TransferOutcome::Discarded { kind } => kind,
        }
    }
}
