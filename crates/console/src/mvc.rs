//! Model-View-Controller front-end
//!
//! The controller pulls raw input from the view, validates it, asks the bank
//! (the model) to run the transfer and implements `TransferPort` by telling
//! the view what to render.

use log::warn;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tally_bank::Bank;
use tally_core::ConversionQuote;
use tally_ports::{TransferError, TransferPort, TransferResult};

use crate::console::Console;
use crate::input::{TransferForm, is_affirmative};
use crate::render::{
    AMOUNT_PROMPT, FROM_PROMPT, PROCEED_PROMPT, TO_PROMPT, error_line, progress_line, result_line,
};

/// Console view: owns the I/O and knows how to draw each piece of state
pub struct ConsoleTransferView<R, W> {
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> ConsoleTransferView<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self { console }
    }

    pub fn get_transfer_inputs(&mut self) -> io::Result<TransferForm> {
        let from_id = self.console.prompt(FROM_PROMPT)?;
        let to_id = self.console.prompt(TO_PROMPT)?;
        let amount_text = self.console.prompt(AMOUNT_PROMPT)?;
        Ok(TransferForm::new(from_id, to_id, amount_text))
    }

    pub fn show_transfer_progress(&mut self, step: u8, total: u8) -> io::Result<()> {
        self.console.println(&progress_line(step, total))
    }

    pub fn ask_exchange_confirmation(&mut self, quote: &ConversionQuote) -> io::Result<bool> {
        self.console.println(&quote.to_string())?;
        let answer = self.console.prompt(PROCEED_PROMPT)?;
        Ok(is_affirmative(&answer))
    }

    pub fn show_transfer_result(&mut self, success: bool, message: &str) -> io::Result<()> {
        self.console.println(&result_line(success, message))
    }

    pub fn show_transfer_error(&mut self, message: &str) -> io::Result<()> {
        self.console.println(&error_line(message))
    }
}

/// Controller: implements `TransferPort` and pulls its inputs itself
pub struct TransferController<R, W> {
    bank: Arc<Bank>,
    view: ConsoleTransferView<R, W>,
}

impl<R: BufRead, W: Write> TransferController<R, W> {
    pub fn new(bank: Arc<Bank>, view: ConsoleTransferView<R, W>) -> Self {
        Self { bank, view }
    }

    /// Gather one transfer from the view and run it
    ///
    /// Returns `None` when the input was rejected before reaching the bank.
    pub fn run(&mut self) -> io::Result<Option<TransferResult>> {
        let form = self.view.get_transfer_inputs()?;

        let request = match form.to_request() {
            Ok(request) => request,
            Err(err) => {
                self.view.show_transfer_error(&err.to_string())?;
                return Ok(None);
            }
        };

        let bank = Arc::clone(&self.bank);
        Ok(Some(bank.transfer(&request, self)))
    }
}

impl<R: BufRead, W: Write> TransferPort for TransferController<R, W> {
    fn report_transfer_progress(&mut self, step: u8, total: u8) {
        if let Err(e) = self.view.show_transfer_progress(step, total) {
            warn!("Failed to render progress: {}", e);
        }
    }

    fn confirm_currency_conversion(&mut self, quote: &ConversionQuote) -> bool {
        self.view.ask_exchange_confirmation(quote).unwrap_or_else(|e| {
            warn!("Failed to read confirmation, declining: {}", e);
            false
        })
    }

    fn report_error(&mut self, error: &TransferError) {
        if let Err(e) = self.view.show_transfer_error(&error.to_string()) {
            warn!("Failed to render error: {}", e);
        }
    }

    fn report_transfer_result(&mut self, success: bool, message: &str) {
        if let Err(e) = self.view.show_transfer_result(success, message) {
            warn!("Failed to render result: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::scripted;
    use tally_bank::config::load_default_config;
    use tally_core::AccountId;

    fn create_test_bank() -> Arc<Bank> {
        Arc::new(Bank::from_config(&load_default_config().unwrap()).unwrap())
    }

    #[test]
    fn test_controller_runs_transfer() {
        let bank = create_test_bank();
        let (console, output) = scripted("alice\nbob\n10\ny\n");
        let mut controller =
            TransferController::new(Arc::clone(&bank), ConsoleTransferView::new(console));

        let result = controller.run().unwrap().unwrap();

        assert!(result.is_completed());
        let text = output.contents();
        assert!(text.contains("Convert 10.00 USD -> 9.00 EUR at 0.9000\nProceed? [y/N]: "));
        assert!(text.ends_with("Progress: [4/4]\nDONE: Transfer completed\n"));
        assert_eq!(
            bank.treasury().balance(&AccountId::new("alice")).unwrap().to_string(),
            "990.00"
        );
    }

    #[test]
    fn test_controller_rejects_bad_amount() {
        let bank = create_test_bank();
        let (console, output) = scripted("alice\nbob\nlots\n");
        let mut controller = TransferController::new(bank, ConsoleTransferView::new(console));

        assert!(controller.run().unwrap().is_none());
        assert_eq!(
            output.contents(),
            "From account: To account: Amount: ERROR: Amount must be a number\n"
        );
    }

    #[test]
    fn test_controller_reports_unknown_account() {
        let bank = create_test_bank();
        let (console, output) = scripted("alice\nzed\n5\n");
        let mut controller = TransferController::new(bank, ConsoleTransferView::new(console));

        let result = controller.run().unwrap().unwrap();

        assert!(!result.is_completed());
        assert!(output.contents().ends_with(
            "Progress: [1/4]\nERROR: Account zed does not exist\nFAILED: Account zed does not exist\n"
        ));
    }
}
