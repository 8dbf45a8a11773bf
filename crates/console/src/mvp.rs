//! Model-View-Presenter front-end (passive view)
//!
//! The view only hands over raw submissions and draws the text it is given.
//! The presenter parses, calls the bank, formats every line and implements
//! `TransferPort`.

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

/// What a passive view can do: hand over input, draw text, ask a question
pub trait PassiveView {
    /// Next raw submission, or `None` when there is nothing more to submit
    fn next_submission(&mut self) -> io::Result<Option<TransferForm>>;

    fn render_line(&mut self, line: &str) -> io::Result<()>;

    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// Passive view over a console
pub struct ConsolePassiveView<R, W> {
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> ConsolePassiveView<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self { console }
    }
}

impl<R: BufRead, W: Write> PassiveView for ConsolePassiveView<R, W> {
    fn next_submission(&mut self) -> io::Result<Option<TransferForm>> {
        let from_id = self.console.prompt(FROM_PROMPT)?;
        let to_id = self.console.prompt(TO_PROMPT)?;
        let amount_text = self.console.prompt(AMOUNT_PROMPT)?;
        Ok(Some(TransferForm::new(from_id, to_id, amount_text)))
    }

    fn render_line(&mut self, line: &str) -> io::Result<()> {
        self.console.println(line)
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.console.prompt(question)
    }
}

/// Presenter: owns the presentation logic for one transfer form
pub struct TransferPresenter<V> {
    bank: Arc<Bank>,
    view: V,
}

impl<V: PassiveView> TransferPresenter<V> {
    pub fn new(bank: Arc<Bank>, view: V) -> Self {
        Self { bank, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Take one submission from the view and handle it
    pub fn run_once(&mut self) -> io::Result<Option<TransferResult>> {
        match self.view.next_submission()? {
            Some(form) => self.on_submit(form),
            None => Ok(None),
        }
    }

    /// View event: raw input submitted
    pub fn on_submit(&mut self, form: TransferForm) -> io::Result<Option<TransferResult>> {
        let request = match form.to_request() {
            Ok(request) => request,
            Err(err) => {
                self.view.render_line(&error_line(&err.to_string()))?;
                return Ok(None);
            }
        };

        let bank = Arc::clone(&self.bank);
        Ok(Some(bank.transfer(&request, self)))
    }

    fn render(&mut self, line: &str) {
        if let Err(e) = self.view.render_line(line) {
            warn!("Failed to render '{}': {}", line, e);
        }
    }
}

impl<V: PassiveView> TransferPort for TransferPresenter<V> {
    fn report_transfer_progress(&mut self, step: u8, total: u8) {
        self.render(&progress_line(step, total));
    }

    fn confirm_currency_conversion(&mut self, quote: &ConversionQuote) -> bool {
        self.render(&quote.to_string());
        match self.view.ask(PROCEED_PROMPT) {
            Ok(answer) => is_affirmative(&answer),
            Err(e) => {
                warn!("Failed to read confirmation, declining: {}", e);
                false
            }
        }
    }

    fn report_error(&mut self, error: &TransferError) {
        self.render(&error_line(&error.to_string()));
    }

    fn report_transfer_result(&mut self, success: bool, message: &str) {
        self.render(&result_line(success, message));
    }
}
