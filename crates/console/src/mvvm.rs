//! Model-View-ViewModel front-end
//!
//! The view-model exposes input state the view writes, output state the view
//! reads, and callbacks the view binds at construction. It implements
//! `TransferPort` by updating its state and firing the bound callbacks.

use log::{debug, warn};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::sync::Arc;
use tally_bank::Bank;
use tally_core::ConversionQuote;
use tally_ports::{TransferError, TransferPort, TransferResult};

use crate::console::Console;
use crate::input::{TransferForm, is_affirmative};
use crate::render::{
    AMOUNT_PROMPT, FROM_PROMPT, PROCEED_PROMPT, TO_PROMPT, error_line, progress_line, result_line,
};

type ProgressCallback = Box<dyn FnMut(u8, u8)>;
type ErrorCallback = Box<dyn FnMut(&str)>;
type ResultCallback = Box<dyn FnMut(bool, &str)>;
type ConfirmCallback = Box<dyn FnMut(&ConversionQuote) -> bool>;

/// View-model for the transfer form
pub struct TransferViewModel {
    bank: Arc<Bank>,

    // Input state, written by the view
    pub from_id: String,
    pub to_id: String,
    pub amount_text: String,

    // Output state, reset on every run
    progress_events: Vec<(u8, u8)>,
    last_error: Option<String>,
    last_result: Option<(bool, String)>,
    discarded: bool,

    // Bindings
    on_progress: Vec<ProgressCallback>,
    on_error: Vec<ErrorCallback>,
    on_result: Vec<ResultCallback>,
    confirm: Option<ConfirmCallback>,
}

impl TransferViewModel {
    pub fn new(bank: Arc<Bank>) -> Self {
        Self {
            bank,
            from_id: String::new(),
            to_id: String::new(),
            amount_text: String::new(),
            progress_events: Vec::new(),
            last_error: None,
            last_result: None,
            discarded: false,
            on_progress: Vec::new(),
            on_error: Vec::new(),
            on_result: Vec::new(),
            confirm: None,
        }
    }

    pub fn bind_on_progress(&mut self, callback: impl FnMut(u8, u8) + 'static) {
        self.on_progress.push(Box::new(callback));
    }

    pub fn bind_on_error(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_error.push(Box::new(callback));
    }

    pub fn bind_on_result(&mut self, callback: impl FnMut(bool, &str) + 'static) {
        self.on_result.push(Box::new(callback));
    }

    /// Bind the conversion confirmation. Replaces any previous binding.
    pub fn bind_confirm(&mut self, callback: impl FnMut(&ConversionQuote) -> bool + 'static) {
        self.confirm = Some(Box::new(callback));
    }

    pub fn progress_events(&self) -> &[(u8, u8)] {
        &self.progress_events
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn last_result(&self) -> Option<(bool, &str)> {
        self.last_result
            .as_ref()
            .map(|(success, message)| (*success, message.as_str()))
    }

    pub fn is_discarded(&self) -> bool {
        self.discarded
    }

    /// Run a transfer from the current input state
    ///
    /// Returns `None` when the input was rejected before reaching the bank.
    pub fn run_transfer(&mut self) -> Option<TransferResult> {
        self.progress_events.clear();
        self.last_error = None;
        self.last_result = None;
        self.discarded = false;

        let form = TransferForm::new(
            self.from_id.as_str(),
            self.to_id.as_str(),
            self.amount_text.as_str(),
        );
        let request = match form.to_request() {
            Ok(request) => request,
            Err(err) => {
                self.emit_error(&err.to_string());
                return None;
            }
        };

        let bank = Arc::clone(&self.bank);
        Some(bank.transfer(&request, self))
    }

    fn emit_error(&mut self, message: &str) {
        self.last_error = Some(message.to_string());
        for callback in &mut self.on_error {
            callback(message);
        }
    }
}

impl TransferPort for TransferViewModel {
    fn report_transfer_progress(&mut self, step: u8, total: u8) {
        self.progress_events.push((step, total));
        for callback in &mut self.on_progress {
            callback(step, total);
        }
    }

    fn confirm_currency_conversion(&mut self, quote: &ConversionQuote) -> bool {
        match self.confirm.as_mut() {
            Some(confirm) => confirm(quote),
            None => {
                debug!("No confirmation bound, declining {}", quote);
                false
            }
        }
    }

    fn report_error(&mut self, error: &TransferError) {
        self.emit_error(&error.to_string());
    }

    fn discard_transfer(&mut self) {
        self.discarded = true;
    }

    fn report_transfer_result(&mut self, success: bool, message: &str) {
        self.last_result = Some((success, message.to_string()));
        for callback in &mut self.on_result {
            callback(success, message);
        }
    }
}

/// Console view bound to a view-model
pub struct ConsoleBoundView<R, W> {
    console: Rc<RefCell<Console<R, W>>>,
    view_model: TransferViewModel,
}

impl<R: BufRead + 'static, W: Write + 'static> ConsoleBoundView<R, W> {
    /// Bind every view-model callback to console rendering
    pub fn new(mut view_model: TransferViewModel, console: Console<R, W>) -> Self {
        let console = Rc::new(RefCell::new(console));

        let c = Rc::clone(&console);
        view_model.bind_on_progress(move |step, total| {
            print_line(&c, &progress_line(step, total));
        });

        let c = Rc::clone(&console);
        view_model.bind_on_error(move |message| {
            print_line(&c, &error_line(message));
        });

        let c = Rc::clone(&console);
        view_model.bind_on_result(move |success, message| {
            print_line(&c, &result_line(success, message));
        });

        let c = Rc::clone(&console);
        view_model.bind_confirm(move |quote| {
            ask_confirmation(&c, quote).unwrap_or_else(|e| {
                warn!("Failed to read confirmation, declining: {}", e);
                false
            })
        });

        Self {
            console,
            view_model,
        }
    }

    /// Fill the view-model's inputs from the console, then run the transfer
    pub fn run_once(&mut self) -> io::Result<Option<TransferResult>> {
        {
            let mut console = self.console.borrow_mut();
            self.view_model.from_id = console.prompt(FROM_PROMPT)?;
            self.view_model.to_id = console.prompt(TO_PROMPT)?;
            self.view_model.amount_text = console.prompt(AMOUNT_PROMPT)?;
        }

        Ok(self.view_model.run_transfer())
    }

    pub fn view_model(&self) -> &TransferViewModel {
        &self.view_model
    }
}

fn ask_confirmation<R: BufRead, W: Write>(
    console: &RefCell<Console<R, W>>,
    quote: &ConversionQuote,
) -> io::Result<bool> {
    let mut console = console.borrow_mut();
    console.println(&quote.to_string())?;
    let answer = console.prompt(PROCEED_PROMPT)?;
    Ok(is_affirmative(&answer))
}

fn print_line<R: BufRead, W: Write>(console: &RefCell<Console<R, W>>, line: &str) {
    if let Err(e) = console.borrow_mut().println(line) {
        warn!("Failed to render '{}': {}", line, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::scripted;
    use std::cell::Cell;
    use tally_bank::config::load_default_config;
    use tally_core::AccountId;

    fn create_test_bank() -> Arc<Bank> {
        Arc::new(Bank::from_config(&load_default_config().unwrap()).unwrap())
    }

    fn create_view_model(from: &str, to: &str, amount: &str) -> TransferViewModel {
        let mut vm = TransferViewModel::new(create_test_bank());
        vm.from_id = from.to_string();
        vm.to_id = to.to_string();
        vm.amount_text = amount.to_string();
        vm
    }

    #[test]
    fn test_view_model_state_after_success() {
        let mut vm = create_view_model("alice", "bob", "10");
        vm.bind_confirm(|_| true);

        let result = vm.run_transfer().unwrap();

        assert!(result.is_completed());
        assert_eq!(vm.progress_events(), &[(1, 4), (2, 4), (3, 4), (4, 4)]);
        assert_eq!(vm.last_result(), Some((true, "Transfer completed")));
        assert_eq!(vm.last_error(), None);
        assert!(!vm.is_discarded());
    }

    #[test]
    fn test_unbound_confirmation_declines() {
        let mut vm = create_view_model("alice", "bob", "10");

        let result = vm.run_transfer().unwrap();

        assert!(!result.is_completed());
        assert!(vm.is_discarded());
        assert_eq!(vm.progress_events(), &[(1, 4), (2, 4)]);
        assert_eq!(
            vm.last_result(),
            Some((false, "Currency conversion not approved"))
        );
    }

    #[test]
    fn test_callbacks_fire_in_order() {
        let mut vm = create_view_model("bob", "alice", "1000");
        let log = Rc::new(RefCell::new(Vec::new()));

        let l = Rc::clone(&log);
        vm.bind_on_progress(move |step, _| l.borrow_mut().push(format!("progress {}", step)));
        let l = Rc::clone(&log);
        vm.bind_on_error(move |message| l.borrow_mut().push(format!("error {}", message)));
        let l = Rc::clone(&log);
        vm.bind_on_result(move |success, _| l.borrow_mut().push(format!("result {}", success)));

        vm.run_transfer();

        assert_eq!(
            *log.borrow(),
            vec![
                "progress 1",
                "error Insufficient funds in bob: requested 1000, available 100.00",
                "result false",
            ]
        );
        assert!(vm.is_discarded());
    }

    #[test]
    fn test_invalid_input_never_reaches_bank() {
        let mut vm = create_view_model("alice", "bob", "abc");
        let fired = Rc::new(Cell::new(0));
        let f = Rc::clone(&fired);
        vm.bind_on_error(move |_| f.set(f.get() + 1));

        assert!(vm.run_transfer().is_none());
        assert_eq!(vm.last_error(), Some("Amount must be a number"));
        assert_eq!(fired.get(), 1);
        assert!(vm.progress_events().is_empty());
    }

    #[test]
    fn test_state_resets_between_runs() {
        let mut vm = create_view_model("alice", "bob", "abc");
        vm.bind_confirm(|_| true);
        vm.run_transfer();
        assert!(vm.last_error().is_some());

        vm.amount_text = "5".to_string();
        vm.run_transfer().unwrap();

        assert_eq!(vm.last_error(), None);
        assert_eq!(vm.last_result(), Some((true, "Transfer completed")));
    }

    #[test]
    fn test_bound_view_renders_through_console() {
        let bank = create_test_bank();
        let (console, output) = scripted("alice\nbob\n10\nY\n");
        let mut view = ConsoleBoundView::new(TransferViewModel::new(Arc::clone(&bank)), console);

        let result = view.run_once().unwrap().unwrap();

        assert!(result.is_completed());
        assert_eq!(
            output.contents(),
            "From account: To account: Amount: \
             Progress: [1/4]\n\
             Progress: [2/4]\n\
             Convert 10.00 USD -> 9.00 EUR at 0.9000\n\
             Proceed? [y/N]: \
             Progress: [3/4]\n\
             Progress: [4/4]\n\
             DONE: Transfer completed\n"
        );
        assert_eq!(view.view_model().progress_events().len(), 4);
        assert_eq!(
            bank.treasury().balance(&AccountId::new("bob")).unwrap().to_string(),
            "109.00"
        );
    }
}
