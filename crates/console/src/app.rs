//! Wiring of a front-end to a bank and a console

use clap::ValueEnum;
use log::info;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tally_bank::Bank;
use tally_ports::{CurrencyConverter, TransferResult};

use crate::console::Console;
use crate::mvc::{ConsoleTransferView, TransferController};
use crate::mvp::{ConsolePassiveView, TransferPresenter};
use crate::mvvm::{ConsoleBoundView, TransferViewModel};

/// UI architecture used to drive the transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Pattern {
    /// Model-View-Controller
    #[default]
    Mvc,
    /// Model-View-Presenter
    Mvp,
    /// Model-View-ViewModel
    Mvvm,
}

/// Run a single transfer through the chosen front-end
///
/// Returns `None` when the input was rejected before reaching the bank.
pub fn run<R, W>(
    pattern: Pattern,
    bank: Arc<Bank>,
    console: Console<R, W>,
) -> io::Result<Option<TransferResult>>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    info!("Starting {:?} front-end", pattern);

    let result = match pattern {
        Pattern::Mvc => {
            TransferController::new(bank, ConsoleTransferView::new(console)).run()?
        }
        Pattern::Mvp => TransferPresenter::new(bank, ConsolePassiveView::new(console)).run_once()?,
        Pattern::Mvvm => ConsoleBoundView::new(TransferViewModel::new(bank), console).run_once()?,
    };

    if let Some(result) = &result {
        info!(
            "Transfer {} finished: {:?}",
            result.transfer_id, result.outcome
        );
    }
    Ok(result)
}

/// Print every account with its balance
pub fn list_accounts<R: BufRead, W: Write>(
    bank: &Bank,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    for account in bank.treasury().accounts() {
        let minor_units = bank.converter().minor_units(&account.currency);
        let balance = account.money().with_minor_units(minor_units);
        console.println(&format!("{}: {}", account.id, balance))?;
    }
    Ok(())
}
