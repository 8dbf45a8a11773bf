//! Tally Console
//!
//! Three console front-ends over the same transfer domain. Each implements
//! `TransferPort` in its own architectural style:
//!
//! - **MVC**: the controller pulls input from the view and drives the bank
//! - **MVP**: a passive view hands raw input to the presenter, which formats everything
//! - **MVVM**: the view binds callbacks on a view-model that holds the form state

pub mod app;
pub mod console;
pub mod error;
pub mod input;
pub mod mvc;
pub mod mvp;
pub mod mvvm;
pub mod render;

pub use app::{Pattern, list_accounts, run};
pub use console::Console;
pub use error::CliError;
pub use input::{InputError, TransferForm, parse_amount};
