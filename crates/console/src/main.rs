mod cli;

use clap::Parser;
use std::sync::Arc;
use tally_bank::Bank;
use tally_bank::config::{load_config, load_default_config};
use tally_console::{CliError, Console, list_accounts};

use crate::cli::Cli;

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_default_config()?,
    };
    let bank = Arc::new(Bank::from_config(&config)?);
    let mut console = Console::stdio();

    if cli.list {
        list_accounts(&bank, &mut console)?;
        return Ok(());
    }

    // Transfer failures are reported on the console, not through the exit code
    tally_console::run(cli.pattern, bank, console)?;
    Ok(())
}
