use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tally_console::Pattern;

/// Transfer money between accounts, with currency conversion
#[derive(Debug, Parser)]
#[command(name = "tally", version, about)]
pub struct Cli {
    /// UI architecture driving the transfer
    #[arg(long, value_enum, default_value_t = Pattern::Mvc)]
    pub pattern: Pattern,

    /// Seed file with accounts and rates (JSON); the built-in seed is used otherwise
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the accounts and exit
    #[arg(long)]
    pub list: bool,

    /// Raise log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
