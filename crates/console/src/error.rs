use tally_bank::ConfigError;
use thiserror::Error;

/// Startup and I/O failures, mapped to exit codes
///
/// Transfer outcomes are not errors here: a failed transfer is reported on
/// the console and the process still exits with 0.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Io(_) => 1,
        }
    }
}
