use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported to the user as an alert. None of them end the session.
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("Please enter a valid number.")]
    InvalidInput { input: String },

    #[error("Not enough operands in the stack.")]
    InsufficientOperands { available: usize },

    #[error("Division by zero is not allowed.")]
    DivisionByZero,
}

/// Errors that end the program.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
