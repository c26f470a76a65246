//! Error types for the triage CLI.

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Problems with a command line typed by the user.
///
/// These never end the session; the interpreter prints them and reads the
/// next line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("missing priority code")]
    MissingPriority,

    #[error("priority code is not recognized: {0}")]
    UnknownPriority(String),

    #[error("missing patient name")]
    MissingName,

    #[error("no patient id provided")]
    MissingId,

    #[error("no file name entered")]
    MissingFileName,
}

/// Errors that stop the CLI itself.
#[derive(Error, Debug)]
pub enum CliError {
    /// Line editor failure.
    #[error("readline error: {0}")]
    Readline(#[from] ReadlineError),

    /// Writing to the output stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
