//! Triage CLI library.
//!
//! This crate provides the command interpreter and interactive REPL for
//! the hospital triage simulator. The interpreter is generic over its
//! output sink so it can be driven from the REPL, a replay file, or tests.

pub mod cli;
pub mod command;
pub mod error;
pub mod help;
pub mod interpreter;
pub mod repl;

pub use command::Command;
pub use error::{CliError, InputError, Result};
pub use interpreter::{Flow, Interpreter};
