//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Environment variable overriding the state directory.
pub const STATE_DIR_ENV: &str = "TRIAGE_STATE_DIR";

/// Default state directory name under home.
const DEFAULT_STATE_DIR: &str = ".triage";

/// History file name inside the state directory.
const HISTORY_FILE: &str = "repl_history.txt";

/// Triage - hospital emergency room triage simulator
#[derive(Parser, Debug)]
#[command(name = "triage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to state directory (REPL history)
    #[arg(short, long, env = STATE_DIR_ENV)]
    pub state_dir: Option<PathBuf>,

    /// Do not load or save REPL history
    #[arg(long)]
    pub no_history: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive prompt (default)
    Repl,

    /// Run every command in a file, then exit
    Replay {
        /// File with one command per line
        #[arg(required = true)]
        file: PathBuf,
    },
}

impl Cli {
    /// Returns the state directory path, using default if not specified.
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|h| h.join(DEFAULT_STATE_DIR))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
        })
    }

    /// Returns the REPL history file, or `None` when history is disabled.
    pub fn history_path(&self) -> Option<PathBuf> {
        if self.no_history {
            None
        } else {
            Some(self.state_dir().join(HISTORY_FILE))
        }
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
