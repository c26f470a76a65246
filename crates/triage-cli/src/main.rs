//! Triage CLI entry point.

use std::io;
use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use triage_cli::cli::{Cli, Commands};
use triage_cli::repl::Repl;
use triage_cli::{Command, Interpreter, Result};

fn main() {
    // Load .env.local if it exists (for RUST_LOG, TRIAGE_STATE_DIR)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    // Initialize tracing on stderr so it stays out of command output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let result = match &cli.command {
        Some(Commands::Replay { file }) => run_replay(file),
        Some(Commands::Repl) | None => run_repl(&cli),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_repl(cli: &Cli) -> Result<()> {
    let mut repl = Repl::new(cli.history_path())?;
    repl.run()
}

fn run_replay(file: &Path) -> Result<()> {
    info!(file = %file.display(), "Replaying command file");
    let mut interpreter = Interpreter::new(io::stdout());
    interpreter.execute(Command::Load(file.to_path_buf()))?;
    Ok(())
}
