//! Interactive REPL (Read-Eval-Print Loop) for the triage system.

use std::fs;
use std::io::{self, Stdout};
use std::path::PathBuf;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing::{debug, warn};

use crate::command::Command;
use crate::error::Result;
use crate::interpreter::{Flow, Interpreter, PROMPT};

const MSG_WELCOME: &str = "Welcome to the hospital emergency room triaging system.";
const MSG_GOODBYE: &str = "Thank you for using the triage system. Goodbye.";

/// Tab completion for command words.
struct CommandCompleter;

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];

        // Only the command word is completed.
        if prefix.contains(char::is_whitespace) {
            return Ok((0, vec![]));
        }

        let matches: Vec<Pair> = Command::NAMES
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();

        Ok((0, matches))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}
impl Helper for CommandCompleter {}

/// REPL state
pub struct Repl {
    editor: Editor<CommandCompleter, DefaultHistory>,
    interpreter: Interpreter<Stdout>,
    history_path: Option<PathBuf>,
}

impl Repl {
    /// Creates a new REPL instance.
    ///
    /// History is read from and written to `history_path` when given.
    pub fn new(history_path: Option<PathBuf>) -> Result<Self> {
        let config = rustyline::Config::builder()
            .completion_type(rustyline::CompletionType::List)
            .auto_add_history(false)
            .build();
        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(CommandCompleter));

        if let Some(path) = &history_path {
            if path.exists() {
                let _ = editor.load_history(path);
            }
        }

        Ok(Self {
            editor,
            interpreter: Interpreter::new(io::stdout()),
            history_path,
        })
    }

    /// Runs the REPL loop until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        println!("{}", MSG_WELCOME);

        loop {
            println!();
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str())?;
                    }

                    match self.interpreter.execute_line(&line) {
                        Ok(Flow::Quit) => break,
                        Ok(Flow::Continue) => {}
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    // Don't exit on Ctrl+C, just clear line
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        self.save_history();
        println!("{}", MSG_GOODBYE);
        Ok(())
    }

    fn save_history(&mut self) {
        let Some(path) = &self.history_path else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match self.editor.save_history(path) {
            Ok(()) => debug!(path = %path.display(), "Saved history"),
            Err(e) => warn!(path = %path.display(), error = %e, "Failed to save history"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(line: &str) -> Vec<String> {
        let completer = CommandCompleter;
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        let (pos, matches) = completer.complete(line, line.len(), &ctx).unwrap();
        assert_eq!(pos, 0);
        matches.into_iter().map(|m| m.replacement).collect()
    }

    #[test]
    fn test_completer_matches_prefix() {
        assert_eq!(complete("ad"), vec!["add"]);
        assert_eq!(complete("ch"), vec!["change"]);
    }

    #[test]
    fn test_completer_multiple_matches() {
        let matches = complete("l");
        assert_eq!(matches, vec!["list", "load"]);
    }

    #[test]
    fn test_completer_no_match() {
        assert!(complete("xyz").is_empty());
    }

    #[test]
    fn test_completer_skips_arguments() {
        assert!(complete("add ur").is_empty());
    }
}
