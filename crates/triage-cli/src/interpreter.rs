//! Command interpreter: runs parsed commands against a triage queue.
//!
//! The interpreter owns the queue and an output sink. Every user-facing
//! problem (bad input, empty queue, missing file, failed save) is written
//! to the sink and the session goes on; only `quit` ends it.

use std::io::Write;
use std::path::Path;

use tracing::{debug, info, warn};
use triage_models::{ArrivalId, Priority};
use triage_persistence::{atomic_write_with, read_lines, PersistenceError};
use triage_queue::{write_log, QueueError, TriageQueue};

use crate::command::Command;
use crate::error::Result;
use crate::help::write_help;

/// Prompt shown by the REPL and echoed before each replayed line.
pub const PROMPT: &str = "triage> ";

/// Maximum nesting of `load` commands inside loaded files.
pub const MAX_LOAD_DEPTH: usize = 16;

const MSG_NO_PATIENTS: &str = "There are no patients in the waiting area.";

/// What the read loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Executes command lines against an owned [`TriageQueue`].
pub struct Interpreter<W: Write> {
    queue: TriageQueue,
    out: W,
    /// Current `load` nesting.
    depth: usize,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with an empty queue.
    pub fn new(out: W) -> Self {
        Self {
            queue: TriageQueue::new(),
            out,
            depth: 0,
        }
    }

    pub fn queue(&self) -> &TriageQueue {
        &self.queue
    }

    /// Consumes the interpreter and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Parses and runs one line.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let command = Command::parse(line);
        debug!(?command, "Parsed command");
        self.execute(command)
    }

    /// Runs one parsed command.
    ///
    /// Errors returned here come only from writing to the output sink.
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Add { priority, name } => self.cmd_add(priority, name)?,
            Command::Next => self.cmd_next()?,
            Command::Peek => self.cmd_peek()?,
            Command::List => self.cmd_list()?,
            Command::Change { id, priority } => self.cmd_change(id, priority)?,
            Command::Load(path) => self.cmd_load(&path)?,
            Command::Save(path) => self.cmd_save(&path)?,
            Command::Debug => self.cmd_debug()?,
            Command::Help => write_help(&mut self.out)?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => writeln!(self.out, "No command entered.")?,
            Command::Invalid(e) => writeln!(self.out, "Error: {}", e)?,
            Command::Unknown(line) => {
                writeln!(self.out, "Error: unrecognized command: {}", line)?
            }
        }
        Ok(Flow::Continue)
    }

    fn cmd_add(&mut self, priority: Priority, name: String) -> Result<()> {
        let arrival = self.queue.add(priority, name.as_str());
        info!(arrival = %arrival, priority = %priority, "Patient added");
        writeln!(self.out, "Added patient \"{}\" to the priority system", name)?;
        Ok(())
    }

    fn cmd_next(&mut self) -> Result<()> {
        match self.queue.dequeue() {
            Ok(patient) => {
                info!(arrival = %patient.arrival(), "Patient served");
                writeln!(self.out, "This patient will now be seen: {}", patient.name())?;
            }
            Err(QueueError::Empty) => writeln!(self.out, "{}", MSG_NO_PATIENTS)?,
            Err(e) => writeln!(self.out, "Error: {}", e)?,
        }
        Ok(())
    }

    fn cmd_peek(&mut self) -> Result<()> {
        match self.queue.peek() {
            Ok(patient) => writeln!(
                self.out,
                "Highest priority patient to be called next: {}",
                patient.name()
            )?,
            Err(QueueError::Empty) => writeln!(self.out, "{}", MSG_NO_PATIENTS)?,
            Err(e) => writeln!(self.out, "Error: {}", e)?,
        }
        Ok(())
    }

    fn cmd_list(&mut self) -> Result<()> {
        writeln!(self.out, "# patients waiting: {}", self.queue.len())?;
        writeln!(self.out)?;
        writeln!(self.out, "  Arrival #   Priority Code   Patient Name")?;
        writeln!(self.out, "+-----------+---------------+--------------+")?;
        for patient in self.queue.patients() {
            writeln!(
                self.out,
                "      {:<6}  {:<14}  {}",
                patient.arrival(),
                patient.priority(),
                patient.name()
            )?;
        }
        Ok(())
    }

    fn cmd_change(&mut self, id: ArrivalId, priority: Priority) -> Result<()> {
        let Some(index) = self.queue.position_of(id) else {
            writeln!(self.out, "Error: no patient with the given id was found")?;
            return Ok(());
        };

        let name = self.queue.patients()[index].name().to_string();
        match self.queue.change_priority(index, priority) {
            Ok(()) => writeln!(
                self.out,
                "Changed patient \"{}\"'s priority to {}",
                name, priority
            )?,
            Err(e) => writeln!(self.out, "Error: {}", e)?,
        }
        Ok(())
    }

    fn cmd_load(&mut self, path: &Path) -> Result<()> {
        if self.depth >= MAX_LOAD_DEPTH {
            warn!(path = %path.display(), "Load nesting limit reached");
            writeln!(
                self.out,
                "Error: cannot load {}: files nested deeper than {}",
                path.display(),
                MAX_LOAD_DEPTH
            )?;
            return Ok(());
        }

        let lines = match read_lines(path) {
            Ok(lines) => lines,
            Err(PersistenceError::NotFound { .. }) => {
                writeln!(self.out, "File {} was not found.", path.display())?;
                return Ok(());
            }
            Err(e) => {
                writeln!(self.out, "Error: {}", e)?;
                return Ok(());
            }
        };

        info!(path = %path.display(), lines = lines.len(), "Replaying file");
        self.depth += 1;
        let result = self.replay(&lines);
        self.depth -= 1;
        result
    }

    fn replay(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.out)?;
            writeln!(self.out, "{}{}", PROMPT, line)?;
            // `quit` inside a file ends the replay, not the session.
            if self.execute_line(line)? == Flow::Quit {
                debug!("Quit inside loaded file");
                break;
            }
        }
        Ok(())
    }

    fn cmd_save(&mut self, path: &Path) -> Result<()> {
        let queue = &self.queue;
        match atomic_write_with(path, |out| write_log(queue, out)) {
            Ok(count) => {
                info!(path = %path.display(), count, "Saved queue");
                writeln!(self.out, "Saved {} patients to file {}", count, path.display())?;
            }
            Err(e) => {
                warn!(error = %e, "Save failed");
                writeln!(self.out, "Error: {}", e)?;
            }
        }
        Ok(())
    }

    fn cmd_debug(&mut self) -> Result<()> {
        write!(self.out, "{}", self.queue)?;
        writeln!(
            self.out,
            "size: {}, next arrival: {}, heap ok: {}",
            self.queue.len(),
            self.queue.next_arrival(),
            self.queue.check_invariant()
        )?;
        Ok(())
    }
}
