//! Replay log output.
//!
//! A replay log is a plain text file with one `add <priority> <name>` command
//! per line, ordered by arrival. Feeding it back through the interpreter's
//! `load` command rebuilds a queue that serves patients in the same order.

use std::io::{self, Write};

use tracing::debug;
use triage_models::Patient;

use crate::queue::TriageQueue;

/// Formats the command that re-adds `patient`, without a trailing newline.
pub fn log_line(patient: &Patient) -> String {
    format!("add {} {}", patient.priority().name(), patient.name())
}

/// Writes the queue as a replay log and returns the number of lines written.
///
/// Patients are sorted by arrival id, which is unique, so the order is
/// fully determined. The writer is flushed before returning.
pub fn write_log<W: Write>(queue: &TriageQueue, mut out: W) -> io::Result<usize> {
    let mut snapshot: Vec<&Patient> = queue.patients().iter().collect();
    snapshot.sort_by_key(|p| p.arrival());

    for patient in &snapshot {
        writeln!(out, "{}", log_line(patient))?;
    }
    out.flush()?;

    debug!(count = snapshot.len(), "Wrote replay log");
    Ok(snapshot.len())
}
