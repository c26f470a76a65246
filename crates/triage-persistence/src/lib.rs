//! File I/O for the triage simulator.
//!
//! This crate provides the two file operations the interpreter needs:
//! crash-safe output for `save` (write to a temp file, then rename) and
//! line reading for `load`.
//!
//! # Example
//!
//! ```no_run
//! use std::io::Write;
//! use std::path::Path;
//! use triage_persistence::{atomic_write_with, read_lines};
//!
//! let path = Path::new("/tmp/triage/queue.txt");
//! atomic_write_with(path, |out| writeln!(out, "add urgent Ann")).unwrap();
//!
//! let lines = read_lines(path).unwrap();
//! assert_eq!(lines, vec!["add urgent Ann".to_string()]);
//! ```

pub mod atomic;
pub mod error;

pub use atomic::{atomic_write_with, read_lines};
pub use error::{PersistenceError, Result};
