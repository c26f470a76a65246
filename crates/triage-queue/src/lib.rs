//! Heap-ordered patient queue for the triage simulator.
//!
//! This crate provides the `TriageQueue`, an array-backed binary min-heap
//! keyed by `(Priority, ArrivalId)`:
//! - Most urgent priority is served first
//! - Equal priorities are served in arrival order
//! - Priorities can be changed in place with re-heapification
//! - The live contents can be written out as a replayable command log
//!
//! # Example
//!
//! ```
//! use triage_models::Priority;
//! use triage_queue::TriageQueue;
//!
//! let mut queue = TriageQueue::new();
//! queue.add(Priority::Emergency, "Bob");
//! queue.add(Priority::Immediate, "Alice");
//!
//! assert_eq!(queue.peek().unwrap().name(), "Alice");
//! assert_eq!(queue.dequeue().unwrap().name(), "Alice");
//! assert_eq!(queue.dequeue().unwrap().name(), "Bob");
//! assert!(queue.dequeue().is_err());
//! ```

pub mod error;
pub mod log;
pub mod queue;

pub use error::{QueueError, Result};
pub use log::{log_line, write_log};
pub use queue::TriageQueue;
