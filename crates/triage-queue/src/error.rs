//! Error types for triage queue operations.

use thiserror::Error;

/// Errors that can occur during triage queue operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// Peek or dequeue on a queue with no patients.
    #[error("no patients waiting")]
    Empty,

    /// A positional index past the end of the heap storage.
    #[error("index {index} out of range for queue of {len} patients")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type alias for triage queue operations.
pub type Result<T> = std::result::Result<T, QueueError>;
