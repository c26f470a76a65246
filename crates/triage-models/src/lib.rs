//! Core data models for the triage simulator.
//!
//! This crate provides the value types shared by the queue and the
//! command interpreter: the four fixed priority levels, arrival ids,
//! and the patient record itself.

pub mod ids;
pub mod patient;
pub mod priority;

// Re-export main types
pub use ids::ArrivalId;
pub use patient::Patient;
pub use priority::{Priority, UnknownPriority};
