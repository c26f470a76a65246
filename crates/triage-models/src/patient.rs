//! Patient records.

use serde::{Deserialize, Serialize};

use crate::ids::ArrivalId;
use crate::priority::Priority;

/// A patient waiting in the triage queue.
///
/// Records are immutable once created. Changing a patient's priority
/// produces a replacement record via [`Patient::with_priority`] that
/// keeps the arrival id and name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    priority: Priority,
    arrival: ArrivalId,
    name: String,
}

impl Patient {
    /// Creates a new patient record.
    pub fn new(priority: Priority, arrival: ArrivalId, name: impl Into<String>) -> Self {
        Self {
            priority,
            arrival,
            name: name.into(),
        }
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn arrival(&self) -> ArrivalId {
        self.arrival
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordering key: priority first, then arrival order.
    pub fn key(&self) -> (Priority, ArrivalId) {
        (self.priority, self.arrival)
    }

    /// Returns a copy of this record with a different priority.
    pub fn with_priority(&self, priority: Priority) -> Self {
        Self {
            priority,
            arrival: self.arrival,
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_orders_by_priority_then_arrival() {
        let early_minimal = Patient::new(Priority::Minimal, ArrivalId::new(1), "Dan");
        let late_immediate = Patient::new(Priority::Immediate, ArrivalId::new(2), "Eve");
        let later_immediate = Patient::new(Priority::Immediate, ArrivalId::new(3), "Fay");

        assert!(late_immediate.key() < early_minimal.key());
        assert!(late_immediate.key() < later_immediate.key());
    }

    #[test]
    fn test_with_priority_keeps_identity() {
        let patient = Patient::new(Priority::Minimal, ArrivalId::new(4), "Ann Lee");
        let changed = patient.with_priority(Priority::Urgent);

        assert_eq!(changed.priority(), Priority::Urgent);
        assert_eq!(changed.arrival(), ArrivalId::new(4));
        assert_eq!(changed.name(), "Ann Lee");
        assert_eq!(patient.priority(), Priority::Minimal);
    }
}
