//! TriageQueue - binary min-heap over `(priority, arrival)`.
//!
//! The heap lives in a single `Vec<Patient>` used as an implicit binary
//! tree: the children of slot `i` are `2i + 1` and `2i + 2`, its parent is
//! `(i - 1) / 2`. Every non-root slot holds a key greater than or equal to
//! its parent's key.

use std::fmt;

use tracing::{debug, trace};
use triage_models::{ArrivalId, Patient, Priority};

use crate::error::{QueueError, Result};

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left(index: usize) -> usize {
    2 * index + 1
}

fn right(index: usize) -> usize {
    2 * index + 2
}

/// Priority queue of waiting patients.
///
/// # Ordering Rules
///
/// 1. Lower priority code comes first (Immediate > Emergency > Urgent > Minimal)
/// 2. For the same priority, earlier arrival comes first (FIFO within priority)
///
/// # Arrival Numbering
///
/// The queue owns the arrival counter. It starts at 1 and grows by one on
/// every [`add`](TriageQueue::add); dequeues and [`clear`](TriageQueue::clear)
/// never rewind it, so an id is never handed out twice.
///
/// # Example
///
/// ```
/// use triage_models::Priority;
/// use triage_queue::TriageQueue;
///
/// let mut queue = TriageQueue::new();
/// let dan = queue.add(Priority::Minimal, "Dan");
/// queue.add(Priority::Immediate, "Eve");
///
/// let index = queue.position_of(dan).unwrap();
/// queue.change_priority(index, Priority::Immediate).unwrap();
///
/// // Both are immediate now, Dan arrived first.
/// assert_eq!(queue.dequeue().unwrap().name(), "Dan");
/// assert_eq!(queue.dequeue().unwrap().name(), "Eve");
/// ```
#[derive(Debug, Clone)]
pub struct TriageQueue {
    /// Heap storage; the invariant holds between public calls.
    patients: Vec<Patient>,
    /// Arrival id assigned by the next add.
    next_arrival: ArrivalId,
}

impl TriageQueue {
    /// Creates an empty queue whose first patient will get arrival id 1.
    pub fn new() -> Self {
        Self {
            patients: Vec::new(),
            next_arrival: ArrivalId::first(),
        }
    }

    /// Adds a patient and returns the arrival id assigned to them.
    ///
    /// The caller is responsible for passing a non-empty name; the
    /// interpreter validates input before it reaches the queue.
    pub fn add(&mut self, priority: Priority, name: impl Into<String>) -> ArrivalId {
        let arrival = self.next_arrival;
        self.next_arrival = arrival.next();

        let patient = Patient::new(priority, arrival, name);
        debug!(arrival = %arrival, priority = %priority, name = patient.name(), "Adding patient");

        self.patients.push(patient);
        self.percolate_up(self.patients.len() - 1);

        arrival
    }

    /// Returns the most urgent patient without removing them.
    pub fn peek(&self) -> Result<&Patient> {
        self.patients.first().ok_or(QueueError::Empty)
    }

    /// Removes and returns the most urgent patient.
    pub fn dequeue(&mut self) -> Result<Patient> {
        if self.patients.is_empty() {
            return Err(QueueError::Empty);
        }

        // Move the last slot into the root, then sift it down.
        let served = self.patients.swap_remove(0);
        if !self.patients.is_empty() {
            self.percolate_down(0);
        }

        debug!(arrival = %served.arrival(), name = served.name(), "Dequeued patient");
        Ok(served)
    }

    /// Replaces the priority of the patient stored at `index`.
    ///
    /// `index` is a position in [`patients`](TriageQueue::patients), usually
    /// obtained from [`position_of`](TriageQueue::position_of). The arrival id
    /// and name are kept. A single key change can only break the heap in
    /// one direction, so the record is sifted either up (when it now beats
    /// its parent) or down, never both.
    pub fn change_priority(&mut self, index: usize, priority: Priority) -> Result<()> {
        let len = self.patients.len();
        let current = self
            .patients
            .get(index)
            .ok_or(QueueError::IndexOutOfRange { index, len })?;

        debug!(
            arrival = %current.arrival(),
            from = %current.priority(),
            to = %priority,
            index,
            "Changing patient priority"
        );

        let replacement = current.with_priority(priority);
        self.patients[index] = replacement;

        if index > 0 && self.patients[index].key() < self.patients[parent(index)].key() {
            self.percolate_up(index);
        } else {
            self.percolate_down(index);
        }

        Ok(())
    }

    /// Returns the storage index of the patient with the given arrival id.
    ///
    /// This is a linear scan over heap order; the result is a live index
    /// suitable for [`change_priority`](TriageQueue::change_priority) until
    /// the queue is next mutated.
    pub fn position_of(&self, arrival: ArrivalId) -> Option<usize> {
        self.patients.iter().position(|p| p.arrival() == arrival)
    }

    /// Returns the patients in storage (heap) order, not arrival order.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Returns the number of waiting patients.
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// Returns true if no patients are waiting.
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Returns the arrival id the next add will assign.
    pub fn next_arrival(&self) -> ArrivalId {
        self.next_arrival
    }

    /// Removes every waiting patient. The arrival counter is kept.
    pub fn clear(&mut self) {
        debug!(count = self.patients.len(), "Clearing queue");
        self.patients.clear();
    }

    /// Returns true if every non-root slot's key is >= its parent's key.
    pub fn check_invariant(&self) -> bool {
        (1..self.patients.len())
            .all(|i| self.patients[parent(i)].key() <= self.patients[i].key())
    }

    fn percolate_up(&mut self, mut index: usize) {
        while index > 0 {
            let up = parent(index);
            if self.patients[up].key() > self.patients[index].key() {
                trace!(from = index, to = up, "Percolate up");
                self.patients.swap(index, up);
                index = up;
            } else {
                break;
            }
        }
    }

    fn percolate_down(&mut self, mut index: usize) {
        let len = self.patients.len();
        loop {
            let mut smallest = index;

            if left(index) < len && self.patients[left(index)].key() < self.patients[smallest].key()
            {
                smallest = left(index);
            }
            if right(index) < len
                && self.patients[right(index)].key() < self.patients[smallest].key()
            {
                smallest = right(index);
            }

            if smallest == index {
                break;
            }

            trace!(from = index, to = smallest, "Percolate down");
            self.patients.swap(index, smallest);
            index = smallest;
        }
    }
}

impl Default for TriageQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TriageQueue {
    /// Renders storage order as `[0] #1 immediate Alice`, one slot per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.patients.iter().enumerate() {
            writeln!(f, "[{}] #{} {} {}", i, p.arrival(), p.priority(), p.name())?;
        }
        Ok(())
    }
}
