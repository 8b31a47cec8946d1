//! Task Module
//!
//! Defines the queued task record and its service ordering.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};

// == Task ==
/// A unit of work waiting in a [`PriorityTaskQueue`](crate::queue::PriorityTaskQueue).
///
/// Tasks order by `priority` (lower first), then by `sequence` (earlier
/// first). `created_at` is informational only and never used for ordering.
#[derive(Debug, Clone)]
pub struct Task<T> {
    /// Task name/description
    pub name: String,
    /// Priority level, lower values are served first
    pub priority: i64,
    /// Insertion order within the owning queue
    pub sequence: u64,
    /// Caller supplied data
    pub payload: T,
    /// Time the task was queued
    pub created_at: DateTime<Utc>,
}

impl<T> Task<T> {
    pub(crate) fn new(name: String, priority: i64, sequence: u64, payload: T) -> Self {
        Self {
            name,
            priority,
            sequence,
            payload,
            created_at: Utc::now(),
        }
    }

    /// The `(priority, sequence)` pair that decides service order.
    pub fn order_key(&self) -> (i64, u64) {
        (self.priority, self.sequence)
    }
}

impl<T> PartialEq for Task<T> {
    fn eq(&self, other: &Self) -> bool {
        self.order_key() == other.order_key()
    }
}

impl<T> Eq for Task<T> {}

impl<T> PartialOrd for Task<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Task<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl<T> fmt::Display for Task<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task('{}', priority={})", self.name, self.priority)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_priority_sorts_first() {
        let urgent = Task::new("urgent".to_string(), 1, 5, ());
        let later = Task::new("later".to_string(), 3, 0, ());
        assert!(urgent < later);
    }

    #[test]
    fn test_sequence_breaks_ties() {
        let first = Task::new("first".to_string(), 2, 0, ());
        let second = Task::new("second".to_string(), 2, 1, ());
        assert!(first < second);
        assert_eq!(first.cmp(&first.clone()), Ordering::Equal);
    }

    #[test]
    fn test_equality_ignores_name_and_payload() {
        let a = Task::new("a".to_string(), 4, 7, 1);
        let b = Task::new("b".to_string(), 4, 7, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let task = Task::new("Write report".to_string(), 2, 0, ());
        assert_eq!(task.to_string(), "Task('Write report', priority=2)");
    }
}
