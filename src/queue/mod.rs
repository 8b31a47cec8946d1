//! Task Queue Module
//!
//! Provides a min-priority task queue with FIFO ordering among equal
//! priorities.

mod heap;
mod task;


use crate::error::{Error, Result};

// Re-export public types
pub use heap::PriorityTaskQueue;
pub use task::Task;

// == Public Constants ==
/// Most urgent priority accepted by default
pub const DEFAULT_MIN_PRIORITY: i64 = 1;

/// Least urgent priority accepted by default
pub const DEFAULT_MAX_PRIORITY: i64 = 10;

// == Priority Bounds ==
/// Inclusive range of priorities a queue accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityBounds {
    min: i64,
    max: i64,
}

impl PriorityBounds {
    /// Creates a range accepting `min..=max`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidBounds`] if `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Checks whether `priority` falls inside the range.
    pub fn contains(&self, priority: i64) -> bool {
        (self.min..=self.max).contains(&priority)
    }

    /// Returns `priority` unchanged if it is in range.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPriority`] otherwise.
    pub fn check(&self, priority: i64) -> Result<i64> {
        if self.contains(priority) {
            Ok(priority)
        } else {
            Err(Error::InvalidPriority {
                priority,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for PriorityBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_PRIORITY,
            max: DEFAULT_MAX_PRIORITY,
        }
    }
}
