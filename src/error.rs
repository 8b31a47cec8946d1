//! Error types for the cache and task queue
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Error Enum ==
/// Unified error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cache constructed with a capacity of zero
    #[error("Invalid capacity: capacity must be greater than 0")]
    InvalidCapacity,

    /// Task priority outside the configured range
    #[error("Invalid priority {priority}: must be between {min} and {max}")]
    InvalidPriority { priority: i64, min: i64, max: i64 },

    /// Priority range with min above max
    #[error("Invalid priority bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: i64, max: i64 },

    /// Pop or peek on a queue with no tasks
    #[error("Queue is empty")]
    EmptyQueue,
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;
