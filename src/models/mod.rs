//! Snapshot models
//!
//! Serializable views of cache and queue state for callers that want to
//! report or export it.

pub mod snapshots;

// Re-export commonly used types
pub use snapshots::{CacheSnapshot, QueueSnapshot, TaskSummary};
