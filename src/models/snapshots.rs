//! Snapshot DTOs
//!
//! Point-in-time copies of cache and queue contents.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::CacheStats;
use crate::queue::Task;

/// Contents of a [`BoundedCache`](crate::cache::BoundedCache), least recently
/// used entry first.
#[derive(Debug, Clone, Serialize)]
pub struct CacheSnapshot<K, V> {
    /// Maximum number of entries
    pub capacity: usize,
    /// Number of entries at snapshot time
    pub len: usize,
    /// Entries in recency order
    pub items: Vec<(K, V)>,
    /// Counters at snapshot time
    pub stats: CacheStats,
}

/// Contents of a [`PriorityTaskQueue`](crate::queue::PriorityTaskQueue) in
/// service order. Payloads are left out.
#[derive(Debug, Clone, Serialize)]
pub struct QueueSnapshot {
    /// Number of queued tasks
    pub len: usize,
    /// Tasks in the order they would be removed
    pub tasks: Vec<TaskSummary>,
}

/// Payload-free description of a queued task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    pub name: String,
    pub priority: i64,
    pub sequence: u64,
    pub created_at: DateTime<Utc>,
}

impl<T> From<&Task<T>> for TaskSummary {
    fn from(task: &Task<T>) -> Self {
        Self {
            name: task.name.clone(),
            priority: task.priority,
            sequence: task.sequence,
            created_at: task.created_at,
        }
    }
}
