//! lru_taskq - In-memory building blocks
//!
//! Provides a bounded LRU cache and a priority task queue with FIFO
//! tie-breaking. Both are single-threaded and deterministic.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod queue;

pub use cache::BoundedCache;
pub use config::Config;
pub use error::{Error, Result};
pub use queue::{PriorityBounds, PriorityTaskQueue, Task};
