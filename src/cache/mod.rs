//! Cache Module
//!
//! Provides a bounded in-memory cache with LRU eviction.

mod lru;
mod stats;
mod store;


// Re-export public types
pub use lru::{Iter, RecencyList};
pub use stats::CacheStats;
pub use store::BoundedCache;
