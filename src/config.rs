//! Configuration Module
//!
//! Handles loading the demo configuration from environment variables.

use std::env;

use crate::error::Result;
use crate::queue::{PriorityBounds, DEFAULT_MAX_PRIORITY, DEFAULT_MIN_PRIORITY};

/// Default capacity of the demo cache
const DEFAULT_CACHE_CAPACITY: usize = 3;

/// Demo configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub cache_capacity: usize,
    /// Lowest accepted task priority value (served first)
    pub min_priority: i64,
    /// Highest accepted task priority value (served last)
    pub max_priority: i64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Cache capacity (default: 3)
    /// - `MIN_PRIORITY` - Lowest valid priority (default: 1)
    /// - `MAX_PRIORITY` - Highest valid priority (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_capacity: parse_var("CACHE_CAPACITY").unwrap_or(defaults.cache_capacity),
            min_priority: parse_var("MIN_PRIORITY").unwrap_or(defaults.min_priority),
            max_priority: parse_var("MAX_PRIORITY").unwrap_or(defaults.max_priority),
        }
    }

    /// Builds the validated priority range for the task queue.
    pub fn priority_bounds(&self) -> Result<PriorityBounds> {
        PriorityBounds::new(self.min_priority, self.max_priority)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            min_priority: DEFAULT_MIN_PRIORITY,
            max_priority: DEFAULT_MAX_PRIORITY,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
