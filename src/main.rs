//! lru_taskq demo
//!
//! Walks through the cache and task queue APIs and logs what happens.

use anyhow::{ensure, Context};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_taskq::{BoundedCache, Config, Error, PriorityTaskQueue};

/// Entry point for the demo walkthrough.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Exercise the LRU cache
/// 4. Exercise the priority task queue
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_taskq=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_capacity={}, priorities={}..={}",
        config.cache_capacity, config.min_priority, config.max_priority
    );

    run_cache_demo(&config)?;
    run_queue_demo(&config)?;

    info!("Demo complete");
    Ok(())
}

fn run_cache_demo(config: &Config) -> anyhow::Result<()> {
    info!("=== LRU cache ===");

    let mut cache = BoundedCache::new(config.cache_capacity)
        .with_context(|| format!("creating cache with capacity {}", config.cache_capacity))?;

    for (key, value) in [("a", 1), ("b", 2), ("c", 3)] {
        report_eviction(cache.put(key.to_string(), value));
    }
    info!("After adding a, b, c: {}", cache);

    info!("Getting 'a': {:?}", cache.get("a"));

    report_eviction(cache.put("d".to_string(), 4));
    info!("After adding 'd': {}", cache);

    report_eviction(cache.put("a".to_string(), 100));
    info!("After updating 'a' to 100: {}", cache);
    info!("Get 'a': {:?}", cache.get("a"));

    info!("Stats: {}", cache.stats());
    let snapshot =
        serde_json::to_string(&cache.snapshot()).context("serializing cache snapshot")?;
    info!(snapshot = %snapshot, "Cache snapshot");

    Ok(())
}

fn report_eviction(evicted: Option<(String, i32)>) {
    if let Some((key, value)) = evicted {
        info!("Cache full! Evicted: {} = {}", key, value);
    }
}

fn run_queue_demo(config: &Config) -> anyhow::Result<()> {
    info!("=== Priority task queue ===");

    let bounds = config
        .priority_bounds()
        .context("building priority bounds")?;
    let mut queue: PriorityTaskQueue<Option<String>> = PriorityTaskQueue::with_bounds(bounds);

    queue.add_task("Low priority task", 5, None)?;
    queue.add_task("High priority task", 1, Some("deploy".to_string()))?;
    queue.add_task("Medium priority task", 3, None)?;
    info!("Added 3 tasks, queue size: {}", queue.len());

    if let Some(rejected) = bounds.max().checked_add(1) {
        match queue.add_task("Out of range task", rejected, None) {
            Err(err @ Error::InvalidPriority { .. }) => warn!("Rejected task: {}", err),
            other => anyhow::bail!("expected an invalid priority rejection, got {:?}", other),
        }
    }

    info!("Next task (peek): {}", queue.peek()?);
    info!("Queue size after peek: {}", queue.len());

    let snapshot =
        serde_json::to_string(&queue.snapshot()).context("serializing queue snapshot")?;
    info!(snapshot = %snapshot, "Queue snapshot");

    info!("Processing tasks:");
    while !queue.is_empty() {
        let task = queue.remove_next()?;
        info!("  -> {} payload={:?}", task, task.payload);
    }

    info!("Queue is empty: {}", queue.is_empty());
    let result = queue.remove_next();
    ensure!(
        matches!(result, Err(Error::EmptyQueue)),
        "expected EmptyQueue from an empty queue"
    );
    info!("Correctly reported EmptyQueue on empty queue");

    Ok(())
}
