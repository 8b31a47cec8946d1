//! Bounded Cache Module
//!
//! Fixed-capacity key-value store combining a HashMap index with a recency
//! list for O(1) LRU lookups, inserts and evictions.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::cache::{CacheStats, RecencyList};
use crate::error::{Error, Result};
use crate::models::CacheSnapshot;

// == Bounded Cache ==
/// Fixed-capacity cache with least-recently-used eviction.
///
/// Every `get` hit and every `put` marks its key most recently used. When a
/// new key arrives at a full cache, the least recently used entry is removed
/// and handed back to the caller from [`BoundedCache::put`].
#[derive(Debug, Clone)]
pub struct BoundedCache<K, V> {
    /// Key to recency list slot
    index: HashMap<K, usize>,
    /// Entries in recency order
    entries: RecencyList<K, V>,
    /// Lookup and eviction counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }

        Ok(Self {
            index: HashMap::with_capacity(capacity),
            entries: RecencyList::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == Get ==
    /// Retrieves a value by key and marks the key most recently used.
    ///
    /// A missing key returns None and leaves the recency order untouched.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key).copied() {
            Some(idx) => {
                self.stats.record_hit();
                self.entries.move_to_back(idx);
                self.entries.value(idx)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Retrieves a value without touching recency order or statistics.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .and_then(|&idx| self.entries.value(idx))
    }

    // == Put ==
    /// Stores a key-value pair as the most recently used entry.
    ///
    /// If the key already exists its value is overwritten in place and no
    /// eviction happens. Otherwise, when the cache is full, the least recently
    /// used entry is removed first.
    ///
    /// # Returns
    /// The evicted `(key, value)` pair, or None if nothing was evicted.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.index.get(&key) {
            if let Some(slot) = self.entries.value_mut(idx) {
                *slot = value;
            }
            self.entries.move_to_back(idx);
            return None;
        }

        let evicted = if self.index.len() >= self.capacity {
            self.evict_oldest()
        } else {
            None
        };

        let idx = self.entries.push_back(key.clone(), value);
        self.index.insert(key, idx);
        self.stats.set_total_entries(self.index.len());

        evicted
    }

    // == Remove ==
    /// Removes an entry by key, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.index.remove(key)?;
        let (_, value) = self.entries.remove(idx)?;
        self.stats.set_total_entries(self.index.len());
        Some(value)
    }

    // == Contains ==
    /// Checks whether a key is present without touching recency order.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    // == Clear ==
    /// Removes every entry. Statistics are kept.
    pub fn clear(&mut self) {
        self.index.clear();
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    fn evict_oldest(&mut self) -> Option<(K, V)> {
        let (key, value) = self.entries.pop_front()?;
        self.index.remove(&key);
        self.stats.record_eviction();
        Some((key, value))
    }
}

impl<K, V> BoundedCache<K, V> {
    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the fixed maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Iterate ==
    /// Iterates entries from least to most recently used without touching
    /// recency order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &V)> + '_ {
        self.entries.iter()
    }

    // == Items ==
    /// Returns a snapshot of all entries, least recently used first.
    pub fn items(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats;
        stats.set_total_entries(self.len());
        stats
    }

    // == Snapshot ==
    /// Captures the cache contents and counters in a serializable form.
    pub fn snapshot(&self) -> CacheSnapshot<K, V>
    where
        K: Clone,
        V: Clone,
    {
        CacheSnapshot {
            capacity: self.capacity,
            len: self.len(),
            items: self.items(),
            stats: self.stats(),
        }
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for BoundedCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "LRUCache (empty)");
        }

        write!(f, "LRUCache({}/{}): [", self.len(), self.capacity)?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "]")
    }
}
