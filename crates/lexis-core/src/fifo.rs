#![forbid(unsafe_code)]

//! Bounded first-in-first-out cache.
//!
//! Eviction follows insertion order only. Reads never promote an entry and
//! overwriting an existing key keeps its original queue position, so the
//! oldest *inserted* key is always the next one to go.
//!
//! This is deliberately different from [`LruCache`](crate::lru::LruCache):
//! formatter instances are cheap to rebuild and are looked up far more often
//! than they are created, so the cache avoids any bookkeeping on the read
//! path. A read-only `get(&self)` also lets callers share the cache behind a
//! plain lock without upgrading to a write guard.
//!
//! ```
//! use lexis_core::fifo::FifoCache;
//!
//! let mut cache = FifoCache::new(2);
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.get(&"a");        // no promotion
//! cache.insert("c", 3);   // evicts "a", the oldest insertion
//! assert!(!cache.contains_key(&"a"));
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Cache with insertion-order (FIFO) eviction.
pub struct FifoCache<K, V> {
    entries: FxHashMap<K, V>,
    /// Keys in insertion order, oldest first.
    order: VecDeque<K>,
    capacity: usize,
}

/// Size snapshot of a [`FifoCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FifoStats {
    /// Current entries.
    pub size: usize,
    /// Maximum entries.
    pub max_size: usize,
}

impl<K, V> FifoCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a cache holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let reserve = capacity.min(1024);
        Self {
            entries: FxHashMap::with_capacity_and_hasher(reserve, Default::default()),
            order: VecDeque::with_capacity(reserve),
            capacity,
        }
    }

    /// Look up a value. Never changes eviction order.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Insert a value, evicting the oldest insertion when full.
    ///
    /// Replacing an existing key updates the value in place and returns the
    /// previous one; its queue position is unchanged.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.entries.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }
        if self.capacity == 0 {
            return None;
        }
        while self.order.len() >= self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, value);
        None
    }

    /// Whether `key` is cached.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Current number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size snapshot.
    #[must_use]
    pub fn stats(&self) -> FifoStats {
        FifoStats {
            size: self.entries.len(),
            max_size: self.capacity,
        }
    }

    /// Keys from oldest to newest insertion.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }
}

impl<K, V> fmt::Debug for FifoCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FifoCache")
            .field("size", &self.order.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut cache = FifoCache::new(4);
        cache.insert("a", 1);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn evicts_oldest_insertion() {
        let mut cache = FifoCache::new(3);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("c", 3);
        cache.insert("d", 4);
        assert!(!cache.contains_key(&"a"));
        assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec!["b", "c", "d"]);
    }

    #[test]
    fn reads_do_not_promote() {
        let mut cache = FifoCache::new(3);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("c", 3);
        for _ in 0..5 {
            assert_eq!(cache.get(&"a"), Some(&1));
        }
        cache.insert("d", 4);
        assert!(!cache.contains_key(&"a"), "FIFO must ignore reads");
        assert!(cache.contains_key(&"b"));
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut cache = FifoCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        assert_eq!(cache.insert("a", 10), Some(1));
        cache.insert("c", 3);
        assert!(!cache.contains_key(&"a"));
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut cache = FifoCache::new(0);
        cache.insert("a", 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_and_stats() {
        let mut cache = FifoCache::new(100);
        cache.insert(1, "x");
        cache.insert(2, "y");
        assert_eq!(
            cache.stats(),
            FifoStats {
                size: 2,
                max_size: 100
            }
        );
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().size, 0);
    }

    #[test]
    fn bounded_under_load() {
        let mut cache = FifoCache::new(10);
        for i in 0..1000 {
            cache.insert(i, i);
        }
        assert_eq!(cache.len(), 10);
        assert!(cache.contains_key(&999));
        assert!(cache.contains_key(&990));
        assert!(!cache.contains_key(&989));
    }
}
