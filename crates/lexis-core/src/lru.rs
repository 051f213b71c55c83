#![forbid(unsafe_code)]

//! Bounded least-recently-used cache.
//!
//! Entries live in a slot vector threaded by an intrusive doubly linked list
//! (indices, not pointers). A hash index maps each key to its slot, so
//! lookup, promotion, and eviction are all O(1).
//!
//! # Recency
//!
//! Both [`LruCache::get`] and [`LruCache::set`] move the touched key to the
//! most-recent end. [`LruCache::has`] and [`LruCache::peek`] leave the order
//! untouched. Recency is a total order: no two entries ever tie.
//!
//! # Usage
//!
//! ```
//! use lexis_core::lru::LruCache;
//!
//! let mut cache = LruCache::new(2);
//! cache.set("a", 1);
//! cache.set("b", 2);
//! cache.get(&"a");      // "a" is now most recent
//! cache.set("c", 3);    // evicts "b"
//! assert!(cache.has(&"a"));
//! assert!(!cache.has(&"b"));
//! ```

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Sentinel for "no neighbour".
const NIL: usize = usize::MAX;

struct Slot<K, V> {
    key: K,
    value: V,
    prev: usize,
    next: usize,
}

/// Cache with true LRU eviction, promoting on both read and write.
pub struct LruCache<K, V> {
    index: FxHashMap<K, usize>,
    slots: Vec<Slot<K, V>>,
    /// Most recently used slot.
    head: usize,
    /// Least recently used slot.
    tail: usize,
    max_size: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create an empty cache holding at most `max_size` entries.
    ///
    /// A `max_size` of zero yields a cache that never retains anything.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        let reserve = max_size.min(1024);
        Self {
            index: FxHashMap::with_capacity_and_hasher(reserve, Default::default()),
            slots: Vec::with_capacity(reserve),
            head: NIL,
            tail: NIL,
            max_size,
        }
    }

    /// Look up `key` and mark it most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.promote(idx);
        Some(&self.slots[idx].value)
    }

    /// Look up `key` without touching recency.
    #[must_use]
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&idx| &self.slots[idx].value)
    }

    /// Insert or update `key`, mark it most recently used, then evict the
    /// least recently used entry if the cache grew past `max_size`.
    ///
    /// Returns the previous value when `key` was already present.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&idx) = self.index.get(&key) {
            let old = std::mem::replace(&mut self.slots[idx].value, value);
            self.promote(idx);
            return Some(old);
        }

        let idx = self.slots.len();
        self.slots.push(Slot {
            key: key.clone(),
            value,
            prev: NIL,
            next: NIL,
        });
        self.index.insert(key, idx);
        self.push_front(idx);

        if self.slots.len() > self.max_size {
            self.evict_lru();
        }
        None
    }

    /// Whether `key` is cached. Does not affect recency.
    #[must_use]
    pub fn has(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = *self.index.get(key)?;
        let slot = self.take_slot(idx);
        self.index.remove(&slot.key);
        Some(slot.value)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    /// Current number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of retained entries.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        RecencyIter {
            slots: &self.slots,
            cursor: self.head,
        }
        .map(|slot| &slot.key)
    }

    // ── Internal helpers ──────────────────────────────────────────

    fn promote(&mut self, idx: usize) {
        if self.head == idx {
            return;
        }
        self.detach(idx);
        self.push_front(idx);
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        if prev == NIL {
            self.head = next;
        } else {
            self.slots[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.slots[next].prev = prev;
        }
        self.slots[idx].prev = NIL;
        self.slots[idx].next = NIL;
    }

    fn push_front(&mut self, idx: usize) {
        self.slots[idx].prev = NIL;
        self.slots[idx].next = self.head;
        if self.head != NIL {
            self.slots[self.head].prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }

    fn evict_lru(&mut self) {
        if self.tail == NIL {
            return;
        }
        let slot = self.take_slot(self.tail);
        self.index.remove(&slot.key);
    }

    /// Unlink `idx` and remove it from the slot vector.
    ///
    /// The vector stays dense: the last slot is moved into the hole and its
    /// neighbours and index entry are re-pointed. The caller removes the
    /// returned slot's key from the index.
    fn take_slot(&mut self, idx: usize) -> Slot<K, V> {
        self.detach(idx);
        let last = self.slots.len() - 1;
        let slot = self.slots.swap_remove(idx);
        if idx != last {
            let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
            if prev == NIL {
                self.head = idx;
            } else {
                self.slots[prev].next = idx;
            }
            if next == NIL {
                self.tail = idx;
            } else {
                self.slots[next].prev = idx;
            }
            if let Some(entry) = self.index.get_mut(&self.slots[idx].key) {
                *entry = idx;
            }
        }
        slot
    }
}

struct RecencyIter<'a, K, V> {
    slots: &'a [Slot<K, V>],
    cursor: usize,
}

impl<'a, K, V> Iterator for RecencyIter<'a, K, V> {
    type Item = &'a Slot<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.slots.get(self.cursor)?;
        self.cursor = slot.next;
        Some(slot)
    }
}

impl<K, V> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("size", &self.slots.len())
            .field("max_size", &self.max_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recency(cache: &LruCache<&'static str, i32>) -> Vec<&'static str> {
        cache.keys().copied().collect()
    }

    #[test]
    fn empty_cache() {
        let cache: LruCache<&str, i32> = LruCache::new(3);
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.max_size(), 3);
    }

    #[test]
    fn get_miss_returns_none() {
        let mut cache: LruCache<&str, i32> = LruCache::new(3);
        assert_eq!(cache.get(&"missing"), None);
    }

    #[test]
    fn fourth_insert_evicts_least_recent() {
        let mut cache = LruCache::new(3);
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);
        cache.set("d", 4);
        assert!(!cache.has(&"a"));
        assert_eq!(cache.len(), 3);
        assert_eq!(recency(&cache), vec!["d", "c", "b"]);
    }

    #[test]
    fn get_protects_from_eviction() {
        let mut cache = LruCache::new(3);
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);
        assert_eq!(cache.get(&"a"), Some(&1));
        cache.set("d", 4);
        assert!(cache.has(&"a"));
        assert!(!cache.has(&"b"));
    }

    #[test]
    fn set_existing_promotes_and_replaces() {
        let mut cache = LruCache::new(3);
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);
        assert_eq!(cache.set("a", 10), Some(1));
        cache.set("d", 4);
        assert_eq!(cache.peek(&"a"), Some(&10));
        assert!(!cache.has(&"b"));
    }

    #[test]
    fn has_and_peek_do_not_promote() {
        let mut cache = LruCache::new(2);
        cache.set("a", 1);
        cache.set("b", 2);
        assert!(cache.has(&"a"));
        assert_eq!(cache.peek(&"a"), Some(&1));
        cache.set("c", 3);
        assert!(!cache.has(&"a"));
    }

    #[test]
    fn remove_relinks_neighbours() {
        let mut cache = LruCache::new(4);
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);
        assert_eq!(cache.remove(&"b"), Some(2));
        assert_eq!(recency(&cache), vec!["c", "a"]);
        cache.set("d", 4);
        assert_eq!(recency(&cache), vec!["d", "c", "a"]);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(recency(&cache), vec!["a", "d", "c"]);
    }

    #[test]
    fn remove_missing_is_none() {
        let mut cache: LruCache<&str, i32> = LruCache::new(2);
        assert_eq!(cache.remove(&"nope"), None);
    }

    #[test]
    fn clear_empties() {
        let mut cache = LruCache::new(3);
        cache.set("a", 1);
        cache.set("b", 2);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&"a"), None);
        cache.set("c", 3);
        assert_eq!(recency(&cache), vec!["c"]);
    }

    #[test]
    fn zero_capacity_retains_nothing() {
        let mut cache = LruCache::new(0);
        cache.set("a", 1);
        assert!(cache.is_empty());
        assert_eq!(cache.get(&"a"), None);
    }

    #[test]
    fn capacity_one_keeps_latest() {
        let mut cache = LruCache::new(1);
        cache.set("a", 1);
        cache.set("b", 2);
        assert_eq!(recency(&cache), vec!["b"]);
        assert_eq!(cache.get(&"b"), Some(&2));
    }

    #[test]
    fn eviction_after_many_promotions() {
        let mut cache = LruCache::new(3);
        for key in ["a", "b", "c"] {
            cache.set(key, 0);
        }
        cache.get(&"a");
        cache.get(&"b");
        cache.get(&"a");
        cache.set("d", 4);
        assert_eq!(recency(&cache), vec!["d", "a", "b"]);
    }

    #[test]
    fn debug_format() {
        let cache: LruCache<&str, i32> = LruCache::new(5);
        let debug = format!("{cache:?}");
        assert!(debug.contains("LruCache"));
        assert!(debug.contains("max_size"));
    }
}
