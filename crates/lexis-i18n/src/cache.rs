//! Translation result cache.
//!
//! An [`LruCache`] of finished strings keyed by lookup kind, locale, key,
//! and the parameter fingerprint, with hit/miss counters on top.
//!
//! The lookup kind is part of the key so `translate("en", "items")` and
//! `translate_plural("en", "items", 1)` never share an entry even when the
//! parameter bags serialize identically.

use lexis_core::LruCache;

/// Default number of cached results.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Which operation produced a cached string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Singular,
    Plural,
    Message,
}

/// Cache key: `(kind, locale, key, params fingerprint)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub kind: LookupKind,
    pub locale: String,
    pub key: String,
    /// [`Params::cache_fingerprint`](crate::Params::cache_fingerprint), or
    /// `""` for no parameters.
    pub params: String,
}

/// Snapshot of cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CacheStats {
    pub size: usize,
    pub max_size: usize,
    pub hits: u64,
    pub misses: u64,
    /// `hits / (hits + misses) * 100`, or `0` before any lookup.
    pub hit_rate: f64,
}

/// LRU result cache with hit/miss accounting.
#[derive(Debug)]
pub struct TranslationCache {
    entries: LruCache<CacheKey, String>,
    hits: u64,
    misses: u64,
}

impl TranslationCache {
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: LruCache::new(max_size),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up and promote, counting a hit or a miss.
    pub fn get(&mut self, key: &CacheKey) -> Option<String> {
        match self.entries.get(key) {
            Some(value) => {
                self.hits += 1;
                Some(value.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, key: CacheKey, value: String) {
        self.entries.set(key, value);
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let lookups = self.hits + self.misses;
        let hit_rate = if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64 * 100.0
        };
        CacheStats {
            size: self.entries.len(),
            max_size: self.entries.max_size(),
            hits: self.hits,
            misses: self.misses,
            hit_rate,
        }
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
