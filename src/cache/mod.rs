//! In-memory response cache with a fixed expiry window.
//!
//! Entries are stamped with epoch milliseconds when stored and checked against the
//! window when read; nothing sweeps the cache in the background. Capacity is
//! bounded with least-recently-used eviction.

mod key;

pub use key::CacheKey;

use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Default validity window of a cached response (one hour).
pub const CACHE_TTL_SECONDS: u64 = 3600;
/// Default number of entries kept before the least recently used is evicted.
pub const CACHE_CAPACITY: usize = 64;

/// Cached value with the epoch millisecond it was stored at.
#[derive(Clone, Debug)]
pub struct CacheEntry<V> {
    /// Stored payload.
    pub data: V,
    /// Unix timestamp (milliseconds) when the entry was stored.
    pub timestamp: i64,
}

/// Time-bounded LRU cache keyed by [`CacheKey`].
#[derive(Debug)]
pub struct ResponseCache<V> {
    /// Entries in recency order.
    entries: LruCache<CacheKey, CacheEntry<V>>,
    /// Validity window in milliseconds.
    ttl_ms: i64,
}

impl<V: Clone> ResponseCache<V> {
    /// What: Create an empty cache.
    ///
    /// Inputs:
    /// - `ttl`: Validity window; entries are served while `now - stored < ttl`
    /// - `capacity`: Maximum entry count (zero is treated as one)
    #[must_use]
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
            ttl_ms: i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX),
        }
    }

    /// Look up `key` against the current wall clock.
    pub fn get(&mut self, key: &CacheKey) -> Option<V> {
        self.get_at(key, now())
    }

    /// Store `data` under `key`, stamped with the current wall clock.
    pub fn set(&mut self, key: CacheKey, data: V) {
        self.set_at(key, data, now());
    }

    /// What: Look up `key` as of epoch millisecond `now`.
    ///
    /// Output:
    /// - `Some(data)` while `now - timestamp < ttl`; `None` when missing or expired.
    ///
    /// Details:
    /// - An expired entry is dropped on the read that discovers it.
    pub fn get_at(&mut self, key: &CacheKey, now: i64) -> Option<V> {
        if let Some(entry) = self.entries.get(key) {
            let age = now.saturating_sub(entry.timestamp);
            if age < self.ttl_ms {
                tracing::debug!(key = %key, age_ms = age, "cache hit");
                return Some(entry.data.clone());
            }
            tracing::debug!(key = %key, age_ms = age, "cache entry expired");
        } else {
            tracing::debug!(key = %key, "cache miss");
            return None;
        }
        self.entries.pop(key);
        None
    }

    /// Store `data` under `key` stamped with epoch millisecond `now`.
    pub fn set_at(&mut self, key: CacheKey, data: V, now: i64) {
        if let Some((evicted, _)) = self.entries.push(key, CacheEntry { data, timestamp: now })
            && !self.entries.contains(&evicted)
        {
            tracing::debug!(key = %evicted, "evicted least recently used cache entry");
        }
    }

    /// Drop `key` if present; returns whether an entry was removed.
    pub fn remove(&mut self, key: &CacheKey) -> bool {
        self.entries.pop(key).is_some()
    }

    /// Whether `key` is stored, regardless of expiry. Does not touch recency.
    #[must_use]
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains(key)
    }

    /// Number of stored entries, expired ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Current wall clock as epoch milliseconds.
fn now() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
