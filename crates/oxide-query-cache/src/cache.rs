//! Result cache backends.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde_json::Value;

/// A store for cached query results.
///
/// Implementations must be shareable across threads; profiles hold them
/// behind an `Arc`.
pub trait ResultCache: Send + Sync + fmt::Debug {
    /// Returns the cached value for `key`, if present and not expired.
    fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`. `None` means no expiry.
    fn put(&self, key: &str, value: Value, lifetime: Option<Duration>);
}

#[derive(Debug)]
struct Entry {
    value: Value,
    expires_at: Option<Instant>,
}

/// In-process [`ResultCache`] with per-entry expiry.
#[derive(Debug, Default)]
pub struct MemoryResultCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryResultCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries, expired ones included until they are read or
    /// purged.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drops every expired entry.
    pub fn purge_expired(&self) {
        purge(&mut self.entries.lock(), Instant::now());
    }
}

fn purge(entries: &mut HashMap<String, Entry>, now: Instant) {
    let before = entries.len();
    entries.retain(|_, entry| entry.expires_at.is_none_or(|at| now < at));
    let purged = before - entries.len();
    if purged > 0 {
        tracing::trace!(purged, "Purged expired cache entries");
    }
}

impl ResultCache for MemoryResultCache {
    fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.lock();
        let expired = entries
            .get(key)?
            .expires_at
            .is_some_and(|at| Instant::now() >= at);
        if expired {
            tracing::trace!(key, "Cache entry expired");
            entries.remove(key);
            return None;
        }
        entries.get(key).map(|entry| entry.value.clone())
    }

    fn put(&self, key: &str, value: Value, lifetime: Option<Duration>) {
        let now = Instant::now();
        let expires_at = lifetime.map(|lifetime| now + lifetime);
        let mut entries = self.entries.lock();
        purge(&mut entries, now);
        entries.insert(key.to_string(), Entry { value, expires_at });
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_put_and_get() {
        let cache = MemoryResultCache::new();
        assert!(cache.is_empty());
        cache.put("k", json!([{"id": 1}]), None);
        assert_eq!(cache.get("k"), Some(json!([{"id": 1}])));
        assert_eq!(cache.get("missing"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_expired_entry_is_evicted() {
        let cache = MemoryResultCache::new();
        cache.put("k", json!(1), Some(Duration::ZERO));
        assert_eq!(cache.get("k"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_purges_expired_entries() {
        let cache = MemoryResultCache::new();
        cache.put("stale", json!(1), Some(Duration::ZERO));
        cache.put("fresh", json!(2), Some(Duration::from_secs(60)));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("fresh"), Some(json!(2)));
    }

    #[test]
    fn test_purge_expired() {
        let cache = MemoryResultCache::new();
        cache.put("forever", json!(1), None);
        cache.put("stale", json!(2), Some(Duration::ZERO));
        assert_eq!(cache.len(), 2);

        cache.purge_expired();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("forever"), Some(json!(1)));
    }
}
