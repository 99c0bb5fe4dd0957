use std::{
    sync::Arc,
    time::Duration,
};

use futures_util::lock::Mutex;
use indexmap::IndexMap;
use log::debug;
use serde_json::Value;
use tokio::time::Instant;

/// Options for a [`ResponseCache`].
#[derive(Debug, Clone, Copy)]
pub struct CacheOptions {
    /// Maximum number of entries kept at once.
    pub capacity: usize,
    /// How long an entry stays valid after insertion.
    pub ttl: Duration,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            capacity: 2000,
            ttl: Duration::from_secs(60 * 60),
        }
    }
}

struct CacheEntry {
    value: Arc<Value>,
    inserted_at: Instant,
}

/// A read-through cache of upstream JSON payloads, keyed by resource URL.
///
/// Entries expire after the configured TTL. Once the cache reaches capacity, the least recently
/// used entry is evicted to make room. Concurrent fetches of the same key may both miss and both
/// insert; the later insert wins.
pub struct ResponseCache {
    options: CacheOptions,
    entries: Mutex<IndexMap<String, CacheEntry>>,
}

impl ResponseCache {
    /// Creates a new, empty cache.
    pub fn new(options: CacheOptions) -> Self {
        Self {
            options,
            entries: Mutex::new(IndexMap::with_capacity(options.capacity)),
        }
    }

    pub fn options(&self) -> &CacheOptions {
        &self.options
    }

    /// Number of entries currently stored, including expired entries not yet purged.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Returns the cached payload for the key, if present and not expired.
    ///
    /// A hit marks the entry as most recently used.
    pub async fn get(&self, key: &str) -> Option<Arc<Value>> {
        let mut entries = self.entries.lock().await;
        let index = entries.get_index_of(key)?;
        if entries[index].inserted_at.elapsed() >= self.options.ttl {
            debug!("cache entry for {key} expired");
            entries.shift_remove_index(index);
            return None;
        }
        let last = entries.len() - 1;
        entries.move_index(index, last);
        entries.get(key).map(|entry| entry.value.clone())
    }

    /// Stores a payload for the key.
    pub async fn insert(&self, key: String, value: Arc<Value>) {
        if self.options.capacity == 0 {
            return;
        }
        let mut entries = self.entries.lock().await;
        entries.shift_remove(&key);
        if entries.len() >= self.options.capacity {
            let ttl = self.options.ttl;
            entries.retain(|_, entry| entry.inserted_at.elapsed() < ttl);
        }
        while entries.len() >= self.options.capacity {
            if let Some((evicted, _)) = entries.shift_remove_index(0) {
                debug!("evicting {evicted} from cache");
            }
        }
        entries.insert(
            key,
            CacheEntry {
                value,
                inserted_at: Instant::now(),
            },
        );
    }
}
