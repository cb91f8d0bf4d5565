//! In-memory cache implementation with a store-wide TTL.
//!
//! Thread-safe key/value store using tokio synchronization primitives.
//! Every entry shares the store's TTL; expiry is evaluated lazily on
//! access and an expired entry found by `get` is removed on the spot, so
//! there is no background sweep.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use courtsync_core::cache::{Cache, Result};

/// A single cache entry with its insertion time.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    inserted_at: Instant,
}

impl CacheEntry {
    /// Creates a new cache entry timestamped now.
    fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
        }
    }

    /// Returns true if this entry has outlived `ttl`.
    fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() > ttl
    }
}

/// In-memory cache with lazy TTL eviction.
///
/// The store is unbounded; entries leave it only through `delete`,
/// `clear`, or the `get` that finds them expired. A key that is written
/// and never read again stays in memory until something touches it.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Duration,
}

impl MemoryCache {
    /// Creates a new in-memory cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.store.write().await;

        let expired = store
            .get(key)
            .is_some_and(|entry| entry.is_expired(self.ttl));

        if expired {
            // Lazy eviction: drop the expired entry now that a read found it.
            store.remove(key);
            return Ok(None);
        }

        Ok(store.get(key).map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut store = self.store.write().await;
        store.insert(key.to_string(), CacheEntry::new(value.to_vec()));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut store = self.store.write().await;
        store.clear();
        Ok(())
    }
}
