//! In-memory club-to-place index with LRU capacity bound.
//!
//! The index learns which place a club belongs to as a side effect of
//! availability lookups; it has no delete operation, so the capacity cap
//! is what keeps a long-lived process from accumulating mappings forever.
//! Evicting a cold mapping is safe: an event for an unmapped club is the
//! same silent no-op as one for a club that was never indexed.

use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use courtsync_core::cache::PlaceIndex;

/// In-memory `PlaceIndex` implementation, capped with LRU eviction.
#[derive(Debug, Clone)]
pub struct MemoryPlaceIndex {
    mappings: Arc<RwLock<LruCache<i64, String>>>,
}

impl MemoryPlaceIndex {
    /// Creates a new index holding at most `max_entries` mappings.
    ///
    /// # Panics
    ///
    /// Panics if `max_entries` is 0.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).expect("max_entries must be > 0");
        Self {
            mappings: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }
}

#[async_trait]
impl PlaceIndex for MemoryPlaceIndex {
    async fn set_mapping(&self, club_id: i64, place_id: &str) {
        let mut mappings = self.mappings.write().await;
        mappings.put(club_id, place_id.to_string());
    }

    async fn get_place(&self, club_id: i64) -> Option<String> {
        let mut mappings = self.mappings.write().await;
        mappings.get(&club_id).cloned()
    }
}
