use async_trait::async_trait;

use super::Result;

/// Trait for the TTL-bounded key/value store.
///
/// The time-to-live is a property of the store itself (every key shares
/// it); `set` takes no per-key override. Expiry is evaluated only on
/// access: an entry past its TTL is reported absent and removed by the
/// `get` that finds it, never by a background sweep.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key. Returns `None` for absent or
    /// expired entries.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache, unconditionally overwriting any prior
    /// entry and resetting its age.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Deletes a value from the cache by key. Idempotent.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Removes every entry. Administrative; the invalidation path never
    /// calls this.
    async fn clear(&self) -> Result<()>;
}

/// Reverse lookup from a club to the place it was last served under.
///
/// Mappings are recorded as a side effect of successful availability
/// lookups and overwritten unconditionally: a club is assumed to belong to
/// a single place at a time, most recent write wins. There is no delete
/// operation.
#[async_trait]
pub trait PlaceIndex: Send + Sync {
    /// Records (or overwrites) the place a club belongs to.
    async fn set_mapping(&self, club_id: i64, place_id: &str);

    /// Returns the place last recorded for the club, if any.
    async fn get_place(&self, club_id: i64) -> Option<String>;
}
