//! Availability aggregation with cache-aside reads.
//!
//! Wraps the upstream courts client with the cache-aside pattern:
//! - **Hit**: return the cached partition untouched, no upstream calls.
//! - **Miss**: fetch clubs → courts → slots in upstream order, record the
//!   club-to-place mapping for every returned club, cache the assembled
//!   result, return it.
//!
//! There is no coordination with the invalidation path: a lookup that was
//! already fetching upstream when an invalidation for the same partition
//! arrived will re-cache its result afterwards (last writer wins). Such an
//! entry lives until the next invalidation or TTL expiry. Concurrent
//! misses for the same partition each fetch independently.

use std::sync::Arc;

use chrono::NaiveDate;

use courtsync_core::cache::{
    availability_key, deserialize_availability, serialize_availability, Cache, PlaceIndex,
};
use courtsync_core::client::{CourtsClient, Result};
use courtsync_core::courts::{ClubAvailability, CourtAvailability};

/// Cache-aside availability aggregator.
///
/// Collaborators are injected once at construction and shared with the
/// invalidation processor; the service itself is stateless.
pub struct AvailabilityService {
    client: Arc<dyn CourtsClient>,
    cache: Arc<dyn Cache>,
    index: Arc<dyn PlaceIndex>,
}

impl AvailabilityService {
    /// Creates a new availability service.
    pub fn new(
        client: Arc<dyn CourtsClient>,
        cache: Arc<dyn Cache>,
        index: Arc<dyn PlaceIndex>,
    ) -> Self {
        Self {
            client,
            cache,
            index,
        }
    }

    /// Returns the availability of every club in `place_id` on `date`.
    ///
    /// Any upstream failure aborts the whole operation before the cache is
    /// written, so a failed lookup leaves no partial entry behind and the
    /// next call retries the full fetch. Cache trouble (read, write, or
    /// undecodable bytes) degrades to a miss and never fails the request.
    pub async fn get_availability(
        &self,
        place_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<ClubAvailability>> {
        let cache_key = availability_key(place_id, date);

        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            match deserialize_availability(&bytes) {
                Ok(clubs) => {
                    tracing::debug!(key = %cache_key, "Cache hit for availability");
                    return Ok(clubs);
                }
                Err(err) => {
                    tracing::warn!(key = %cache_key, error = %err, "Cached availability failed to decode");
                }
            }
        }

        tracing::debug!(key = %cache_key, "Cache miss for availability, fetching upstream");

        let clubs = self.client.clubs_by_place(place_id).await?;

        // The index learns club locations here, as a side effect of the
        // lookup; the invalidation processor reads these mappings later.
        for club in &clubs {
            self.index.set_mapping(club.id, place_id).await;
        }

        let mut result = Vec::with_capacity(clubs.len());
        for club in clubs {
            let courts = self.client.courts_by_club(club.id).await?;

            let mut courts_with_availability = Vec::with_capacity(courts.len());
            for court in courts {
                let available = self.client.available_slots(club.id, court.id, date).await?;
                courts_with_availability.push(CourtAvailability { court, available });
            }

            result.push(ClubAvailability {
                club,
                courts: courts_with_availability,
            });
        }

        match serialize_availability(&result) {
            Ok(bytes) => {
                if let Err(err) = self.cache.set(&cache_key, &bytes).await {
                    tracing::warn!(key = %cache_key, error = %err, "Failed to cache availability");
                }
            }
            Err(err) => {
                tracing::warn!(key = %cache_key, error = %err, "Failed to serialize availability");
            }
        }

        Ok(result)
    }
}
