//! Event-driven cache invalidation.
//!
//! Translates inbound domain events into the exact set of availability
//! cache keys to evict, never a full-cache clear:
//! - Booking made/cancelled: the one partition holding the slot's calendar
//!   day.
//! - Club/court metadata changed: the rolling window from today through
//!   `horizon - 1` days ahead, matching the query horizon clients actually
//!   use. Every metadata change triggers the full window; the `fields`
//!   payload is not inspected.
//!
//! A club the index has never seen (or has since evicted) resolves to no
//! place, and the event becomes a logged no-op rather than an error.

use std::sync::Arc;

use chrono::{Days, Local, NaiveDate};

use courtsync_core::cache::{availability_key, Cache, PlaceIndex};
use courtsync_core::courts::DomainEvent;

/// Invalidation processor for upstream domain events.
///
/// Shares the cache store and place index with the availability service;
/// `handle` mutates nothing but cache contents.
pub struct InvalidationProcessor {
    cache: Arc<dyn Cache>,
    index: Arc<dyn PlaceIndex>,
    horizon_days: u64,
}

impl InvalidationProcessor {
    /// Creates a new processor invalidating `horizon_days` days of cache
    /// entries on metadata changes.
    pub fn new(cache: Arc<dyn Cache>, index: Arc<dyn PlaceIndex>, horizon_days: u64) -> Self {
        Self {
            cache,
            index,
            horizon_days,
        }
    }

    /// Processes one domain event, deleting every affected cache key.
    ///
    /// Infallible by design: an unmapped club is a no-op and a failed
    /// delete is logged, never surfaced to the event source.
    pub async fn handle(&self, event: &DomainEvent) {
        let club_id = event.club_id();

        let Some(place_id) = self.index.get_place(club_id).await else {
            tracing::info!(club_id, "No place mapping for club, nothing to invalidate");
            return;
        };

        let today = Local::now().date_naive();
        for key in invalidation_keys(event, &place_id, today, self.horizon_days) {
            match self.cache.delete(&key).await {
                Ok(()) => tracing::debug!(key = %key, "Invalidated availability cache entry"),
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "Failed to delete cache entry");
                }
            }
        }
    }
}

/// Computes the cache keys an event invalidates.
///
/// Booking events resolve to exactly one key, derived from the slot's
/// calendar date. Metadata events resolve to `horizon_days` keys starting
/// at `today`.
fn invalidation_keys(
    event: &DomainEvent,
    place_id: &str,
    today: NaiveDate,
    horizon_days: u64,
) -> Vec<String> {
    match event {
        DomainEvent::BookingCreated { slot, .. } | DomainEvent::BookingCancelled { slot, .. } => {
            vec![availability_key(place_id, slot.datetime.date())]
        }
        DomainEvent::ClubUpdated { .. } | DomainEvent::CourtUpdated { .. } => (0..horizon_days)
            .map(|offset| availability_key(place_id, today + Days::new(offset)))
            .collect(),
    }
}
