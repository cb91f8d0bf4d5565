//! Application state owning the shared stores and services.
//!
//! The cache store and the place index exist exactly once per process,
//! constructed here and handed by shared reference to the availability
//! service (which writes both) and the invalidation processor (which
//! reads the index and deletes from the cache). Handlers receive a clone
//! of this struct; there is no ambient global state.

use std::sync::Arc;

use tokio::sync::broadcast;

use courtsync_core::cache::{Cache, PlaceIndex};
use courtsync_core::client::CourtsClient;
use courtsync_core::courts::DomainEvent;

use crate::{
    cache::{MemoryCache, MemoryPlaceIndex},
    client::HttpCourtsClient,
    config::Config,
    services::{AvailabilityService, InvalidationProcessor},
};

/// Capacity of the domain-event broadcast channel.
const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Shared application state.
///
/// This is cloned for each request handler and contains the two services
/// plus the broadcast channel accepted events are re-published on.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside availability aggregator.
    pub availability: Arc<AvailabilityService>,
    /// Domain-event invalidation processor.
    pub invalidator: Arc<InvalidationProcessor>,
    /// Fan-out channel for accepted domain events.
    events_tx: broadcast::Sender<DomainEvent>,
}

impl AppState {
    /// Creates the production state: in-memory stores and the HTTP
    /// upstream client from `config`.
    pub fn new(config: &Config) -> Self {
        let cache = Arc::new(MemoryCache::new(config.cache_ttl()));
        let client = Arc::new(HttpCourtsClient::new(
            config.upstream_base_url.clone(),
            cache.clone(),
        ));
        Self::build(client, cache, config)
    }

    /// Creates state around an arbitrary upstream client. Used by tests to
    /// substitute a mock upstream.
    pub fn with_client(client: Arc<dyn CourtsClient>, config: &Config) -> Self {
        let cache = Arc::new(MemoryCache::new(config.cache_ttl()));
        Self::build(client, cache, config)
    }

    fn build(client: Arc<dyn CourtsClient>, cache: Arc<MemoryCache>, config: &Config) -> Self {
        let cache: Arc<dyn Cache> = cache;
        let index: Arc<dyn PlaceIndex> = Arc::new(MemoryPlaceIndex::new(config.index_max_entries));

        let availability = Arc::new(AvailabilityService::new(
            client,
            cache.clone(),
            index.clone(),
        ));
        let invalidator = Arc::new(InvalidationProcessor::new(
            cache,
            index,
            config.invalidation_horizon_days,
        ));

        let (events_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            availability,
            invalidator,
            events_tx,
        }
    }

    /// Publishes an accepted domain event to in-process subscribers.
    ///
    /// A send with no subscribers is fine; it just means nothing is
    /// currently listening.
    pub fn publish_event(&self, event: DomainEvent) {
        let _ = self.events_tx.send(event);
    }

    /// Subscribes to the domain-event feed.
    pub fn subscribe_events(&self) -> broadcast::Receiver<DomainEvent> {
        self.events_tx.subscribe()
    }
}
