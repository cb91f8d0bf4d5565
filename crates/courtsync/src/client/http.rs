//! HTTP client for the upstream courts API.
//!
//! Club and court lists are read-through cached in the shared cache store
//! under `clubs-<placeId>` / `courts-<clubId>`; they only change on
//! metadata events, so a short TTL keeps them fresh enough. Slot lists
//! are fetched on every call: bookings churn them constantly and the
//! aggregated result is what gets cached instead.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use courtsync_core::cache::{
    clubs_key, courts_key, deserialize_clubs, deserialize_courts, serialize_clubs,
    serialize_courts, Cache,
};
use courtsync_core::client::{ClientError, CourtsClient, Result};
use courtsync_core::courts::{Club, Court, Slot};

/// Reqwest-backed `CourtsClient` implementation.
#[derive(Clone)]
pub struct HttpCourtsClient {
    client: reqwest::Client,
    base_url: String,
    cache: Arc<dyn Cache>,
}

impl HttpCourtsClient {
    /// Create a new client against the given upstream base URL.
    pub fn new(base_url: impl Into<String>, cache: Arc<dyn Cache>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            cache,
        }
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CourtsClient for HttpCourtsClient {
    async fn clubs_by_place(&self, place_id: &str) -> Result<Vec<Club>> {
        let cache_key = clubs_key(place_id);

        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            if let Ok(clubs) = deserialize_clubs(&bytes) {
                tracing::trace!(place_id, "Cache hit for club list");
                return Ok(clubs);
            }
            tracing::warn!(place_id, "Cached club list failed to decode");
        }

        let clubs: Vec<Club> = self
            .get_json(self.url("/clubs"), &[("placeId", place_id.to_string())])
            .await?;

        if let Ok(bytes) = serialize_clubs(&clubs) {
            if let Err(err) = self.cache.set(&cache_key, &bytes).await {
                tracing::warn!(place_id, error = %err, "Failed to cache club list");
            }
        }

        Ok(clubs)
    }

    async fn courts_by_club(&self, club_id: i64) -> Result<Vec<Court>> {
        let cache_key = courts_key(club_id);

        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            if let Ok(courts) = deserialize_courts(&bytes) {
                tracing::trace!(club_id, "Cache hit for court list");
                return Ok(courts);
            }
            tracing::warn!(club_id, "Cached court list failed to decode");
        }

        let courts: Vec<Court> = self
            .get_json(self.url(&format!("/clubs/{club_id}/courts")), &[])
            .await?;

        if let Ok(bytes) = serialize_courts(&courts) {
            if let Err(err) = self.cache.set(&cache_key, &bytes).await {
                tracing::warn!(club_id, error = %err, "Failed to cache court list");
            }
        }

        Ok(courts)
    }

    async fn available_slots(
        &self,
        club_id: i64,
        court_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Slot>> {
        self.get_json(
            self.url(&format!("/clubs/{club_id}/courts/{court_id}/slots")),
            &[("date", date.format("%Y-%m-%d").to_string())],
        )
        .await
    }
}
