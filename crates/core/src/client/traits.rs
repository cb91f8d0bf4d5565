use async_trait::async_trait;
use chrono::NaiveDate;

use crate::courts::{Club, Court, Slot};

use super::Result;

/// Port for the upstream courts API.
///
/// All three operations are idempotent reads returning records in the
/// upstream's order, which callers preserve.
#[async_trait]
pub trait CourtsClient: Send + Sync {
    /// Lists the clubs in a place.
    async fn clubs_by_place(&self, place_id: &str) -> Result<Vec<Club>>;

    /// Lists the courts of a club.
    async fn courts_by_club(&self, club_id: i64) -> Result<Vec<Court>>;

    /// Lists the available slots of a court on a date.
    async fn available_slots(&self, club_id: i64, court_id: i64, date: NaiveDate)
        -> Result<Vec<Slot>>;
}
