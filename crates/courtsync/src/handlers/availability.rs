//! Availability read endpoint.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use courtsync_core::courts::ClubAvailability;

use crate::{handlers::AppError, state::AppState};

/// Query parameters for the availability endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    /// Place to search in.
    pub place_id: String,
    /// Calendar day to search (ISO 8601: YYYY-MM-DD).
    pub date: NaiveDate,
}

/// GET /availability - aggregated club/court/slot availability.
///
/// Served from the cache when fresh; otherwise assembled from the
/// upstream courts API. An upstream failure surfaces as a 500 and leaves
/// no cache entry behind.
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<ClubAvailability>>, AppError> {
    let clubs = state
        .availability
        .get_availability(&query.place_id, query.date)
        .await?;

    Ok(Json(clubs))
}
