//! Inbound domain-event endpoint.
//!
//! The `Json<DomainEvent>` extractor is the validation boundary: bodies
//! that don't match one of the four event shapes are rejected with a
//! client error before any invalidation logic runs.

use axum::{extract::State, http::StatusCode, Json};

use courtsync_core::courts::DomainEvent;

use crate::state::AppState;

/// POST /events - receive an upstream domain event.
///
/// Invalidates the affected cache partitions, then re-publishes the event
/// on the in-process broadcast feed. Always answers 200 for well-formed
/// events: an event for an unknown club is a valid no-op, not a failure.
#[axum::debug_handler]
pub async fn receive_event(
    State(state): State<AppState>,
    Json(event): Json<DomainEvent>,
) -> StatusCode {
    state.invalidator.handle(&event).await;
    state.publish_event(event);

    StatusCode::OK
}
