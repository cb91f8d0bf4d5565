use serde::{Deserialize, Serialize};

use super::Slot;

/// Club metadata fields the upstream reports as changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClubField {
    Attributes,
    Openhours,
    LogoUrl,
    BackgroundUrl,
}

/// Court metadata fields the upstream reports as changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtField {
    Attributes,
    Name,
}

/// A domain event emitted by the upstream courts platform.
///
/// The serde representation matches the upstream wire format exactly
/// (`type` tag in snake_case, camelCase payload fields), so deserializing
/// a request body into this enum is the boundary validation: unknown event
/// types or unknown `fields` values fail before any invalidation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum DomainEvent {
    BookingCreated {
        club_id: i64,
        court_id: i64,
        slot: Slot,
    },
    BookingCancelled {
        club_id: i64,
        court_id: i64,
        slot: Slot,
    },
    ClubUpdated {
        club_id: i64,
        fields: Vec<ClubField>,
    },
    CourtUpdated {
        club_id: i64,
        court_id: i64,
        fields: Vec<CourtField>,
    },
}

impl DomainEvent {
    /// Returns the id of the club this event refers to.
    ///
    /// Every event variant carries one; it is the handle used to resolve
    /// the affected place through the index.
    pub fn club_id(&self) -> i64 {
        match self {
            DomainEvent::BookingCreated { club_id, .. }
            | DomainEvent::BookingCancelled { club_id, .. }
            | DomainEvent::ClubUpdated { club_id, .. }
            | DomainEvent::CourtUpdated { club_id, .. } => *club_id,
        }
    }
}
