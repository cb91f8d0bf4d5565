//! Pure functions for serializing/deserializing domain types to/from cache bytes.
//!
//! These functions use JSON serialization for cache storage, providing human-readable
//! cache values that are easy to debug and inspect.

use thiserror::Error;

use crate::courts::{Club, ClubAvailability, Court};

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes an aggregated availability result to JSON bytes.
pub fn serialize_availability(clubs: &[ClubAvailability]) -> Result<Vec<u8>> {
    serde_json::to_vec(clubs).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to an aggregated availability result.
pub fn deserialize_availability(bytes: &[u8]) -> Result<Vec<ClubAvailability>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a club list to JSON bytes.
pub fn serialize_clubs(clubs: &[Club]) -> Result<Vec<u8>> {
    serde_json::to_vec(clubs).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a club list.
pub fn deserialize_clubs(bytes: &[u8]) -> Result<Vec<Club>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a court list to JSON bytes.
pub fn serialize_courts(courts: &[Court]) -> Result<Vec<u8>> {
    serde_json::to_vec(courts).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a court list.
pub fn deserialize_courts(bytes: &[u8]) -> Result<Vec<Court>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
