mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{availability_key, clubs_key, courts_key};
pub use serialization::{
    deserialize_availability, deserialize_clubs, deserialize_courts, serialize_availability,
    serialize_clubs, serialize_courts, SerializationError,
};
pub use traits::{Cache, PlaceIndex};
