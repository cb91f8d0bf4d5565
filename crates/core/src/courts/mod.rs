mod events;
mod types;

pub use events::{ClubField, CourtField, DomainEvent};
pub use types::{Club, ClubAvailability, Court, CourtAvailability, Slot};
