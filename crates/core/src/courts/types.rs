use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A club that rents out courts, as returned by the upstream courts API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_url: Option<String>,
}

impl Club {
    /// Creates a new club with the given id and name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            logo_url: None,
            background_url: None,
        }
    }
}

/// A court belonging to a club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
}

impl Court {
    /// Creates a new court with the given id and name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            attributes: Vec::new(),
        }
    }
}

/// A bookable time slot on a court.
///
/// `datetime` carries the full start instant; `start`/`end` are the
/// upstream's preformatted clock times and are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub price: f64,
    /// Slot length in minutes.
    pub duration: u32,
    pub datetime: NaiveDateTime,
    pub start: String,
    pub end: String,
    #[serde(default, rename = "_priority")]
    pub priority: i64,
}

/// A court annotated with its available slots for the requested date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtAvailability {
    #[serde(flatten)]
    pub court: Court,
    pub available: Vec<Slot>,
}

/// A club annotated with its courts' availability for the requested date.
///
/// A `Vec<ClubAvailability>` is the value cached per `(place, date)`
/// partition. Clubs and courts keep the order the upstream returned them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubAvailability {
    #[serde(flatten)]
    pub club: Club,
    pub courts: Vec<CourtAvailability>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn test_slot() -> Slot {
        Slot {
            price: 1200.0,
            duration: 60,
            datetime: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            start: "10:00".to_string(),
            end: "11:00".to_string(),
            priority: 0,
        }
    }

    #[test]
    fn test_slot_datetime_wire_format() {
        let slot = test_slot();
        let json = serde_json::to_value(&slot).unwrap();

        assert_eq!(json["datetime"], "2024-06-01T10:00:00");
        assert_eq!(json["_priority"], 0);
    }

    #[test]
    fn test_slot_priority_defaults_when_absent() {
        let json = r#"{
            "price": 900,
            "duration": 90,
            "datetime": "2024-06-01T18:30:00",
            "start": "18:30",
            "end": "20:00"
        }"#;

        let slot: Slot = serde_json::from_str(json).unwrap();

        assert_eq!(slot.priority, 0);
        assert_eq!(slot.datetime.date(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_club_availability_flattens_club_fields() {
        let availability = ClubAvailability {
            club: Club::new(1, "Center Club"),
            courts: vec![CourtAvailability {
                court: Court::new(10, "Court 1"),
                available: vec![test_slot()],
            }],
        };

        let json = serde_json::to_value(&availability).unwrap();

        // The club fields sit at the top level, next to `courts`.
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Center Club");
        assert_eq!(json["courts"][0]["id"], 10);
        assert_eq!(json["courts"][0]["available"][0]["start"], "10:00");
    }

    #[test]
    fn test_court_attributes_default_to_empty() {
        let json = r#"{"id": 7, "name": "Court 7"}"#;

        let court: Court = serde_json::from_str(json).unwrap();

        assert!(court.attributes.is_empty());
    }
}
