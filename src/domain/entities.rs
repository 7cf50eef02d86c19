//! Domain entities. Pure data structures for the core business.
//!
//! No UI/IO types here — these are mapped from adapters.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Day of the week, Sunday-first (Sunday=0 .. Saturday=6).
///
/// Serialized lowercase to match the catalog data shape
/// (`"monday": ["09:00", ...]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Maps a calendar date to its weekday.
    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }

    /// Lowercase day name, same spelling as the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lawyer in the catalog: specialties, weekly availability template, price.
///
/// Immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lawyer {
    pub id: u32,
    pub name: String,
    pub specialties: Vec<String>,
    /// Weekday -> ordered "HH:MM" slot times. Days absent from the map have no slots.
    pub availability: BTreeMap<Weekday, Vec<String>>,
    pub cost_per_appointment: u32,
}

impl Lawyer {
    /// Slot times offered on the weekday of `date`. Empty when the lawyer
    /// does not work that day — absence is not an error.
    pub fn slots_on(&self, date: NaiveDate) -> &[String] {
        self.availability
            .get(&Weekday::from_date(date))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn offers(&self, specialty: &str) -> bool {
        self.specialties.iter().any(|s| s == specialty)
    }
}

/// A confirmed appointment. Created once via the booking command,
/// never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    /// Creation timestamp, Unix milliseconds.
    pub id: i64,
    pub lawyer_id: u32,
    /// Copied from the lawyer at booking time for history display.
    pub lawyer_name: String,
    /// Calendar date only. Conflict checks compare year/month/day,
    /// never full timestamps.
    pub date: NaiveDate,
    pub time: String,
    pub specialty: String,
    pub cost: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_mapping_sunday_first() {
        // 2024-01-01 was a Monday.
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(Weekday::from_date(monday), Weekday::Monday);
        assert_eq!(
            Weekday::from_date(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()),
            Weekday::Saturday
        );
        assert_eq!(
            Weekday::from_date(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()),
            Weekday::Sunday
        );
    }

    #[test]
    fn weekday_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Weekday::Monday).unwrap(), "\"monday\"");
        let d: Weekday = serde_json::from_str("\"friday\"").unwrap();
        assert_eq!(d, Weekday::Friday);
    }

    #[test]
    fn lawyer_slots_lookup() {
        let json = r#"{
            "id": 1,
            "name": "Ganesh",
            "specialties": ["Criminal Law"],
            "availability": { "monday": ["09:00", "09:30"] },
            "cost_per_appointment": 200
        }"#;
        let lawyer: Lawyer = serde_json::from_str(json).unwrap();

        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(lawyer.slots_on(monday), ["09:00", "09:30"]);

        // No template entry for Sunday -> empty, not an error.
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert!(lawyer.slots_on(sunday).is_empty());

        assert!(lawyer.offers("Criminal Law"));
        assert!(!lawyer.offers("Family Law"));
    }
}
