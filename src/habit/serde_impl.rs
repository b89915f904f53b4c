//! Serialization and deserialization for Habit
//!
//! Habits are stored as plain records with ISO-8601 timestamp strings:
//!
//! ```toml
//! [[habit]]
//! name = "Exercise"
//! periodicity = "daily"
//! created_at = "2024-01-15T10:00:00"
//! completions = ["2024-01-15T10:00:00", "2024-01-16T07:30:00.250"]
//! ```
//!
//! Deserialization goes through the same periodicity parsing as
//! [`Habit::parse`](super::Habit::parse), so an unknown periodicity in the
//! store is reported as an invalid periodicity rather than a bare serde
//! variant error.

use super::model::Habit;
use super::periodicity::Periodicity;
use chrono::NaiveDateTime;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Timestamp layout written to the store (fraction omitted when zero)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Wire shape of a single habit
#[derive(Serialize, Deserialize)]
struct HabitRecord {
    name: String,
    periodicity: String,
    created_at: String,
    #[serde(default)]
    completions: Vec<String>,
}

pub(crate) fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub(crate) fn parse_timestamp(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    value.trim().parse::<NaiveDateTime>()
}

impl Serialize for Habit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        HabitRecord {
            name: self.name.clone(),
            periodicity: self.periodicity.as_str().to_string(),
            created_at: format_timestamp(self.created_at),
            completions: self.completions.iter().copied().map(format_timestamp).collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Habit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = HabitRecord::deserialize(deserializer)?;

        let periodicity: Periodicity = record.periodicity.parse().map_err(D::Error::custom)?;

        let timestamp = |value: &str| {
            parse_timestamp(value)
                .map_err(|e| D::Error::custom(format!("invalid timestamp '{}': {}", value, e)))
        };

        let created_at = timestamp(record.created_at.as_str())?;
        let completions = record
            .completions
            .iter()
            .map(|c| timestamp(c.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Habit::with_completions(
            record.name,
            periodicity,
            created_at,
            completions,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_timestamp_omits_zero_fraction() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(format_timestamp(at), "2024-01-15T10:00:00");

        let precise = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_micro_opt(10, 0, 0, 123_456)
            .unwrap();
        let text = format_timestamp(precise);
        assert_eq!(text, "2024-01-15T10:00:00.123456");
        assert_eq!(parse_timestamp(&text).unwrap(), precise);
    }
}
