use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HabitError;

/// Cadence at which a habit is expected to be completed
///
/// Serialized in lowercase (`daily`, `weekly`) to match the habit store format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Periodicity {
    /// One period per calendar day
    Daily,
    /// One period per Monday-starting week
    Weekly,
}

impl Periodicity {
    /// Lowercase name as used in the store and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Periodicity::Daily => "daily",
            Periodicity::Weekly => "weekly",
        }
    }

    /// First calendar date of the period containing `date`
    ///
    /// Daily periods start on the date itself. Weekly periods start on the
    /// Monday of the date's week.
    pub fn period_key(self, date: NaiveDate) -> NaiveDate {
        match self {
            Periodicity::Daily => date,
            Periodicity::Weekly => {
                let offset = u64::from(date.weekday().num_days_from_monday());
                // Only the first days of chrono's range have no Monday before them;
                // they share the week key NaiveDate::MIN.
                date.checked_sub_days(Days::new(offset))
                    .unwrap_or(NaiveDate::MIN)
            }
        }
    }

    /// Midnight at the start of the period containing `at`
    pub fn period_start(self, at: NaiveDateTime) -> NaiveDateTime {
        self.period_key(at.date()).and_time(NaiveTime::MIN)
    }

    /// Number of days between the starts of two adjacent periods
    pub fn days_per_period(self) -> u64 {
        match self {
            Periodicity::Daily => 1,
            Periodicity::Weekly => 7,
        }
    }

    /// Key of the period immediately before the one starting at `key`
    ///
    /// Returns `None` when stepping back would leave chrono's date range.
    pub fn previous_key(self, key: NaiveDate) -> Option<NaiveDate> {
        key.checked_sub_days(Days::new(self.days_per_period()))
    }

    /// Whether two instants fall in the same period
    pub fn same_period(self, a: NaiveDateTime, b: NaiveDateTime) -> bool {
        self.period_key(a.date()) == self.period_key(b.date())
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Periodicity {
    type Err = HabitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Periodicity::Daily),
            "weekly" => Ok(Periodicity::Weekly),
            _ => Err(HabitError::InvalidPeriodicity(s.to_string())),
        }
    }
}
