//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use habit_tracker::{FixedClock, HabitTracker};
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

/// Monday, January 15th 2024 at 10:00
pub fn today() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

pub fn days_ago(days: i64) -> NaiveDateTime {
    today() - Duration::days(days)
}

/// Create a tracker over an empty temporary store (no seed data)
pub fn get_test_tracker() -> (HabitTracker, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let tracker = HabitTracker::with_clock(temp_file.path(), FixedClock(today())).unwrap();
    (tracker, temp_file)
}

/// Path to a store file that does not exist yet
pub fn missing_store_path() -> (PathBuf, TempDir) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("habits.toml");
    (path, dir)
}

/// Reopen the store used by `temp_file` with the same fixed clock
pub fn reopen(temp_file: &NamedTempFile) -> HabitTracker {
    HabitTracker::with_clock(temp_file.path(), FixedClock(today())).unwrap()
}
