//! Validation helpers for user input
//!
//! The command line hands raw strings to these helpers before calling into
//! the tracker. Range checks on indices stay in the tracker.

use anyhow::{Result, anyhow, bail};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::habit::parse_timestamp;

/// Parse a habit index typed by the user
///
/// # Arguments
/// * `input` - Raw index text, surrounding whitespace allowed
///
/// # Returns
/// The position to pass to the tracker, or an error for anything that is
/// not a non-negative integer
pub fn parse_index(input: &str) -> Result<usize> {
    input.trim().parse::<usize>().map_err(|_| {
        anyhow!(
            "Invalid index '{}'. Use a non-negative number from the habit list",
            input.trim()
        )
    })
}

/// Parse a completion date
///
/// # Arguments
/// * `input` - `YYYY-MM-DD` (taken as midnight) or a full
///   `YYYY-MM-DDTHH:MM:SS[.fraction]` timestamp
///
/// # Returns
/// Local wall-clock timestamp of the completion
pub fn parse_completion_date(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    parse_timestamp(input).map_err(|_| {
        anyhow!(
            "Invalid date '{}'. Use YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS (e.g., '2024-03-15')",
            input
        )
    })
}

/// Trim a habit name and reject empty names
pub fn normalize_name(input: &str) -> Result<String> {
    let name = input.trim();
    if name.is_empty() {
        bail!("Habit name must not be empty");
    }
    Ok(name.to_string())
}
