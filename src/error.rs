//! Error types for the habit tracker
//!
//! Every fallible operation of the library returns [`HabitError`]. The
//! binary wraps these in `anyhow` at its boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = HabitError> = std::result::Result<T, E>;

/// Errors raised by habits, the tracker and the habit store
#[derive(Error, Debug)]
pub enum HabitError {
    /// Periodicity is neither `daily` nor `weekly`
    #[error("Invalid periodicity '{0}'. Periodicity must be 'daily' or 'weekly'")]
    InvalidPeriodicity(String),

    /// Index does not address a habit in the current collection
    #[error("Habit index {index} is out of range (tracker holds {len} habit(s))")]
    IndexOutOfRange { index: usize, len: usize },

    /// Reading or writing the habit store failed
    #[error("Failed to access habit store at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The habit store exists but is not a valid habit document
    #[error("Failed to parse habit store at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The habit collection could not be serialized
    #[error("Failed to serialize habits: {0}")]
    Serialize(#[from] toml::ser::Error),
}
