//! Habit Tracker Library
//!
//! Tracks recurring daily and weekly habits for a single user, records
//! completions, computes consecutive-period streaks and persists everything
//! to a local TOML file.
//!
//! # Architecture
//!
//! - **Domain Layer**: `habit` module - Habit entity, period alignment and streaks
//! - **Tracker**: [`HabitTracker`] - ordered habit collection with add/complete/delete/query
//! - **Persistence Layer**: `storage` module - TOML file store, seeded on first use
//! - **Interface Layer**: `cli` and `session` modules - clap subcommands and the interactive menu
//!
//! # Example
//!
//! ```no_run
//! use habit_tracker::{FixedClock, HabitTracker};
//! use chrono::NaiveDate;
//!
//! fn main() -> habit_tracker::Result<()> {
//!     let now = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(10, 0, 0).unwrap();
//!     let mut tracker = HabitTracker::with_clock("habits.toml", FixedClock(now))?;
//!     tracker.add_habit("Stretch", "daily")?;
//!     let index = tracker.all_habits().len() - 1;
//!     tracker.complete_habit(index, None)?;
//!     assert_eq!(tracker.longest_streak_for(index)?, 1);
//!     Ok(())
//! }
//! ```

pub mod cli;
mod clock;
mod error;
pub mod formatting;
pub mod habit;
mod seed;
pub mod session;
mod storage;
mod tracker;
pub mod validation;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{HabitError, Result};
pub use habit::{Habit, Periodicity};
pub use seed::seed_habits;
pub use storage::Storage;
pub use tracker::HabitTracker;
