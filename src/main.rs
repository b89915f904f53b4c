//! Habit Tracker - Main Entry Point
//!
//! The actual implementation is in the `habit_tracker` library.

use anyhow::Result;

fn main() -> Result<()> {
    habit_tracker::cli::run()
}
