//! Habit domain model
//!
//! - `periodicity`: daily/weekly cadence and period alignment
//! - `model`: the Habit entity with completion and streak logic
//! - `serde_impl`: store record format for Habit

mod model;
mod periodicity;
mod serde_impl;

pub use model::Habit;
pub use periodicity::Periodicity;
pub(crate) use serde_impl::parse_timestamp;
