//! Seed data for a fresh habit store
//!
//! Generated when no store exists yet: three daily and two weekly habits,
//! each with four weeks of history ending at the given instant.

use chrono::{Duration, NaiveDateTime};

use crate::habit::{Habit, Periodicity};

const SEED_WEEKS: i64 = 4;

/// How far before `now` the seeded habits claim to have been created
const SEED_CREATED_DAYS_AGO: i64 = 35;

const DAILY_SEEDS: [&str; 3] = ["Exercise", "Read", "Meditate"];
const WEEKLY_SEEDS: [&str; 2] = ["Call Family", "Clean House"];

/// Build the seed habit set relative to `now`
///
/// Daily habits get one completion per day for the last 28 days including
/// `now`; weekly habits get one completion per week for the last 4 weeks
/// including `now`'s week.
pub fn seed_habits(now: NaiveDateTime) -> Vec<Habit> {
    let created_at = now - Duration::days(SEED_CREATED_DAYS_AGO);

    let daily_history = |periods: i64| -> Vec<NaiveDateTime> {
        (0..periods)
            .rev()
            .map(|i| now - Duration::days(i))
            .collect()
    };
    let weekly_history = |periods: i64| -> Vec<NaiveDateTime> {
        (0..periods)
            .rev()
            .map(|i| now - Duration::days(i * 7))
            .collect()
    };

    let daily = DAILY_SEEDS.iter().map(|name| {
        Habit::with_completions(
            *name,
            Periodicity::Daily,
            created_at,
            daily_history(SEED_WEEKS * 7),
        )
    });
    let weekly = WEEKLY_SEEDS.iter().map(|name| {
        Habit::with_completions(
            *name,
            Periodicity::Weekly,
            created_at,
            weekly_history(SEED_WEEKS),
        )
    });

    daily.chain(weekly).collect()
}
