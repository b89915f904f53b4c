//! Formatting helper functions for habit listings
//!
//! Shared by the interactive session and the one-shot subcommands.

use crate::habit::Habit;
use chrono::NaiveDateTime;

/// Format one habit line of the habit list
///
/// # Arguments
/// * `index` - Current position of the habit in the tracker
/// * `habit` - Habit to format
/// * `now` - Reference instant for the streak
///
/// # Returns
/// `<index>. <name> (<periodicity>) | streak: <n>`
pub fn format_habit_line(index: usize, habit: &Habit, now: NaiveDateTime) -> String {
    format!(
        "{}. {} ({}) | streak: {}",
        index,
        habit.name(),
        habit.periodicity(),
        habit.streak(now)
    )
}

/// Format the full habit list with positional indices
///
/// # Returns
/// One line per habit, or `No habits found` for an empty list
pub fn format_habits(habits: &[Habit], now: NaiveDateTime) -> String {
    if habits.is_empty() {
        return "No habits found".to_string();
    }

    habits
        .iter()
        .enumerate()
        .map(|(index, habit)| format_habit_line(index, habit, now))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format habit names, one per line
pub fn format_habit_names(habits: &[&Habit]) -> String {
    if habits.is_empty() {
        return "No habits found".to_string();
    }

    habits
        .iter()
        .map(|habit| habit.name())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the result of the longest streak query
///
/// # Arguments
/// * `habit` - Result of `HabitTracker::longest_streak_all`
/// * `now` - Reference instant for the streak
///
/// # Returns
/// `<name>: <n>`, or `No habits found` when there is no habit
pub fn format_longest_streak(habit: Option<&Habit>, now: NaiveDateTime) -> String {
    match habit {
        Some(habit) => format!("{}: {}", habit.name(), habit.streak(now)),
        None => "No habits found".to_string(),
    }
}
