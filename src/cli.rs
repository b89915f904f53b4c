//! Command line interface
//!
//! Without a subcommand the binary starts the interactive menu session.
//! Subcommands run a single tracker operation and exit.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::formatting::{format_habit_names, format_habits, format_longest_streak};
use crate::session::Session;
use crate::tracker::HabitTracker;
use crate::validation::{normalize_name, parse_completion_date};

/// Habit tracker - record daily and weekly habits and follow your streaks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the habit data file
    #[arg(long, short, env = "HABIT_TRACKER_FILE", default_value = "habits.toml")]
    pub file: PathBuf,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new habit
    Add {
        /// Habit name
        name: String,
        /// daily or weekly
        periodicity: String,
    },
    /// Mark a habit as completed for the current (or given) period
    Complete {
        /// Index from `list`
        index: usize,
        /// Completion date (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS), defaults to now
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete a habit
    Delete {
        /// Index from `list`
        index: usize,
    },
    /// List habits with their current streaks
    List {
        /// Only show habits with this periodicity
        #[arg(long)]
        periodicity: Option<String>,
    },
    /// Show the habit with the longest current streak
    Longest,
    /// Show the current streak of one habit
    Streak {
        /// Index from `list`
        index: usize,
    },
    /// Start the interactive menu (default)
    Interactive,
}

/// Parse arguments, set up logging and run the requested command
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut tracker = HabitTracker::new(&cli.file)
        .with_context(|| format!("Failed to open habit tracker at {}", cli.file.display()))?;

    let command = cli.command.unwrap_or(Command::Interactive);
    execute(command, &mut tracker, &mut io::stdout().lock())
}

/// Run `command` against `tracker`, writing results to `out`
///
/// `Command::Interactive` reads menu input from stdin until Exit or end of input.
pub fn execute(command: Command, tracker: &mut HabitTracker, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Add { name, periodicity } => {
            let habit = tracker.add_habit(normalize_name(&name)?, &periodicity)?;
            writeln!(out, "Added '{}' ({})", habit.name(), habit.periodicity())?;
        }
        Command::Complete { index, date } => {
            let date = date.as_deref().map(parse_completion_date).transpose()?;
            tracker.complete_habit(index, date)?;
            writeln!(
                out,
                "Completed. Current streak: {}",
                tracker.longest_streak_for(index)?
            )?;
        }
        Command::Delete { index } => {
            let removed = tracker.delete_habit(index)?;
            writeln!(out, "Deleted '{}'", removed.name())?;
        }
        Command::List { periodicity: None } => {
            writeln!(out, "{}", format_habits(tracker.all_habits(), tracker.now()))?;
        }
        Command::List {
            periodicity: Some(period),
        } => {
            writeln!(
                out,
                "{}",
                format_habit_names(&tracker.habits_by_periodicity(&period))
            )?;
        }
        Command::Longest => {
            writeln!(
                out,
                "{}",
                format_longest_streak(tracker.longest_streak_all(), tracker.now())
            )?;
        }
        Command::Streak { index } => {
            writeln!(out, "{}", tracker.longest_streak_for(index)?)?;
        }
        Command::Interactive => {
            let stdin = io::stdin();
            Session::new(tracker, stdin.lock(), out).run()?;
        }
    }
    Ok(())
}
