//! Interactive menu session
//!
//! Reads menu choices line by line and drives a [`HabitTracker`]. Errors
//! raised by the tracker or by input validation are printed and the menu is
//! shown again. End of input ends the session like choosing Exit.

use anyhow::Result;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::formatting::{format_habit_names, format_habits, format_longest_streak};
use crate::tracker::HabitTracker;
use crate::validation::{normalize_name, parse_index};

const MAIN_MENU: &str = "1 Add | 2 Complete | 3 Delete | 4 View | 5 Analytics | 6 Exit";
const ANALYTICS_MENU: &str = "1 By periodicity | 2 Longest streak | 3 Streak for habit";

/// Interactive session over any line-based input and output
pub struct Session<'a, R, W> {
    tracker: &'a mut HabitTracker,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(tracker: &'a mut HabitTracker, input: R, output: W) -> Self {
        Self {
            tracker,
            input,
            output,
        }
    }

    /// Run the menu loop until Exit or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n{}", MAIN_MENU)?;
            let Some(choice) = self.prompt("> ")? else {
                return Ok(());
            };

            let outcome = match choice.as_str() {
                "1" => self.add(),
                "2" => self.complete(),
                "3" => self.delete(),
                "4" => self.show().map(|_| true),
                "5" => self.analytics(),
                "6" => return Ok(()),
                other => {
                    writeln!(self.output, "Unknown choice '{}'", other)?;
                    Ok(true)
                }
            };

            match outcome {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                // Failing to read input or write output ends the session
                Err(e) if e.is::<io::Error>() => return Err(e),
                Err(e) => self.report(e)?,
            }
        }
    }

    // Each action returns Ok(false) when input ran out mid-dialog.

    fn add(&mut self) -> Result<bool> {
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(false);
        };
        let Some(periodicity) = self.prompt("daily/weekly: ")? else {
            return Ok(false);
        };

        let name = normalize_name(&name)?;
        let habit = self.tracker.add_habit(name, &periodicity)?;
        let message = format!("Added '{}' ({})", habit.name(), habit.periodicity());
        writeln!(self.output, "{}", message)?;
        Ok(true)
    }

    fn complete(&mut self) -> Result<bool> {
        self.show()?;
        let Some(index) = self.prompt("Index: ")? else {
            return Ok(false);
        };

        let index = parse_index(&index)?;
        self.tracker.complete_habit(index, None)?;
        let streak = self.tracker.longest_streak_for(index)?;
        writeln!(self.output, "Completed. Current streak: {}", streak)?;
        Ok(true)
    }

    fn delete(&mut self) -> Result<bool> {
        self.show()?;
        let Some(index) = self.prompt("Index: ")? else {
            return Ok(false);
        };

        let removed = self.tracker.delete_habit(parse_index(&index)?)?;
        writeln!(self.output, "Deleted '{}'", removed.name())?;
        Ok(true)
    }

    fn show(&mut self) -> Result<()> {
        let listing = format_habits(self.tracker.all_habits(), self.tracker.now());
        writeln!(self.output, "{}", listing)?;
        Ok(())
    }

    fn analytics(&mut self) -> Result<bool> {
        writeln!(self.output, "{}", ANALYTICS_MENU)?;
        let Some(choice) = self.prompt("> ")? else {
            return Ok(false);
        };

        match choice.as_str() {
            "1" => {
                let Some(period) = self.prompt("daily/weekly: ")? else {
                    return Ok(false);
                };
                let listing = format_habit_names(&self.tracker.habits_by_periodicity(&period));
                writeln!(self.output, "{}", listing)?;
            }
            "2" => {
                let listing =
                    format_longest_streak(self.tracker.longest_streak_all(), self.tracker.now());
                writeln!(self.output, "{}", listing)?;
            }
            "3" => {
                self.show()?;
                let Some(index) = self.prompt("Index: ")? else {
                    return Ok(false);
                };
                let streak = self.tracker.longest_streak_for(parse_index(&index)?)?;
                writeln!(self.output, "{}", streak)?;
            }
            other => writeln!(self.output, "Unknown choice '{}'", other)?,
        }
        Ok(true)
    }

    /// Print `label` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, error: impl Display) -> Result<()> {
        writeln!(self.output, "Error: {}", error)?;
        Ok(())
    }
}
