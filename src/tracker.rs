use chrono::NaiveDateTime;
use log::{debug, info, warn};
use std::path::Path;

use crate::clock::{Clock, SystemClock};
use crate::error::{HabitError, Result};
use crate::habit::{Habit, Periodicity};
use crate::seed::seed_habits;
use crate::storage::Storage;

/// Ordered collection of habits backed by a habit store
///
/// Habits are addressed by their current position. Deleting a habit shifts
/// every later habit down by one. Each mutation is written to the store
/// before the call returns.
pub struct HabitTracker {
    pub(crate) habits: Vec<Habit>,
    pub(crate) storage: Storage,
    clock: Box<dyn Clock>,
}

impl HabitTracker {
    /// Open the tracker stored at `storage_path` using the system clock
    ///
    /// When the file does not exist it is created with the seed habits.
    ///
    /// # Example
    /// ```no_run
    /// # use habit_tracker::HabitTracker;
    /// # fn main() -> habit_tracker::Result<()> {
    /// let mut tracker = HabitTracker::new("habits.toml")?;
    /// tracker.add_habit("Stretch", "daily")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: impl AsRef<Path>) -> Result<Self> {
        Self::with_clock(storage_path, SystemClock)
    }

    /// Open the tracker stored at `storage_path` with an explicit clock
    pub fn with_clock(storage_path: impl AsRef<Path>, clock: impl Clock + 'static) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let clock: Box<dyn Clock> = Box::new(clock);

        let habits = match storage.load()? {
            Some(habits) => habits,
            None => {
                warn!(
                    "No habit store found at {}, creating it with seed data",
                    storage.path().display()
                );
                let habits = seed_habits(clock.now());
                storage.save(&habits)?;
                habits
            }
        };

        Ok(Self {
            habits,
            storage,
            clock,
        })
    }

    /// Current time according to the tracker's clock
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Path of the backing habit store
    pub fn storage_path(&self) -> &Path {
        self.storage.path()
    }

    /// Write the whole collection to the store
    pub fn save(&self) -> Result<()> {
        self.storage.save(&self.habits)
    }

    /// Add a habit with no completions and persist
    ///
    /// # Errors
    /// `HabitError::InvalidPeriodicity` unless `periodicity` is `daily` or `weekly`.
    pub fn add_habit(&mut self, name: impl Into<String>, periodicity: &str) -> Result<&Habit> {
        let habit = Habit::parse(name, periodicity, self.clock.now())?;
        info!("Adding {} habit '{}'", habit.periodicity(), habit.name());
        self.habits.push(habit);
        self.save()?;
        Ok(&self.habits[self.habits.len() - 1])
    }

    /// Complete the habit at `index` for `date` (defaults to now) and persist
    ///
    /// Completing a period that already has a completion leaves the habit
    /// unchanged.
    pub fn complete_habit(&mut self, index: usize, date: Option<NaiveDateTime>) -> Result<()> {
        let date = date.unwrap_or_else(|| self.clock.now());
        let habit = self.habit_mut(index)?;

        if habit.is_completed_for(date) {
            debug!(
                "Habit '{}' already completed for the period of {}",
                habit.name(),
                date
            );
        } else {
            info!("Completing habit '{}' at {}", habit.name(), date);
        }
        habit.complete(date);

        self.save()
    }

    /// Remove the habit at `index` and persist
    ///
    /// Returns the removed habit.
    pub fn delete_habit(&mut self, index: usize) -> Result<Habit> {
        self.check_index(index)?;
        let removed = self.habits.remove(index);
        info!("Deleted habit '{}' at index {}", removed.name(), index);
        self.save()?;
        Ok(removed)
    }

    /// All habits in insertion order
    pub fn all_habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Habits whose periodicity matches `period`, in insertion order
    ///
    /// An unknown periodicity matches nothing.
    pub fn habits_by_periodicity(&self, period: &str) -> Vec<&Habit> {
        match period.parse::<Periodicity>() {
            Ok(periodicity) => self
                .habits
                .iter()
                .filter(|h| h.periodicity() == periodicity)
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Habit with the longest current streak
    ///
    /// Ties go to the habit added first. Returns `None` when there are no habits.
    pub fn longest_streak_all(&self) -> Option<&Habit> {
        let now = self.clock.now();
        self.habits
            .iter()
            .map(|h| (h.streak(now), h))
            .reduce(|best, candidate| if candidate.0 > best.0 { candidate } else { best })
            .map(|(_, habit)| habit)
    }

    /// Current streak of the habit at `index`
    pub fn longest_streak_for(&self, index: usize) -> Result<u32> {
        self.check_index(index)?;
        Ok(self.habits[index].streak(self.clock.now()))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.habits.len() {
            Ok(())
        } else {
            Err(HabitError::IndexOutOfRange {
                index,
                len: self.habits.len(),
            })
        }
    }

    fn habit_mut(&mut self, index: usize) -> Result<&mut Habit> {
        let len = self.habits.len();
        self.habits
            .get_mut(index)
            .ok_or(HabitError::IndexOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Duration, NaiveDate};
    use tempfile::NamedTempFile;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn get_test_tracker() -> (HabitTracker, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let tracker = HabitTracker::with_clock(temp_file.path(), FixedClock(now())).unwrap();
        (tracker, temp_file)
    }

    #[test]
    fn test_empty_store_file_is_empty_tracker() {
        let (tracker, _temp_file) = get_test_tracker();
        assert!(tracker.all_habits().is_empty());
        assert!(tracker.longest_streak_all().is_none());
    }

    #[test]
    fn test_add_habit_uses_clock_for_created_at() {
        let (mut tracker, _temp_file) = get_test_tracker();
        let habit = tracker.add_habit("Stretch", "daily").unwrap();
        assert_eq!(habit.created_at(), now());
        assert!(habit.completions().is_empty());
    }

    #[test]
    fn test_complete_habit_defaults_to_clock() {
        let (mut tracker, _temp_file) = get_test_tracker();
        tracker.add_habit("Stretch", "daily").unwrap();
        tracker.complete_habit(0, None).unwrap();
        assert_eq!(tracker.all_habits()[0].completions(), &[now()]);
    }

    #[test]
    fn test_longest_streak_tie_prefers_first() {
        let (mut tracker, _temp_file) = get_test_tracker();
        tracker.add_habit("First", "daily").unwrap();
        tracker.add_habit("Second", "daily").unwrap();
        for index in 0..2 {
            tracker
                .complete_habit(index, Some(now() - Duration::days(1)))
                .unwrap();
            tracker.complete_habit(index, None).unwrap();
        }

        let longest = tracker.longest_streak_all().unwrap();
        assert_eq!(longest.name(), "First");
        assert_eq!(longest.streak(now()), 2);
    }

    #[test]
    fn test_index_errors_report_length() {
        let (mut tracker, _temp_file) = get_test_tracker();
        tracker.add_habit("Only", "weekly").unwrap();

        let err = tracker.delete_habit(1).unwrap_err();
        assert!(matches!(err, HabitError::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(tracker.all_habits().len(), 1);
    }
}
