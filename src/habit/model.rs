use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashSet;

use super::periodicity::Periodicity;
use crate::error::Result;

/// A recurring habit and its completion history
///
/// Completions keep insertion order and are not assumed to be sorted.
/// Historical data may hold several completions inside one period; new
/// completions added through [`Habit::complete`] are deduplicated per period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    pub(crate) name: String,
    pub(crate) periodicity: Periodicity,
    pub(crate) created_at: NaiveDateTime,
    pub(crate) completions: Vec<NaiveDateTime>,
}

impl Habit {
    /// Create a habit with no completions
    pub fn new(name: impl Into<String>, periodicity: Periodicity, created_at: NaiveDateTime) -> Self {
        Self::with_completions(name, periodicity, created_at, Vec::new())
    }

    /// Create a habit with an existing completion history
    ///
    /// The history is taken as-is: no sorting and no per-period dedupe.
    pub fn with_completions(
        name: impl Into<String>,
        periodicity: Periodicity,
        created_at: NaiveDateTime,
        completions: Vec<NaiveDateTime>,
    ) -> Self {
        Self {
            name: name.into(),
            periodicity,
            created_at,
            completions,
        }
    }

    /// Create a habit from a textual periodicity
    ///
    /// # Errors
    /// Returns `HabitError::InvalidPeriodicity` unless `periodicity` is
    /// `daily` or `weekly`.
    pub fn parse(
        name: impl Into<String>,
        periodicity: &str,
        created_at: NaiveDateTime,
    ) -> Result<Self> {
        Ok(Self::new(name, periodicity.parse()?, created_at))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn periodicity(&self) -> Periodicity {
        self.periodicity
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Completion timestamps in insertion order
    pub fn completions(&self) -> &[NaiveDateTime] {
        &self.completions
    }

    /// Whether any completion falls in the same period as `date`
    pub fn is_completed_for(&self, date: NaiveDateTime) -> bool {
        self.completions
            .iter()
            .any(|c| self.periodicity.same_period(*c, date))
    }

    /// Record a completion at `date`
    ///
    /// Does nothing when the period containing `date` already has a completion.
    pub fn complete(&mut self, date: NaiveDateTime) {
        if !self.is_completed_for(date) {
            self.completions.push(date);
        }
    }

    /// Start of the period containing `date`
    pub fn period_start(&self, date: NaiveDateTime) -> NaiveDateTime {
        self.periodicity.period_start(date)
    }

    /// Whether any completion is at or after the start of `date`'s period
    ///
    /// This is not bounded by the end of the period: a later completion also
    /// satisfies it.
    pub fn completed_in_period(&self, date: NaiveDateTime) -> bool {
        let start = self.period_start(date);
        self.completions.iter().any(|c| *c >= start)
    }

    /// Number of consecutive periods, ending at `reference`'s period, that
    /// hold at least one completion
    ///
    /// Returns 0 when the reference period itself has no completion.
    pub fn streak(&self, reference: NaiveDateTime) -> u32 {
        if self.completions.is_empty() {
            return 0;
        }

        let completed: HashSet<NaiveDate> = self
            .completions
            .iter()
            .map(|c| self.periodicity.period_key(c.date()))
            .collect();

        let mut current = Some(self.periodicity.period_key(reference.date()));
        let mut streak = 0;
        while let Some(key) = current.filter(|k| completed.contains(k)) {
            streak += 1;
            current = self.periodicity.previous_key(key);
        }
        streak
    }
}
