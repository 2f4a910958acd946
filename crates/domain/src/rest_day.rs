use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::SavedWorkout;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RestDays(BTreeSet<NaiveDate>);

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestDayError {
    #[error("this day is already logged as a workout and cannot be a rest day")]
    WorkoutDay,
    #[error("invalid date")]
    InvalidDate,
}

impl RestDays {
    #[must_use]
    pub fn new(days: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self(days.into_iter().collect())
    }

    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.0.contains(&day)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds or removes the calendar day of `date`.
    ///
    /// Returns whether the day is a rest day afterwards. Days on which a workout was saved are
    /// rejected.
    pub fn toggle(
        &mut self,
        date: &impl Datelike,
        workouts: &[SavedWorkout],
    ) -> Result<bool, RestDayError> {
        let day = NaiveDate::from_ymd_opt(date.year(), date.month(), date.day())
            .ok_or(RestDayError::InvalidDate)?;

        if workouts.iter().any(|w| w.day() == day) {
            return Err(RestDayError::WorkoutDay);
        }

        if self.0.remove(&day) {
            Ok(false)
        } else {
            self.0.insert(day);
            Ok(true)
        }
    }
}
