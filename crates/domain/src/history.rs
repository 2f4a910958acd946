use chrono::{DateTime, Utc};

use crate::{SavedWorkout, WorkoutID};

pub const PAGE_SIZE: usize = 5;

/// Position of the last workout of a page.
///
/// Workouts are ordered by date descending, ties by id descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    pub date: DateTime<Utc>,
    pub id: WorkoutID,
}

impl Cursor {
    /// Whether `workout` comes strictly after the cursor in descending order.
    #[must_use]
    pub fn precedes(&self, workout: &SavedWorkout) -> bool {
        (workout.date, &workout.id) < (self.date, &self.id)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Page {
    pub workouts: Vec<SavedWorkout>,
    pub cursor: Option<Cursor>,
}

impl Page {
    /// A page shorter than `page_size` has no cursor, as no further workouts exist.
    #[must_use]
    pub fn new(workouts: Vec<SavedWorkout>, page_size: usize) -> Self {
        let cursor = if page_size > 0 && workouts.len() >= page_size {
            workouts.last().map(SavedWorkout::cursor)
        } else {
            None
        };
        Self { workouts, cursor }
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }
}
