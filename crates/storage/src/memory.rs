//! Workout store kept in memory, used when no remote store is configured.

use std::cell::RefCell;

use chrono::{DateTime, Utc};
use treine_domain as domain;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct Memory {
    workouts: RefCell<Vec<domain::SavedWorkout>>,
    clock: Option<fn() -> DateTime<Utc>>,
}

impl Memory {
    #[must_use]
    pub fn new(workouts: Vec<domain::SavedWorkout>) -> Self {
        let memory = Self {
            workouts: RefCell::new(workouts),
            clock: None,
        };
        memory.sort();
        memory
    }

    /// Dates of created workouts are taken from `clock` instead of the system time.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = Some(clock);
        self
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.map_or_else(Utc::now, |clock| clock())
    }

    fn sort(&self) {
        self.workouts
            .borrow_mut()
            .sort_by(|a, b| (b.date, &b.id).cmp(&(a.date, &a.id)));
    }
}

impl domain::WorkoutRepository for Memory {
    async fn read_workouts(
        &self,
        after: Option<domain::Cursor>,
        limit: usize,
    ) -> Result<Vec<domain::SavedWorkout>, domain::ReadError> {
        Ok(self
            .workouts
            .borrow()
            .iter()
            .filter(|workout| after.as_ref().is_none_or(|cursor| cursor.precedes(workout)))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn create_workout(
        &self,
        workout: domain::NewWorkout,
    ) -> Result<domain::SavedWorkout, domain::CreateError> {
        let saved = domain::SavedWorkout::new(
            Uuid::new_v4().simple().to_string().into(),
            self.now(),
            workout,
        );
        self.workouts.borrow_mut().push(saved.clone());
        self.sort();
        Ok(saved)
    }

    async fn update_workout_notes(
        &self,
        id: domain::WorkoutID,
        notes: String,
    ) -> Result<domain::WorkoutID, domain::UpdateError> {
        let mut workouts = self.workouts.borrow_mut();
        let workout = workouts
            .iter_mut()
            .find(|workout| workout.id == id)
            .ok_or(domain::UpdateError::NotFound)?;
        workout.notes = notes;
        Ok(id)
    }

    async fn delete_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::WorkoutID, domain::DeleteError> {
        let mut workouts = self.workouts.borrow_mut();
        let index = workouts
            .iter()
            .position(|workout| workout.id == id)
            .ok_or(domain::DeleteError::NotFound)?;
        workouts.remove(index);
        Ok(id)
    }
}
