use crate::{
    ExerciseID, ExerciseLogEntry, Name, NewWorkout, Reps, SetData, SetID, WorkoutType, catalog,
};

/// The workout that is currently being logged.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CurrentWorkout {
    pub workout_type: Option<WorkoutType>,
    pub exercises: Vec<ExerciseLogEntry>,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelection {
    /// The exercises were reset to the catalog of the new day.
    Started,
    /// The same day was selected again and the catalog was merged into the existing exercises.
    Merged,
    /// Switching the day was not confirmed.
    Declined,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentWorkoutError {
    #[error("select a workout day first")]
    NoDaySelected,
    #[error("log at least one set or add workout notes")]
    Empty,
}

impl CurrentWorkout {
    #[must_use]
    pub fn has_sets(&self) -> bool {
        self.exercises.iter().any(|e| !e.sets.is_empty())
    }

    #[must_use]
    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }

    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.has_sets() || self.has_notes()
    }

    /// Whether selecting `day` would discard unsaved progress.
    #[must_use]
    pub fn requires_confirmation(&self, day: WorkoutType) -> bool {
        self.workout_type != Some(day) && self.has_progress()
    }

    /// `confirm` is only called if unsaved progress would be discarded.
    pub fn select_day(&mut self, day: WorkoutType, confirm: impl FnOnce() -> bool) -> DaySelection {
        if self.requires_confirmation(day) && !confirm() {
            return DaySelection::Declined;
        }

        let catalog = catalog::exercises(day);

        if self.workout_type == Some(day) {
            let mut exercises = catalog
                .iter()
                .map(|definition| {
                    self.exercises
                        .iter()
                        .find(|e| *e.exercise_id == definition.id)
                        .cloned()
                        .unwrap_or_else(|| ExerciseLogEntry::from(definition))
                })
                .collect::<Vec<_>>();
            exercises.extend(
                self.exercises
                    .iter()
                    .filter(|e| e.exercise_id.is_custom())
                    .cloned(),
            );
            self.exercises = exercises;
            DaySelection::Merged
        } else {
            *self = CurrentWorkout {
                workout_type: Some(day),
                exercises: catalog.iter().map(ExerciseLogEntry::from).collect(),
                notes: String::new(),
            };
            DaySelection::Started
        }
    }

    /// Returns `false` if no exercise with the same id exists.
    pub fn update_exercise_log(&mut self, entry: ExerciseLogEntry) -> bool {
        match self
            .exercises
            .iter_mut()
            .find(|e| e.exercise_id == entry.exercise_id)
        {
            Some(existing) => {
                *existing = entry;
                true
            }
            None => false,
        }
    }

    pub fn log_set(
        &mut self,
        exercise_id: &ExerciseID,
        reps: Reps,
        weight: Option<f32>,
    ) -> Option<SetID> {
        let exercise = self
            .exercises
            .iter_mut()
            .find(|e| &e.exercise_id == exercise_id)?;
        let set = SetData::new(reps, weight);
        let id = set.id;
        exercise.sets.push(set);
        Some(id)
    }

    /// Returns `false` if the set was not found.
    pub fn delete_set(&mut self, exercise_id: &ExerciseID, set_id: SetID) -> bool {
        let Some(exercise) = self
            .exercises
            .iter_mut()
            .find(|e| &e.exercise_id == exercise_id)
        else {
            return false;
        };
        let Some(idx) = exercise.sets.iter().position(|s| s.id == set_id) else {
            return false;
        };
        exercise.sets.remove(idx);
        true
    }

    pub fn add_custom_exercise(&mut self, name: &Name) -> Result<ExerciseID, CurrentWorkoutError> {
        if self.workout_type.is_none() {
            return Err(CurrentWorkoutError::NoDaySelected);
        }
        let id = ExerciseID::custom(name);
        self.exercises
            .push(ExerciseLogEntry::new(id.clone(), name.to_string()));
        Ok(id)
    }

    pub fn set_notes(&mut self, notes: String) {
        self.notes = notes;
    }

    #[must_use]
    pub fn is_saveable(&self) -> bool {
        self.workout_type.is_some() && self.has_progress()
    }

    pub fn to_new_workout(&self) -> Result<NewWorkout, CurrentWorkoutError> {
        let Some(workout_type) = self.workout_type else {
            return Err(CurrentWorkoutError::NoDaySelected);
        };
        if !self.has_progress() {
            return Err(CurrentWorkoutError::Empty);
        }
        Ok(NewWorkout::new(
            workout_type,
            &self.exercises,
            self.notes.clone(),
        ))
    }
}
