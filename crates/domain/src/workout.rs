use std::fmt;

use chrono::{DateTime, Local, NaiveDate, Utc};
use derive_more::{AsRef, Deref, Display, Into};
use uuid::Uuid;

use crate::{
    CreateError, Cursor, DeleteError, ExerciseDefinition, Name, Page, ReadError, UpdateError,
};

pub const CUSTOM_EXERCISE_PREFIX: &str = "custom-";

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn load_first_page(&self, page_size: usize) -> Result<Page, ReadError>;
    async fn load_next_page(
        &self,
        cursor: Option<&Cursor>,
        page_size: usize,
    ) -> Result<Page, ReadError>;
    async fn create_workout(&self, workout: NewWorkout) -> Result<SavedWorkout, CreateError>;
    async fn update_workout_notes(
        &self,
        id: WorkoutID,
        notes: String,
    ) -> Result<WorkoutID, UpdateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    /// Workouts ordered by date descending, starting strictly after `after`.
    async fn read_workouts(
        &self,
        after: Option<Cursor>,
        limit: usize,
    ) -> Result<Vec<SavedWorkout>, ReadError>;
    async fn create_workout(&self, workout: NewWorkout) -> Result<SavedWorkout, CreateError>;
    async fn update_workout_notes(
        &self,
        id: WorkoutID,
        notes: String,
    ) -> Result<WorkoutID, UpdateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WorkoutType {
    Push,
    Pull,
}

impl WorkoutType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutType::Push => "push",
            WorkoutType::Pull => "pull",
        }
    }
}

impl TryFrom<&str> for WorkoutType {
    type Error = WorkoutTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "push" => Ok(WorkoutType::Push),
            "pull" => Ok(WorkoutType::Pull),
            _ => Err(WorkoutTypeError::Unknown(value.to_string())),
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutTypeError {
    #[error("unknown workout type: {0}")]
    Unknown(String),
}

#[derive(AsRef, Deref, Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl ExerciseID {
    #[must_use]
    pub fn custom(name: &Name) -> Self {
        Self(format!(
            "{CUSTOM_EXERCISE_PREFIX}{}-{}",
            name.slug(),
            Uuid::new_v4()
        ))
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.0.starts_with(CUSTOM_EXERCISE_PREFIX)
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Deref, Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetID(Uuid);

impl SetID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for SetID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SetID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetData {
    pub id: SetID,
    pub reps: Reps,
    pub weight: Option<f32>,
}

impl SetData {
    #[must_use]
    pub fn new(reps: Reps, weight: Option<f32>) -> Self {
        Self {
            id: SetID::random(),
            reps,
            weight,
        }
    }

    #[must_use]
    fn sanitized(&self) -> Self {
        Self {
            id: self.id,
            reps: self.reps,
            weight: self.weight.filter(|w| w.is_finite()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLogEntry {
    pub exercise_id: ExerciseID,
    pub exercise_name: String,
    pub sets: Vec<SetData>,
}

impl ExerciseLogEntry {
    #[must_use]
    pub fn new(exercise_id: ExerciseID, exercise_name: String) -> Self {
        Self {
            exercise_id,
            exercise_name,
            sets: vec![],
        }
    }

    #[must_use]
    pub fn total_reps(&self) -> u32 {
        self.sets.iter().map(|s| u32::from(s.reps)).sum()
    }
}

impl From<&ExerciseDefinition> for ExerciseLogEntry {
    fn from(value: &ExerciseDefinition) -> Self {
        Self::new(value.id.into(), value.name.to_string())
    }
}

#[derive(AsRef, Deref, Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkoutID(String);

impl From<&str> for WorkoutID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WorkoutID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A workout ready to be written to the store.
///
/// Only exercises with at least one set are kept, and weights that are not finite are removed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub workout_type: WorkoutType,
    pub exercises: Vec<ExerciseLogEntry>,
    pub notes: String,
}

impl NewWorkout {
    #[must_use]
    pub fn new(workout_type: WorkoutType, exercises: &[ExerciseLogEntry], notes: String) -> Self {
        Self {
            workout_type,
            exercises: sanitize(exercises),
            notes,
        }
    }
}

#[must_use]
pub fn sanitize(exercises: &[ExerciseLogEntry]) -> Vec<ExerciseLogEntry> {
    exercises
        .iter()
        .filter(|e| !e.sets.is_empty())
        .map(|e| ExerciseLogEntry {
            exercise_id: e.exercise_id.clone(),
            exercise_name: e.exercise_name.clone(),
            sets: e.sets.iter().map(SetData::sanitized).collect(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavedWorkout {
    pub id: WorkoutID,
    pub date: DateTime<Utc>,
    pub workout_type: WorkoutType,
    pub exercises: Vec<ExerciseLogEntry>,
    pub notes: String,
}

impl SavedWorkout {
    #[must_use]
    pub fn new(id: WorkoutID, date: DateTime<Utc>, workout: NewWorkout) -> Self {
        Self {
            id,
            date,
            workout_type: workout.workout_type,
            exercises: workout.exercises,
            notes: workout.notes,
        }
    }

    /// Calendar day in local time.
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.with_timezone(&Local).date_naive()
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        Cursor {
            date: self.date,
            id: self.id.clone(),
        }
    }

    #[must_use]
    pub fn has_details(&self) -> bool {
        !self.notes.trim().is_empty() || !self.exercises.is_empty()
    }
}
