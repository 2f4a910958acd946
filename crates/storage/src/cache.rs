//! Representation of cached client state in the browser's local storage.
//!
//! The JSON layout is shared with earlier versions of the app, so field names must stay stable.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use treine_domain as domain;
use uuid::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum CacheError {
    #[error(transparent)]
    WorkoutType(#[from] domain::WorkoutTypeError),
    #[error(transparent)]
    Reps(#[from] domain::RepsError),
    #[error("invalid set id: {0}")]
    SetID(#[from] uuid::Error),
    #[error("invalid date: {0}")]
    Date(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWorkout {
    #[serde(rename = "type")]
    pub workout_type: Option<String>,
    #[serde(default)]
    pub exercises: Vec<ExerciseLogEntry>,
    #[serde(default)]
    pub workout_notes: String,
}

impl From<&domain::CurrentWorkout> for CurrentWorkout {
    fn from(value: &domain::CurrentWorkout) -> Self {
        Self {
            workout_type: value.workout_type.map(|t| t.to_string()),
            exercises: value.exercises.iter().map(ExerciseLogEntry::from).collect(),
            workout_notes: value.notes.clone(),
        }
    }
}

impl TryFrom<CurrentWorkout> for domain::CurrentWorkout {
    type Error = CacheError;

    fn try_from(value: CurrentWorkout) -> Result<Self, Self::Error> {
        Ok(Self {
            workout_type: value
                .workout_type
                .as_deref()
                .map(domain::WorkoutType::try_from)
                .transpose()?,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::ExerciseLogEntry::try_from)
                .collect::<Result<_, _>>()?,
            notes: value.workout_notes,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLogEntry {
    pub exercise_id: String,
    pub exercise_name: String,
    #[serde(default)]
    pub sets: Vec<SetData>,
}

impl From<&domain::ExerciseLogEntry> for ExerciseLogEntry {
    fn from(value: &domain::ExerciseLogEntry) -> Self {
        Self {
            exercise_id: value.exercise_id.to_string(),
            exercise_name: value.exercise_name.clone(),
            sets: value.sets.iter().map(SetData::from).collect(),
        }
    }
}

impl TryFrom<ExerciseLogEntry> for domain::ExerciseLogEntry {
    type Error = CacheError;

    fn try_from(value: ExerciseLogEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise_id: value.exercise_id.into(),
            exercise_name: value.exercise_name,
            sets: value
                .sets
                .into_iter()
                .map(domain::SetData::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SetData {
    pub id: String,
    pub reps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
}

impl From<&domain::SetData> for SetData {
    fn from(value: &domain::SetData) -> Self {
        Self {
            id: value.id.to_string(),
            reps: value.reps.into(),
            weight: value.weight,
        }
    }
}

impl TryFrom<SetData> for domain::SetData {
    type Error = CacheError;

    fn try_from(value: SetData) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&value.id)?.into(),
            reps: domain::Reps::new(value.reps)?,
            weight: value.weight,
        })
    }
}

/// Rest days as ISO dates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct RestDays(pub Vec<String>);

impl From<&domain::RestDays> for RestDays {
    fn from(value: &domain::RestDays) -> Self {
        Self(value.iter().map(|day| day.format("%Y-%m-%d").to_string()).collect())
    }
}

impl TryFrom<RestDays> for domain::RestDays {
    type Error = CacheError;

    fn try_from(value: RestDays) -> Result<Self, Self::Error> {
        Ok(domain::RestDays::new(
            value
                .0
                .iter()
                .map(|day| parse_day(day))
                .collect::<Result<Vec<_>, _>>()?,
        ))
    }
}

/// Instants are converted to the calendar day in local time.
fn parse_day(value: &str) -> Result<NaiveDate, CacheError> {
    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(day);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Local).date_naive())
        .map_err(|_| CacheError::Date(value.to_string()))
}
