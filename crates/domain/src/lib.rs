#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod current_workout;
mod error;
mod history;
mod name;
mod rest_day;
mod service;
mod statistics;
mod workout;

pub use catalog::ExerciseDefinition;
pub use current_workout::{CurrentWorkout, CurrentWorkoutError, DaySelection};
pub use error::{CreateError, DeleteError, ReadError, StorageError, UpdateError};
pub use history::{Cursor, PAGE_SIZE, Page};
pub use name::{Name, NameError};
pub use rest_day::{RestDayError, RestDays};
pub use service::Service;
pub use statistics::{exercise_names, total_reps_per_day, workout_days};
pub use workout::{
    CUSTOM_EXERCISE_PREFIX, ExerciseID, ExerciseLogEntry, NewWorkout, Reps, RepsError, SavedWorkout,
    SetData, SetID, WorkoutID, WorkoutRepository, WorkoutService, WorkoutType, WorkoutTypeError,
    sanitize,
};
