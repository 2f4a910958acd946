use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::{SavedWorkout, WorkoutType};

/// Names of all exercises that occur in `workouts`, sorted alphabetically.
#[must_use]
pub fn exercise_names(workouts: &[SavedWorkout]) -> Vec<String> {
    workouts
        .iter()
        .flat_map(|w| w.exercises.iter().map(|e| e.exercise_name.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Total reps of an exercise per calendar day, in ascending order of days.
///
/// For each workout only the first entry with the given name that contains sets is counted.
#[must_use]
pub fn total_reps_per_day(workouts: &[SavedWorkout], exercise_name: &str) -> Vec<(NaiveDate, u32)> {
    let mut result: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for workout in workouts {
        if let Some(entry) = workout
            .exercises
            .iter()
            .find(|e| e.exercise_name == exercise_name && !e.sets.is_empty())
        {
            *result.entry(workout.day()).or_default() += entry.total_reps();
        }
    }
    result.into_iter().collect()
}

/// Type of the earliest workout on each calendar day.
#[must_use]
pub fn workout_days(workouts: &[SavedWorkout]) -> BTreeMap<NaiveDate, WorkoutType> {
    let mut ordered = workouts.iter().collect::<Vec<_>>();
    ordered.sort_by_key(|w| w.date);
    let mut result = BTreeMap::new();
    for workout in ordered {
        result.entry(workout.day()).or_insert(workout.workout_type);
    }
    result
}
