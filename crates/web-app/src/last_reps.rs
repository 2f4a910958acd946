use std::ops::RangeInclusive;

/// Rep count offered when no count was remembered for an exercise.
pub const DEFAULT_REPS: u32 = 8;

/// Rep counts offered by the quick set logger.
pub const REP_OPTIONS: RangeInclusive<u32> = 1..=50;

pub trait LastRepsService {
    /// Last rep count logged for `exercise_name`, or [`DEFAULT_REPS`] if none is known.
    fn get_last_reps(&self, exercise_name: &str) -> u32;
    fn set_last_reps(&self, exercise_name: &str, reps: u32) -> Result<(), String>;
}

pub trait LastRepsRepository {
    fn read_last_reps(&self, exercise_name: &str) -> Result<Option<u32>, String>;
    fn write_last_reps(&self, exercise_name: &str, reps: u32) -> Result<(), String>;
}

/// Cache key under which the last rep count of `exercise_name` is stored.
///
/// Every run of whitespace is replaced by a single `_`.
#[must_use]
pub fn last_reps_key(exercise_name: &str) -> String {
    let mut key = String::from("treine_last_rep_");
    let mut in_whitespace = false;
    for c in exercise_name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                key.push('_');
            }
            in_whitespace = true;
        } else {
            key.push(c);
            in_whitespace = false;
        }
    }
    key
}
