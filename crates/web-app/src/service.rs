use std::collections::VecDeque;

use ::log::warn;
use treine_domain::{CurrentWorkout, RestDays};

use crate::{
    CurrentWorkoutRepository, CurrentWorkoutService, DEFAULT_REPS, LastRepsRepository,
    LastRepsService, REP_OPTIONS, RestDaysRepository, RestDaysService, log,
};

#[derive(Clone)]
pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: log::Repository> log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: CurrentWorkoutRepository> CurrentWorkoutService for Service<R> {
    fn get_current_workout(&self) -> Result<Option<CurrentWorkout>, String> {
        self.repository.read_current_workout()
    }

    fn set_current_workout(&self, current_workout: &CurrentWorkout) -> Result<(), String> {
        self.repository.write_current_workout(current_workout)
    }

    fn clear_current_workout(&self) -> Result<(), String> {
        self.repository.delete_current_workout()
    }
}

impl<R: RestDaysRepository> RestDaysService for Service<R> {
    fn get_rest_days(&self) -> Result<RestDays, String> {
        self.repository.read_rest_days()
    }

    fn set_rest_days(&self, rest_days: &RestDays) -> Result<(), String> {
        self.repository.write_rest_days(rest_days)
    }
}

impl<R: LastRepsRepository> LastRepsService for Service<R> {
    fn get_last_reps(&self, exercise_name: &str) -> u32 {
        match self.repository.read_last_reps(exercise_name) {
            Ok(Some(reps)) if REP_OPTIONS.contains(&reps) => reps,
            Ok(_) => DEFAULT_REPS,
            Err(err) => {
                warn!("failed to read last reps of {exercise_name}: {err}");
                DEFAULT_REPS
            }
        }
    }

    fn set_last_reps(&self, exercise_name: &str, reps: u32) -> Result<(), String> {
        self.repository.write_last_reps(exercise_name, reps)
    }
}
