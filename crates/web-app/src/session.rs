use log::{error, warn};
use treine_domain::{
    CurrentWorkout, CurrentWorkoutError, DaySelection, ExerciseID, ExerciseLogEntry, Name,
    NewWorkout, Reps, SetID, WorkoutType,
};

use crate::CurrentWorkoutService;

type Subscriber = Box<dyn Fn(&CurrentWorkout)>;

/// Owner of the workout that is currently being logged.
///
/// The state is read from the cache once on creation. Every change is written back to the cache
/// and passed to all subscribers.
pub struct Session<S> {
    service: S,
    current_workout: CurrentWorkout,
    subscribers: Vec<Subscriber>,
}

impl<S: CurrentWorkoutService> Session<S> {
    pub fn new(service: S) -> Self {
        let current_workout = match service.get_current_workout() {
            Ok(current_workout) => current_workout.unwrap_or_default(),
            Err(err) => {
                warn!("failed to read cached workout: {err}");
                CurrentWorkout::default()
            }
        };
        Self {
            service,
            current_workout,
            subscribers: vec![],
        }
    }

    pub fn current_workout(&self) -> &CurrentWorkout {
        &self.current_workout
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(&CurrentWorkout) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn select_day(&mut self, day: WorkoutType, confirm: impl FnOnce() -> bool) -> DaySelection {
        let selection = self.current_workout.select_day(day, confirm);
        if selection != DaySelection::Declined {
            self.commit();
        }
        selection
    }

    pub fn update_exercise_log(&mut self, entry: ExerciseLogEntry) -> bool {
        let updated = self.current_workout.update_exercise_log(entry);
        if updated {
            self.commit();
        }
        updated
    }

    pub fn log_set(
        &mut self,
        exercise_id: &ExerciseID,
        reps: Reps,
        weight: Option<f32>,
    ) -> Option<SetID> {
        let set_id = self.current_workout.log_set(exercise_id, reps, weight);
        if set_id.is_some() {
            self.commit();
        }
        set_id
    }

    pub fn delete_set(&mut self, exercise_id: &ExerciseID, set_id: SetID) -> bool {
        let deleted = self.current_workout.delete_set(exercise_id, set_id);
        if deleted {
            self.commit();
        }
        deleted
    }

    pub fn add_custom_exercise(&mut self, name: &Name) -> Result<ExerciseID, CurrentWorkoutError> {
        let exercise_id = self.current_workout.add_custom_exercise(name)?;
        self.commit();
        Ok(exercise_id)
    }

    pub fn set_notes(&mut self, notes: String) {
        self.current_workout.set_notes(notes);
        self.commit();
    }

    pub fn to_new_workout(&self) -> Result<NewWorkout, CurrentWorkoutError> {
        self.current_workout.to_new_workout()
    }

    /// Starts over with an empty workout and removes the cached workout.
    pub fn reset(&mut self) {
        self.current_workout = CurrentWorkout::default();
        if let Err(err) = self.service.clear_current_workout() {
            error!("failed to clear cached workout: {err}");
        }
        self.notify();
    }

    fn commit(&mut self) {
        if let Err(err) = self.service.set_current_workout(&self.current_workout) {
            error!("failed to cache workout: {err}");
        }
        self.notify();
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.current_workout);
        }
    }
}
