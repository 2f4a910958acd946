use treine_domain::CurrentWorkout;

pub trait CurrentWorkoutService {
    fn get_current_workout(&self) -> Result<Option<CurrentWorkout>, String>;
    fn set_current_workout(&self, current_workout: &CurrentWorkout) -> Result<(), String>;
    fn clear_current_workout(&self) -> Result<(), String>;
}

pub trait CurrentWorkoutRepository {
    fn read_current_workout(&self) -> Result<Option<CurrentWorkout>, String>;
    fn write_current_workout(&self, current_workout: &CurrentWorkout) -> Result<(), String>;
    fn delete_current_workout(&self) -> Result<(), String>;
}
