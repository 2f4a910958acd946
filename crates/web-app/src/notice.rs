use treine_domain::WorkoutType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Short message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    fn new(severity: Severity, title: &str, description: Option<String>) -> Self {
        Self {
            severity,
            title: title.to_string(),
            description,
        }
    }

    #[must_use]
    pub fn workout_started(workout_type: WorkoutType) -> Self {
        Self::new(
            Severity::Info,
            "workout started",
            Some(format!("selected {workout_type} day. let's go!")),
        )
    }

    #[must_use]
    pub fn set_deleted() -> Self {
        Self::new(Severity::Info, "set deleted", None)
    }

    #[must_use]
    pub fn cannot_save_workout() -> Self {
        Self::new(
            Severity::Warning,
            "cannot save workout",
            Some(
                "please select a workout type and log at least one set or add workout notes."
                    .to_string(),
            ),
        )
    }

    #[must_use]
    pub fn workout_saved(workout_type: WorkoutType) -> Self {
        Self::new(
            Severity::Info,
            "workout saved!",
            Some(format!(
                "your {workout_type} workout was successfully saved to the database."
            )),
        )
    }

    #[must_use]
    pub fn save_failed() -> Self {
        Self::new(
            Severity::Error,
            "error saving workout",
            Some("could not save workout to the database.".to_string()),
        )
    }

    #[must_use]
    pub fn workout_deleted() -> Self {
        Self::new(
            Severity::Info,
            "workout deleted",
            Some("the workout has been removed from your history.".to_string()),
        )
    }

    #[must_use]
    pub fn delete_failed() -> Self {
        Self::new(
            Severity::Error,
            "error deleting workout",
            Some("could not delete workout from the database.".to_string()),
        )
    }

    #[must_use]
    pub fn notes_updated() -> Self {
        Self::new(
            Severity::Info,
            "notes updated",
            Some("your workout notes have been successfully updated.".to_string()),
        )
    }

    #[must_use]
    pub fn notes_update_failed() -> Self {
        Self::new(
            Severity::Error,
            "error updating notes",
            Some("could not update notes in the database.".to_string()),
        )
    }

    #[must_use]
    pub fn history_load_failed() -> Self {
        Self::new(
            Severity::Error,
            "error fetching workouts",
            Some("could not load workout history from the database.".to_string()),
        )
    }

    #[must_use]
    pub fn load_more_failed() -> Self {
        Self::new(
            Severity::Error,
            "error loading more",
            Some("could not fetch older workouts.".to_string()),
        )
    }

    #[must_use]
    pub fn no_day_selected() -> Self {
        Self::new(Severity::Warning, "select a workout day first", None)
    }

    #[must_use]
    pub fn exercise_added(exercise_name: &str) -> Self {
        Self::new(
            Severity::Info,
            "exercise added",
            Some(format!("\"{exercise_name}\" has been added to your workout.")),
        )
    }

    #[must_use]
    pub fn invalid_exercise_name(reason: &str) -> Self {
        Self::new(
            Severity::Warning,
            "exercise name required",
            Some(format!("{reason}.")),
        )
    }

    #[must_use]
    pub fn invalid_reps(reason: &str) -> Self {
        Self::new(Severity::Warning, "invalid reps", Some(format!("{reason}.")))
    }

    #[must_use]
    pub fn workout_day() -> Self {
        Self::new(
            Severity::Info,
            "workout day",
            Some("this day is already logged as a workout and cannot be a rest day.".to_string()),
        )
    }

    #[must_use]
    pub fn invalid_date() -> Self {
        Self::new(Severity::Warning, "invalid date", None)
    }
}
