use crate::WorkoutType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseDefinition {
    pub id: &'static str,
    pub name: &'static str,
}

pub const PUSH_DAY_EXERCISES: &[ExerciseDefinition] = &[
    ExerciseDefinition {
        id: "flexao",
        name: "push-up",
    },
    ExerciseDefinition {
        id: "dips",
        name: "dips",
    },
    ExerciseDefinition {
        id: "leg_raises",
        name: "leg-raises",
    },
];

pub const PULL_DAY_EXERCISES: &[ExerciseDefinition] = &[
    ExerciseDefinition {
        id: "barra_fixa",
        name: "pull-up",
    },
    ExerciseDefinition {
        id: "leg_raises",
        name: "leg-raises",
    },
];

#[must_use]
pub fn exercises(workout_type: WorkoutType) -> &'static [ExerciseDefinition] {
    match workout_type {
        WorkoutType::Push => PUSH_DAY_EXERCISES,
        WorkoutType::Pull => PULL_DAY_EXERCISES,
    }
}
