use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use strum::{Display, EnumIter};
use treine_domain::{
    CurrentWorkout, ExerciseID, ExerciseLogEntry, RestDays, SavedWorkout, WorkoutID, WorkoutType,
    exercise_names, total_reps_per_day, workout_days,
};

use crate::{history::History, rest_timer::TimerState};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum View {
    #[default]
    Workout,
    History,
    Calendar,
    Evolution,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewRouter {
    active: View,
    menu_open: bool,
}

impl ViewRouter {
    #[must_use]
    pub fn active(&self) -> View {
        self.active
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Returns whether the menu is open afterwards. The menu stays closed while the rest timer is
    /// shown.
    pub fn toggle_menu(&mut self, timer: TimerState) -> bool {
        if timer.suppresses_navigation() {
            self.menu_open = false;
        } else {
            self.menu_open = !self.menu_open;
        }
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn navigate(&mut self, view: View) {
        self.active = view;
        self.menu_open = false;
    }
}

/// Application state that views are built from.
pub struct ViewContext<'a> {
    pub current_workout: &'a CurrentWorkout,
    pub history: &'a History,
    pub rest_days: &'a RestDays,
    pub selected_exercise: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    Workout(WorkoutView),
    History(HistoryView),
    Calendar(CalendarView),
    Evolution(EvolutionView),
}

pub type Constructor = fn(&ViewContext) -> ViewModel;

pub struct ViewRegistry {
    constructors: BTreeMap<View, Constructor>,
}

impl ViewRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, view: View, constructor: Constructor) {
        self.constructors.insert(view, constructor);
    }

    #[must_use]
    pub fn build(&self, view: View, context: &ViewContext) -> Option<ViewModel> {
        self.constructors
            .get(&view)
            .map(|constructor| constructor(context))
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(View::Workout, |c| ViewModel::Workout(WorkoutView::new(c)));
        registry.register(View::History, |c| ViewModel::History(HistoryView::new(c)));
        registry.register(View::Calendar, |c| {
            ViewModel::Calendar(CalendarView::new(c))
        });
        registry.register(View::Evolution, |c| {
            ViewModel::Evolution(EvolutionView::new(c))
        });
        registry
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutView {
    pub workout_type: Option<WorkoutType>,
    pub exercises: Vec<ExerciseCard>,
    pub notes: String,
    pub can_save: bool,
}

impl WorkoutView {
    #[must_use]
    pub fn new(context: &ViewContext) -> Self {
        let current_workout = context.current_workout;
        Self {
            workout_type: current_workout.workout_type,
            exercises: current_workout
                .exercises
                .iter()
                .map(ExerciseCard::from)
                .collect(),
            notes: current_workout.notes.clone(),
            can_save: current_workout.is_saveable(),
        }
    }

    /// Whether the introduction shown before a day is selected is displayed.
    #[must_use]
    pub fn shows_welcome(&self) -> bool {
        self.workout_type.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseCard {
    pub exercise_id: ExerciseID,
    pub exercise_name: String,
    pub reps: Vec<u32>,
    pub total_reps: u32,
}

impl From<&ExerciseLogEntry> for ExerciseCard {
    fn from(entry: &ExerciseLogEntry) -> Self {
        Self {
            exercise_id: entry.exercise_id.clone(),
            exercise_name: entry.exercise_name.clone(),
            reps: entry.sets.iter().map(|s| u32::from(s.reps)).collect(),
            total_reps: entry.total_reps(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryView {
    pub items: Vec<HistoryItem>,
    pub has_more: bool,
    pub is_loading: bool,
    pub is_loading_more: bool,
}

impl HistoryView {
    #[must_use]
    pub fn new(context: &ViewContext) -> Self {
        Self {
            items: context
                .history
                .workouts()
                .iter()
                .map(HistoryItem::from)
                .collect(),
            has_more: context.history.has_more(),
            is_loading: context.history.is_loading(),
            is_loading_more: context.history.is_loading_more(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryItem {
    pub id: WorkoutID,
    pub title: String,
    pub date: String,
    pub notes: String,
    pub expandable: bool,
    pub exercises: Vec<ExerciseCard>,
}

impl From<&SavedWorkout> for HistoryItem {
    fn from(workout: &SavedWorkout) -> Self {
        Self {
            id: workout.id.clone(),
            title: format!("{} day workout", workout.workout_type),
            date: workout
                .date
                .with_timezone(&Local)
                .format("%B %-d, %Y at %-I:%M %p")
                .to_string()
                .to_lowercase(),
            notes: workout.notes.clone(),
            expandable: workout.has_details(),
            exercises: workout.exercises.iter().map(ExerciseCard::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarView {
    pub push_days: Vec<NaiveDate>,
    pub pull_days: Vec<NaiveDate>,
    pub rest_days: Vec<NaiveDate>,
}

impl CalendarView {
    #[must_use]
    pub fn new(context: &ViewContext) -> Self {
        let days = workout_days(context.history.workouts());
        let days_of = |workout_type: WorkoutType| -> Vec<NaiveDate> {
            days.iter()
                .filter(|(_, t)| **t == workout_type)
                .map(|(day, _)| *day)
                .collect()
        };
        Self {
            push_days: days_of(WorkoutType::Push),
            pull_days: days_of(WorkoutType::Pull),
            rest_days: context.rest_days.iter().copied().collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.push_days.is_empty() && self.pull_days.is_empty() && self.rest_days.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionView {
    pub exercise_names: Vec<String>,
    pub selected_exercise: Option<String>,
    pub points: Vec<EvolutionPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionPoint {
    pub label: String,
    pub total_reps: u32,
}

impl EvolutionView {
    #[must_use]
    pub fn new(context: &ViewContext) -> Self {
        let workouts = context.history.workouts();
        let points = context
            .selected_exercise
            .map(|name| {
                total_reps_per_day(workouts, name)
                    .into_iter()
                    .map(|(day, total_reps)| EvolutionPoint {
                        label: day.format("%-d %b").to_string(),
                        total_reps,
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self {
            exercise_names: exercise_names(workouts),
            selected_exercise: context.selected_exercise.map(str::to_string),
            points,
        }
    }

    /// A progression needs at least two days to be drawn.
    #[must_use]
    pub fn has_chart(&self) -> bool {
        self.points.len() > 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercise_names.is_empty()
    }
}
