#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod app;
pub mod history;
pub mod log;
pub mod notice;
pub mod rest_timer;
pub mod view;

mod current_workout;
mod last_reps;
mod rest_days;
mod service;
mod session;

pub use current_workout::{CurrentWorkoutRepository, CurrentWorkoutService};
pub use last_reps::{
    DEFAULT_REPS, LastRepsRepository, LastRepsService, REP_OPTIONS, last_reps_key,
};
pub use rest_days::{RestDayStore, RestDaysRepository, RestDaysService};
pub use service::Service;
pub use session::Session;
