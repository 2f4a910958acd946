use chrono::Datelike;
use log::{error, warn};
use treine_domain::{RestDayError, RestDays, SavedWorkout};

pub trait RestDaysService {
    fn get_rest_days(&self) -> Result<RestDays, String>;
    fn set_rest_days(&self, rest_days: &RestDays) -> Result<(), String>;
}

pub trait RestDaysRepository {
    fn read_rest_days(&self) -> Result<RestDays, String>;
    fn write_rest_days(&self, rest_days: &RestDays) -> Result<(), String>;
}

/// Rest days that are written to the cache on every change.
pub struct RestDayStore<S> {
    service: S,
    rest_days: RestDays,
}

impl<S: RestDaysService> RestDayStore<S> {
    pub fn new(service: S) -> Self {
        let rest_days = service.get_rest_days().unwrap_or_else(|err| {
            warn!("failed to read cached rest days: {err}");
            RestDays::default()
        });
        Self { service, rest_days }
    }

    pub fn rest_days(&self) -> &RestDays {
        &self.rest_days
    }

    pub fn toggle(
        &mut self,
        date: &impl Datelike,
        workouts: &[SavedWorkout],
    ) -> Result<bool, RestDayError> {
        let is_rest_day = self.rest_days.toggle(date, workouts)?;
        if let Err(err) = self.service.set_rest_days(&self.rest_days) {
            error!("failed to cache rest days: {err}");
        }
        Ok(is_rest_day)
    }
}
