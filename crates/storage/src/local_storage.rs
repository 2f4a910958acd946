use std::collections::VecDeque;

use gloo_storage::{Storage, errors::StorageError};
use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;
use treine_domain as domain;
use treine_web_app::{
    CurrentWorkoutRepository, LastRepsRepository, RestDaysRepository, last_reps_key, log,
};

use crate::cache;

/// Client state kept in the browser's local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[derive(AsRefStr)]
enum Key {
    #[strum(serialize = "currentWorkoutCache")]
    CurrentWorkout,
    #[strum(serialize = "restDaysCache")]
    RestDays,
    #[strum(serialize = "log")]
    Log,
}

fn read<T: DeserializeOwned>(key: &str) -> Result<Option<T>, String> {
    match gloo_storage::LocalStorage::get(key) {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => Err(err.to_string()),
    }
}

fn write<T: Serialize>(key: &str, value: T) -> Result<(), String> {
    gloo_storage::LocalStorage::set(key, value).map_err(|err| err.to_string())
}

impl CurrentWorkoutRepository for LocalStorage {
    fn read_current_workout(&self) -> Result<Option<domain::CurrentWorkout>, String> {
        read::<cache::CurrentWorkout>(Key::CurrentWorkout.as_ref())?
            .map(domain::CurrentWorkout::try_from)
            .transpose()
            .map_err(|err| err.to_string())
    }

    fn write_current_workout(&self, current_workout: &domain::CurrentWorkout) -> Result<(), String> {
        write(
            Key::CurrentWorkout.as_ref(),
            cache::CurrentWorkout::from(current_workout),
        )
    }

    fn delete_current_workout(&self) -> Result<(), String> {
        gloo_storage::LocalStorage::delete(Key::CurrentWorkout.as_ref());
        Ok(())
    }
}

impl RestDaysRepository for LocalStorage {
    fn read_rest_days(&self) -> Result<domain::RestDays, String> {
        match read::<cache::RestDays>(Key::RestDays.as_ref())? {
            Some(rest_days) => {
                domain::RestDays::try_from(rest_days).map_err(|err| err.to_string())
            }
            None => Ok(domain::RestDays::default()),
        }
    }

    fn write_rest_days(&self, rest_days: &domain::RestDays) -> Result<(), String> {
        write(Key::RestDays.as_ref(), cache::RestDays::from(rest_days))
    }
}

impl LastRepsRepository for LocalStorage {
    fn read_last_reps(&self, exercise_name: &str) -> Result<Option<u32>, String> {
        read(&last_reps_key(exercise_name))
    }

    fn write_last_reps(&self, exercise_name: &str, reps: u32) -> Result<(), String> {
        write(&last_reps_key(exercise_name), reps)
    }
}

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        Ok(read(Key::Log.as_ref())
            .map_err(log::Error::Unknown)?
            .unwrap_or_default())
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::prepend(&mut entries, entry);
        write(Key::Log.as_ref(), entries).map_err(log::Error::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use chrono::NaiveDate;
        use pretty_assertions::assert_eq;
        use treine_web_app::{Service, app::App, rest_timer::IntervalSchedule};
        use wasm_bindgen_test::wasm_bindgen_test;

        use crate::memory::Memory;
        use crate::tests::data::CURRENT_WORKOUT;

        use super::*;

        #[wasm_bindgen_test]
        fn test_current_workout() {
            gloo_storage::LocalStorage::clear();

            assert_eq!(LocalStorage.read_current_workout(), Ok(None));

            LocalStorage
                .write_current_workout(&CURRENT_WORKOUT)
                .unwrap();
            assert_eq!(
                LocalStorage.read_current_workout(),
                Ok(Some(CURRENT_WORKOUT.clone()))
            );

            LocalStorage.delete_current_workout().unwrap();
            assert_eq!(LocalStorage.read_current_workout(), Ok(None));
        }

        #[wasm_bindgen_test]
        fn test_current_workout_malformed() {
            gloo_storage::LocalStorage::clear();
            gloo_storage::LocalStorage::set(Key::CurrentWorkout.as_ref(), "{").unwrap();

            assert!(LocalStorage.read_current_workout().is_err());
        }

        #[wasm_bindgen_test]
        fn test_rest_days() {
            gloo_storage::LocalStorage::clear();

            assert_eq!(LocalStorage.read_rest_days(), Ok(domain::RestDays::default()));

            let rest_days = domain::RestDays::new([
                NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
                NaiveDate::from_ymd_opt(2024, 5, 5).unwrap(),
            ]);
            LocalStorage.write_rest_days(&rest_days).unwrap();
            assert_eq!(LocalStorage.read_rest_days(), Ok(rest_days));
            assert_eq!(
                gloo_storage::LocalStorage::get::<Vec<String>>("restDaysCache").unwrap(),
                vec!["2024-05-03".to_string(), "2024-05-05".to_string()]
            );
        }

        #[wasm_bindgen_test]
        fn test_last_reps() {
            gloo_storage::LocalStorage::clear();

            assert_eq!(LocalStorage.read_last_reps("push-up"), Ok(None));

            LocalStorage.write_last_reps("ring rows", 12).unwrap();
            assert_eq!(LocalStorage.read_last_reps("ring rows"), Ok(Some(12)));
            assert_eq!(
                gloo_storage::LocalStorage::get::<u32>("treine_last_rep_ring_rows").unwrap(),
                12
            );
        }

        #[wasm_bindgen_test]
        fn test_app_restores_cached_session() {
            gloo_storage::LocalStorage::clear();
            let new_app = || {
                App::new(
                    domain::Service::new(Memory::default()),
                    Service::new(LocalStorage),
                    IntervalSchedule,
                )
            };

            let mut app = new_app();
            app.select_day(domain::WorkoutType::Pull, || true);
            app.log_set(&"barra_fixa".into(), 7, None);
            app.set_notes("grip slipped".to_string());
            let expected = app.current_workout().clone();

            assert_eq!(new_app().current_workout(), &expected);
            assert_eq!(new_app().last_reps(&"barra_fixa".into()), 7);
        }

        #[wasm_bindgen_test]
        fn test_logger_writes_to_local_storage() {
            use std::sync::{Arc, Mutex};

            use treine_web_app::log::Service as _;

            gloo_storage::LocalStorage::clear();
            log::init(Arc::new(Mutex::new(LocalStorage))).unwrap();

            ::log::info!("started push workout");

            let entries = Service::new(LocalStorage).get_log_entries().unwrap();
            assert_eq!(
                entries.front().map(|e| (e.level, e.message.as_str())),
                Some((::log::Level::Info, "started push workout"))
            );
        }

        #[wasm_bindgen_test]
        fn test_log() {
            gloo_storage::LocalStorage::clear();

            assert_eq!(log::Repository::read_entries(&LocalStorage), Ok(VecDeque::new()));

            for i in 0..=log::MAX_ENTRIES {
                log::Repository::write_entry(
                    &LocalStorage,
                    log::Entry::new(::log::Level::Info, format!("entry {i}")),
                )
                .unwrap();
            }

            let entries = log::Repository::read_entries(&LocalStorage).unwrap();
            assert_eq!(entries.len(), log::MAX_ENTRIES);
            assert_eq!(
                entries.front().map(|e| e.message.as_str()),
                Some(format!("entry {}", log::MAX_ENTRIES).as_str())
            );
        }
    }
}
