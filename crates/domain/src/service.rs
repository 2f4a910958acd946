use log::{debug, error};

use crate::{
    CreateError, Cursor, DeleteError, NewWorkout, Page, ReadError, SavedWorkout, UpdateError,
    WorkoutID, WorkoutRepository, WorkoutService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn load_first_page(&self, page_size: usize) -> Result<Page, ReadError> {
        if page_size == 0 {
            return Ok(Page::default());
        }
        let workouts = log_on_error!(
            self.repository.read_workouts(None, page_size),
            ReadError,
            "get",
            "workouts"
        )?;
        Ok(Page::new(workouts, page_size))
    }

    async fn load_next_page(
        &self,
        cursor: Option<&Cursor>,
        page_size: usize,
    ) -> Result<Page, ReadError> {
        let Some(cursor) = cursor else {
            return Ok(Page::default());
        };
        if page_size == 0 {
            return Ok(Page::default());
        }
        let workouts = log_on_error!(
            self.repository
                .read_workouts(Some(cursor.clone()), page_size),
            ReadError,
            "get",
            "more workouts"
        )?;
        Ok(Page::new(workouts, page_size))
    }

    async fn create_workout(&self, workout: NewWorkout) -> Result<SavedWorkout, CreateError> {
        log_on_error!(
            self.repository.create_workout(workout),
            CreateError,
            "create",
            "workout"
        )
    }

    async fn update_workout_notes(
        &self,
        id: WorkoutID,
        notes: String,
    ) -> Result<WorkoutID, UpdateError> {
        log_on_error!(
            self.repository.update_workout_notes(id, notes),
            UpdateError,
            "update",
            "workout notes"
        )
    }

    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        log_on_error!(
            self.repository.delete_workout(id),
            DeleteError,
            "delete",
            "workout"
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{StorageError, WorkoutType};

    #[tokio::test]
    async fn test_load_first_page() {
        let service = Service::new(FakeRepository::with_workouts(7));

        let page = service.load_first_page(5).await.unwrap();

        assert_eq!(ids(&page.workouts), vec!["6", "5", "4", "3", "2"]);
        assert_eq!(page.cursor, Some(page.workouts[4].cursor()));
        assert_eq!(*service.repository().last_request.borrow(), Some((None, 5)));
    }

    #[tokio::test]
    async fn test_load_next_page() {
        let service = Service::new(FakeRepository::with_workouts(7));
        let first = service.load_first_page(5).await.unwrap();

        let second = service
            .load_next_page(first.cursor.as_ref(), 5)
            .await
            .unwrap();

        assert_eq!(ids(&second.workouts), vec!["1", "0"]);
        assert_eq!(second.cursor, None);
        assert_eq!(
            *service.repository().last_request.borrow(),
            Some((first.cursor, 5))
        );
    }

    #[tokio::test]
    async fn test_load_next_page_without_cursor() {
        let service = Service::new(FakeRepository::with_workouts(7));

        assert_eq!(
            service.load_next_page(None, 5).await.unwrap(),
            Page::default()
        );
        assert_eq!(*service.repository().last_request.borrow(), None);
    }

    #[tokio::test]
    async fn test_load_with_zero_page_size() {
        let service = Service::new(FakeRepository::with_workouts(7));

        assert_eq!(service.load_first_page(0).await.unwrap(), Page::default());
        assert_eq!(*service.repository().last_request.borrow(), None);
    }

    #[tokio::test]
    async fn test_errors_are_passed_through() {
        let repository = FakeRepository::with_workouts(1);
        repository.fail.set(true);
        let service = Service::new(repository);

        assert!(matches!(
            service.load_first_page(5).await,
            Err(ReadError::Storage(StorageError::NoConnection))
        ));
        assert!(matches!(
            service.delete_workout("0".into()).await,
            Err(DeleteError::Storage(StorageError::NoConnection))
        ));
        assert!(matches!(
            service
                .update_workout_notes("0".into(), "x".to_string())
                .await,
            Err(UpdateError::Storage(StorageError::NoConnection))
        ));
        assert!(matches!(
            service
                .create_workout(NewWorkout::new(WorkoutType::Pull, &[], String::new()))
                .await,
            Err(CreateError::Storage(StorageError::NoConnection))
        ));
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let service = Service::new(FakeRepository::with_workouts(0));

        let saved = service
            .create_workout(NewWorkout::new(
                WorkoutType::Push,
                &[],
                "notes".to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(saved.notes, "notes");
        assert_eq!(
            service
                .update_workout_notes(saved.id.clone(), "new".to_string())
                .await
                .unwrap(),
            saved.id
        );
        assert_eq!(
            service.delete_workout(saved.id.clone()).await.unwrap(),
            saved.id
        );
        assert!(service.repository().workouts.borrow().is_empty());
    }

    fn ids(workouts: &[SavedWorkout]) -> Vec<&str> {
        workouts.iter().map(|w| w.id.as_str()).collect()
    }

    struct FakeRepository {
        workouts: RefCell<Vec<SavedWorkout>>,
        last_request: RefCell<Option<(Option<Cursor>, usize)>>,
        fail: Cell<bool>,
    }

    impl FakeRepository {
        fn with_workouts(count: i64) -> Self {
            Self {
                workouts: RefCell::new(
                    (0..count)
                        .rev()
                        .map(|n| SavedWorkout {
                            id: n.to_string().into(),
                            date: DateTime::from_timestamp(n * 3600, 0).unwrap(),
                            workout_type: WorkoutType::Push,
                            exercises: vec![],
                            notes: String::new(),
                        })
                        .collect(),
                ),
                last_request: RefCell::new(None),
                fail: Cell::new(false),
            }
        }

        fn check(&self) -> Result<(), StorageError> {
            if self.fail.get() {
                Err(StorageError::NoConnection)
            } else {
                Ok(())
            }
        }
    }

    impl WorkoutRepository for FakeRepository {
        async fn read_workouts(
            &self,
            after: Option<Cursor>,
            limit: usize,
        ) -> Result<Vec<SavedWorkout>, ReadError> {
            self.check()?;
            *self.last_request.borrow_mut() = Some((after.clone(), limit));
            Ok(self
                .workouts
                .borrow()
                .iter()
                .filter(|w| after.as_ref().is_none_or(|c| c.precedes(w)))
                .take(limit)
                .cloned()
                .collect())
        }

        async fn create_workout(&self, workout: NewWorkout) -> Result<SavedWorkout, CreateError> {
            self.check()?;
            let saved = SavedWorkout::new(
                "new".into(),
                DateTime::from_timestamp(1_000_000, 0).unwrap(),
                workout,
            );
            self.workouts.borrow_mut().insert(0, saved.clone());
            Ok(saved)
        }

        async fn update_workout_notes(
            &self,
            id: WorkoutID,
            notes: String,
        ) -> Result<WorkoutID, UpdateError> {
            self.check()?;
            let mut workouts = self.workouts.borrow_mut();
            let workout = workouts
                .iter_mut()
                .find(|w| w.id == id)
                .ok_or(UpdateError::NotFound)?;
            workout.notes = notes;
            Ok(id)
        }

        async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
            self.check()?;
            self.workouts.borrow_mut().retain(|w| w.id != id);
            Ok(id)
        }
    }
}
