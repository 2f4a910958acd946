use treine_domain::{
    Cursor, DeleteError, PAGE_SIZE, Page, ReadError, SavedWorkout, UpdateError, WorkoutID,
    WorkoutService,
};

/// Saved workouts loaded so far, newest first.
#[derive(Debug, Default)]
pub struct History {
    workouts: Vec<SavedWorkout>,
    cursor: Option<Cursor>,
    has_more: bool,
    is_loading: bool,
    is_loading_more: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMore {
    Loaded(usize),
    Busy,
    Exhausted,
    Failed,
}

impl History {
    #[must_use]
    pub fn workouts(&self) -> &[SavedWorkout] {
        &self.workouts
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn is_loading_more(&self) -> bool {
        self.is_loading_more
    }

    /// Marks the first page as requested.
    pub fn begin_load_first_page(&mut self) {
        self.is_loading = true;
    }

    /// Replaces the list by the newest page of workouts.
    ///
    /// On failure the list is left empty and no further pages are offered.
    pub fn finish_load_first_page(
        &mut self,
        result: Result<Page, ReadError>,
    ) -> Result<(), ReadError> {
        self.is_loading = false;
        match result {
            Ok(page) => {
                self.has_more = page.has_more();
                self.cursor = page.cursor;
                self.workouts = page.workouts;
                Ok(())
            }
            Err(err) => {
                self.has_more = false;
                self.cursor = None;
                self.workouts.clear();
                Err(err)
            }
        }
    }

    /// Marks the next page as requested and returns the cursor to request it with.
    ///
    /// Nothing is requested while another page is loading or if all workouts have been loaded.
    pub fn begin_load_more(&mut self) -> Result<Cursor, LoadMore> {
        if self.is_loading || self.is_loading_more {
            return Err(LoadMore::Busy);
        }
        let Some(cursor) = self.cursor.clone().filter(|_| self.has_more) else {
            return Err(LoadMore::Exhausted);
        };
        self.is_loading_more = true;
        Ok(cursor)
    }

    /// Appends the next page of workouts.
    pub fn finish_load_more(
        &mut self,
        result: Result<Page, ReadError>,
    ) -> Result<LoadMore, ReadError> {
        self.is_loading_more = false;
        let page = result?;
        let count = page.workouts.len();
        self.has_more = page.has_more();
        self.cursor = page.cursor;
        self.workouts.extend(page.workouts);
        Ok(LoadMore::Loaded(count))
    }

    /// Adds a workout that has just been written to the store.
    pub fn add(&mut self, workout: SavedWorkout) {
        self.workouts.insert(0, workout);
        self.workouts
            .sort_by(|a, b| (b.date, &b.id).cmp(&(a.date, &a.id)));
    }

    /// Removes the workout from the store, and only then from the list.
    pub async fn delete(
        &mut self,
        service: &impl WorkoutService,
        id: WorkoutID,
    ) -> Result<WorkoutID, DeleteError> {
        let id = service.delete_workout(id).await?;
        self.workouts.retain(|w| w.id != id);
        Ok(id)
    }

    /// Changes the notes in the store, and only then in the list.
    pub async fn update_notes(
        &mut self,
        service: &impl WorkoutService,
        id: WorkoutID,
        notes: String,
    ) -> Result<WorkoutID, UpdateError> {
        let id = service.update_workout_notes(id, notes.clone()).await?;
        if let Some(workout) = self.workouts.iter_mut().find(|w| w.id == id) {
            workout.notes = notes;
        }
        Ok(id)
    }
}
