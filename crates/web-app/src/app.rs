use std::rc::Rc;

use chrono::Datelike;
use log::{debug, info};
use treine_domain::{
    CreateError, CurrentWorkout, CurrentWorkoutError, Cursor, DaySelection, ExerciseID,
    ExerciseLogEntry, NewWorkout, Name, PAGE_SIZE, Page, ReadError, RestDayError, Reps,
    SavedWorkout, SetID, WorkoutID, WorkoutService, WorkoutType,
};

use crate::{
    CurrentWorkoutService, LastRepsService, REP_OPTIONS, RestDayStore, RestDaysService, Session,
    history::{History, LoadMore},
    notice::Notice,
    rest_timer::{RestTimer, Schedule, TimerMode, TimerState},
    view::{View, ViewContext, ViewModel, ViewRegistry, ViewRouter},
};

/// Number of notices kept until the UI takes them.
pub const MAX_NOTICES: usize = 20;

/// Application state and the actions a user can take.
///
/// `W` accesses the workout history, `L` the local cache. At startup the log is routed to the
/// local cache by `log::init(Arc::new(Mutex::new(LocalStorage)))` before the app is created.
///
/// Remote operations are split into a `begin_*` step, the request on [`App::workout_service`]
/// and a `finish_*` step, so that the app does not need to be borrowed while a request is
/// pending.
pub struct App<W, L, S: Schedule> {
    workouts: Rc<W>,
    local: L,
    session: Session<L>,
    rest_days: RestDayStore<L>,
    history: History,
    router: ViewRouter,
    registry: ViewRegistry,
    timer: RestTimer<S>,
    selected_exercise: Option<String>,
    is_saving: bool,
    notices: Vec<Notice>,
}

impl<W, L, S> App<W, L, S>
where
    W: WorkoutService,
    L: CurrentWorkoutService + RestDaysService + LastRepsService + Clone,
    S: Schedule,
{
    pub fn new(workouts: W, local: L, schedule: S) -> Self {
        Self {
            workouts: Rc::new(workouts),
            session: Session::new(local.clone()),
            rest_days: RestDayStore::new(local.clone()),
            local,
            history: History::default(),
            router: ViewRouter::default(),
            registry: ViewRegistry::default(),
            timer: RestTimer::new(schedule),
            selected_exercise: None,
            is_saving: false,
            notices: vec![],
        }
    }

    #[must_use]
    pub fn workout_service(&self) -> Rc<W> {
        Rc::clone(&self.workouts)
    }

    pub async fn start(&mut self) {
        self.begin_load_history();
        let result = self.workouts.load_first_page(PAGE_SIZE).await;
        self.finish_load_history(result);
    }

    pub fn begin_load_history(&mut self) {
        self.history.begin_load_first_page();
    }

    pub fn finish_load_history(&mut self, result: Result<Page, ReadError>) {
        if self.history.finish_load_first_page(result).is_err() {
            self.notify(Notice::history_load_failed());
        }
    }

    #[must_use]
    pub fn current_workout(&self) -> &CurrentWorkout {
        self.session.current_workout()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(&CurrentWorkout) + 'static) {
        self.session.subscribe(subscriber);
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn select_day(&mut self, day: WorkoutType, confirm: impl FnOnce() -> bool) -> DaySelection {
        let selection = self.session.select_day(day, confirm);
        if selection == DaySelection::Started {
            info!("started {day} workout");
            self.notify(Notice::workout_started(day));
        }
        selection
    }

    pub fn update_exercise_log(&mut self, entry: ExerciseLogEntry) -> bool {
        self.session.update_exercise_log(entry)
    }

    /// Rep count preselected when logging a set of the given exercise.
    #[must_use]
    pub fn last_reps(&self, exercise_id: &ExerciseID) -> u32 {
        match self.exercise_name(exercise_id) {
            Some(name) => self.local.get_last_reps(&name),
            None => crate::DEFAULT_REPS,
        }
    }

    pub fn log_set(
        &mut self,
        exercise_id: &ExerciseID,
        reps: u32,
        weight: Option<f32>,
    ) -> Option<SetID> {
        let reps = match Reps::new(reps) {
            Ok(reps) => reps,
            Err(err) => {
                self.notify(Notice::invalid_reps(&err.to_string()));
                return None;
            }
        };
        let set_id = self.session.log_set(exercise_id, reps, weight)?;
        let reps = u32::from(reps);
        if REP_OPTIONS.contains(&reps)
            && let Some(name) = self.exercise_name(exercise_id)
            && let Err(err) = self.local.set_last_reps(&name, reps)
        {
            debug!("failed to remember reps of {name}: {err}");
        }
        Some(set_id)
    }

    pub fn delete_set(&mut self, exercise_id: &ExerciseID, set_id: SetID) -> bool {
        let deleted = self.session.delete_set(exercise_id, set_id);
        if deleted {
            self.notify(Notice::set_deleted());
        }
        deleted
    }

    pub fn set_notes(&mut self, notes: String) {
        self.session.set_notes(notes);
    }

    pub fn add_custom_exercise(&mut self, name: &str) -> Option<ExerciseID> {
        let name = match Name::new(name) {
            Ok(name) => name,
            Err(err) => {
                self.notify(Notice::invalid_exercise_name(&err.to_string()));
                return None;
            }
        };
        match self.session.add_custom_exercise(&name) {
            Ok(exercise_id) => {
                self.notify(Notice::exercise_added(&name.to_string()));
                Some(exercise_id)
            }
            Err(_) => {
                self.notify(Notice::no_day_selected());
                None
            }
        }
    }

    /// Saves the current workout and starts over with an empty one.
    ///
    /// Returns `false` if nothing was saved.
    pub async fn save(&mut self) -> bool {
        let Some(workout) = self.begin_save() else {
            return false;
        };
        let workouts = self.workout_service();
        let result = workouts.create_workout(workout).await;
        self.finish_save(result)
    }

    /// Returns the workout to be written to the store.
    ///
    /// A save is refused while another one is pending.
    pub fn begin_save(&mut self) -> Option<NewWorkout> {
        if self.is_saving {
            return None;
        }
        match self.session.to_new_workout() {
            Ok(workout) => {
                self.is_saving = true;
                Some(workout)
            }
            Err(CurrentWorkoutError::NoDaySelected | CurrentWorkoutError::Empty) => {
                self.notify(Notice::cannot_save_workout());
                None
            }
        }
    }

    pub fn finish_save(&mut self, result: Result<SavedWorkout, CreateError>) -> bool {
        self.is_saving = false;
        match result {
            Ok(saved) => {
                info!("saved workout {}", saved.id);
                let workout_type = saved.workout_type;
                self.history.add(saved);
                self.session.reset();
                self.notify(Notice::workout_saved(workout_type));
                true
            }
            Err(_) => {
                self.notify(Notice::save_failed());
                false
            }
        }
    }

    pub async fn delete_workout(&mut self, id: WorkoutID) -> bool {
        match self.history.delete(&*self.workouts, id).await {
            Ok(_) => {
                self.notify(Notice::workout_deleted());
                true
            }
            Err(_) => {
                self.notify(Notice::delete_failed());
                false
            }
        }
    }

    pub async fn update_workout_notes(&mut self, id: WorkoutID, notes: String) -> bool {
        match self.history.update_notes(&*self.workouts, id, notes).await {
            Ok(_) => {
                self.notify(Notice::notes_updated());
                true
            }
            Err(_) => {
                self.notify(Notice::notes_update_failed());
                false
            }
        }
    }

    pub async fn load_more(&mut self) -> LoadMore {
        let cursor = match self.begin_load_more() {
            Ok(cursor) => cursor,
            Err(load_more) => return load_more,
        };
        let workouts = self.workout_service();
        let result = workouts.load_next_page(Some(&cursor), PAGE_SIZE).await;
        self.finish_load_more(result)
    }

    /// Returns the cursor of the next page, or the outcome if no page is to be requested.
    pub fn begin_load_more(&mut self) -> Result<Cursor, LoadMore> {
        self.history.begin_load_more()
    }

    pub fn finish_load_more(&mut self, result: Result<Page, ReadError>) -> LoadMore {
        match self.history.finish_load_more(result) {
            Ok(load_more) => load_more,
            Err(_) => {
                self.notify(Notice::load_more_failed());
                LoadMore::Failed
            }
        }
    }

    /// Returns whether the day is a rest day afterwards.
    pub fn toggle_rest_day(&mut self, date: &impl Datelike) -> Option<bool> {
        match self.rest_days.toggle(date, self.history.workouts()) {
            Ok(is_rest_day) => Some(is_rest_day),
            Err(RestDayError::WorkoutDay) => {
                self.notify(Notice::workout_day());
                None
            }
            Err(RestDayError::InvalidDate) => {
                self.notify(Notice::invalid_date());
                None
            }
        }
    }

    #[must_use]
    pub fn active_view(&self) -> View {
        self.router.active()
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.router.is_menu_open()
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.router.toggle_menu(self.timer.state())
    }

    pub fn navigate(&mut self, view: View) {
        self.router.navigate(view);
    }

    pub fn select_exercise(&mut self, exercise_name: Option<String>) {
        self.selected_exercise = exercise_name;
    }

    /// Model of the active view, built from the current state.
    #[must_use]
    pub fn view_model(&self) -> Option<ViewModel> {
        self.registry.build(
            self.router.active(),
            &ViewContext {
                current_workout: self.session.current_workout(),
                history: &self.history,
                rest_days: self.rest_days.rest_days(),
                selected_exercise: self.selected_exercise.as_deref(),
            },
        )
    }

    #[must_use]
    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn open_timer(&mut self) {
        self.router.close_menu();
        self.timer.open();
    }

    pub fn select_timer_mode(&mut self, mode: TimerMode) {
        self.timer.select_mode(mode);
    }

    pub fn close_timer(&mut self) {
        self.timer.close();
    }

    fn exercise_name(&self, exercise_id: &ExerciseID) -> Option<String> {
        self.session
            .current_workout()
            .exercises
            .iter()
            .find(|e| &e.exercise_id == exercise_id)
            .map(|e| e.exercise_name.clone())
    }

    fn notify(&mut self, notice: Notice) {
        if self.notices.len() == MAX_NOTICES {
            self.notices.remove(0);
        }
        self.notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        collections::HashMap,
        rc::Rc,
    };

    use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
    use pretty_assertions::assert_eq;
    use treine_domain::{DeleteError, RestDays, StorageError, UpdateError};

    use super::*;
    use crate::{notice::Severity, view::HistoryView};

    #[tokio::test]
    async fn test_save_workout() {
        let mut app = app(3);
        app.start().await;
        app.select_day(WorkoutType::Push, || true);
        app.log_set(&"flexao".into(), 10, Some(f32::NAN));
        app.set_notes("good session".to_string());

        assert!(app.save().await);

        assert_eq!(app.current_workout(), &CurrentWorkout::default());
        assert!(app.local.cleared.get());
        assert_eq!(app.history().workouts().len(), 4);
        let saved = &app.history().workouts()[0];
        assert_eq!(saved.exercises.len(), 1);
        assert_eq!(saved.exercises[0].sets[0].weight, None);
        assert_eq!(saved.notes, "good session");
        assert_eq!(
            app.take_notices().last(),
            Some(&Notice::workout_saved(WorkoutType::Push))
        );
        assert!(!app.is_saving());
    }

    #[tokio::test]
    async fn test_save_empty_workout() {
        let mut app = app(0);
        app.select_day(WorkoutType::Pull, || true);

        assert!(!app.save().await);

        assert_eq!(
            app.notices().last(),
            Some(&Notice::cannot_save_workout())
        );
        assert_eq!(app.workouts.created.get(), 0);
    }

    #[tokio::test]
    async fn test_save_is_refused_while_saving() {
        let app = Rc::new(RefCell::new(app(0)));
        app.borrow_mut().select_day(WorkoutType::Pull, || true);
        app.borrow_mut().log_set(&"barra_fixa".into(), 5, None);

        let workout = app.borrow_mut().begin_save().unwrap();
        assert!(app.borrow().is_saving());
        assert!(app.borrow_mut().begin_save().is_none());

        let workouts = app.borrow().workout_service();
        let result = workouts.create_workout(workout).await;
        assert!(app.borrow_mut().finish_save(result));

        let app = app.borrow();
        assert!(!app.is_saving());
        assert_eq!(app.workouts.created.get(), 1);
        assert_eq!(app.history().workouts().len(), 1);
        assert_eq!(app.current_workout(), &CurrentWorkout::default());
    }

    #[tokio::test]
    async fn test_loading_is_visible_while_pending() {
        let mut app = app(7);
        app.navigate(View::History);

        app.begin_load_history();
        assert!(matches!(
            app.view_model(),
            Some(ViewModel::History(HistoryView {
                is_loading: true,
                ..
            }))
        ));
        let page = app.workout_service().load_first_page(PAGE_SIZE).await;
        app.finish_load_history(page);

        let cursor = app.begin_load_more().unwrap();
        assert!(matches!(
            app.view_model(),
            Some(ViewModel::History(HistoryView {
                is_loading: false,
                is_loading_more: true,
                ..
            }))
        ));
        assert_eq!(app.begin_load_more(), Err(LoadMore::Busy));
        assert_eq!(app.load_more().await, LoadMore::Busy);

        let page = app
            .workout_service()
            .load_next_page(Some(&cursor), PAGE_SIZE)
            .await;
        assert_eq!(app.finish_load_more(page), LoadMore::Loaded(2));
        assert!(!app.history().is_loading_more());
        assert_eq!(app.history().workouts().len(), 7);
    }

    #[test]
    fn test_notices_are_capped() {
        let mut app = app(0);

        for _ in 0..=MAX_NOTICES {
            app.add_custom_exercise("ring rows");
        }
        app.select_day(WorkoutType::Pull, || true);

        assert_eq!(app.notices().len(), MAX_NOTICES);
        assert_eq!(
            app.notices().last(),
            Some(&Notice::workout_started(WorkoutType::Pull))
        );
    }

    #[tokio::test]
    async fn test_failed_save_keeps_workout() {
        let mut app = app(0);
        app.select_day(WorkoutType::Pull, || true);
        app.log_set(&"barra_fixa".into(), 5, None);
        let before = app.current_workout().clone();
        app.workouts.fail.set(true);

        assert!(!app.save().await);

        assert_eq!(app.current_workout(), &before);
        assert_eq!(app.notices().last(), Some(&Notice::save_failed()));
        assert!(!app.is_saving());
    }

    #[tokio::test]
    async fn test_start_failure() {
        let mut app = app(2);
        app.workouts.fail.set(true);

        app.start().await;

        assert_eq!(app.notices(), &[Notice::history_load_failed()]);
        assert!(app.history().workouts().is_empty());
    }

    #[tokio::test]
    async fn test_delete_and_update_notes() {
        let mut app = app(2);
        app.start().await;

        assert!(
            app.update_workout_notes("1".into(), "felt great".to_string())
                .await
        );
        assert_eq!(app.history().workouts()[0].notes, "felt great");
        assert!(app.delete_workout("1".into()).await);
        assert_eq!(app.history().workouts().len(), 1);

        app.workouts.fail.set(true);
        assert!(!app.delete_workout("0".into()).await);
        assert!(
            !app.update_workout_notes("0".into(), "x".to_string())
                .await
        );
        assert_eq!(app.history().workouts().len(), 1);
        assert_eq!(app.history().workouts()[0].notes, "");
        assert_eq!(
            app.take_notices(),
            vec![
                Notice::notes_updated(),
                Notice::workout_deleted(),
                Notice::delete_failed(),
                Notice::notes_update_failed(),
            ]
        );
    }

    #[tokio::test]
    async fn test_load_more() {
        let mut app = app(7);
        app.start().await;

        assert_eq!(app.load_more().await, LoadMore::Loaded(2));
        assert_eq!(app.load_more().await, LoadMore::Exhausted);
        assert_eq!(app.history().workouts().len(), 7);
    }

    #[tokio::test]
    async fn test_toggle_rest_day() {
        let mut app = app(1);
        app.start().await;
        let workout_day = app.history().workouts()[0].day();
        let free_day = workout_day - Duration::days(1);

        assert_eq!(app.toggle_rest_day(&workout_day), None);
        assert_eq!(app.notices(), &[Notice::workout_day()]);

        assert_eq!(app.toggle_rest_day(&free_day), Some(true));
        assert_eq!(
            *app.local.rest_days.borrow(),
            Some(RestDays::new([free_day]))
        );
    }

    #[test]
    fn test_add_custom_exercise() {
        let mut app = app(0);

        assert_eq!(app.add_custom_exercise("ring rows"), None);
        assert_eq!(app.take_notices(), vec![Notice::no_day_selected()]);

        app.select_day(WorkoutType::Pull, || true);
        assert_eq!(app.add_custom_exercise("   "), None);
        assert_eq!(
            app.notices().last().map(|n| n.severity),
            Some(Severity::Warning)
        );

        let id = app.add_custom_exercise("Ring Rows").unwrap();
        assert!(id.starts_with("custom-ring-rows-"));
        assert_eq!(
            app.notices().last(),
            Some(&Notice::exercise_added("Ring Rows"))
        );
    }

    #[test]
    fn test_last_reps() {
        let mut app = app(0);
        app.select_day(WorkoutType::Push, || true);
        let dips = ExerciseID::from("dips");

        assert_eq!(app.last_reps(&dips), 8);

        app.log_set(&dips, 12, None);
        assert_eq!(app.last_reps(&dips), 12);

        app.log_set(&dips, 120, None);
        assert_eq!(app.last_reps(&dips), 12);
        assert_eq!(app.current_workout().exercises[1].sets.len(), 2);

        assert_eq!(app.log_set(&dips, 0, None), None);
        assert_eq!(
            app.notices().last().map(|n| n.title.as_str()),
            Some("invalid reps")
        );
    }

    #[test]
    fn test_select_day_and_delete_set() {
        let mut app = app(0);
        let published = Rc::new(Cell::new(0));
        let counter = published.clone();
        app.subscribe(move |_| counter.set(counter.get() + 1));

        assert_eq!(
            app.select_day(WorkoutType::Push, || true),
            DaySelection::Started
        );
        let set_id = app.log_set(&"flexao".into(), 10, None).unwrap();
        assert!(app.delete_set(&"flexao".into(), set_id));
        assert_eq!(
            app.select_day(WorkoutType::Push, || true),
            DaySelection::Merged
        );

        assert_eq!(
            app.take_notices(),
            vec![
                Notice::workout_started(WorkoutType::Push),
                Notice::set_deleted()
            ]
        );
        assert_eq!(published.get(), 4);
    }

    #[test]
    fn test_navigation() {
        let mut app = app(0);

        assert!(app.toggle_menu());
        app.navigate(View::History);
        assert_eq!(app.active_view(), View::History);
        assert!(!app.is_menu_open());
        assert!(matches!(
            app.view_model(),
            Some(ViewModel::History(HistoryView { .. }))
        ));

        app.open_timer();
        assert!(!app.toggle_menu());
        app.select_timer_mode(TimerMode::Max);
        assert!(!app.toggle_menu());
        app.close_timer();
        assert_eq!(app.timer_state(), TimerState::Closed);
        assert!(app.toggle_menu());
    }

    #[test]
    fn test_evolution_view_uses_selected_exercise() {
        let mut app = app(0);
        app.navigate(View::Evolution);
        app.select_exercise(Some("pull-up".to_string()));

        let Some(ViewModel::Evolution(view)) = app.view_model() else {
            panic!("unexpected view model");
        };
        assert_eq!(view.selected_exercise, Some("pull-up".to_string()));
    }

    fn app(workouts: i64) -> App<FakeWorkoutService, FakeLocal, FakeSchedule> {
        App::new(
            FakeWorkoutService::with_workouts(workouts),
            FakeLocal::default(),
            FakeSchedule,
        )
    }

    struct FakeWorkoutService {
        workouts: RefCell<Vec<SavedWorkout>>,
        created: Cell<usize>,
        fail: Cell<bool>,
    }

    impl FakeWorkoutService {
        fn with_workouts(count: i64) -> Self {
            let start = Local::now().to_utc() - Duration::days(30);
            Self {
                workouts: RefCell::new(
                    (0..count)
                        .rev()
                        .map(|n| SavedWorkout {
                            id: n.to_string().into(),
                            date: start + Duration::days(n),
                            workout_type: WorkoutType::Pull,
                            exercises: vec![],
                            notes: String::new(),
                        })
                        .collect(),
                ),
                created: Cell::new(0),
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

        fn page(&self, cursor: Option<&Cursor>, page_size: usize) -> Page {
            Page::new(
                self.workouts
                    .borrow()
                    .iter()
                    .filter(|w| cursor.is_none_or(|c| c.precedes(w)))
                    .take(page_size)
                    .cloned()
                    .collect(),
                page_size,
            )
        }
    }

    impl WorkoutService for FakeWorkoutService {
        async fn load_first_page(&self, page_size: usize) -> Result<Page, ReadError> {
            self.check()?;
            Ok(self.page(None, page_size))
        }

        async fn load_next_page(
            &self,
            cursor: Option<&Cursor>,
            page_size: usize,
        ) -> Result<Page, ReadError> {
            self.check()?;
            Ok(self.page(cursor, page_size))
        }

        async fn create_workout(&self, workout: NewWorkout) -> Result<SavedWorkout, CreateError> {
            self.check()?;
            self.created.set(self.created.get() + 1);
            Ok(SavedWorkout::new(
                format!("new-{}", self.created.get()).into(),
                DateTime::<Utc>::from(Local::now()),
                workout,
            ))
        }

        async fn update_workout_notes(
            &self,
            id: WorkoutID,
            _: String,
        ) -> Result<WorkoutID, UpdateError> {
            self.check()?;
            Ok(id)
        }

        async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
            self.check()?;
            Ok(id)
        }
    }

    #[derive(Clone, Default)]
    struct FakeLocal {
        current_workout: Rc<RefCell<Option<CurrentWorkout>>>,
        rest_days: Rc<RefCell<Option<RestDays>>>,
        last_reps: Rc<RefCell<HashMap<String, u32>>>,
        cleared: Rc<Cell<bool>>,
    }

    impl CurrentWorkoutService for FakeLocal {
        fn get_current_workout(&self) -> Result<Option<CurrentWorkout>, String> {
            Ok(self.current_workout.borrow().clone())
        }

        fn set_current_workout(&self, current_workout: &CurrentWorkout) -> Result<(), String> {
            *self.current_workout.borrow_mut() = Some(current_workout.clone());
            Ok(())
        }

        fn clear_current_workout(&self) -> Result<(), String> {
            *self.current_workout.borrow_mut() = None;
            self.cleared.set(true);
            Ok(())
        }
    }

    impl RestDaysService for FakeLocal {
        fn get_rest_days(&self) -> Result<RestDays, String> {
            Ok(self.rest_days.borrow().clone().unwrap_or_default())
        }

        fn set_rest_days(&self, rest_days: &RestDays) -> Result<(), String> {
            *self.rest_days.borrow_mut() = Some(rest_days.clone());
            Ok(())
        }
    }

    impl LastRepsService for FakeLocal {
        fn get_last_reps(&self, exercise_name: &str) -> u32 {
            self.last_reps
                .borrow()
                .get(exercise_name)
                .copied()
                .unwrap_or(crate::DEFAULT_REPS)
        }

        fn set_last_reps(&self, exercise_name: &str, reps: u32) -> Result<(), String> {
            self.last_reps
                .borrow_mut()
                .insert(exercise_name.to_string(), reps);
            Ok(())
        }
    }

    struct FakeSchedule;

    impl Schedule for FakeSchedule {
        type Handle = ();

        fn every_second(&self, _: Box<dyn FnMut()>) -> Self::Handle {}
    }

    #[test]
    fn test_rest_day_dates_are_calendar_days() {
        let mut app = app(0);
        let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();

        assert_eq!(app.toggle_rest_day(&day), Some(true));
        assert_eq!(
            app.toggle_rest_day(&day.and_hms_opt(23, 59, 0).unwrap()),
            Some(false)
        );
    }
}
