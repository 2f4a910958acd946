use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Interval;
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Stopwatch,
    Countdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum TimerMode {
    Max,
    SubMax,
    Ladder,
}

impl TimerMode {
    #[must_use]
    pub fn kind(self) -> TimerKind {
        match self {
            TimerMode::Max => TimerKind::Stopwatch,
            TimerMode::SubMax | TimerMode::Ladder => TimerKind::Countdown,
        }
    }

    #[must_use]
    pub fn initial_seconds(self) -> u32 {
        match self {
            TimerMode::Max => 0,
            TimerMode::SubMax => 60,
            TimerMode::Ladder => 30,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TimerMode::Max => "max day rest (5:00+)",
            TimerMode::SubMax => "sub-max rest (1:00)",
            TimerMode::Ladder => "ladder rest (0:30)",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    #[default]
    Closed,
    ModeSelection,
    Running {
        mode: TimerMode,
        seconds: u32,
    },
}

impl TimerState {
    pub fn open(&mut self) {
        if *self == TimerState::Closed {
            *self = TimerState::ModeSelection;
        }
    }

    /// Returns `false` if no mode is being selected.
    pub fn select_mode(&mut self, mode: TimerMode) -> bool {
        if *self != TimerState::ModeSelection {
            return false;
        }
        *self = TimerState::Running {
            mode,
            seconds: mode.initial_seconds(),
        };
        true
    }

    /// Advances a running timer by one second.
    ///
    /// A countdown closes on the tick that would make it reach zero.
    pub fn tick(&mut self) {
        if let TimerState::Running { mode, seconds } = *self {
            *self = match mode.kind() {
                TimerKind::Stopwatch => TimerState::Running {
                    mode,
                    seconds: seconds.saturating_add(1),
                },
                TimerKind::Countdown => match seconds.checked_sub(1) {
                    Some(seconds) if seconds > 0 => TimerState::Running { mode, seconds },
                    _ => TimerState::Closed,
                },
            };
        }
    }

    pub fn close(&mut self) {
        *self = TimerState::Closed;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, TimerState::Running { .. })
    }

    /// Whether the timer covers the screen, which blocks the navigation menu.
    #[must_use]
    pub fn suppresses_navigation(&self) -> bool {
        *self != TimerState::Closed
    }

    #[must_use]
    pub fn display(&self) -> Option<String> {
        match self {
            TimerState::Running { seconds, .. } => Some(format_seconds(*seconds)),
            TimerState::Closed | TimerState::ModeSelection => None,
        }
    }
}

#[must_use]
pub fn format_seconds(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Source of the one second ticks of a running timer.
///
/// Ticking stops when the returned handle is dropped.
pub trait Schedule {
    type Handle: 'static;
    fn every_second(&self, on_tick: Box<dyn FnMut()>) -> Self::Handle;
}

pub struct IntervalSchedule;

impl Schedule for IntervalSchedule {
    type Handle = Interval;

    fn every_second(&self, mut on_tick: Box<dyn FnMut()>) -> Self::Handle {
        Interval::new(1000, move || on_tick())
    }
}

struct Ticking<H> {
    state: TimerState,
    handle: Option<H>,
}

/// Rest timer that advances itself while running.
pub struct RestTimer<S: Schedule> {
    schedule: S,
    ticking: Rc<RefCell<Ticking<S::Handle>>>,
}

impl<S: Schedule> RestTimer<S> {
    pub fn new(schedule: S) -> Self {
        Self {
            schedule,
            ticking: Rc::new(RefCell::new(Ticking {
                state: TimerState::Closed,
                handle: None,
            })),
        }
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.ticking.borrow().state
    }

    pub fn open(&self) {
        self.ticking.borrow_mut().state.open();
    }

    pub fn select_mode(&self, mode: TimerMode) {
        let mut ticking = self.ticking.borrow_mut();
        if !ticking.state.select_mode(mode) {
            return;
        }
        ticking.handle = None;

        let weak = Rc::downgrade(&self.ticking);
        ticking.handle = Some(self.schedule.every_second(Box::new(move || {
            let Some(ticking) = weak.upgrade() else {
                return;
            };
            let mut ticking = ticking.borrow_mut();
            ticking.state.tick();
            if ticking.state == TimerState::Closed {
                ticking.handle = None;
            }
        })));
    }

    pub fn close(&self) {
        let mut ticking = self.ticking.borrow_mut();
        ticking.state.close();
        ticking.handle = None;
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticking.borrow().handle.is_some()
    }
}
