use crate::app::event::Notification;
use crate::config::AppConfig;
use crate::display::{self, ElementBoard, LookupError};
use crate::tracker::{MouseTracker, Transition};
use chrono::Local;
use std::collections::VecDeque;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Changed,
    Unchanged,
    Ignored,
    Suppressed,
    DisplayError(String),
}

impl From<Transition> for Outcome {
    fn from(t: Transition) -> Self {
        match t {
            Transition::Changed(_) => Outcome::Changed,
            Transition::Unchanged(_) => Outcome::Unchanged,
            Transition::Ignored => Outcome::Ignored,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub notification: Notification,
    pub outcome: Outcome,
}

/// Most recent notifications, newest at the front.
#[derive(Debug)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_enabled(&self) -> bool {
        self.capacity > 0
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub tracker: MouseTracker,
    pub board: ElementBoard,
    pub history: History,
    pub status: String,
    pub dirty: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let board = ElementBoard::with_elements(config.display.elements.iter().cloned());
        let history = History::new(config.history.capacity);
        Self {
            config,
            tracker: MouseTracker::new(),
            board,
            history,
            status: "Press any mouse button".to_string(),
            dirty: true,
            should_quit: false,
        }
    }

    /// Write the tracker's current state onto the board.
    pub fn sync_display(&mut self) -> Result<(), LookupError> {
        let result = display::synchronize(self.tracker.state(), &mut self.board);
        if let Err(ref e) = result {
            tracing::error!(element = %e.element, "display synchronization failed");
            self.status = e.to_string();
        }
        self.dirty = true;
        result
    }

    pub fn record(&mut self, notification: Notification, outcome: Outcome) {
        let now = Local::now();
        let mut timestamp = String::new();
        if write!(timestamp, "{}", now.format(&self.config.display.timestamp_format)).is_err() {
            timestamp.clear();
            let _ = write!(timestamp, "{}", now.format("%H:%M:%S"));
        }
        self.history.push(HistoryEntry {
            timestamp,
            notification,
            outcome,
        });
        self.dirty = true;
    }
}
