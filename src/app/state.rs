use std::sync::{MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use super::message_state::MessageState;
use super::ports::SharedDocument;
use super::settings::RotatorSettings;
use crate::domain::{Document, ElementId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub ready: bool,
    pub ticks: u64,
    pub missed: u64,
    pub last_title: Option<String>,
}

pub struct AppState {
    pub should_quit: bool,
    pub render_dirty: bool,
    pub app_name: String,
    pub target: ElementId,
    pub interval: Duration,
    pub title_count: usize,
    pub document: SharedDocument,
    pub page: PageState,
    pub messages: MessageState,
    pub terminal_height: u16,
}

impl AppState {
    pub fn new(app_name: impl Into<String>, settings: &RotatorSettings, document: SharedDocument) -> Self {
        Self {
            should_quit: false,
            render_dirty: true,
            app_name: app_name.into(),
            target: settings.target.clone(),
            interval: settings.interval,
            title_count: settings.titles.len(),
            document,
            page: PageState::default(),
            messages: MessageState::default(),
            terminal_height: 0,
        }
    }

    /// Locks the page for reading. A poisoned lock is recovered.
    pub fn document(&self) -> MutexGuard<'_, Document> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }

    pub fn clear_expired_timers(&mut self, now: Instant) {
        self.messages.clear_expired_at(now);
    }
}
