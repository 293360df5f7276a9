use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::action::Action;

use super::Event;

pub fn handle_event(event: Event) -> Action {
    match event {
        Event::Init => Action::DocumentReady,
        Event::Resize(w, h) => Action::Resize(w, h),
        Event::Key(key) => handle_key_event(key),
    }
}

fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q') | KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('r'), m) if m.is_empty() => Action::Render,
        _ => Action::None,
    }
}
