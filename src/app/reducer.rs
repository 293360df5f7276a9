//! Pure reducer: state transitions only, no I/O.
//!
//! The reducer MUST NOT call `Instant::now()`, perform I/O or spawn tasks.
//! Time is passed in as `now`.

use std::time::Instant;

use crate::action::Action;
use crate::effect::Effect;
use crate::rotator::{TickOutcome, TickReport};
use crate::state::AppState;

pub fn reduce(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    let should_mark_dirty = !matches!(action, Action::None | Action::Render);

    let effects = reduce_inner(state, action, now);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

fn reduce_inner(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    match action {
        Action::None => vec![],
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Resize(_w, h) => {
            state.terminal_height = h;
            vec![]
        }
        Action::Render => {
            state.clear_expired_timers(now);
            state.clear_dirty();
            vec![Effect::Render]
        }
        Action::DocumentReady => {
            if !state.page.ready {
                state.page.ready = true;
                state.messages.success(
                    format!(
                        "Rotating {} titles every {}ms",
                        state.title_count,
                        state.interval.as_millis()
                    ),
                    now,
                );
            }
            vec![Effect::SignalReady, Effect::Render]
        }
        Action::TitleTicked(report) => {
            record_tick(state, &report, now);
            vec![]
        }
        Action::TickFailed(msg) => {
            state.page.ticks += 1;
            state.messages.error(msg, now);
            vec![]
        }
    }
}

fn record_tick(state: &mut AppState, report: &TickReport, now: Instant) {
    state.page.ticks += 1;
    match report.outcome {
        TickOutcome::Displayed => {
            state.page.last_title = Some(report.title.clone());
        }
        TickOutcome::TargetMissing => {
            state.page.missed += 1;
            state.messages.error(
                format!("Element #{} not found, skipped \"{}\"", report.target, report.title),
                now,
            );
        }
    }
}
