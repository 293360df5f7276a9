//! Pure functions for calculating redraw deadlines.
//!
//! Title ticks arrive as actions, so the only timed redraw left is clearing
//! an expiring status message.

use std::time::Instant;

use crate::state::AppState;

/// Returns `Some(Instant)` when a status message is waiting to expire.
pub fn next_animation_deadline(state: &AppState) -> Option<Instant> {
    state.messages.expires_at()
}
