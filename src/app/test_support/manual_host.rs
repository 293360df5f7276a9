use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::warn;

use crate::ports::{Host, Job, ReadyCallback};

struct ManualTimer {
    every: Duration,
    next_due: Duration,
    job: Option<Job>,
}

#[derive(Default)]
struct ManualState {
    ready: bool,
    pending: Vec<ReadyCallback>,
    timers: Vec<ManualTimer>,
    now: Duration,
}

/// Host driven by a simulated clock. Nothing runs until the test calls
/// [`ManualHost::mark_ready`] or [`ManualHost::advance`].
#[derive(Default)]
pub struct ManualHost {
    inner: Mutex<ManualState>,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, ManualState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_ready(&self) -> bool {
        self.state().ready
    }

    pub fn timer_count(&self) -> usize {
        self.state().timers.len()
    }

    /// Time elapsed on the simulated clock.
    pub fn elapsed(&self) -> Duration {
        self.state().now
    }

    /// Moves the clock forward, running every job that falls due on the way.
    ///
    /// Jobs due at the same instant run in scheduling order.
    pub fn advance(&self, by: Duration) {
        let deadline = self.state().now + by;

        loop {
            let due = {
                let state = self.state();
                state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.next_due <= deadline)
                    .min_by_key(|(i, t)| (t.next_due, *i))
                    .map(|(i, _)| i)
            };
            let Some(i) = due else { break };

            // The job runs without the lock held so it may call back into the host.
            let mut job = {
                let mut state = self.state();
                let at = state.timers[i].next_due;
                state.now = at;
                let every = state.timers[i].every;
                state.timers[i].next_due = at + every;
                state.timers[i].job.take()
            };
            if let Some(job) = job.as_mut() {
                job();
            }
            self.state().timers[i].job = job;
        }

        self.state().now = deadline;
    }
}

impl Host for ManualHost {
    fn on_ready(&self, callback: ReadyCallback) {
        let ready = self.state().ready;
        if ready {
            callback(self);
        } else {
            self.state().pending.push(callback);
        }
    }

    fn schedule(&self, every: Duration, job: Job) {
        if every.is_zero() {
            warn!("refusing to schedule a job with a zero period");
            return;
        }

        let mut state = self.state();
        let next_due = state.now + every;
        state.timers.push(ManualTimer {
            every,
            next_due,
            job: Some(job),
        });
    }

    fn mark_ready(&self) {
        let pending = {
            let mut state = self.state();
            if state.ready {
                return;
            }
            state.ready = true;
            std::mem::take(&mut state.pending)
        };
        for callback in pending {
            callback(self);
        }
    }
}
