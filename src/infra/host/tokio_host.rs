use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::app::ports::{Host, Job, ReadyCallback};

#[derive(Default)]
struct ReadyState {
    ready: bool,
    pending: Vec<ReadyCallback>,
}

/// Host backed by the tokio runtime: every scheduled job runs on its own task.
pub struct TokioHost {
    handle: Handle,
    ready: Mutex<ReadyState>,
    cancellation_token: CancellationToken,
    timers: AtomicUsize,
}

impl TokioHost {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            ready: Mutex::new(ReadyState::default()),
            cancellation_token: CancellationToken::new(),
            timers: AtomicUsize::new(0),
        }
    }

    fn ready_state(&self) -> MutexGuard<'_, ReadyState> {
        self.ready.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn timer_count(&self) -> usize {
        self.timers.load(Ordering::SeqCst)
    }

    /// Stops every scheduled job.
    pub fn shutdown(&self) {
        self.cancellation_token.cancel();
    }
}

impl Host for TokioHost {
    fn on_ready(&self, callback: ReadyCallback) {
        let mut state = self.ready_state();
        if state.ready {
            drop(state);
            callback(self);
        } else {
            state.pending.push(callback);
        }
    }

    fn schedule(&self, every: Duration, mut job: Job) {
        if every.is_zero() {
            warn!("refusing to schedule a job with a zero period");
            return;
        }

        let cancellation_token = self.cancellation_token.clone();
        let timer = self.timers.fetch_add(1, Ordering::SeqCst);
        debug!(timer, every_ms = every.as_millis() as u64, "scheduling repeating job");

        self.handle.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + every, every);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = cancellation_token.cancelled() => break,
                    _ = interval.tick() => job(),
                }
            }
            debug!(timer, "repeating job stopped");
        });
    }

    fn mark_ready(&self) {
        let pending = {
            let mut state = self.ready_state();
            if state.ready {
                return;
            }
            state.ready = true;
            std::mem::take(&mut state.pending)
        };
        debug!(callbacks = pending.len(), "host ready");
        for callback in pending {
            callback(self);
        }
    }
}

impl Drop for TokioHost {
    fn drop(&mut self) {
        self.cancellation_token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    const PERIOD: Duration = Duration::from_millis(3000);
    const SLACK: Duration = Duration::from_millis(10);

    fn counting_job(counter: &Arc<AtomicUsize>) -> Job {
        let counter = Arc::clone(counter);
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn job_first_runs_one_period_after_scheduling() {
        let host = TokioHost::new(Handle::current());
        let counter = Arc::new(AtomicUsize::new(0));

        host.schedule(PERIOD, counting_job(&counter));

        time::sleep(PERIOD - SLACK).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        time::sleep(SLACK * 2).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn job_repeats_every_period() {
        let host = TokioHost::new(Handle::current());
        let counter = Arc::new(AtomicUsize::new(0));

        host.schedule(PERIOD, counting_job(&counter));
        time::sleep(PERIOD * 3 + SLACK).await;

        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_jobs() {
        let host = TokioHost::new(Handle::current());
        let counter = Arc::new(AtomicUsize::new(0));
        host.schedule(PERIOD, counting_job(&counter));
        time::sleep(PERIOD + SLACK).await;

        host.shutdown();
        time::sleep(PERIOD * 3).await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn late_ticks_are_delayed_not_burst() {
        let host = TokioHost::new(Handle::current());
        let counter = Arc::new(AtomicUsize::new(0));
        host.schedule(PERIOD, counting_job(&counter));
        tokio::task::yield_now().await;

        time::advance(PERIOD * 3 + SLACK).await;
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_period_is_rejected() {
        let host = TokioHost::new(Handle::current());
        let counter = Arc::new(AtomicUsize::new(0));

        host.schedule(Duration::ZERO, counting_job(&counter));
        time::sleep(PERIOD).await;

        assert_eq!(host.timer_count(), 0);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn ready_callbacks_wait_for_signal() {
        let host = TokioHost::new(Handle::current());
        let fired = Arc::new(AtomicUsize::new(0));
        let flag = Arc::clone(&fired);
        host.on_ready(Box::new(move |_: &dyn Host| {
            flag.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        host.mark_ready();
        host.mark_ready();

        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn on_ready_after_signal_runs_immediately() {
        let host = TokioHost::new(Handle::current());
        host.mark_ready();
        let fired = Arc::new(AtomicUsize::new(0));
        let flag = Arc::clone(&fired);

        host.on_ready(Box::new(move |_: &dyn Host| {
            flag.fetch_add(1, Ordering::SeqCst);
        }));

        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn ready_callback_can_schedule() {
        let host = TokioHost::new(Handle::current());
        let counter = Arc::new(AtomicUsize::new(0));
        let job_counter = Arc::clone(&counter);
        host.on_ready(Box::new(move |host: &dyn Host| {
            host.schedule(PERIOD, counting_job(&job_counter));
        }));

        host.mark_ready();
        time::sleep(PERIOD + SLACK).await;

        assert_eq!(host.timer_count(), 1);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
