use std::time::Duration;

/// Repeating action handed to [`Host::schedule`].
pub type Job = Box<dyn FnMut() + Send + 'static>;

/// Callback handed to [`Host::on_ready`]; receives the host so it can schedule work.
pub type ReadyCallback = Box<dyn FnOnce(&dyn Host) + Send + 'static>;

/// Ready signal and repeating timer provided by the environment hosting the page.
pub trait Host: Send + Sync {
    /// Runs `callback` once the host is ready.
    ///
    /// If the host is already ready the callback runs immediately on the caller's
    /// stack. Otherwise it is queued and runs, in registration order, when
    /// [`Host::mark_ready`] fires.
    fn on_ready(&self, callback: ReadyCallback);

    /// Runs `job` every `every`, first one full period after scheduling.
    ///
    /// No handle is returned: the job lives as long as the host. A zero
    /// period is rejected with a warning and the job is dropped.
    fn schedule(&self, every: Duration, job: Job);

    /// Fires the ready signal. Calls after the first are no-ops.
    fn mark_ready(&self);
}
