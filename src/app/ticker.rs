//! Wires a [`TitleRotator`] to a host: the ready signal starts a repeating
//! tick that writes the next title to the page.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::domain::ElementId;
use crate::ports::{Host, HostDocument};
use crate::rotator::{TickError, TickReport, TitleRotator};
use crate::settings::{MissingTargetPolicy, RotatorSettings};

/// Everything one scheduled tick needs. Owned by the scheduled job.
pub struct TitleTicker {
    rotator: TitleRotator,
    document: Box<dyn HostDocument>,
    target: ElementId,
    policy: MissingTargetPolicy,
    reports: Option<mpsc::Sender<Action>>,
}

impl TitleTicker {
    pub fn new(settings: &RotatorSettings, document: impl HostDocument + 'static) -> Self {
        Self {
            rotator: TitleRotator::new(settings.titles.clone()),
            document: Box::new(document),
            target: settings.target.clone(),
            policy: settings.on_missing_target,
            reports: None,
        }
    }

    /// Sends every tick result to the app loop as an [`Action`].
    pub fn report_to(mut self, tx: mpsc::Sender<Action>) -> Self {
        self.reports = Some(tx);
        self
    }

    pub fn rotator(&self) -> &TitleRotator {
        &self.rotator
    }

    pub fn run_once(&mut self) -> Result<TickReport, TickError> {
        let result = self
            .rotator
            .tick(self.document.as_mut(), &self.target, self.policy);

        let action = match &result {
            Ok(report) => {
                debug!(sequence = report.sequence, title = %report.title, "title tick");
                Action::TitleTicked(report.clone())
            }
            Err(e) => {
                warn!(error = %e, "title tick failed");
                Action::TickFailed(e.to_string())
            }
        };

        if let Some(tx) = &self.reports
            && let Err(e) = tx.try_send(action)
        {
            debug!(error = %e, "dropped tick report");
        }

        result
    }
}

/// Schedules `ticker` to run every `every` once `host` is ready.
///
/// Installing twice schedules two independent timers.
pub fn install(host: &dyn Host, ticker: TitleTicker, every: Duration) {
    host.on_ready(Box::new(move |host: &dyn Host| {
        info!(
            target_id = %ticker.target,
            titles = ticker.rotator.titles().len(),
            every_ms = every.as_millis() as u64,
            "starting title rotation"
        );
        let mut ticker = ticker;
        host.schedule(
            every,
            Box::new(move || {
                let _ = ticker.run_once();
            }),
        );
    }));
}
