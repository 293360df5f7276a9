use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Document, DocumentError, ElementId, ElementIdError, TitleList, TitleListError};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

/// What a tick does when the display target is not on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingTargetPolicy {
    /// Log, report the miss, and still advance to the next title.
    #[default]
    Skip,
    /// Report an error and keep the current title for the next tick.
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Interval must be greater than zero")]
    ZeroInterval,
    #[error(transparent)]
    Titles(#[from] TitleListError),
    #[error(transparent)]
    Target(#[from] ElementIdError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotatorSettings {
    pub titles: TitleList,
    pub target: ElementId,
    pub interval: Duration,
    pub on_missing_target: MissingTargetPolicy,
    /// Element ids making up the page, in display order.
    pub page_elements: Vec<ElementId>,
}

impl Default for RotatorSettings {
    fn default() -> Self {
        Self {
            titles: TitleList::default(),
            target: ElementId::default(),
            interval: DEFAULT_INTERVAL,
            on_missing_target: MissingTargetPolicy::default(),
            page_elements: vec![ElementId::default()],
        }
    }
}

impl RotatorSettings {
    pub fn interval_from_millis(ms: u64) -> Result<Duration, SettingsError> {
        if ms == 0 {
            return Err(SettingsError::ZeroInterval);
        }
        Ok(Duration::from_millis(ms))
    }

    pub fn build_document(&self) -> Result<Document, DocumentError> {
        Document::with_elements(self.page_elements.iter().cloned())
    }

    pub fn target_on_page(&self) -> bool {
        self.page_elements.contains(&self.target)
    }
}

/// Values supplied on the command line or through the environment.
///
/// Each `Some` replaces the corresponding value loaded from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub titles: Option<Vec<String>>,
    pub target: Option<String>,
    pub interval_ms: Option<u64>,
    pub on_missing_target: Option<MissingTargetPolicy>,
}

impl SettingsOverrides {
    pub fn apply(self, mut settings: RotatorSettings) -> Result<RotatorSettings, SettingsError> {
        if let Some(titles) = self.titles {
            settings.titles = TitleList::new(titles)?;
        }
        if let Some(target) = self.target {
            settings.target = ElementId::new(target)?;
        }
        if let Some(ms) = self.interval_ms {
            settings.interval = RotatorSettings::interval_from_millis(ms)?;
        }
        if let Some(policy) = self.on_missing_target {
            settings.on_missing_target = policy;
        }
        Ok(settings)
    }
}
