use serde::{Deserialize, Serialize};

use crate::app::settings::{MissingTargetPolicy, RotatorSettings, SettingsError, SettingsOverrides};
use crate::domain::ElementId;

pub const CURRENT_VERSION: u32 = 1;

/// Reads only `version`, ignoring every other key, so a file written for
/// another version is recognised before its schema is checked.
#[derive(Debug, Deserialize)]
pub struct VersionHeader {
    pub version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotatorConfigFile {
    pub version: u32,
    #[serde(default)]
    pub rotator: RotatorSection,
    #[serde(default)]
    pub page: PageSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotatorSection {
    pub titles: Option<Vec<String>>,
    pub target: Option<String>,
    pub interval_ms: Option<u64>,
    pub on_missing_target: Option<MissingTargetPolicy>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSection {
    pub elements: Option<Vec<String>>,
}

impl RotatorConfigFile {
    /// Fills every absent key from [`RotatorSettings::default`].
    ///
    /// Without a `[page]` list the page holds only the display target.
    pub fn to_settings(&self) -> Result<RotatorSettings, SettingsError> {
        let overrides = SettingsOverrides {
            titles: self.rotator.titles.clone(),
            target: self.rotator.target.clone(),
            interval_ms: self.rotator.interval_ms,
            on_missing_target: self.rotator.on_missing_target,
        };
        let mut settings = overrides.apply(RotatorSettings::default())?;

        settings.page_elements = match &self.page.elements {
            Some(ids) => ids
                .iter()
                .map(|id| ElementId::new(id.as_str()))
                .collect::<Result<_, _>>()?,
            None => vec![settings.target.clone()],
        };

        Ok(settings)
    }
}
