use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::app::ports::config_store::{ConfigStore, ConfigStoreError};
use crate::app::settings::RotatorSettings;
use crate::config::rotator_config::{CURRENT_VERSION, RotatorConfigFile, VersionHeader};

const CONFIG_FILE_NAME: &str = "config.toml";

pub struct TomlConfigStore {
    path: PathBuf,
    /// An explicitly requested file must exist.
    required: bool,
}

impl TomlConfigStore {
    /// Store at `$XDG_CONFIG_HOME/dyntitle/config.toml`.
    pub fn new() -> Result<Self, ConfigStoreError> {
        let config_dir = get_config_dir()?;
        Ok(Self::with_config_dir(config_dir))
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self {
            path: config_dir.join(CONFIG_FILE_NAME),
            required: false,
        }
    }

    /// Store backed by a user-supplied file; a missing file is an error.
    pub fn at_path(path: PathBuf) -> Self {
        Self {
            path,
            required: true,
        }
    }
}

impl ConfigStore for TomlConfigStore {
    fn load(&self) -> Result<Option<RotatorSettings>, ConfigStoreError> {
        if !self.path.exists() {
            if self.required {
                return Err(ConfigStoreError::ReadError(format!(
                    "{} does not exist",
                    self.path.display()
                )));
            }
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| ConfigStoreError::ReadError(e.to_string()))?;

        let header: VersionHeader = toml::from_str(&content)
            .map_err(|e| ConfigStoreError::InvalidFormat(e.to_string()))?;

        if header.version != CURRENT_VERSION {
            return Err(ConfigStoreError::VersionMismatch {
                found: header.version,
                expected: CURRENT_VERSION,
            });
        }

        let config: RotatorConfigFile = toml::from_str(&content)
            .map_err(|e| ConfigStoreError::InvalidFormat(e.to_string()))?;

        let settings = config
            .to_settings()
            .map_err(|e| ConfigStoreError::InvalidValue(e.to_string()))?;

        debug!(path = %self.path.display(), "loaded config file");
        Ok(Some(settings))
    }

    fn storage_path(&self) -> PathBuf {
        self.path.clone()
    }
}

fn get_config_dir() -> Result<PathBuf, ConfigStoreError> {
    let config_base = dirs::config_dir()
        .ok_or_else(|| ConfigStoreError::IoError("Could not find config directory".into()))?;
    Ok(config_base.join("dyntitle"))
}
