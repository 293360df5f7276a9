use std::path::PathBuf;

use thiserror::Error;

use crate::settings::RotatorSettings;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigStoreError {
    #[error("Config version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    #[error("IO error: {0}")]
    IoError(String),
}

pub trait ConfigStore: Send + Sync {
    /// Returns `Ok(None)` when no config file exists.
    fn load(&self) -> Result<Option<RotatorSettings>, ConfigStoreError>;

    fn storage_path(&self) -> PathBuf;
}
