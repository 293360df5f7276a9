//! File-backed tracing subscriber. The terminal owns stdout, so logs go to disk.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::Level;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::FmtSubscriber;

const LOG_FILE_NAME: &str = "dyntitle.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Could not open log file {path}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error(transparent)]
    AlreadyInstalled(#[from] SetGlobalDefaultError),
}

/// `$XDG_CACHE_HOME/dyntitle/dyntitle.log`, if a cache directory exists.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("dyntitle").join(LOG_FILE_NAME))
}

pub fn level_for(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::INFO }
}

/// Opens `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let open = || -> io::Result<File> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)
    };
    open().map_err(|source| LoggingError::Open {
        path: path.to_path_buf(),
        source,
    })
}

pub fn init(path: &Path, verbose: bool) -> Result<(), LoggingError> {
    let file = open_log_file(path)?;
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level_for(verbose))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn open_log_file_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("logs").join(LOG_FILE_NAME);

        open_log_file(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn open_log_file_appends() {
        use std::io::Write;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(LOG_FILE_NAME);
        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn verbose_raises_level_to_debug() {
        assert_eq!(level_for(false), Level::INFO);
        assert_eq!(level_for(true), Level::DEBUG);
    }
}
