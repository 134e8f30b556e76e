//! File logging with rotation.

use std::fs::{self, File};
use std::path::Path;

use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

/// Name of the log file written by the current process.
pub const LATEST_LOG: &str = "latest.log";

/// Archived logs kept next to `latest.log`.
pub const MAX_OLD_LOGS: usize = 25;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("no cache directory on this platform")]
    NoCacheDir,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logger already installed: {0}")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

/// Rotate old logs and send `Debug` and above to the platform cache dir.
pub fn init() -> Result<(), LoggingError> {
    let dir = crate::paths::cache_dir().ok_or(LoggingError::NoCacheDir)?;
    init_in(&dir, LevelFilter::Debug)
}

/// Rotate logs in `dir` and install a file logger writing `dir/latest.log`.
pub fn init_in(dir: &Path, level: LevelFilter) -> Result<(), LoggingError> {
    fs::create_dir_all(dir)?;
    rotate_logs(dir);
    let file = File::create(dir.join(LATEST_LOG))?;
    WriteLogger::init(level, Config::default(), file)?;
    info!("Logging to {}", dir.join(LATEST_LOG).display());
    Ok(())
}

/// Archive `latest.log` under a timestamped name and prune old archives.
pub fn rotate_logs(dir: &Path) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, dir.join(format!("{timestamp}.log")));
    }
    prune_old_logs(dir, MAX_OLD_LOGS);
}

/// Delete the oldest archived logs in `dir` beyond `keep`.
///
/// Returns the number of files removed.
pub fn prune_old_logs(dir: &Path, keep: usize) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    if logs.len() <= keep {
        return 0;
    }

    // Oldest first, by modification time then name.
    logs.sort_by_key(|e| {
        (
            e.metadata().and_then(|m| m.modified()).ok(),
            e.file_name(),
        )
    });

    let excess = logs.len() - keep;
    logs.iter()
        .take(excess)
        .filter(|e| fs::remove_file(e.path()).is_ok())
        .count()
}
