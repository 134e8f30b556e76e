//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "app";
const ORGANIZATION: &str = "aiay";
const APPLICATION: &str = "dashkit";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Directory for persistent data (the settings database).
///
/// - Linux: `$XDG_DATA_HOME/dashkit` or `~/.local/share/dashkit`
/// - macOS: `~/Library/Application Support/app.aiay.dashkit`
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/dashkit` or `~/.cache/dashkit`
/// - macOS: `~/Library/Caches/app.aiay.dashkit`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

pub fn settings_db() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("settings.db"))
}

pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(crate::logging::LATEST_LOG))
}
