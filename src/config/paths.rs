//! Platform directories for data, configuration, and logs.

use crate::error::ApiError;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const APP_NAME: &str = "shadow-notes";

fn project_dirs() -> Result<ProjectDirs, ApiError> {
    ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
        ApiError::ConfigError("Could not determine home directory (HOME not set)".to_string())
    })
}

/// Default directory for `users.json` and `notes.json`
pub fn default_data_dir() -> Result<PathBuf, ApiError> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}

/// `config.toml` in the platform config directory, if it can be determined
pub fn global_config_file() -> Option<PathBuf> {
    project_dirs()
        .ok()
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Default log file location in the platform state directory
///
/// Platforms without a state directory fall back to the data directory.
pub fn default_log_file() -> Result<PathBuf, ApiError> {
    let dirs = project_dirs()?;
    let dir = dirs
        .state_dir()
        .unwrap_or_else(|| dirs.data_local_dir())
        .to_path_buf();
    Ok(dir.join(format!("{}.log", APP_NAME)))
}
