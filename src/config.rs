//! Configuration
//!
//! `NotesConfig` is assembled by [`ConfigLoader`] from built-in defaults, an
//! optional TOML file, and `SHADOW__*` environment variables.

pub mod loader;
pub mod paths;

use crate::account::AccountPolicy;
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use loader::ConfigLoader;

fn default_users_file() -> String {
    "users.json".to_string()
}

fn default_notes_file() -> String {
    "notes.json".to_string()
}

fn default_preview_length() -> usize {
    30
}

fn default_max_search_results() -> usize {
    20
}

/// Where the two documents live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding both documents; `None` uses the platform data directory
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_users_file")]
    pub users_file: String,

    #[serde(default = "default_notes_file")]
    pub notes_file: String,

    /// Backup target; `None` means `<data_dir>/backups`
    #[serde(default)]
    pub backup_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            users_file: default_users_file(),
            notes_file: default_notes_file(),
            backup_dir: None,
        }
    }
}

/// Resolved on-disk locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub data_dir: PathBuf,
    pub users_file: PathBuf,
    pub notes_file: PathBuf,
    pub backup_dir: PathBuf,
}

impl StorageConfig {
    /// Resolve file locations. `override_dir` (from the command line) beats
    /// the configured `data_dir`, which beats the platform default.
    pub fn resolve_paths(&self, override_dir: Option<PathBuf>) -> Result<StoragePaths, ApiError> {
        let data_dir = match override_dir.or_else(|| self.data_dir.clone()) {
            Some(dir) => dir,
            None => paths::default_data_dir()?,
        };
        let backup_dir = self
            .backup_dir
            .clone()
            .unwrap_or_else(|| data_dir.join("backups"));
        Ok(StoragePaths {
            users_file: data_dir.join(&self.users_file),
            notes_file: data_dir.join(&self.notes_file),
            backup_dir,
            data_dir,
        })
    }
}

/// Output tuning for the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Characters of content shown in list previews
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,

    #[serde(default = "default_max_search_results")]
    pub max_search_results: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview_length: default_preview_length(),
            max_search_results: default_max_search_results(),
        }
    }
}

/// Top level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotesConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub accounts: AccountPolicy,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
