//! Error types
//!
//! Every repository operation reports its outcome through one of these enums.
//! The `Display` text of each variant is the message shown to the user.

use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing a persisted document
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Outcomes of note repository operations other than success
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Note content cannot be empty")]
    EmptyContent,

    #[error("Invalid note number: {} (you have {len} note(s))", .index + 1)]
    NotFound { index: usize, len: usize },

    #[error("Note is locked; enter its key")]
    KeyRequired,

    #[error("Wrong key")]
    WrongKey,

    #[error("Failed to save notes: {0}")]
    SaveFailed(#[source] StorageError),

    #[error("Invalid import file: {0}")]
    Format(String),

    #[error("No notes to export")]
    NothingToExport,

    #[error("Failed to export notes to {}: {source}", .path.display())]
    ExportFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NoteError {
    /// True for the two lock gate failures
    pub fn is_lock_error(&self) -> bool {
        matches!(self, NoteError::KeyRequired | NoteError::WrongKey)
    }
}

impl From<StorageError> for NoteError {
    fn from(err: StorageError) -> Self {
        NoteError::SaveFailed(err)
    }
}

/// Outcomes of account operations other than success
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Username and password cannot be empty")]
    EmptyInput,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Username not found")]
    UnknownUser,

    #[error("Wrong password")]
    WrongPassword,

    #[error("Failed to save accounts: {0}")]
    SaveFailed(#[source] StorageError),
}

impl From<StorageError> for AccountError {
    fn from(err: StorageError) -> Self {
        AccountError::SaveFailed(err)
    }
}

/// Errors surfaced by the command layer
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Notes(#[from] NoteError),

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("{0}")]
    Cancelled(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
