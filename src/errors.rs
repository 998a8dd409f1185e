//! Unified application error type.
//! Store, gatekeeper session, sync and CLI all return AppError so failures
//! can be caught at one boundary and turned into a user-facing message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / permissions
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Scan input
    // ---------------------------
    #[error("Invalid scan event: {0}")]
    InvalidScan(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    // ---------------------------
    // Remote sync / notifications
    // ---------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Notification error: {0}")]
    Notification(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Serialization / export
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}

impl AppError {
    /// True for the StorageError family (migration, read and write failures).
    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Storage(_) | AppError::Migration(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
