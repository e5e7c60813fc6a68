//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::core::validate::ValidationError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp: {0} (expected YYYY-MM-DDTHH:MM)")]
    InvalidTimestamp(String),

    // ---------------------------
    // Validation (local, blocks submission, never reaches the store)
    // ---------------------------
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // ---------------------------
    // Store-originated, surfaced as transient conditions
    // ---------------------------
    #[error("Failed to load records: {0}")]
    LoadFailed(String),

    #[error("Failed to save record: {0}")]
    SaveFailed(String),

    #[error("Failed to delete record: {0}")]
    DeleteFailed(String),

    // ---------------------------
    // Bulk-delete gate (local, no store call made)
    // ---------------------------
    #[error("Wrong confirmation code. Nothing was deleted.")]
    GuardDenied,

    // ---------------------------
    // Lookup / selection
    // ---------------------------
    #[error("No record found with id {0}")]
    RecordNotFound(i64),

    #[error("No technician given and none remembered. Pass a name or run `list NAME` first.")]
    NoTechnician,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
