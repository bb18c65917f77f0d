//! Unified application error type.
//! All modules (db, web, import, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

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

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Asset {0} not found")]
    AssetNotFound(i64),

    #[error("Note {0} not found")]
    NoteNotFound(i64),

    // ---------------------------
    // Import errors
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Rendering / export errors
    // ---------------------------
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for errors caused by the caller's input rather than by the store.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::InvalidColumn(_) | AppError::BadRequest(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::AssetNotFound(_) | AppError::NoteNotFound(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
