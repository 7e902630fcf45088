//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
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
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: '{0}' (expected YYYY-MM-DD HH:MM:SS)")]
    InvalidDate(String),

    #[error("Invalid duration: '{0}' (expected a whole number of minutes)")]
    InvalidDuration(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No entry found with id {0}")]
    NotFound(i64),

    #[error("End time {end} is before start time {start}")]
    InvalidRange { start: String, end: String },

    #[error("Activity name cannot be empty")]
    EmptyName,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Errors caused by user input: the menu reports them and keeps going.
    /// Everything else (storage, I/O, config) terminates the program.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::InvalidDuration(_)
                | AppError::NotFound(_)
                | AppError::InvalidRange { .. }
                | AppError::EmptyName
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
