//! Unified application error type.
//! All modules (config, core, store, cli) return AppError to keep the error
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
    // Config errors
    // ---------------------------
    #[error("Settings file not found: {0}")]
    ConfigMissing(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid month: {0} (expected 0-12)")]
    InvalidMonth(u32),

    // ---------------------------
    // Document store
    // ---------------------------
    #[error("Store error: {0}")]
    Store(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Store(e.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
