//! # Counter Error Type
//!
//! Unified error type for the counter app.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Counter                            │
//! │                                                                         │
//! │  Startup                         Order loop                             │
//! │  ───────                         ──────────                             │
//! │  counter.toml ─┐                 operator typo ──► re-prompt (no error) │
//! │  catalog file ─┼──► AppError     save failure  ──► SaveReport, message  │
//! │  output dir   ─┘       │         stdin/stdout  ──► AppError::Io         │
//! │                        ▼                                                │
//! │                 main prints it, exit code 1                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operator mistakes never surface as `AppError`; they are answered with a
//! prompt. Only problems the operator cannot fix at the counter do.

use std::path::PathBuf;

use pressline_core::CoreError;
use pressline_store::StoreError;
use thiserror::Error;

/// Errors that stop the counter.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad command line.
    #[error("{0}")]
    Usage(String),

    /// The configuration is unreadable or inconsistent.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A file named by the configuration could not be read.
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    /// A pricing, catalog or order rule failed. The core message is shown as is.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// The output directory could not be prepared.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The operator's terminal went away mid-prompt.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn read(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        AppError::ReadFailed {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Result type for the counter app.
pub type AppResult<T> = Result<T, AppError>;
