//! # Store Error Types
//!
//! Error types for writing documents to disk.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the path and the document kind        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SaveReport (store.rs) ← One entry per document, never short-circuits  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Counter prints "System Error - Failed to save for printing."          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Document persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The output directory does not exist and could not be created.
    ///
    /// ## When This Occurs
    /// - Parent directory is read-only
    /// - A file already exists where the directory should be
    #[error("Output directory unavailable: {path}: {message}")]
    DirectoryUnavailable { path: PathBuf, message: String },

    /// Writing the document file failed.
    ///
    /// ## When This Occurs
    /// - Disk full
    /// - File permissions issue
    /// - File locked by the print spooler (Windows)
    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    /// A configured file name is empty or would escape the output directory.
    #[error("Invalid file name: '{0}'")]
    InvalidFileName(String),
}

impl StoreError {
    pub fn directory(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        StoreError::DirectoryUnavailable {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        StoreError::WriteFailed {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_include_path() {
        let err = StoreError::write(
            "/tmp/out/receipt.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Failed to write /tmp/out/receipt.txt: denied");

        let err = StoreError::InvalidFileName("../x".to_string());
        assert_eq!(err.to_string(), "Invalid file name: '../x'");
    }
}
