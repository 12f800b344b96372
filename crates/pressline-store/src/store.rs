//! # Document Store
//!
//! Writes the rendered documents of an order to the output directory.
//!
//! ## Output Directory
//! ```text
//! <output_dir>/
//! ├── receipt.txt   ← overwritten by every order
//! └── tags.txt      ← overwritten by every order
//! ```
//!
//! Only the most recent order is kept on disk. The print spooler watches
//! these two files; earlier orders live on paper.
//!
//! ## Usage
//! ```rust,no_run
//! use pressline_core::DocumentKind;
//! use pressline_store::{DocumentStore, StoreConfig};
//!
//! let config = StoreConfig::new("/var/spool/pressline")
//!     .receipt_file("last-receipt.txt")
//!     .create_dirs(true);
//! let store = DocumentStore::open(config)?;
//! store.save(DocumentKind::Receipt, "+----+\n")?;
//! # Ok::<(), pressline_store::StoreError>(())
//! ```

use std::fs;
use std::path::{Component, Path, PathBuf};

use pressline_core::{DocumentKind, OrderDocuments};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};

/// Default receipt file name.
pub const DEFAULT_RECEIPT_FILE: &str = "receipt.txt";

/// Default tag sheet file name.
pub const DEFAULT_TAGS_FILE: &str = "tags.txt";

// =============================================================================
// Configuration
// =============================================================================

/// Where documents are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the document files.
    pub output_dir: PathBuf,

    /// File name of the receipt, relative to `output_dir`.
    pub receipt_file: String,

    /// File name of the tag sheet, relative to `output_dir`.
    pub tags_file: String,

    /// Create `output_dir` if it is missing.
    pub create_dirs: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            output_dir: PathBuf::from("."),
            receipt_file: DEFAULT_RECEIPT_FILE.to_string(),
            tags_file: DEFAULT_TAGS_FILE.to_string(),
            create_dirs: true,
        }
    }
}

impl StoreConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            output_dir: output_dir.into(),
            ..StoreConfig::default()
        }
    }

    pub fn receipt_file(mut self, name: impl Into<String>) -> Self {
        self.receipt_file = name.into();
        self
    }

    pub fn tags_file(mut self, name: impl Into<String>) -> Self {
        self.tags_file = name.into();
        self
    }

    pub fn create_dirs(mut self, create: bool) -> Self {
        self.create_dirs = create;
        self
    }

    /// Checks that both file names are plain names inside `output_dir` and
    /// that they do not collide.
    pub fn validate(&self) -> StoreResult<()> {
        validate_file_name(&self.receipt_file)?;
        validate_file_name(&self.tags_file)?;

        if self.receipt_file == self.tags_file {
            return Err(StoreError::InvalidFileName(self.tags_file.clone()));
        }

        Ok(())
    }

    pub fn file_name(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::Receipt => &self.receipt_file,
            DocumentKind::Tags => &self.tags_file,
        }
    }
}

fn validate_file_name(name: &str) -> StoreResult<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(StoreError::InvalidFileName(name.to_string())),
    }
}

// =============================================================================
// Save Report
// =============================================================================

/// Outcome of saving every document of one order.
#[derive(Debug, Default)]
pub struct SaveReport {
    pub saved: Vec<(DocumentKind, PathBuf)>,
    pub failed: Vec<(DocumentKind, StoreError)>,
}

impl SaveReport {
    /// True when every document reached disk.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn path_of(&self, kind: DocumentKind) -> Option<&Path> {
        self.saved
            .iter()
            .find(|(saved, _)| *saved == kind)
            .map(|(_, path)| path.as_path())
    }
}

// =============================================================================
// Document Store
// =============================================================================

/// Writes documents into a configured directory.
///
/// Each save replaces the previous file of the same kind in full.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    config: StoreConfig,
}

impl DocumentStore {
    /// Validates the configuration and prepares the output directory.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        config.validate()?;

        let dir = &config.output_dir;
        if !dir.is_dir() {
            if !config.create_dirs {
                return Err(StoreError::directory(
                    dir,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "directory does not exist"),
                ));
            }
            fs::create_dir_all(dir).map_err(|e| StoreError::directory(dir, e))?;
            info!(path = %dir.display(), "Created output directory");
        }

        debug!(
            path = %dir.display(),
            receipt = %config.receipt_file,
            tags = %config.tags_file,
            "Document store ready"
        );

        Ok(DocumentStore { config })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn path_for(&self, kind: DocumentKind) -> PathBuf {
        self.config.output_dir.join(self.config.file_name(kind))
    }

    /// Writes one document, replacing any previous contents.
    pub fn save(&self, kind: DocumentKind, contents: &str) -> StoreResult<PathBuf> {
        let path = self.path_for(kind);

        fs::write(&path, contents).map_err(|e| StoreError::write(&path, e))?;

        debug!(
            kind = kind.label(),
            path = %path.display(),
            bytes = contents.len(),
            "Saved document"
        );
        Ok(path)
    }

    /// Writes every document of an order.
    ///
    /// A failure on one document does not stop the others from being
    /// written; all outcomes are collected in the report.
    pub fn save_all(&self, documents: &OrderDocuments) -> SaveReport {
        let mut report = SaveReport::default();

        for kind in DocumentKind::ALL {
            match self.save(kind, &documents.get(kind).render()) {
                Ok(path) => report.saved.push((kind, path)),
                Err(err) => {
                    warn!(
                        order = %documents.order_number,
                        kind = kind.label(),
                        error = %err,
                        "Failed to save document"
                    );
                    report.failed.push((kind, err));
                }
            }
        }

        if report.is_complete() {
            info!(order = %documents.order_number, "Saved order documents");
        }

        report
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
