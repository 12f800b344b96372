//! # Counter Configuration
//!
//! Configuration management for the counter app.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PRESSLINE_OUTPUT_DIR=/var/spool/pressline                          │
//! │     PRESSLINE_CATALOG=/etc/pressline/prices.toml                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/pressline/counter.toml (Linux)                           │
//! │     ~/Library/Application Support/com.pressline.counter/ (macOS)       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     ./receipt.txt, ./tags.txt, built-in price list                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # counter.toml
//! [output]
//! output_dir = "/var/spool/pressline"
//! receipt_file = "receipt.txt"
//! tags_file = "tags.txt"
//! create_dirs = true
//!
//! [catalog]
//! path = "/etc/pressline/prices.toml"   # .toml or .json
//!
//! [counter]
//! stage_delay_ms = 1000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use pressline_core::Catalog;
use pressline_store::StoreConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

// =============================================================================
// Catalog Settings
// =============================================================================

/// Where the price list comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Price list file (`.json` or `.toml`). Unset means the built-in list.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Supported catalog file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(CatalogFormat::Json)
        } else if ext.eq_ignore_ascii_case("toml") {
            Some(CatalogFormat::Toml)
        } else {
            None
        }
    }
}

// =============================================================================
// Counter Settings
// =============================================================================

/// Behaviour of the order loop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSettings {
    /// Pause between the payment and printing messages (milliseconds).
    /// Gives the operator time to read each stage. 0 disables pausing.
    #[serde(default)]
    pub stage_delay_ms: u64,
}

impl CounterSettings {
    pub fn stage_delay(&self) -> Duration {
        Duration::from_millis(self.stage_delay_ms)
    }
}

// =============================================================================
// Main Counter Configuration
// =============================================================================

/// Complete counter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Where receipts and tags are written.
    #[serde(default)]
    pub output: StoreConfig,

    /// Price list source.
    #[serde(default)]
    pub catalog: CatalogSettings,

    /// Order loop behaviour.
    #[serde(default)]
    pub counter: CounterSettings,
}

impl CounterConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (counter.toml)
    /// 3. Environment variables
    ///
    /// A file named explicitly with `--config` must exist; the default
    /// location is optional.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let explicit = config_path.is_some();
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading counter config from file");
                let contents =
                    std::fs::read_to_string(&path).map_err(|e| AppError::read(&path, e))?;
                config = Self::from_toml(&contents)?;
            } else if explicit {
                return Err(AppError::read(
                    &path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
                ));
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    pub fn from_toml(contents: &str) -> AppResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        self.output
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))?;

        if let Some(ref path) = self.catalog.path {
            if CatalogFormat::from_path(path).is_none() {
                return Err(AppError::Config(format!(
                    "Catalog file must end in .json or .toml, got: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup.
    ///
    /// ## Recognised Keys
    /// - `PRESSLINE_OUTPUT_DIR`
    /// - `PRESSLINE_RECEIPT_FILE`
    /// - `PRESSLINE_TAGS_FILE`
    /// - `PRESSLINE_CATALOG`
    /// - `PRESSLINE_STAGE_DELAY_MS`
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("PRESSLINE_OUTPUT_DIR") {
            debug!(dir = %dir, "Overriding output directory from environment");
            self.output.output_dir = PathBuf::from(dir);
        }

        if let Some(name) = lookup("PRESSLINE_RECEIPT_FILE") {
            self.output.receipt_file = name;
        }

        if let Some(name) = lookup("PRESSLINE_TAGS_FILE") {
            self.output.tags_file = name;
        }

        if let Some(path) = lookup("PRESSLINE_CATALOG") {
            debug!(path = %path, "Overriding catalog file from environment");
            self.catalog.path = Some(PathBuf::from(path));
        }

        if let Some(delay) = lookup("PRESSLINE_STAGE_DELAY_MS") {
            match delay.parse::<u64>() {
                Ok(ms) => self.counter.stage_delay_ms = ms,
                Err(_) => warn!(value = %delay, "Ignoring invalid PRESSLINE_STAGE_DELAY_MS"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "pressline", "counter")
            .map(|dirs| dirs.config_dir().join("counter.toml"))
    }

    /// Loads the configured price list, or the built-in one.
    pub fn load_catalog(&self) -> AppResult<Catalog> {
        let Some(ref path) = self.catalog.path else {
            debug!("Using built-in catalog");
            return Ok(Catalog::default());
        };

        let format = CatalogFormat::from_path(path).ok_or_else(|| {
            AppError::Config(format!("Unsupported catalog file: {}", path.display()))
        })?;
        let contents = std::fs::read_to_string(path).map_err(|e| AppError::read(path, e))?;

        let catalog = match format {
            CatalogFormat::Json => Catalog::from_json(&contents)?,
            CatalogFormat::Toml => Catalog::from_toml(&contents)?,
        };

        info!(?path, products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
