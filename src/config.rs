//! Engine configuration
//!
//! Every setting has one declared type. Persisted configuration is checked
//! once, when it is loaded; callers never see a half-typed value.

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::{PassbookError, Result};
use crate::{BOOKS_DIR, DEFAULT_CATEGORY, METADATA_FILENAME};

/// Configuration for a [`crate::PasswordManager`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassbookConfig {
    /// Name of the permanent category
    pub default_category: String,
    /// Directory, relative to the data folder, for content files
    pub books_dir: String,
    /// Metadata database file, relative to the data folder
    pub metadata_file: String,
    /// Skip a leading `password` header row when importing CSV
    pub skip_csv_header: bool,
}

impl Default for PassbookConfig {
    fn default() -> Self {
        Self {
            default_category: DEFAULT_CATEGORY.to_string(),
            books_dir: BOOKS_DIR.to_string(),
            metadata_file: METADATA_FILENAME.to_string(),
            skip_csv_header: true,
        }
    }
}

impl PassbookConfig {
    /// Load configuration from a JSON file
    ///
    /// A missing file yields the defaults. Missing keys take their default
    /// value; a key holding the wrong type is a `CorruptData` error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "invalid configuration file");
            PassbookError::CorruptData {
                key: path.display().to_string(),
                details: e.to_string(),
            }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Write configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.default_category.trim().is_empty() {
            return Err(PassbookError::EmptyName);
        }
        if self.books_dir.trim().is_empty() || self.metadata_file.trim().is_empty() {
            return Err(PassbookError::CorruptData {
                key: "config".to_string(),
                details: "paths must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
