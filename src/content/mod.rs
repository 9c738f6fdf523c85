//! Content store
//!
//! Each book owns one UTF-8 text file holding its entries, one per line.
//! Only the manager addresses these files, through a book's `file_path`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use crate::error::Result;
use crate::utils::{generate_content_file_name, join_entries, split_entries};

/// Owner of the directory holding book content files
#[derive(Debug, Clone)]
pub struct ContentStore {
    /// Directory holding content files
    folder: PathBuf,
}

impl ContentStore {
    /// Create a content store rooted at `folder`, creating it if needed
    pub fn new(folder: &Path) -> Result<Self> {
        fs::create_dir_all(folder)?;
        Ok(Self {
            folder: folder.to_path_buf(),
        })
    }

    /// Get the content folder path
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Pick a fresh path for a new book's content
    pub fn allocate(&self) -> PathBuf {
        loop {
            let path = self.folder.join(generate_content_file_name());
            if !path.exists() {
                return path;
            }
        }
    }

    /// Write entries, one per line with a trailing newline, replacing any
    /// existing content at `path`
    ///
    /// The data is written to a temporary file in the same directory and
    /// then moved over the target, so readers never see a partial file.
    pub fn write<S: AsRef<str>>(&self, path: &Path, entries: &[S]) -> Result<()> {
        let dir = path.parent().unwrap_or(&self.folder);
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(join_entries(entries).as_bytes())?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| e.error)?;

        tracing::debug!(path = %path.display(), count = entries.len(), "content written");
        Ok(())
    }

    /// Read entries: split on line breaks, trimmed, blank lines dropped
    ///
    /// A missing file reads as an empty list.
    pub fn read(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to read content");
                return Err(e.into());
            }
        };

        let entries = split_entries(&String::from_utf8_lossy(&bytes));
        tracing::debug!(path = %path.display(), count = entries.len(), "content read");
        Ok(entries)
    }

    /// Remove the content file
    ///
    /// Returns `false` if it was already absent.
    pub fn delete(&self, path: &Path) -> Result<bool> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to delete content");
                Err(e.into())
            }
        }
    }
}
