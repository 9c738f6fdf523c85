//! Import of txt, csv and zip files

use std::fs;
use std::path::Path;
use crate::business::PasswordManager;
use crate::error::{PassbookError, Result};
use super::FileFormat;
use super::formats::{parse_csv, parse_txt, read_zip};

impl PasswordManager {
    /// Create a book from plain text bytes, one entry per line
    pub fn import_txt(&mut self, bytes: &[u8], name: &str, category: &str) -> Result<String> {
        let entries = parse_txt(bytes);
        let id = self.create_book(name, category, &entries)?;
        tracing::info!(id = %id, format = "txt", count = entries.len(), "book imported");
        Ok(id)
    }

    /// Create a book from CSV bytes, taking the first field of every line
    pub fn import_csv(&mut self, bytes: &[u8], name: &str, category: &str) -> Result<String> {
        let entries = parse_csv(bytes, self.config.skip_csv_header);
        let id = self.create_book(name, category, &entries)?;
        tracing::info!(id = %id, format = "csv", count = entries.len(), "book imported");
        Ok(id)
    }

    /// Create one book per text file in a ZIP archive
    ///
    /// Every book goes to the default category and is named after its entry
    /// with the extension removed. Entries that cannot become a book (blank
    /// or already used name) are skipped. Returns the number of books
    /// created.
    pub fn import_zip(&mut self, bytes: &[u8]) -> Result<usize> {
        let archive = read_zip(bytes).inspect_err(|e| {
            tracing::error!(error = %e, "failed to read zip archive");
        })?;

        let category = self.config.default_category.clone();
        let mut created = 0;
        for entry in archive {
            match self.create_book(&entry.name, &category, &entry.entries) {
                Ok(_) => created += 1,
                Err(e) if e.is_validation() => {
                    tracing::warn!(name = %entry.name, error = %e, "skipped zip entry");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(created, format = "zip", "archive imported");
        Ok(created)
    }

    /// Import a txt or csv file as one book, choosing the parser by extension
    pub fn import_file(&mut self, path: &Path, name: &str, category: &str) -> Result<String> {
        let bytes = fs::read(path)?;
        match FileFormat::from_path(path) {
            Some(FileFormat::Csv) => self.import_csv(&bytes, name, category),
            Some(FileFormat::Txt) | None => self.import_txt(&bytes, name, category),
            Some(FileFormat::Zip) => Err(PassbookError::Archive(format!(
                "{} holds several books; use import_zip_file",
                path.display()
            ))),
        }
    }

    /// Import every text file of a ZIP archive on disk
    pub fn import_zip_file(&mut self, path: &Path) -> Result<usize> {
        let bytes = fs::read(path)?;
        self.import_zip(&bytes)
    }
}
