//! Export to txt, csv and zip files

use std::fs;
use std::path::Path;
use crate::business::PasswordManager;
use crate::database::PasswordBook;
use crate::error::Result;
use super::FileFormat;
use super::formats::{ArchiveEntry, render_csv, render_txt, write_zip};

impl PasswordManager {
    /// Export a book's current content as plain text
    pub fn export_txt(&self, book: &PasswordBook) -> Result<Vec<u8>> {
        let entries = self.read_content(book)?;
        Ok(render_txt(&entries))
    }

    /// Export a book's current content as CSV with a `password` header
    pub fn export_csv(&self, book: &PasswordBook) -> Result<Vec<u8>> {
        let entries = self.read_content(book)?;
        Ok(render_csv(&entries))
    }

    /// Export books as a ZIP archive with one `<name>.txt` entry each
    pub fn export_zip(&self, books: &[PasswordBook]) -> Result<Vec<u8>> {
        let mut items = Vec::with_capacity(books.len());
        for book in books {
            items.push(ArchiveEntry {
                name: book.name.clone(),
                entries: self.read_content(book)?,
            });
        }

        let bytes = write_zip(&items)?;
        tracing::info!(books = books.len(), size = bytes.len(), "zip archive exported");
        Ok(bytes)
    }

    /// Export every stored book as a ZIP archive
    pub fn export_all_zip(&self) -> Result<Vec<u8>> {
        let books = self.list_books()?;
        self.export_zip(&books)
    }

    /// Export one book to a file in the given format
    ///
    /// `FileFormat::Zip` writes an archive holding just this book.
    pub fn export_to_file(&self, book: &PasswordBook, format: FileFormat, path: &Path) -> Result<()> {
        let bytes = match format {
            FileFormat::Txt => self.export_txt(book)?,
            FileFormat::Csv => self.export_csv(book)?,
            FileFormat::Zip => self.export_zip(std::slice::from_ref(book))?,
        };
        write_output(path, &bytes)?;
        tracing::info!(id = %book.id, format = %format, path = %path.display(), "book exported");
        Ok(())
    }

    /// Export books to a ZIP archive on disk
    pub fn export_zip_file(&self, books: &[PasswordBook], path: &Path) -> Result<()> {
        let bytes = self.export_zip(books)?;
        write_output(path, &bytes)
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes).inspect_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to write export");
    })?;
    Ok(())
}
