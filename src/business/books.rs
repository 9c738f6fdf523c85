//! Password book operations
//!
//! This module provides book metadata and content operations for the
//! PasswordManager.

use crate::database::PasswordBook;
use crate::error::{PassbookError, Result};
use crate::utils::{generate_unique_book_id, is_blank, join_entries, now_millis, split_entries};
use super::manager::PasswordManager;

/// Normalize entries the way they read back from a content file
fn normalize_entries<S: AsRef<str>>(entries: &[S]) -> Vec<String> {
    split_entries(&join_entries(entries))
}

/// Entry count as stored in book metadata
fn entry_count(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| PassbookError::TooManyEntries(len))
}

fn find_index(books: &[PasswordBook], id: &str) -> Result<usize> {
    books.iter()
        .position(|b| b.id == id)
        .ok_or_else(|| PassbookError::BookNotFound(id.to_string()))
}

fn ensure_name_free(books: &[PasswordBook], name: &str, except_id: Option<&str>) -> Result<()> {
    let taken = books.iter()
        .any(|b| b.name == name && Some(b.id.as_str()) != except_id);
    if taken {
        return Err(PassbookError::NameTaken(name.to_string()));
    }
    Ok(())
}

impl PasswordManager {
    /// Get all books
    pub fn list_books(&self) -> Result<Vec<PasswordBook>> {
        self.load_books()
    }

    /// Get books in a category (exact match)
    pub fn list_books_by_category(&self, category: &str) -> Result<Vec<PasswordBook>> {
        let books = self.load_books()?;
        Ok(books.into_iter().filter(|b| b.category == category).collect())
    }

    /// Get a book by ID
    pub fn get_book(&self, id: &str) -> Result<Option<PasswordBook>> {
        let books = self.load_books()?;
        Ok(books.into_iter().find(|b| b.id == id))
    }

    /// Get a book by exact name
    pub fn get_book_by_name(&self, name: &str) -> Result<Option<PasswordBook>> {
        let books = self.load_books()?;
        Ok(books.into_iter().find(|b| b.name == name))
    }

    /// Create a new book with initial content
    ///
    /// Blank entries are dropped; `password_count` is the number kept.
    /// Returns the new book ID.
    pub fn create_book<S: AsRef<str>>(&mut self, name: &str, category: &str, entries: &[S]) -> Result<String> {
        if is_blank(name) {
            return Err(PassbookError::EmptyName);
        }

        let mut books = self.load_books()?;
        ensure_name_free(&books, name, None)?;
        self.ensure_category_exists(category)?;

        let entries = normalize_entries(entries);
        let count = entry_count(entries.len())?;
        let id = generate_unique_book_id(books.iter().map(|b| b.id.as_str()));
        let path = self.content.allocate();
        self.content.write(&path, &entries)?;

        let now = now_millis();
        books.push(PasswordBook {
            id: id.clone(),
            name: name.to_string(),
            category: category.to_string(),
            file_path: path.to_string_lossy().to_string(),
            create_time: now,
            update_time: now,
            password_count: count,
        });

        if let Err(e) = self.save_books(&books) {
            if let Err(cleanup) = self.content.delete(&path) {
                tracing::warn!(path = %path.display(), error = %cleanup, "failed to remove content of unsaved book");
            }
            return Err(e);
        }

        tracing::info!(id = %id, name, category, count = entries.len(), "book created");
        Ok(id)
    }

    /// Replace a book's metadata
    ///
    /// Name and category are validated. The content path, entry count and
    /// creation time stay as stored; `update_time` is refreshed.
    pub fn update_metadata(&mut self, book: &PasswordBook) -> Result<()> {
        let mut books = self.load_books()?;
        let index = find_index(&books, &book.id)?;

        if is_blank(&book.name) {
            return Err(PassbookError::EmptyName);
        }
        ensure_name_free(&books, &book.name, Some(&book.id))?;
        self.ensure_category_exists(&book.category)?;

        let stored = &mut books[index];
        stored.name = book.name.clone();
        stored.category = book.category.clone();
        stored.update_time = now_millis();

        self.save_books(&books)
    }

    /// Replace a book's content
    pub fn update_content<S: AsRef<str>>(&mut self, id: &str, entries: &[S]) -> Result<()> {
        let mut books = self.load_books()?;
        let index = find_index(&books, id)?;

        let entries = normalize_entries(entries);
        let count = entry_count(entries.len())?;
        self.content.write(&books[index].content_path(), &entries)?;

        let book = &mut books[index];
        book.password_count = count;
        book.update_time = now_millis();
        self.save_books(&books)?;

        tracing::info!(id, count = entries.len(), "book content replaced");
        Ok(())
    }

    /// Save name, category and content of a book in one step
    ///
    /// Everything is validated before anything is written.
    pub fn update_book<S: AsRef<str>>(&mut self, id: &str, name: &str, category: &str, entries: &[S]) -> Result<()> {
        let mut books = self.load_books()?;
        let index = find_index(&books, id)?;

        if is_blank(name) {
            return Err(PassbookError::EmptyName);
        }
        ensure_name_free(&books, name, Some(id))?;
        self.ensure_category_exists(category)?;

        let entries = normalize_entries(entries);
        let count = entry_count(entries.len())?;
        self.content.write(&books[index].content_path(), &entries)?;

        let book = &mut books[index];
        book.name = name.to_string();
        book.category = category.to_string();
        book.password_count = count;
        book.update_time = now_millis();
        self.save_books(&books)?;

        tracing::info!(id, name, category, count = entries.len(), "book updated");
        Ok(())
    }

    /// Rename a book
    pub fn rename_book(&mut self, id: &str, new_name: &str) -> Result<()> {
        let mut books = self.load_books()?;
        let index = find_index(&books, id)?;

        if is_blank(new_name) {
            return Err(PassbookError::EmptyName);
        }
        ensure_name_free(&books, new_name, Some(id))?;

        let book = &mut books[index];
        book.name = new_name.to_string();
        book.update_time = now_millis();
        self.save_books(&books)
    }

    /// Move a book to another existing category
    pub fn change_book_category(&mut self, id: &str, category: &str) -> Result<()> {
        let mut books = self.load_books()?;
        let index = find_index(&books, id)?;
        self.ensure_category_exists(category)?;

        let book = &mut books[index];
        book.category = category.to_string();
        book.update_time = now_millis();
        self.save_books(&books)
    }

    /// Delete a book and its content file
    ///
    /// The content file is removed first. If that fails the metadata row is
    /// kept and the error is returned. A content file that is already gone
    /// does not block the delete.
    pub fn delete_book(&mut self, id: &str) -> Result<()> {
        let mut books = self.load_books()?;
        let index = find_index(&books, id)?;

        let path = books[index].content_path();
        if !self.content.delete(&path)? {
            tracing::warn!(id, path = %path.display(), "content file was already missing");
        }

        let removed = books.remove(index);
        self.save_books(&books)?;

        tracing::info!(id, name = %removed.name, "book deleted");
        Ok(())
    }

    /// Read a book's entries by ID
    pub fn read_entries(&self, id: &str) -> Result<Vec<String>> {
        let book = self.get_book(id)?
            .ok_or_else(|| PassbookError::BookNotFound(id.to_string()))?;
        self.read_content(&book)
    }

    /// Read a book's entries from its content file
    ///
    /// A missing file reads as an empty list.
    pub fn read_content(&self, book: &PasswordBook) -> Result<Vec<String>> {
        self.content.read(&book.content_path())
    }

    /// Move every book in category `from` to category `to`
    ///
    /// Used by category delete and rename; `to` is not validated here.
    pub(crate) fn reassign_category(&mut self, from: &str, to: &str) -> Result<usize> {
        let mut books = self.load_books()?;
        let now = now_millis();

        let mut moved = 0;
        for book in books.iter_mut().filter(|b| b.category == from) {
            book.category = to.to_string();
            book.update_time = now;
            moved += 1;
        }

        if moved > 0 {
            self.save_books(&books)?;
        }
        Ok(moved)
    }

    fn ensure_category_exists(&self, category: &str) -> Result<()> {
        if !self.has_category(category)? {
            return Err(PassbookError::InvalidCategory(category.to_string()));
        }
        Ok(())
    }
}
