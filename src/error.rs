//! Error types for Passbook Core

use thiserror::Error;

/// Main error type for password book operations
#[derive(Error, Debug)]
pub enum PassbookError {
    /// Book or category name is empty or blank
    #[error("Name must not be empty")]
    EmptyName,

    /// Another book already uses this name
    #[error("Name already taken: {0}")]
    NameTaken(String),

    /// Book not found
    #[error("Password book not found: {0}")]
    BookNotFound(String),

    /// Category not found
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Category already exists
    #[error("Category already exists: {0}")]
    CategoryExists(String),

    /// The default category cannot be deleted or renamed
    #[error("The default category cannot be modified")]
    DefaultCategory,

    /// A book was assigned a category that does not exist
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Entry count does not fit the stored counter
    #[error("Too many entries: {0}")]
    TooManyEntries(usize),

    /// Persisted metadata could not be parsed
    #[error("Corrupt data in '{key}': {details}")]
    CorruptData { key: String, details: String },

    /// Metadata store operation failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Archive could not be read or written
    #[error("Archive error: {0}")]
    Archive(String),

    /// Metadata could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for PassbookError {
    fn from(err: rusqlite::Error) -> Self {
        PassbookError::Storage(err.to_string())
    }
}

impl From<zip::result::ZipError> for PassbookError {
    fn from(err: zip::result::ZipError) -> Self {
        PassbookError::Archive(err.to_string())
    }
}

impl From<serde_json::Error> for PassbookError {
    fn from(err: serde_json::Error) -> Self {
        PassbookError::Serialization(err.to_string())
    }
}

impl PassbookError {
    /// True for refusals caused by caller input rather than storage failures
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PassbookError::EmptyName
                | PassbookError::NameTaken(_)
                | PassbookError::BookNotFound(_)
                | PassbookError::CategoryNotFound(_)
                | PassbookError::CategoryExists(_)
                | PassbookError::DefaultCategory
                | PassbookError::InvalidCategory(_)
        )
    }
}

/// Result type alias for password book operations
pub type Result<T> = std::result::Result<T, PassbookError>;
