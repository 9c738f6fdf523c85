//! # Passbook Core
//!
//! Offline storage engine for password books: named, categorized lists of
//! text credentials.
//!
//! ## Features
//!
//! - Category management with a permanent default category
//! - Book metadata persisted as JSON in a key-value store (SQLite or memory)
//! - One plain-text content file per book
//! - Import from txt, csv and zip; export to txt, csv and zip
//!
//! ## Example
//!
//! ```no_run
//! use passbook::PasswordManager;
//! use std::path::Path;
//!
//! let mut manager = PasswordManager::open(Path::new("/path/to/data")).unwrap();
//! let id = manager.create_book("wifi-list", "default", &["pass1", "pass2"]).unwrap();
//!
//! for book in manager.list_books().unwrap() {
//!     println!("{}: {} entries", book.name, book.password_count);
//! }
//!
//! let book = manager.get_book(&id).unwrap().unwrap();
//! std::fs::write("wifi-list.csv", manager.export_csv(&book).unwrap()).unwrap();
//! ```

pub mod business;
pub mod config;
pub mod content;
pub mod database;
pub mod error;
pub mod transfer;
pub mod utils;

// Re-export main types
pub use error::{PassbookError, Result};
pub use config::PassbookConfig;
pub use database::{Collection, MemoryMetadataStore, MetadataStore, PasswordBook, SqliteMetadataStore};
pub use content::ContentStore;
pub use business::PasswordManager;
pub use transfer::FileFormat;

/// Name of the category that always exists
pub const DEFAULT_CATEGORY: &str = "default";

/// Metadata key holding the JSON array of category names
pub const KEY_CATEGORIES: &str = "categories";

/// Metadata key holding the JSON array of book metadata objects
pub const KEY_PASSWORD_BOOKS: &str = "password_books";

/// Metadata database filename
pub const METADATA_FILENAME: &str = "passbook.db";

/// Directory (below the data folder) holding book content files
pub const BOOKS_DIR: &str = "PasswordBooks";

/// Book ID length
pub const BOOK_ID_LENGTH: usize = 12;

/// Header line written to CSV exports
pub const CSV_HEADER: &str = "password";

/// Extension used for content files and zip entries
pub const TEXT_EXTENSION: &str = "txt";
