//! Main PasswordManager API
//!
//! This module provides the primary interface for a folder of password
//! books: the metadata store, the content store and the configuration
//! that binds them.

use std::fs;
use std::path::{Path, PathBuf};
use crate::config::PassbookConfig;
use crate::content::ContentStore;
use crate::database::{Collection, MetadataStore, PasswordBook, SqliteMetadataStore, load_collection, save_collection};
use crate::error::{PassbookError, Result};
use crate::{KEY_CATEGORIES, KEY_PASSWORD_BOOKS};

/// Password book manager
///
/// All mutations are read-modify-write cycles over the stored collections.
/// They take `&mut self`, so one manager is one writer; share it across
/// threads behind a `Mutex`.
pub struct PasswordManager {
    /// Data folder (metadata database and content directory)
    pub(crate) folder: PathBuf,
    /// Engine configuration
    pub(crate) config: PassbookConfig,
    /// Metadata persistence
    pub(crate) store: Box<dyn MetadataStore + Send>,
    /// Content file persistence
    pub(crate) content: ContentStore,
}

impl PasswordManager {
    /// Open the manager for a data folder using the default configuration
    pub fn open(folder: &Path) -> Result<Self> {
        Self::open_with_config(folder, PassbookConfig::default())
    }

    /// Open the manager for a data folder
    ///
    /// Creates the folder, the SQLite metadata file and the content
    /// directory as needed.
    pub fn open_with_config(folder: &Path, config: PassbookConfig) -> Result<Self> {
        fs::create_dir_all(folder)?;

        let store = SqliteMetadataStore::open(&folder.join(&config.metadata_file))?;
        let content = ContentStore::new(&folder.join(&config.books_dir))?;

        let mut manager = Self {
            folder: folder.to_path_buf(),
            config,
            store: Box::new(store),
            content,
        };
        manager.init()?;

        tracing::info!(folder = %manager.folder.display(), "password manager opened");
        Ok(manager)
    }

    /// Build a manager from an explicit metadata store
    ///
    /// Content files go to `<folder>/<books_dir>`.
    pub fn with_store(
        folder: &Path,
        config: PassbookConfig,
        store: Box<dyn MetadataStore + Send>,
    ) -> Result<Self> {
        let content = ContentStore::new(&folder.join(&config.books_dir))?;

        let mut manager = Self {
            folder: folder.to_path_buf(),
            config,
            store,
            content,
        };
        manager.init()?;
        Ok(manager)
    }

    /// Self-heal the default category
    ///
    /// Corrupt category data is left in place for the caller to inspect or
    /// reset; every category operation reports it.
    fn init(&mut self) -> Result<()> {
        match self.ensure_default_category() {
            Ok(_) => Ok(()),
            Err(PassbookError::CorruptData { key, details }) => {
                tracing::error!(key = %key, details = %details, "category data is corrupt; default category not checked");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Get the data folder path
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Get the configuration
    pub fn config(&self) -> &PassbookConfig {
        &self.config
    }

    /// Get the content store
    pub fn content_store(&self) -> &ContentStore {
        &self.content
    }

    /// Name of the permanent default category
    pub fn default_category(&self) -> &str {
        &self.config.default_category
    }

    /// Load state of the category collection
    pub fn categories_state(&self) -> Result<Collection<Vec<String>>> {
        load_collection(&*self.store, KEY_CATEGORIES)
    }

    /// Load state of the book collection
    pub fn books_state(&self) -> Result<Collection<Vec<PasswordBook>>> {
        load_collection(&*self.store, KEY_PASSWORD_BOOKS)
    }

    /// Discard stored categories, leaving only the default category
    ///
    /// Books keep their category field; the ones pointing at a discarded
    /// category are moved to the default category.
    pub fn reset_categories(&mut self) -> Result<()> {
        let default = self.config.default_category.clone();
        self.save_categories(&[default.clone()])?;

        if let Collection::Loaded(mut books) = self.books_state()? {
            let mut moved = 0;
            for book in books.iter_mut().filter(|b| b.category != default) {
                book.category = default.clone();
                moved += 1;
            }
            if moved > 0 {
                self.save_books(&books)?;
            }
        }

        tracing::warn!("category list reset to the default category");
        Ok(())
    }

    /// Discard the stored book collection
    ///
    /// Content files are not touched; they are unreachable afterwards.
    pub fn reset_books(&mut self) -> Result<()> {
        self.save_books(&[])?;
        tracing::warn!("book collection reset");
        Ok(())
    }

    pub(crate) fn load_categories(&self) -> Result<Vec<String>> {
        self.categories_state()?.into_result(KEY_CATEGORIES)
    }

    pub(crate) fn save_categories(&mut self, categories: &[String]) -> Result<()> {
        save_collection(&mut *self.store, KEY_CATEGORIES, categories)
    }

    pub(crate) fn load_books(&self) -> Result<Vec<PasswordBook>> {
        self.books_state()?.into_result(KEY_PASSWORD_BOOKS)
    }

    pub(crate) fn save_books(&mut self, books: &[PasswordBook]) -> Result<()> {
        save_collection(&mut *self.store, KEY_PASSWORD_BOOKS, books)
    }
}
