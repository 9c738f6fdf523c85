//! Category operations
//!
//! This module provides category management operations for the
//! PasswordManager. The default category always exists and can be neither
//! deleted nor renamed.

use crate::error::{PassbookError, Result};
use crate::utils::is_blank;
use super::manager::PasswordManager;

impl PasswordManager {
    /// Insert the default category if it is missing
    ///
    /// Returns `true` if the category list was changed. Safe to call any
    /// number of times.
    pub fn ensure_default_category(&mut self) -> Result<bool> {
        let mut categories = self.load_categories()?;
        if categories.iter().any(|c| c == &self.config.default_category) {
            return Ok(false);
        }

        categories.push(self.config.default_category.clone());
        self.save_categories(&categories)?;
        tracing::info!(category = %self.config.default_category, "default category created");
        Ok(true)
    }

    /// Get all categories in insertion order
    pub fn list_categories(&self) -> Result<Vec<String>> {
        self.load_categories()
    }

    /// Check whether a category exists
    pub fn has_category(&self, name: &str) -> Result<bool> {
        Ok(self.load_categories()?.iter().any(|c| c == name))
    }

    /// Add a new category
    pub fn add_category(&mut self, name: &str) -> Result<()> {
        if is_blank(name) {
            return Err(PassbookError::EmptyName);
        }
        let name = name.trim();

        let mut categories = self.load_categories()?;
        if categories.iter().any(|c| c == name) {
            return Err(PassbookError::CategoryExists(name.to_string()));
        }

        categories.push(name.to_string());
        self.save_categories(&categories)?;

        tracing::info!(category = name, "category added");
        Ok(())
    }

    /// Delete a category, moving its books to the default category
    ///
    /// Returns the number of books moved.
    pub fn delete_category(&mut self, name: &str) -> Result<usize> {
        if name == self.config.default_category {
            tracing::warn!(category = name, "refused to delete the default category");
            return Err(PassbookError::DefaultCategory);
        }

        let mut categories = self.load_categories()?;
        let Some(index) = categories.iter().position(|c| c == name) else {
            return Err(PassbookError::CategoryNotFound(name.to_string()));
        };

        let default = self.config.default_category.clone();
        let moved = self.reassign_category(name, &default)?;

        categories.remove(index);
        self.save_categories(&categories)?;

        tracing::info!(category = name, moved, "category deleted");
        Ok(moved)
    }

    /// Rename a category and every book that references it
    ///
    /// The category keeps its position in the list. Returns the number of
    /// books updated.
    pub fn rename_category(&mut self, old_name: &str, new_name: &str) -> Result<usize> {
        if old_name == self.config.default_category {
            tracing::warn!(category = old_name, "refused to rename the default category");
            return Err(PassbookError::DefaultCategory);
        }
        if is_blank(new_name) {
            return Err(PassbookError::EmptyName);
        }
        let new_name = new_name.trim();

        let mut categories = self.load_categories()?;
        let Some(index) = categories.iter().position(|c| c == old_name) else {
            return Err(PassbookError::CategoryNotFound(old_name.to_string()));
        };
        if categories.iter().any(|c| c == new_name) {
            return Err(PassbookError::CategoryExists(new_name.to_string()));
        }

        let moved = self.reassign_category(old_name, new_name)?;

        categories[index] = new_name.to_string();
        if let Err(e) = self.save_categories(&categories) {
            // Books must not reference a category that was never stored
            if let Err(undo) = self.reassign_category(new_name, old_name) {
                tracing::error!(from = new_name, to = old_name, error = %undo, "failed to move books back after rename");
            }
            return Err(e);
        }

        tracing::info!(from = old_name, to = new_name, moved, "category renamed");
        Ok(moved)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tempfile::TempDir;
    use crate::business::PasswordManager;
    use crate::business::manager::tests::create_test_manager;
    use crate::database::{MemoryMetadataStore, MetadataStore};
    use crate::{KEY_CATEGORIES, PassbookConfig, PassbookError, Result};

    /// Memory store whose category writes can be switched off
    struct LockedCategoriesStore {
        inner: MemoryMetadataStore,
        locked: Arc<AtomicBool>,
    }

    impl MetadataStore for LockedCategoriesStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            if key == KEY_CATEGORIES && self.locked.load(Ordering::SeqCst) {
                return Err(PassbookError::Storage("categories are read-only".to_string()));
            }
            self.inner.set(key, value)
        }
    }

    fn manager_with_lockable_categories() -> (PasswordManager, Arc<AtomicBool>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let locked = Arc::new(AtomicBool::new(false));
        let store = LockedCategoriesStore {
            inner: MemoryMetadataStore::new(),
            locked: Arc::clone(&locked),
        };
        let manager = PasswordManager::with_store(
            temp_dir.path(),
            PassbookConfig::default(),
            Box::new(store),
        ).unwrap();
        (manager, locked, temp_dir)
    }

    #[test]
    fn test_default_category_exists() {
        let (manager, _temp) = create_test_manager();
        assert_eq!(manager.list_categories().unwrap(), vec!["default"]);
        assert!(manager.has_category("default").unwrap());
    }

    #[test]
    fn test_ensure_default_category_idempotent() {
        let (mut manager, _temp) = create_test_manager();
        assert!(!manager.ensure_default_category().unwrap());
        assert!(!manager.ensure_default_category().unwrap());
        assert_eq!(manager.list_categories().unwrap(), vec!["default"]);
    }

    #[test]
    fn test_ensure_default_category_heals_missing() {
        let (mut manager, _temp) = create_test_manager();
        manager.save_categories(&["home".to_string()]).unwrap();

        assert!(manager.ensure_default_category().unwrap());
        assert_eq!(manager.list_categories().unwrap(), vec!["home", "default"]);
    }

    #[test]
    fn test_add_category_keeps_order() {
        let (mut manager, _temp) = create_test_manager();
        manager.add_category("home").unwrap();
        manager.add_category("office").unwrap();
        assert_eq!(manager.list_categories().unwrap(), vec!["default", "home", "office"]);
    }

    #[test]
    fn test_add_category_rejects() {
        let (mut manager, _temp) = create_test_manager();
        manager.add_category("home").unwrap();

        assert!(matches!(manager.add_category("home"), Err(PassbookError::CategoryExists(_))));
        assert!(matches!(manager.add_category(""), Err(PassbookError::EmptyName)));
        assert!(matches!(manager.add_category("   "), Err(PassbookError::EmptyName)));
        assert!(matches!(manager.add_category("default"), Err(PassbookError::CategoryExists(_))));
        assert_eq!(manager.list_categories().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_default_category_fails() {
        let (mut manager, _temp) = create_test_manager();
        assert!(matches!(manager.delete_category("default"), Err(PassbookError::DefaultCategory)));
        assert!(manager.has_category("default").unwrap());
    }

    #[test]
    fn test_delete_missing_category() {
        let (mut manager, _temp) = create_test_manager();
        assert!(matches!(manager.delete_category("nope"), Err(PassbookError::CategoryNotFound(_))));
    }

    #[test]
    fn test_delete_category_moves_books() {
        let (mut manager, _temp) = create_test_manager();
        manager.add_category("cafe").unwrap();
        let a = manager.create_book("latte", "cafe", &["a"]).unwrap();
        let b = manager.create_book("mocha", "cafe", &["b"]).unwrap();
        let c = manager.create_book("home", "default", &["c"]).unwrap();

        assert_eq!(manager.delete_category("cafe").unwrap(), 2);

        assert!(!manager.has_category("cafe").unwrap());
        for id in [&a, &b, &c] {
            assert_eq!(manager.get_book(id).unwrap().unwrap().category, "default");
        }
        assert_eq!(manager.list_books_by_category("default").unwrap().len(), 3);
    }

    #[test]
    fn test_rename_category_cascades() {
        let (mut manager, _temp) = create_test_manager();
        manager.add_category("A").unwrap();
        manager.add_category("C").unwrap();
        let id = manager.create_book("book", "A", &["x"]).unwrap();

        assert_eq!(manager.rename_category("A", "B").unwrap(), 1);

        assert_eq!(manager.list_categories().unwrap(), vec!["default", "B", "C"]);
        assert_eq!(manager.get_book(&id).unwrap().unwrap().category, "B");
    }

    #[test]
    fn test_rename_category_to_existing_fails() {
        let (mut manager, _temp) = create_test_manager();
        manager.add_category("A").unwrap();
        manager.add_category("B").unwrap();
        let id = manager.create_book("book", "A", &["x"]).unwrap();

        assert!(matches!(manager.rename_category("A", "B"), Err(PassbookError::CategoryExists(_))));

        assert_eq!(manager.get_book(&id).unwrap().unwrap().category, "A");
        assert_eq!(manager.list_categories().unwrap(), vec!["default", "A", "B"]);
    }

    #[test]
    fn test_rename_category_rejects() {
        let (mut manager, _temp) = create_test_manager();
        manager.add_category("A").unwrap();

        assert!(matches!(manager.rename_category("default", "X"), Err(PassbookError::DefaultCategory)));
        assert!(matches!(manager.rename_category("missing", "X"), Err(PassbookError::CategoryNotFound(_))));
        assert!(matches!(manager.rename_category("A", " "), Err(PassbookError::EmptyName)));
        assert!(matches!(manager.rename_category("A", "default"), Err(PassbookError::CategoryExists(_))));
    }

    #[test]
    fn test_rename_category_moves_books_back_when_save_fails() {
        let (mut manager, locked, _temp) = manager_with_lockable_categories();
        manager.add_category("A").unwrap();
        let id = manager.create_book("book", "A", &["x"]).unwrap();

        locked.store(true, Ordering::SeqCst);
        assert!(matches!(manager.rename_category("A", "B"), Err(PassbookError::Storage(_))));

        assert_eq!(manager.list_categories().unwrap(), vec!["default", "A"]);
        assert_eq!(manager.get_book(&id).unwrap().unwrap().category, "A");
        assert!(manager.list_books_by_category("B").unwrap().is_empty());
    }
}
