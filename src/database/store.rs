//! Metadata persistence
//!
//! Categories and book metadata are stored as two JSON strings in a
//! key-value store. The store is injected into the manager; production
//! uses SQLite, tests use memory.

use std::collections::HashMap;
use std::path::Path;
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::error::Result;
use super::connection::Database;
use super::models::Collection;

/// Key-value persistence for serialized metadata collections
pub trait MetadataStore {
    /// Read the string stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory metadata store
#[derive(Debug, Default, Clone)]
pub struct MemoryMetadataStore {
    values: HashMap<String, String>,
}

impl MemoryMetadataStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetadataStore for MemoryMetadataStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// SQLite-backed metadata store
pub struct SqliteMetadataStore {
    db: Database,
}

impl SqliteMetadataStore {
    /// Open (or create) the metadata database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            db: Database::open(path)?,
        })
    }

    /// Get the database path
    pub fn path(&self) -> &Path {
        self.db.path()
    }
}

impl MetadataStore for SqliteMetadataStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.db.get_preference(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.db.set_preference(key, value)
    }
}

/// Load and parse the JSON collection stored under `key`
pub fn load_collection<T, S>(store: &S, key: &str) -> Result<Collection<T>>
where
    T: DeserializeOwned,
    S: MetadataStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(Collection::Empty);
    };

    if raw.trim().is_empty() {
        return Ok(Collection::Empty);
    }

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Collection::Loaded(value)),
        Err(e) => {
            tracing::error!(key, error = %e, "failed to parse stored metadata");
            Ok(Collection::Corrupt(e.to_string()))
        }
    }
}

/// Serialize `value` as JSON and store it under `key`
pub fn save_collection<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: MetadataStore + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}
