//! Database connection management

use std::path::{Path, PathBuf};
use rusqlite::{Connection, OptionalExtension, params};
use crate::error::{PassbookError, Result};
use crate::utils::now_millis;
use super::schema;

/// Database connection wrapper
pub struct Database {
    /// Path to the database file
    path: PathBuf,
    /// SQLite connection
    conn: Option<Connection>,
}

impl Database {
    /// Open a database at the specified path, creating tables if needed
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        for sql in schema::CREATE_ALL_TABLES {
            conn.execute(sql, [])?;
        }

        Ok(Self {
            path: path.to_path_buf(),
            conn: Some(conn),
        })
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or_else(|| {
            PassbookError::Storage("Database not open".to_string())
        })
    }

    /// Get the database path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the database connection
    pub fn close(&mut self) {
        self.conn = None;
    }

    /// Check if database is open
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Read a preference value
    pub fn get_preference(&self, key: &str) -> Result<Option<String>> {
        let value = self.connection()?
            .query_row(schema::SELECT_PREFERENCE, params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    /// Insert or replace a preference value
    pub fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        self.connection()?
            .execute(schema::UPSERT_PREFERENCE, params![key, value, now_millis()])?;
        Ok(())
    }

    /// Delete a preference value
    pub fn delete_preference(&self, key: &str) -> Result<bool> {
        let deleted = self.connection()?
            .execute(schema::DELETE_PREFERENCE, params![key])?;
        Ok(deleted > 0)
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        self.close();
    }
}
