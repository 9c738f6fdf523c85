//! Data models for persisted password book metadata

use std::path::PathBuf;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::utils::millis_to_datetime;

/// Password book metadata
///
/// Serialized with the field names used by the metadata store:
/// `id`, `name`, `category`, `filePath`, `createTime`, `updateTime`,
/// `passwordCount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordBook {
    /// Unique book ID
    pub id: String,
    /// Unique, non-empty display name
    pub name: String,
    /// Category the book belongs to
    pub category: String,
    /// Path of the content file owned by this book
    pub file_path: String,
    /// Creation time, epoch milliseconds
    pub create_time: i64,
    /// Last metadata or content change, epoch milliseconds
    pub update_time: i64,
    /// Number of entries in the content file
    pub password_count: u32,
}

impl PasswordBook {
    /// Path of the content file
    pub fn content_path(&self) -> PathBuf {
        PathBuf::from(&self.file_path)
    }

    /// Creation time as a DateTime
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.create_time)
    }

    /// Last update time as a DateTime
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.update_time)
    }
}

/// Result of loading one persisted collection
///
/// Keeps "nothing stored yet" apart from "stored but unparseable" so a
/// corrupted value is never mistaken for an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection<T> {
    /// Key absent or blank
    Empty,
    /// Parsed successfully
    Loaded(T),
    /// Present but could not be parsed
    Corrupt(String),
}

impl<T: Default> Collection<T> {
    /// Convert into the loaded value, treating `Empty` as the default
    pub fn into_result(self, key: &str) -> crate::Result<T> {
        match self {
            Collection::Empty => Ok(T::default()),
            Collection::Loaded(value) => Ok(value),
            Collection::Corrupt(details) => Err(crate::PassbookError::CorruptData {
                key: key.to_string(),
                details,
            }),
        }
    }

    /// True if the stored value could not be parsed
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Collection::Corrupt(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn sample_book() -> PasswordBook {
        PasswordBook {
            id: "AbCdEf123456".to_string(),
            name: "wifi-list".to_string(),
            category: "default".to_string(),
            file_path: "/data/PasswordBooks/abc.txt".to_string(),
            create_time: 1_704_067_200_000,
            update_time: 1_704_067_260_000,
            password_count: 2,
        }
    }

    #[test]
    fn test_book_json_field_names() {
        let json = serde_json::to_string(&sample_book()).unwrap();
        assert!(json.contains("\"filePath\":\"/data/PasswordBooks/abc.txt\""));
        assert!(json.contains("\"createTime\":1704067200000"));
        assert!(json.contains("\"updateTime\":1704067260000"));
        assert!(json.contains("\"passwordCount\":2"));
    }

    #[test]
    fn test_book_from_stored_json() {
        let json = r#"{"id":"1700000000000","name":"home","category":"default",
            "filePath":"/x/1700000000000.txt","createTime":1700000000000,
            "updateTime":1700000000001,"passwordCount":5}"#;
        let book: PasswordBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, "1700000000000");
        assert_eq!(book.password_count, 5);
        assert_eq!(book.content_path(), PathBuf::from("/x/1700000000000.txt"));
    }

    #[test]
    fn test_book_timestamps() {
        let book = sample_book();
        assert_eq!(book.created_at().unwrap().year(), 2024);
        assert!(book.updated_at().unwrap() > book.created_at().unwrap());
    }

    #[test]
    fn test_collection_into_result() {
        let empty: Collection<Vec<String>> = Collection::Empty;
        assert!(empty.into_result("k").unwrap().is_empty());

        let loaded = Collection::Loaded(vec!["a".to_string()]);
        assert_eq!(loaded.into_result("k").unwrap(), vec!["a"]);

        let corrupt: Collection<Vec<String>> = Collection::Corrupt("bad".to_string());
        assert!(corrupt.is_corrupt());
        assert!(matches!(
            corrupt.into_result("k"),
            Err(crate::PassbookError::CorruptData { .. })
        ));
    }
}
