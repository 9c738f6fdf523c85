//! Database schema definitions

/// SQL to create the preferences (key-value) table
pub const CREATE_PREFERENCES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS passbook_preferences (
    key             VARCHAR PRIMARY KEY NOT NULL,
    value           TEXT NOT NULL,
    change_timestamp INTEGER
)
"#;

/// All table creation statements
pub const CREATE_ALL_TABLES: &[&str] = &[
    CREATE_PREFERENCES_TABLE,
];

/// Read a single preference
pub const SELECT_PREFERENCE: &str =
    "SELECT value FROM passbook_preferences WHERE key = ?1";

/// Insert or replace a single preference
pub const UPSERT_PREFERENCE: &str = r#"
INSERT INTO passbook_preferences (key, value, change_timestamp)
VALUES (?1, ?2, ?3)
ON CONFLICT(key) DO UPDATE SET value = excluded.value, change_timestamp = excluded.change_timestamp
"#;

/// Delete a single preference
pub const DELETE_PREFERENCE: &str =
    "DELETE FROM passbook_preferences WHERE key = ?1";
