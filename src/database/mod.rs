//! Metadata persistence layer
//!
//! Handles the key-value store holding:
//! - The ordered list of category names
//! - The list of password book metadata rows

pub mod models;
pub mod schema;
pub mod connection;
pub mod store;

pub use connection::Database;
pub use models::*;
pub use store::{MetadataStore, MemoryMetadataStore, SqliteMetadataStore, load_collection, save_collection};
