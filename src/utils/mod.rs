//! Utility functions

pub mod common;
pub mod id_gen;

pub use common::{is_blank, join_entries, millis_to_datetime, now_millis, split_entries, strip_extension};
pub use id_gen::{generate_book_id, generate_content_file_name, generate_id, generate_unique_book_id};
