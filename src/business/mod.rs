//! Business logic layer for Passbook
//!
//! This module provides the high-level PasswordManager API for managing
//! categories, books and book content.

pub mod manager;
pub mod categories;
pub mod books;

pub use manager::PasswordManager;
