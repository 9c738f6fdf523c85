//! Import and export
//!
//! Translates between stored password books and external files:
//! plain text, CSV and ZIP archives of text files.

pub mod formats;
mod import;
mod export;

use std::path::Path;

/// External file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// One entry per line
    Txt,
    /// First column per line; exports carry a `password` header
    Csv,
    /// One text file per book
    Zip,
}

impl FileFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(FileFormat::Txt),
            "csv" => Some(FileFormat::Csv),
            "zip" => Some(FileFormat::Zip),
            _ => None,
        }
    }

    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Txt => "txt",
            FileFormat::Csv => "csv",
            FileFormat::Zip => "zip",
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
