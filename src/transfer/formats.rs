//! Format codecs
//!
//! Pure conversions between entry lists and txt/csv/zip bytes. These never
//! touch the metadata store.

use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};
use crate::error::{PassbookError, Result};
use crate::utils::{join_entries, split_entries, strip_extension};
use crate::{CSV_HEADER, TEXT_EXTENSION};

/// One text file inside an archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Book name (entry file name without extension)
    pub name: String,
    /// Entries read from the file
    pub entries: Vec<String>,
}

/// Parse plain text: one entry per line, trimmed, blanks dropped
pub fn parse_txt(bytes: &[u8]) -> Vec<String> {
    split_entries(&String::from_utf8_lossy(bytes))
}

/// Parse CSV: the text before the first comma of every line, trimmed,
/// blanks dropped
///
/// Quotes carry no meaning. With `skip_header`, a first row whose field is
/// exactly `password` is dropped.
pub fn parse_csv(bytes: &[u8], skip_header: bool) -> Vec<String> {
    let text = String::from_utf8_lossy(bytes);
    let mut entries = Vec::new();
    let mut first_row = true;

    for line in text.lines() {
        let field = line.split(',').next().unwrap_or_default().trim();
        if field.is_empty() {
            continue;
        }
        if first_row && skip_header && field == CSV_HEADER {
            first_row = false;
            continue;
        }
        first_row = false;
        entries.push(field.to_string());
    }

    entries
}

/// Render plain text: one entry per line
pub fn render_txt<S: AsRef<str>>(entries: &[S]) -> Vec<u8> {
    join_entries(entries).into_bytes()
}

/// Render CSV: `password` header, then one entry per line
pub fn render_csv<S: AsRef<str>>(entries: &[S]) -> Vec<u8> {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for entry in entries {
        out.push_str(entry.as_ref());
        out.push('\n');
    }
    out.into_bytes()
}

/// Read every non-directory entry of a ZIP archive
pub fn read_zip(bytes: &[u8]) -> Result<Vec<ArchiveEntry>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| PassbookError::Archive(format!("Failed to read archive: {}", e)))?;

    let mut result = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut file = archive.by_index(i)
            .map_err(|e| PassbookError::Archive(format!("Failed to read entry {}: {}", i, e)))?;

        if file.is_dir() {
            continue;
        }

        let name = strip_extension(file.name()).to_string();
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| PassbookError::Archive(format!("Failed to read entry '{}': {}", name, e)))?;

        result.push(ArchiveEntry {
            name,
            entries: parse_txt(&data),
        });
    }

    Ok(result)
}

/// Write a ZIP archive with one `<name>.txt` entry per item
pub fn write_zip(items: &[ArchiveEntry]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for item in items {
        let entry_name = format!("{}.{}", item.name, TEXT_EXTENSION);
        zip.start_file(entry_name.as_str(), options)
            .map_err(|e| PassbookError::Archive(format!("Failed to add '{}' to zip: {}", entry_name, e)))?;
        zip.write_all(&render_txt(&item.entries))
            .map_err(|e| PassbookError::Archive(format!("Failed to write to zip: {}", e)))?;
    }

    let cursor = zip.finish()
        .map_err(|e| PassbookError::Archive(format!("Failed to finalize zip: {}", e)))?;

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, entries: &[&str]) -> ArchiveEntry {
        ArchiveEntry {
            name: name.to_string(),
            entries: entries.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn zip_with(files: &[(&str, &[u8])]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for (name, data) in files {
            if name.ends_with('/') {
                zip.add_directory(*name, options).unwrap();
            } else {
                zip.start_file(*name, options).unwrap();
                zip.write_all(data).unwrap();
            }
        }
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_parse_txt() {
        assert_eq!(parse_txt(b"12345678\n\n  abcdefgh \r\n"), vec!["12345678", "abcdefgh"]);
    }

    #[test]
    fn test_parse_csv_first_column() {
        let entries = parse_csv(b"abc,2024-01-01\n\ndef,2024-01-02\n", true);
        assert_eq!(entries, vec!["abc", "def"]);
    }

    #[test]
    fn test_parse_csv_header() {
        assert_eq!(parse_csv(b"password\nabc\n", true), vec!["abc"]);
        assert_eq!(parse_csv(b"password\nabc\n", false), vec!["password", "abc"]);
        // Only the first row can be a header
        assert_eq!(parse_csv(b"abc\npassword\n", true), vec!["abc", "password"]);
        assert_eq!(parse_csv(b"\n\npassword,note\nabc\n", true), vec!["abc"]);
    }

    #[test]
    fn test_parse_csv_keeps_quotes() {
        let entries = parse_csv(b"\"hello\"world,2024\n\"abc,def\n\"a,b\",note\n", false);
        assert_eq!(entries, vec!["\"hello\"world", "\"abc", "\"a"]);
    }

    #[test]
    fn test_render_txt() {
        assert_eq!(render_txt(&["a", "b"]), b"a\nb\n");
    }

    #[test]
    fn test_render_csv() {
        assert_eq!(render_csv(&["abc", "def"]), b"password\nabc\ndef\n");
        assert_eq!(render_csv::<&str>(&[]), b"password\n");
        assert_eq!(render_csv(&["a,b", "\"q\""]), b"password\na,b\n\"q\"\n");
    }

    #[test]
    fn test_csv_export_reimports_without_header() {
        let entries = vec!["abc", "\"quoted", "def"];
        let parsed = parse_csv(&render_csv(&entries), true);
        assert_eq!(parsed, entries);
    }

    #[test]
    fn test_write_and_read_zip() {
        let items = vec![entry("home", &["a", "b"]), entry("office", &["c"])];
        let bytes = write_zip(&items).unwrap();

        let read = read_zip(&bytes).unwrap();
        assert_eq!(read, items);
    }

    #[test]
    fn test_read_zip_entry_names() {
        let bytes = zip_with(&[
            ("lists/", b""),
            ("lists/cafe.txt", b"latte\n"),
            ("noext", b"x\n\ny\n"),
            ("dump.tar.txt", b"z"),
        ]);

        let read = read_zip(&bytes).unwrap();
        assert_eq!(read, vec![
            entry("cafe", &["latte"]),
            entry("noext", &["x", "y"]),
            entry("dump.tar", &["z"]),
        ]);
    }

    #[test]
    fn test_read_zip_invalid() {
        let result = read_zip(b"definitely not a zip");
        assert!(matches!(result, Err(PassbookError::Archive(_))));
    }
}
