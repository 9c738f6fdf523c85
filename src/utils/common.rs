//! Common utility functions

use chrono::{DateTime, TimeZone, Utc};

/// Current time as epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert epoch milliseconds to a DateTime
pub fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

/// Split text into entries: one per line, trimmed, blank lines dropped
pub fn split_entries(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join entries one per line with a trailing newline after the last one
pub fn join_entries<S: AsRef<str>>(entries: &[S]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(entry.as_ref());
        out.push('\n');
    }
    out
}

/// Strip the extension (last `.` to end) from a file name
///
/// A name without `.` is returned whole. Leading directories are dropped.
pub fn strip_extension(file_name: &str) -> &str {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    match base.rfind('.') {
        Some(pos) => &base[..pos],
        None => base,
    }
}

/// True if the name is empty or whitespace only
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}
