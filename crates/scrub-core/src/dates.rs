//! Sign-up date parsing.

use chrono::NaiveDate;

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %b %Y", "%b %d, %Y"];

/// Parse a date string into a `NaiveDate`.
///
/// Tries a fixed set of common layouts, ISO first. Values carrying a time
/// component (`2023-01-01T10:30:00`, `2023-01-01 10:30`) are accepted by
/// parsing their leading date part. Returns None for anything else.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    let date_part = trimmed
        .split_once('T')
        .or_else(|| trimmed.split_once(' '))
        .map(|(head, _)| head)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
