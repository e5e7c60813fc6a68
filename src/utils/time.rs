//! Timestamp parsing and display formatting.
//!
//! Storage is always UTC at minute precision. The configured display
//! offset is applied here and nowhere else, so every boundary (CLI input,
//! listing, export) converts the same way.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDateTime};

pub const STORE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a CLI timestamp (`YYYY-MM-DDTHH:MM` or `YYYY-MM-DD HH:MM`),
/// interpreted in the display offset, and converts it to UTC.
pub fn parse_local(input: &str, display_offset_minutes: i32) -> AppResult<NaiveDateTime> {
    let formats = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Ok(dt - Duration::minutes(display_offset_minutes as i64));
        }
    }
    Err(AppError::InvalidTimestamp(input.to_string()))
}

/// Formats a stored UTC timestamp in the display offset.
pub fn format_local(utc: NaiveDateTime, display_offset_minutes: i32) -> String {
    (utc + Duration::minutes(display_offset_minutes as i64))
        .format(STORE_FORMAT)
        .to_string()
}

/// Storage form (UTC), used by the SQLite store.
pub fn format_store(utc: NaiveDateTime) -> String {
    utc.format(STORE_FORMAT).to_string()
}

/// Parses the storage form back into a UTC timestamp.
pub fn parse_store(text: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, STORE_FORMAT)
        .map_err(|_| AppError::InvalidTimestamp(text.to_string()))
}
