//! Row-to-entity parsing helpers.
//!
//! Repos convert `libsql::Row` (column-indexed) into entity structs. These
//! helpers handle the dual datetime format (`SQLite`'s `datetime('now')` vs
//! Rust's `to_rfc3339()`) and case-folded substring matching for search.

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Case-insensitive substring test using Unicode lowercase folding.
///
/// `needle` must already be lowercased (see [`fold_case`]).
#[must_use]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Lowercase `value` for use with [`contains_folded`].
#[must_use]
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Read a nullable INTEGER column.
///
/// `row.get::<i64>(idx)` on a NULL column returns an error, so nullable
/// columns must go through `Option`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_i64(row: &libsql::Row, idx: i32) -> Result<Option<i64>, DatabaseError> {
    Ok(row.get::<Option<i64>>(idx)?)
}
