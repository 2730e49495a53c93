//! Key-path resolution against a translation table

use crate::types::TranslationTable;

/// Resolve a dotted key-path, never failing.
///
/// Returns the string leaf named by `key_path`. On any miss (absent segment,
/// non-string final value, empty table) returns `fallback` if it is
/// non-empty, otherwise `key_path` unchanged.
#[must_use]
pub fn resolve<'a>(table: &'a TranslationTable, key_path: &'a str, fallback: &'a str) -> &'a str {
    match table.lookup(key_path) {
        Some(text) => text,
        None if fallback.is_empty() => key_path,
        None => fallback,
    }
}
