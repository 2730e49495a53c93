//! Translation table tree

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A node in a translation table.
///
/// Values that are neither strings nor objects are kept so a table parsed
/// from real-world JSON does not fail on them, but they never resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    Text(String),
    Table(TranslationTable),
    Other(serde_json::Value),
}

impl TranslationValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_table(&self) -> Option<&TranslationTable> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// Nested key → value strings for one locale. The root is always a map.
///
/// Tables are never mutated after loading; switching locale swaps in a new
/// table instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: BTreeMap<String, TranslationValue>,
}

impl TranslationTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from JSON text. The top level must be an object.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Direct child of the root.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TranslationValue> {
        self.entries.get(key)
    }

    /// Walk a dotted key-path and return the string leaf it names.
    ///
    /// Returns `None` when a segment is missing, when the walk hits a
    /// non-table before the last segment, or when the final value is not a
    /// string.
    ///
    /// Arrays are treated as leaves, so `tags.0` does not index into one.
    #[must_use]
    pub fn lookup(&self, key_path: &str) -> Option<&str> {
        let mut segments = key_path.split('.');
        let mut value = self.entries.get(segments.next()?)?;
        for segment in segments {
            value = value.as_table()?.entries.get(segment)?;
        }
        value.as_text()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count of string leaves in the whole tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.entries
            .values()
            .map(|value| match value {
                TranslationValue::Text(_) => 1,
                TranslationValue::Table(table) => table.leaf_count(),
                TranslationValue::Other(_) => 0,
            })
            .sum()
    }

    /// Iterate over top-level keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
