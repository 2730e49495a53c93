//! Locale identifiers

use std::fmt;

use serde::{Deserialize, Serialize};

/// Locale code, e.g. `"en"` or `"mn"`.
///
/// Opaque: no tag parsing or canonicalization is done, two codes are equal
/// only if their strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleCode(String);

impl LocaleCode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the code can be used as a single file name segment
    /// (no separators, no `.`/`..`, not empty).
    #[must_use]
    pub fn is_path_safe(&self) -> bool {
        !self.0.is_empty()
            && self.0 != "."
            && self.0 != ".."
            && !self.0.contains(['/', '\\', '\0'])
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for LocaleCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for LocaleCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A locale a store can serve, with its name written in that language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub code: LocaleCode,
    pub display_name: String,
}

impl LocaleInfo {
    #[must_use]
    pub fn new(code: impl Into<LocaleCode>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
        }
    }
}
