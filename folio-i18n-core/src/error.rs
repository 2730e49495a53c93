//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::LocaleCode;

/// Why a locale resource could not be turned into a table.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum LoadFailureKind {
    /// No resource is registered or present for the code
    #[error("resource not found")]
    NotFound,

    /// The resource exists but is not a valid translation table
    #[error("malformed resource: {0}")]
    Malformed(String),

    /// Reading the resource failed
    #[error("I/O error: {0}")]
    Io(String),
}

/// Locale load failure, always tagged with the requested code.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("Failed to load locale '{code}': {kind}")]
pub struct LocaleLoadError {
    pub code: LocaleCode,
    pub kind: LoadFailureKind,
}

impl LocaleLoadError {
    #[must_use]
    pub fn not_found(code: &LocaleCode) -> Self {
        Self {
            code: code.clone(),
            kind: LoadFailureKind::NotFound,
        }
    }

    #[must_use]
    pub fn malformed(code: &LocaleCode, message: impl Into<String>) -> Self {
        Self {
            code: code.clone(),
            kind: LoadFailureKind::Malformed(message.into()),
        }
    }

    #[must_use]
    pub fn io(code: &LocaleCode, message: impl Into<String>) -> Self {
        Self {
            code: code.clone(),
            kind: LoadFailureKind::Io(message.into()),
        }
    }
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum I18nError {
    /// Locale resource missing or unparsable
    #[error("{0}")]
    LocaleLoad(#[from] LocaleLoadError),

    /// Preference storage error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// `initialize` was called more than once on the same controller
    #[error("Language controller already initialized")]
    AlreadyInitialized,
}

impl I18nError {
    /// Whether it is expected behavior (unknown locale, caller misuse) rather than
    /// an environment failure. Used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::LocaleLoad(e) => e.kind == LoadFailureKind::NotFound,
            Self::AlreadyInitialized | Self::ConfigError(_) => true,
            Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type I18nResult<T> = std::result::Result<T, I18nError>;
