//! Active locale state as seen by consumers

use std::sync::Arc;

use serde::Serialize;

use crate::error::LocaleLoadError;
use crate::types::{LocaleCode, TranslationTable};

/// Controller lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ControllerStatus {
    /// No table has loaded yet, every lookup falls back
    Uninitialized,
    /// A table is active
    Ready,
}

/// Immutable view of the active (locale, table) pair.
///
/// Replaced wholesale on every successful load; cloning is cheap.
#[derive(Debug, Clone)]
pub struct LocaleSnapshot {
    pub language: LocaleCode,
    pub table: Arc<TranslationTable>,
    pub status: ControllerStatus,
}

impl LocaleSnapshot {
    /// State before any load completes: configured default code, empty table.
    #[must_use]
    pub fn uninitialized(language: LocaleCode) -> Self {
        Self {
            language,
            table: Arc::new(TranslationTable::new()),
            status: ControllerStatus::Uninitialized,
        }
    }

    #[must_use]
    pub fn ready(language: LocaleCode, table: TranslationTable) -> Self {
        Self {
            language,
            table: Arc::new(table),
            status: ControllerStatus::Ready,
        }
    }
}

/// What a locale switch ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The requested locale is now active
    Loaded(LocaleCode),
    /// The requested locale failed and the fallback locale is now active
    FellBack {
        requested: LocaleCode,
        active: LocaleCode,
        error: LocaleLoadError,
    },
    /// Nothing loaded; the previous state is kept
    Failed(LocaleLoadError),
    /// A newer switch started while this one was loading; its result was dropped
    Superseded(LocaleCode),
}

impl LoadOutcome {
    /// The code that became active, if any
    #[must_use]
    pub fn active(&self) -> Option<&LocaleCode> {
        match self {
            Self::Loaded(code) => Some(code),
            Self::FellBack { active, .. } => Some(active),
            Self::Failed(_) | Self::Superseded(_) => None,
        }
    }
}
