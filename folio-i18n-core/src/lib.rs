//! Folio i18n Core Library
//!
//! Runtime localization for the Folio portfolio dashboard:
//! - Locale stores (trait) producing translation tables per locale code
//! - Key-path resolution with caller-supplied fallbacks
//! - A language controller owning the active locale, with persisted
//!   preference and single retry to a fallback locale
//!
//! Storage is abstracted through traits so the same controller runs over
//! bundled resources, a locale directory, or test mocks.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{I18nError, I18nResult, LoadFailureKind, LocaleLoadError};
pub use services::{resolve, LanguageController};
pub use traits::{InMemoryPreferenceStore, LocaleStore, PreferenceStore};
pub use types::{
    ControllerStatus, LoadOutcome, LocaleCode, LocaleConfig, LocaleInfo, LocaleSnapshot,
    TranslationTable, TranslationValue,
};
