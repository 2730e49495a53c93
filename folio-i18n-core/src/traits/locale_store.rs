//! Locale resource abstraction Trait

use async_trait::async_trait;

use crate::error::LocaleLoadError;
use crate::types::{LocaleCode, LocaleInfo, TranslationTable};

/// Locale Store Trait
///
/// Produces the translation table for a locale code. Implementations do no
/// fallback of their own; that policy belongs to `LanguageController`.
///
/// Implementations:
/// - `BundledLocaleStore` (app crate): tables compiled into the binary
/// - `DirectoryLocaleStore` (app crate): `<dir>/<code>.json` on disk
#[async_trait]
pub trait LocaleStore: Send + Sync {
    /// Load and parse the table for `code`
    ///
    /// # Returns
    /// * `Ok(table)` - a freshly parsed table
    /// * `Err(LocaleLoadError)` - missing, unreadable or malformed resource
    async fn load(&self, code: &LocaleCode) -> Result<TranslationTable, LocaleLoadError>;

    /// Locales this store knows how to serve
    async fn available(&self) -> Vec<LocaleInfo>;
}
