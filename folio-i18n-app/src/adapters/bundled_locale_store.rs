//! Locale tables compiled into the binary.

use async_trait::async_trait;

use folio_i18n_core::error::LocaleLoadError;
use folio_i18n_core::traits::LocaleStore;
use folio_i18n_core::types::{LocaleCode, LocaleInfo, TranslationTable};

struct BundledLocale {
    code: &'static str,
    display_name: &'static str,
    json: &'static str,
}

const BUNDLED_LOCALES: &[BundledLocale] = &[
    BundledLocale {
        code: "en",
        display_name: "English",
        json: include_str!("../../locales/en.json"),
    },
    BundledLocale {
        code: "mn",
        display_name: "Монгол",
        json: include_str!("../../locales/mn.json"),
    },
];

/// Native name of a bundled locale
#[must_use]
pub fn bundled_display_name(code: &str) -> Option<&'static str> {
    BUNDLED_LOCALES
        .iter()
        .find(|locale| locale.code == code)
        .map(|locale| locale.display_name)
}

/// Locale store over the tables shipped with the crate.
///
/// The set of locales is fixed at build time. Each load re-parses the
/// embedded JSON so callers always get a fresh table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledLocaleStore;

impl BundledLocaleStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LocaleStore for BundledLocaleStore {
    async fn load(&self, code: &LocaleCode) -> Result<TranslationTable, LocaleLoadError> {
        let locale = BUNDLED_LOCALES
            .iter()
            .find(|locale| locale.code == code.as_str())
            .ok_or_else(|| LocaleLoadError::not_found(code))?;

        log::debug!("Parsing bundled locale '{code}'");
        TranslationTable::from_json_str(locale.json)
            .map_err(|e| LocaleLoadError::malformed(code, e.to_string()))
    }

    async fn available(&self) -> Vec<LocaleInfo> {
        BUNDLED_LOCALES
            .iter()
            .map(|locale| LocaleInfo::new(locale.code, locale.display_name))
            .collect()
    }
}
