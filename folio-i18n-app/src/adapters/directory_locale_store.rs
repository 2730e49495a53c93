//! Locale tables read from `<dir>/<code>.json`.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use folio_i18n_core::error::LocaleLoadError;
use folio_i18n_core::traits::LocaleStore;
use folio_i18n_core::types::{LocaleCode, LocaleInfo, TranslationTable};

use super::bundled_display_name;

const LOCALE_EXTENSION: &str = "json";

/// Locale store over a directory of JSON files, one per locale code.
///
/// Files are read on every load; edits on disk show up on the next switch.
#[derive(Debug, Clone)]
pub struct DirectoryLocaleStore {
    root: PathBuf,
}

impl DirectoryLocaleStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, code: &LocaleCode) -> PathBuf {
        self.root.join(format!("{code}.{LOCALE_EXTENSION}"))
    }
}

#[async_trait]
impl LocaleStore for DirectoryLocaleStore {
    async fn load(&self, code: &LocaleCode) -> Result<TranslationTable, LocaleLoadError> {
        // Codes must stay a single file name inside `root`.
        if !code.is_path_safe() {
            return Err(LocaleLoadError::not_found(code));
        }

        let path = self.path_for(code);
        log::debug!("Reading locale '{code}' from {}", path.display());

        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LocaleLoadError::not_found(code));
            }
            Err(e) => return Err(LocaleLoadError::io(code, e.to_string())),
        };

        TranslationTable::from_json_str(&json)
            .map_err(|e| LocaleLoadError::malformed(code, e.to_string()))
    }

    async fn available(&self) -> Vec<LocaleInfo> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!(
                    "Failed to list locale directory {}: {e}",
                    self.root.display()
                );
                return Vec::new();
            }
        };

        let mut codes = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    let path = entry.path();
                    if path.extension().and_then(|ext| ext.to_str()) != Some(LOCALE_EXTENSION) {
                        continue;
                    }
                    if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                        codes.push(stem.to_string());
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    log::warn!(
                        "Failed to read entry in locale directory {}: {e}",
                        self.root.display()
                    );
                    break;
                }
            }
        }

        codes.sort();
        codes
            .into_iter()
            .map(|code| {
                let display_name =
                    bundled_display_name(&code).map_or_else(|| code.clone(), str::to_string);
                LocaleInfo::new(code, display_name)
            })
            .collect()
    }
}
