//! Preference store backed by a flat JSON object on disk.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use folio_i18n_core::error::{I18nError, I18nResult};
use folio_i18n_core::traits::PreferenceStore;

type PreferenceMap = BTreeMap<String, String>;

const APP_DIR_NAME: &str = "folio";
const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// JSON file preference store.
///
/// Keeps `{ "key": "value", ... }` in a single file. The file is read once
/// and cached; every `set` rewrites the whole file through a temporary file
/// and a rename. A missing or empty file reads as no preferences; a file
/// that is not a JSON string map is replaced on the next `set`.
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    cache: Arc<RwLock<Option<PreferenceMap>>>,
}

impl JsonFilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// `<platform config dir>/folio/preferences.json`, if the platform has one
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(PREFERENCES_FILE_NAME))
    }

    /// Store at [`default_path`](Self::default_path)
    pub fn at_default_location() -> I18nResult<Self> {
        Self::default_path().map(Self::new).ok_or_else(|| {
            I18nError::StorageError("no configuration directory on this platform".to_string())
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_file(&self) -> I18nResult<PreferenceMap> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(PreferenceMap::new()),
            Err(e) => {
                return Err(I18nError::StorageError(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        if json.trim().is_empty() {
            return Ok(PreferenceMap::new());
        }
        serde_json::from_str(&json).map_err(|e| {
            I18nError::SerializationError(format!("{}: {e}", self.path.display()))
        })
    }

    async fn write_file(&self, values: &PreferenceMap) -> I18nResult<()> {
        let json = serde_json::to_string_pretty(values)
            .map_err(|e| I18nError::SerializationError(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                I18nError::StorageError(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json).await.map_err(|e| {
            I18nError::StorageError(format!("failed to write {}: {e}", tmp_path.display()))
        })?;
        tokio::fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            I18nError::StorageError(format!(
                "failed to replace {}: {e}",
                self.path.display()
            ))
        })
    }
}

#[async_trait]
impl PreferenceStore for JsonFilePreferenceStore {
    async fn get(&self, key: &str) -> I18nResult<Option<String>> {
        {
            let cache = self.cache.read().await;
            if let Some(ref values) = *cache {
                return Ok(values.get(key).cloned());
            }
        }

        let mut cache = self.cache.write().await;
        if let Some(ref values) = *cache {
            return Ok(values.get(key).cloned());
        }

        let values = self.read_file().await?;
        log::debug!(
            "Loaded {} preferences from {}",
            values.len(),
            self.path.display()
        );
        let value = values.get(key).cloned();
        *cache = Some(values);
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> I18nResult<()> {
        let mut cache = self.cache.write().await;
        let mut values = match cache.take() {
            Some(values) => values,
            None => match self.read_file().await {
                Ok(values) => values,
                Err(e @ I18nError::SerializationError(_)) => {
                    log::warn!("Unreadable preference file, starting over: {e}");
                    PreferenceMap::new()
                }
                Err(e) => return Err(e),
            },
        };

        values.insert(key.to_string(), value.to_string());
        let written = self.write_file(&values).await;
        // Cache keeps the new value even when the write failed.
        *cache = Some(values);
        written?;

        log::info!("Saved preference '{key}' to {}", self.path.display());
        Ok(())
    }
}
