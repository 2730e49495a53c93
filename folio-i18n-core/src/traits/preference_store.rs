//! Preference persistence abstraction Trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::I18nResult;

/// Key-value preference store
///
/// Only one key is used by the controller (the preferred locale code), but
/// the store itself is a plain string map.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a value
    ///
    /// # Returns
    /// * `Ok(Some(value))` - value present
    /// * `Ok(None)` - nothing stored under `key`
    async fn get(&self, key: &str) -> I18nResult<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> I18nResult<()>;
}

/// In-memory preference store
///
/// Default implementation, lives as long as the process. Clones share the
/// same map.
#[derive(Clone, Default)]
pub struct InMemoryPreferenceStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get(&self, key: &str) -> I18nResult<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> I18nResult<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
