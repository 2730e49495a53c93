//! Resolver configuration

use serde::{Deserialize, Serialize};

use crate::error::{I18nError, I18nResult};
use crate::types::LocaleCode;

fn default_locale() -> LocaleCode {
    LocaleCode::from("mn")
}

fn default_fallback_locale() -> LocaleCode {
    LocaleCode::from("en")
}

fn default_preference_key() -> String {
    "language".to_string()
}

/// Locale roles and the preference key.
///
/// * `default_locale` — used when no preference has been stored yet
/// * `fallback_locale` — retried once when a requested locale fails to load
/// * `preference_key` — key under which the chosen code is persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    #[serde(default = "default_locale")]
    pub default_locale: LocaleCode,

    #[serde(default = "default_fallback_locale")]
    pub fallback_locale: LocaleCode,

    #[serde(default = "default_preference_key")]
    pub preference_key: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            fallback_locale: default_fallback_locale(),
            preference_key: default_preference_key(),
        }
    }
}

impl LocaleConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> I18nResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| I18nError::ConfigError(format!("invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> I18nResult<()> {
        if self.default_locale.as_str().trim().is_empty() {
            return Err(I18nError::ConfigError(
                "defaultLocale cannot be empty".to_string(),
            ));
        }
        if self.fallback_locale.as_str().trim().is_empty() {
            return Err(I18nError::ConfigError(
                "fallbackLocale cannot be empty".to_string(),
            ));
        }
        if self.preference_key.trim().is_empty() {
            return Err(I18nError::ConfigError(
                "preferenceKey cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
