//! Application bootstrap for Folio i18n.
//!
//! Provides `AppState` (holds the language controller), `AppStateBuilder`
//! (adapter injection) and the concrete locale / preference adapters.

pub mod adapters;

use std::sync::Arc;

use folio_i18n_core::error::{I18nError, I18nResult};
use folio_i18n_core::services::LanguageController;
use folio_i18n_core::traits::{LocaleStore, PreferenceStore};
use folio_i18n_core::types::{LoadOutcome, LocaleConfig};

use adapters::BundledLocaleStore;

/// Platform-agnostic application state.
///
/// Every frontend constructs this once at startup via `AppStateBuilder`
/// and shares the controller with its views.
pub struct AppState {
    /// Language controller
    pub controller: Arc<LanguageController>,
}

impl AppState {
    /// Run the startup sequence: load the preferred (or default) locale.
    ///
    /// A locale that cannot be loaded is not an error here; the outcome says
    /// what ended up active.
    pub async fn run_startup(&self) -> I18nResult<LoadOutcome> {
        let outcome = self.controller.initialize().await?;
        match &outcome {
            LoadOutcome::Loaded(code) => log::info!("Startup complete, locale '{code}'"),
            LoadOutcome::FellBack {
                requested, active, ..
            } => log::warn!("Startup complete, locale '{requested}' unavailable, using '{active}'"),
            LoadOutcome::Failed(e) => {
                log::error!("Startup complete without translations: {e}");
            }
            LoadOutcome::Superseded(code) => {
                log::debug!("Startup load of '{code}' superseded by a language change");
            }
        }
        Ok(outcome)
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `preference_store` — where the chosen locale is persisted
///
/// # Optional
/// - `locale_store` — defaults to `BundledLocaleStore`
/// - `config` — defaults to `LocaleConfig::default()`
pub struct AppStateBuilder {
    locale_store: Option<Arc<dyn LocaleStore>>,
    preference_store: Option<Arc<dyn PreferenceStore>>,
    config: LocaleConfig,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            locale_store: None,
            preference_store: None,
            config: LocaleConfig::default(),
        }
    }

    #[must_use]
    pub fn locale_store(mut self, store: Arc<dyn LocaleStore>) -> Self {
        self.locale_store = Some(store);
        self
    }

    #[must_use]
    pub fn preference_store(mut self, store: Arc<dyn PreferenceStore>) -> Self {
        self.preference_store = Some(store);
        self
    }

    #[must_use]
    pub fn config(mut self, config: LocaleConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `I18nError::ConfigError` if the preference store is missing or
    /// the configuration is invalid.
    pub fn build(self) -> I18nResult<AppState> {
        self.config.validate()?;

        let preference_store = self.preference_store.ok_or_else(|| {
            I18nError::ConfigError("preference_store is required".to_string())
        })?;
        let locale_store = self
            .locale_store
            .unwrap_or_else(|| Arc::new(BundledLocaleStore::new()));

        let controller = Arc::new(LanguageController::new(
            locale_store,
            preference_store,
            self.config,
        ));

        Ok(AppState { controller })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
