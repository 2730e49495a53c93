//! Language controller - owns the active locale

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::error::{I18nError, I18nResult, LocaleLoadError};
use crate::services::resolve;
use crate::traits::{LocaleStore, PreferenceStore};
use crate::types::{
    ControllerStatus, LoadOutcome, LocaleCode, LocaleConfig, LocaleInfo, LocaleSnapshot,
    TranslationTable,
};

/// Language controller
///
/// Sole writer of the active (locale, table) pair. Consumers read it through
/// [`t`](Self::t), [`language`](Self::language) and friends, or watch it via
/// [`subscribe`](Self::subscribe).
///
/// Every switch takes a generation ticket before loading. A finished load
/// only becomes active if no newer switch has started meanwhile, so a slow
/// stale load cannot overwrite a later selection.
pub struct LanguageController {
    locale_store: Arc<dyn LocaleStore>,
    preference_store: Arc<dyn PreferenceStore>,
    config: LocaleConfig,
    state: watch::Sender<LocaleSnapshot>,
    generation: AtomicU64,
    initialized: AtomicBool,
}

impl LanguageController {
    /// Create a controller in the `Uninitialized` state
    #[must_use]
    pub fn new(
        locale_store: Arc<dyn LocaleStore>,
        preference_store: Arc<dyn PreferenceStore>,
        config: LocaleConfig,
    ) -> Self {
        let (state, _) = watch::channel(LocaleSnapshot::uninitialized(
            config.default_locale.clone(),
        ));
        Self {
            locale_store,
            preference_store,
            config,
            state,
            generation: AtomicU64::new(0),
            initialized: AtomicBool::new(false),
        }
    }

    /// Load the persisted locale, or the configured default if none is stored.
    ///
    /// May be called once per controller. Lookups made before it completes
    /// return fallbacks.
    pub async fn initialize(&self) -> I18nResult<LoadOutcome> {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return Err(I18nError::AlreadyInitialized);
        }

        let code = match self
            .preference_store
            .get(&self.config.preference_key)
            .await
        {
            Ok(Some(saved)) if !saved.is_empty() => LocaleCode::from(saved),
            Ok(_) => self.config.default_locale.clone(),
            Err(e) => {
                log::warn!(
                    "Failed to read language preference, using default '{}': {e}",
                    self.config.default_locale
                );
                self.config.default_locale.clone()
            }
        };

        log::info!("Initializing language controller with locale '{code}'");
        Ok(self.set_locale(code).await)
    }

    /// Persist `code` as the preferred locale, then switch to it.
    ///
    /// Failing to persist is logged and does not stop the switch. Requesting
    /// the active locale again simply reloads it.
    pub async fn change_language(&self, code: impl Into<LocaleCode>) -> LoadOutcome {
        let code = code.into();

        if let Err(e) = self
            .preference_store
            .set(&self.config.preference_key, code.as_str())
            .await
        {
            if e.is_expected() {
                log::warn!("Failed to persist language preference '{code}': {e}");
            } else {
                log::error!("Failed to persist language preference '{code}': {e}");
            }
        }

        self.set_locale(code).await
    }

    /// Load `code` and make it active, retrying the fallback locale once on failure.
    async fn set_locale(&self, code: LocaleCode) -> LoadOutcome {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let error = match self.locale_store.load(&code).await {
            Ok(table) => return self.commit(ticket, code, table),
            Err(e) => e,
        };

        if !self.is_current(ticket) {
            log::debug!("Dropping failed load of '{code}', a newer switch is in progress");
            return LoadOutcome::Superseded(code);
        }

        let fallback = self.config.fallback_locale.clone();
        if code == fallback {
            self.report_failure(&error);
            return LoadOutcome::Failed(error);
        }

        log::warn!("{error}; falling back to '{fallback}'");
        match self.locale_store.load(&fallback).await {
            Ok(table) => match self.commit(ticket, fallback, table) {
                LoadOutcome::Loaded(active) => LoadOutcome::FellBack {
                    requested: code,
                    active,
                    error,
                },
                other => other,
            },
            Err(fallback_error) => {
                if !self.is_current(ticket) {
                    return LoadOutcome::Superseded(fallback);
                }
                self.report_failure(&error);
                self.report_failure(&fallback_error);
                LoadOutcome::Failed(error)
            }
        }
    }

    fn commit(&self, ticket: u64, code: LocaleCode, table: TranslationTable) -> LoadOutcome {
        let leaves = table.leaf_count();
        let committed = self.state.send_if_modified(|state| {
            if !self.is_current(ticket) {
                return false;
            }
            *state = LocaleSnapshot::ready(code.clone(), table);
            true
        });

        if committed {
            log::info!("Locale '{code}' active ({leaves} strings)");
            LoadOutcome::Loaded(code)
        } else {
            log::debug!("Dropping stale load of '{code}', a newer switch is in progress");
            LoadOutcome::Superseded(code)
        }
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    fn report_failure(&self, error: &LocaleLoadError) {
        log::error!(
            "{error}; keeping locale '{}'",
            self.state.borrow().language
        );
    }

    /// Translate `key` against the active table.
    ///
    /// See [`resolve`] for the fallback policy.
    #[must_use]
    pub fn t(&self, key: &str, fallback: &str) -> String {
        let state = self.state.borrow();
        resolve(&state.table, key, fallback).to_string()
    }

    /// Translate `key` with no fallback text (a miss returns the key itself)
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.t(key, "")
    }

    /// Active locale code
    #[must_use]
    pub fn language(&self) -> LocaleCode {
        self.state.borrow().language.clone()
    }

    /// Active translation table
    #[must_use]
    pub fn translations(&self) -> Arc<TranslationTable> {
        Arc::clone(&self.state.borrow().table)
    }

    #[must_use]
    pub fn status(&self) -> ControllerStatus {
        self.state.borrow().status
    }

    /// Copy of the whole active state
    #[must_use]
    pub fn snapshot(&self) -> LocaleSnapshot {
        self.state.borrow().clone()
    }

    /// Receive every state replacement from now on
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LocaleSnapshot> {
        self.state.subscribe()
    }

    /// Locales offered by the underlying store
    pub async fn available_locales(&self) -> Vec<LocaleInfo> {
        self.locale_store.available().await
    }

    #[must_use]
    pub fn config(&self) -> &LocaleConfig {
        &self.config
    }
}
