//! Test helper module
//!
//! Provides mock stores and factory methods for controller tests.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::{Notify, RwLock};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

use crate::error::{I18nError, I18nResult, LocaleLoadError};
use crate::services::LanguageController;
use crate::traits::{LocaleStore, PreferenceStore};
use crate::types::{LocaleCode, LocaleConfig, LocaleInfo, TranslationTable};

pub const EN_JSON: &str = r#"{
    "header": { "title": "Stocks" },
    "portfolio": { "title": "My Portfolio", "summary": { "totalCompanies": "Total companies" } },
    "common": { "loading": "Loading..." }
}"#;

pub const MN_JSON: &str = r#"{
    "header": { "title": "Хувьцаа" },
    "portfolio": { "title": "Миний багц" },
    "common": { "loading": "Ачааллаж байна..." }
}"#;

// ===== MockLocaleStore =====

/// Holds back a load until the test releases it.
#[derive(Default)]
pub struct LoadGate {
    /// Notified once the gated load has started
    pub entered: Notify,
    /// Notify to let the gated load finish
    pub release: Notify,
}

/// Locale store serving raw JSON, so malformed resources can be tested too.
pub struct MockLocaleStore {
    resources: BTreeMap<LocaleCode, String>,
    gates: RwLock<HashMap<LocaleCode, Arc<LoadGate>>>,
    loads: RwLock<Vec<LocaleCode>>,
}

impl MockLocaleStore {
    pub fn new() -> Self {
        Self {
            resources: BTreeMap::new(),
            gates: RwLock::new(HashMap::new()),
            loads: RwLock::new(Vec::new()),
        }
    }

    pub fn with_locale(mut self, code: &str, json: &str) -> Self {
        self.resources.insert(LocaleCode::from(code), json.to_string());
        self
    }

    /// Gate every subsequent load of `code`
    pub async fn gate(&self, code: &str) -> Arc<LoadGate> {
        let gate = Arc::new(LoadGate::default());
        self.gates
            .write()
            .await
            .insert(LocaleCode::from(code), Arc::clone(&gate));
        gate
    }

    /// Codes requested so far, in order
    pub async fn loads(&self) -> Vec<LocaleCode> {
        self.loads.read().await.clone()
    }
}

#[async_trait]
impl LocaleStore for MockLocaleStore {
    async fn load(&self, code: &LocaleCode) -> Result<TranslationTable, LocaleLoadError> {
        self.loads.write().await.push(code.clone());

        let gate = self.gates.read().await.get(code).cloned();
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }

        let json = self
            .resources
            .get(code)
            .ok_or_else(|| LocaleLoadError::not_found(code))?;
        TranslationTable::from_json_str(json)
            .map_err(|e| LocaleLoadError::malformed(code, e.to_string()))
    }

    async fn available(&self) -> Vec<LocaleInfo> {
        self.resources
            .keys()
            .map(|code| LocaleInfo::new(code.clone(), code.to_string()))
            .collect()
    }
}

/// `en` and `mn` with a few dashboard strings each
pub fn stocks_store() -> MockLocaleStore {
    MockLocaleStore::new()
        .with_locale("en", EN_JSON)
        .with_locale("mn", MN_JSON)
}

// ===== MockPreferenceStore =====

pub struct MockPreferenceStore {
    values: RwLock<HashMap<String, String>>,
    /// When Some, `get` fails with this message
    get_error: RwLock<Option<String>>,
    /// When Some, `set` fails with this message
    set_error: RwLock<Option<String>>,
}

impl MockPreferenceStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            get_error: RwLock::new(None),
            set_error: RwLock::new(None),
        }
    }

    pub async fn set_get_error(&self, err: Option<String>) {
        *self.get_error.write().await = err;
    }

    pub async fn set_set_error(&self, err: Option<String>) {
        *self.set_error.write().await = err;
    }
}

#[async_trait]
impl PreferenceStore for MockPreferenceStore {
    async fn get(&self, key: &str) -> I18nResult<Option<String>> {
        if let Some(ref msg) = *self.get_error.read().await {
            return Err(I18nError::StorageError(msg.clone()));
        }
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> I18nResult<()> {
        if let Some(ref msg) = *self.set_error.read().await {
            return Err(I18nError::StorageError(msg.clone()));
        }
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ===== Factory =====

/// Controller with default config over the given locale store and an empty
/// preference store.
pub fn create_test_controller(
    store: MockLocaleStore,
) -> (
    Arc<LanguageController>,
    Arc<MockLocaleStore>,
    Arc<MockPreferenceStore>,
) {
    let store = Arc::new(store);
    let prefs = Arc::new(MockPreferenceStore::new());
    let controller = Arc::new(LanguageController::new(
        Arc::clone(&store) as Arc<dyn LocaleStore>,
        Arc::clone(&prefs) as Arc<dyn PreferenceStore>,
        LocaleConfig::default(),
    ));
    (controller, store, prefs)
}

// ===== Log capture =====

/// Collects `log` records emitted on the current thread while alive.
pub struct CapturedLogs {
    records: Arc<Mutex<Vec<(tracing::Level, String)>>>,
    _guard: tracing::subscriber::DefaultGuard,
}

impl CapturedLogs {
    /// Messages logged at exactly `level`, oldest first
    pub fn messages_at(&self, level: tracing::Level) -> Vec<String> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

struct CaptureLayer {
    records: Arc<Mutex<Vec<(tracing::Level, String)>>>,
}

struct MessageVisitor(Option<String>);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.records
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push((*event.metadata().level(), message));
        }
    }
}

/// Start capturing. `log` records are bridged into a thread-local tracing
/// subscriber, so only work driven on this thread is seen; `#[tokio::test]`
/// runs spawned tasks on the test thread too.
pub fn capture_logs() -> CapturedLogs {
    // Another test may already have installed the bridge.
    let _ = tracing_log::LogTracer::init();

    let records = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(CaptureLayer {
        records: Arc::clone(&records),
    });
    CapturedLogs {
        records,
        _guard: tracing::subscriber::set_default(subscriber),
    }
}
