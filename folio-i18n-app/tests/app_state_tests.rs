#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `AppStateBuilder` and the startup sequence.

use std::sync::Arc;

use folio_i18n_app::adapters::{DirectoryLocaleStore, JsonFilePreferenceStore};
use folio_i18n_app::AppStateBuilder;
use folio_i18n_core::error::I18nError;
use folio_i18n_core::traits::{InMemoryPreferenceStore, PreferenceStore};
use folio_i18n_core::types::{ControllerStatus, LoadOutcome, LocaleCode, LocaleConfig};

#[test]
fn build_requires_preference_store() {
    let result = AppStateBuilder::new().build();
    assert!(matches!(result, Err(I18nError::ConfigError(_))));
}

#[test]
fn build_rejects_invalid_config() {
    let config = LocaleConfig {
        preference_key: String::new(),
        ..LocaleConfig::default()
    };
    let result = AppStateBuilder::new()
        .preference_store(Arc::new(InMemoryPreferenceStore::new()))
        .config(config)
        .build();
    assert!(matches!(result, Err(I18nError::ConfigError(_))));
}

#[tokio::test]
async fn startup_uses_bundled_default_locale() {
    let state = AppStateBuilder::new()
        .preference_store(Arc::new(InMemoryPreferenceStore::new()))
        .build()
        .unwrap();

    assert_eq!(state.controller.status(), ControllerStatus::Uninitialized);
    assert_eq!(state.controller.t("common.loading", "..."), "...");

    let outcome = state.run_startup().await.unwrap();

    assert_eq!(outcome, LoadOutcome::Loaded(LocaleCode::from("mn")));
    assert_eq!(state.controller.tr("portfolio.title"), "Миний багц");
    assert_eq!(state.controller.tr("portfolio.nope"), "portfolio.nope");
}

#[tokio::test]
async fn startup_twice_is_rejected() {
    let state = AppStateBuilder::new()
        .preference_store(Arc::new(InMemoryPreferenceStore::new()))
        .build()
        .unwrap();

    state.run_startup().await.unwrap();
    assert!(matches!(
        state.run_startup().await,
        Err(I18nError::AlreadyInitialized)
    ));
}

#[tokio::test]
async fn startup_with_missing_default_falls_back_to_english() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("en.json"),
        r#"{ "header": { "title": "Stocks" } }"#,
    )
    .unwrap();

    let state = AppStateBuilder::new()
        .locale_store(Arc::new(DirectoryLocaleStore::new(tmp.path())))
        .preference_store(Arc::new(InMemoryPreferenceStore::new()))
        .build()
        .unwrap();

    let outcome = state.run_startup().await.unwrap();

    assert!(matches!(outcome, LoadOutcome::FellBack { .. }));
    assert_eq!(state.controller.language().as_str(), "en");
    assert_eq!(state.controller.t("header.title", ""), "Stocks");
}

#[tokio::test]
async fn language_choice_survives_restart() {
    let tmp = tempfile::tempdir().unwrap();
    let prefs_path = tmp.path().join("preferences.json");

    let first = AppStateBuilder::new()
        .preference_store(Arc::new(JsonFilePreferenceStore::new(&prefs_path)))
        .build()
        .unwrap();
    first.run_startup().await.unwrap();
    first.controller.change_language("en").await;
    assert_eq!(first.controller.tr("header.title"), "Stocks");

    let second = AppStateBuilder::new()
        .preference_store(Arc::new(JsonFilePreferenceStore::new(&prefs_path)))
        .build()
        .unwrap();
    second.run_startup().await.unwrap();

    assert_eq!(second.controller.language().as_str(), "en");
    assert_eq!(second.controller.tr("header.title"), "Stocks");
}

#[tokio::test]
async fn custom_preference_key_is_honoured() {
    let prefs = Arc::new(InMemoryPreferenceStore::with_value("ui.locale", "en"));
    let config = LocaleConfig {
        preference_key: "ui.locale".to_string(),
        ..LocaleConfig::default()
    };

    let state = AppStateBuilder::new()
        .preference_store(Arc::clone(&prefs) as Arc<dyn PreferenceStore>)
        .config(config)
        .build()
        .unwrap();
    state.run_startup().await.unwrap();
    assert_eq!(state.controller.language().as_str(), "en");

    state.controller.change_language("mn").await;
    assert_eq!(prefs.get("ui.locale").await.unwrap().as_deref(), Some("mn"));
    assert_eq!(prefs.get("language").await.unwrap(), None);
}

#[tokio::test]
async fn unknown_language_reverts_to_english_table() {
    let state = AppStateBuilder::new()
        .preference_store(Arc::new(InMemoryPreferenceStore::new()))
        .build()
        .unwrap();
    state.run_startup().await.unwrap();

    let outcome = state.controller.change_language("xx").await;

    assert_eq!(outcome.active().map(LocaleCode::as_str), Some("en"));
    assert_eq!(state.controller.language().as_str(), "en");
    assert_eq!(state.controller.tr("metrics.valuation"), "Valuation");
}
