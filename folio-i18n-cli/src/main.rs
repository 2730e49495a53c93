//! `folio-i18n`: terminal language switcher for the Folio dashboard.
//!
//! Builds the same `AppState` the dashboard uses, runs the startup load,
//! then performs one command against the language controller.

mod cli;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use folio_i18n_app::adapters::{BundledLocaleStore, DirectoryLocaleStore, JsonFilePreferenceStore};
use folio_i18n_app::{AppState, AppStateBuilder};
use folio_i18n_core::traits::{LocaleStore, PreferenceStore};
use folio_i18n_core::types::{ControllerStatus, LoadOutcome, LocaleConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so command output stays clean on stdout.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let state = build_state(&cli).await?;
    state.run_startup().await?;
    let controller = &state.controller;

    match cli.command {
        Command::Show => {
            let status = match controller.status() {
                ControllerStatus::Ready => "ready",
                ControllerStatus::Uninitialized => "no translations loaded",
            };
            println!(
                "{} ({status}, fallback {})",
                controller.language(),
                controller.config().fallback_locale
            );
        }
        Command::Locales => {
            let active = controller.language();
            for info in controller.available_locales().await {
                let marker = if info.code == active { '*' } else { ' ' };
                println!("{marker} {:<8} {}", info.code, info.display_name);
            }
        }
        Command::Get { key, fallback } => {
            println!("{}", controller.t(&key, &fallback));
        }
        Command::Switch { code } => match controller.change_language(code).await {
            LoadOutcome::Loaded(active) => println!("Language set to {active}"),
            LoadOutcome::FellBack {
                requested,
                active,
                error,
            } => {
                eprintln!("{error}");
                println!("Language '{requested}' is unavailable, using {active}");
                return Ok(ExitCode::FAILURE);
            }
            LoadOutcome::Failed(error) => {
                eprintln!("{error}");
                println!("Language unchanged ({})", controller.language());
                return Ok(ExitCode::FAILURE);
            }
            LoadOutcome::Superseded(_) => {}
        },
    }

    Ok(ExitCode::SUCCESS)
}

async fn build_state(cli: &Cli) -> anyhow::Result<AppState> {
    let config = match &cli.config {
        Some(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read config {}", path.display()))?;
            LocaleConfig::from_json_str(&json)?
        }
        None => LocaleConfig::default(),
    };

    let locale_store: Arc<dyn LocaleStore> = match &cli.locales_dir {
        Some(dir) => {
            tracing::info!("Using locale directory {}", dir.display());
            Arc::new(DirectoryLocaleStore::new(dir))
        }
        None => Arc::new(BundledLocaleStore::new()),
    };

    let preference_store = match &cli.prefs {
        Some(path) => JsonFilePreferenceStore::new(path),
        None => JsonFilePreferenceStore::at_default_location()?,
    };
    tracing::info!("Using preference file {}", preference_store.path().display());
    let preference_store: Arc<dyn PreferenceStore> = Arc::new(preference_store);

    let state = AppStateBuilder::new()
        .locale_store(locale_store)
        .preference_store(preference_store)
        .config(config)
        .build()?;
    Ok(state)
}
