//! Command-line definitions

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Inspect and switch the Folio dashboard language
#[derive(Debug, Parser)]
#[command(name = "folio-i18n", version, about)]
pub struct Cli {
    /// Read locales from `<DIR>/<code>.json` instead of the bundled tables
    #[arg(long, global = true, env = "FOLIO_LOCALES_DIR", value_name = "DIR")]
    pub locales_dir: Option<PathBuf>,

    /// Preference file (defaults to the platform config directory)
    #[arg(long, global = true, env = "FOLIO_PREFS", value_name = "FILE")]
    pub prefs: Option<PathBuf>,

    /// JSON file with `defaultLocale`, `fallbackLocale`, `preferenceKey`
    #[arg(long, global = true, env = "FOLIO_I18N_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the active language
    Show,
    /// List the languages that can be selected
    Locales,
    /// Translate a dotted key-path
    Get {
        /// Key-path, e.g. `portfolio.summary.totalCompanies`
        key: String,
        /// Text to print when the key does not resolve
        #[arg(long, default_value = "")]
        fallback: String,
    },
    /// Persist and activate a language
    Switch {
        /// Locale code, e.g. `en` or `mn`
        code: String,
    },
}
