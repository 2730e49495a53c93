//! Type definitions

mod config;
mod locale;
mod snapshot;
mod table;

pub use config::LocaleConfig;
pub use locale::{LocaleCode, LocaleInfo};
pub use snapshot::{ControllerStatus, LoadOutcome, LocaleSnapshot};
pub use table::{TranslationTable, TranslationValue};
