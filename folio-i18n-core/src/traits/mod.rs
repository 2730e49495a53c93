//! Storage layer abstraction trait definition

mod locale_store;
mod preference_store;

pub use locale_store::LocaleStore;
pub use preference_store::{InMemoryPreferenceStore, PreferenceStore};
