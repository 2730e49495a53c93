//! Platform-agnostic locale and preference adapters.

mod bundled_locale_store;
mod directory_locale_store;
mod json_preference_store;

pub use bundled_locale_store::{bundled_display_name, BundledLocaleStore};
pub use directory_locale_store::DirectoryLocaleStore;
pub use json_preference_store::JsonFilePreferenceStore;
