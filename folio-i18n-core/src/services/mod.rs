//! Resolution and language control services

mod language_controller;
mod resolver;

pub use language_controller::LanguageController;
pub use resolver::resolve;
