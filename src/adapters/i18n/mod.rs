//! Localization adapters.

mod static_translator;

pub use static_translator::StaticTranslator;
