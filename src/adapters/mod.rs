//! Adapters - Implementations of port interfaces.
//!
//! - `i18n` - built-in English label table
//! - `currency` - decimal amount rendering

pub mod currency;
pub mod i18n;

pub use currency::DecimalCurrencyFormatter;
pub use i18n::StaticTranslator;
