//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! display logic and the host application. Adapters implement these ports.
//!
//! - `Translator` - localized label lookup
//! - `CurrencyFormatter` - locale-aware amount rendering
//! - `AccountTierProvider` - read-only view of the signed-in account's tier
//! - `PlatformContextProvider` - read-only purchase restrictions of the runtime
//! - `UpgradeDialog` - "not available on the free plan" explainer

mod account_tier;
mod currency_formatter;
mod platform_context;
mod translator;
mod upgrade_dialog;

pub use account_tier::AccountTierProvider;
pub use currency_formatter::CurrencyFormatter;
pub use platform_context::PlatformContextProvider;
pub use translator::{keys, Translator};
pub use upgrade_dialog::UpgradeDialog;
