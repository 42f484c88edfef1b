//! Currency formatter port.

/// Port for locale-aware amount rendering.
///
/// `with_symbol` controls whether the currency symbol is included.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, value: f64, with_symbol: bool) -> String;
}
