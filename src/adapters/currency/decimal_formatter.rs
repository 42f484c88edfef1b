//! Two-decimal currency formatter.

use crate::config::DisplayConfig;
use crate::ports::CurrencyFormatter;

/// Renders amounts with two decimals and the configured currency symbol.
///
/// NaN amounts (from malformed wire data) render as `"NaN"`; the value is
/// passed through, not validated here.
pub struct DecimalCurrencyFormatter {
    config: DisplayConfig,
}

impl DecimalCurrencyFormatter {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }
}

impl CurrencyFormatter for DecimalCurrencyFormatter {
    fn format_amount(&self, value: f64, with_symbol: bool) -> String {
        let amount = format!("{value:.2}");
        if !with_symbol {
            return amount;
        }
        if self.config.symbol_before_amount {
            format!("{}{}", self.config.currency_symbol, amount)
        } else {
            format!("{} {}", amount, self.config.currency_symbol)
        }
    }
}
