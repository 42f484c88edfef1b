//! Price formatting for billing screens.

use std::sync::Arc;

use crate::domain::billing::PriceData;
use crate::ports::{keys, CurrencyFormatter, Translator};

/// Formats prices into localized sentence fragments.
pub struct PriceDisplay {
    translator: Arc<dyn Translator>,
    currency: Arc<dyn CurrencyFormatter>,
}

impl PriceDisplay {
    pub fn new(translator: Arc<dyn Translator>, currency: Arc<dyn CurrencyFormatter>) -> Self {
        Self {
            translator,
            currency,
        }
    }

    /// Formats a price quote's total with its cadence and tax note.
    pub fn format_price_data(&self, price_data: &PriceData) -> String {
        self.format_price(
            price_data.price,
            price_data.payment_interval,
            price_data.tax_included,
        )
    }

    /// Produces `"<amount> <per year|per month> (<gross|net>)"`.
    ///
    /// Exactly 12 months is yearly; every other interval reads as monthly.
    /// This is a two-way display branch, not a calendar model.
    pub fn format_price(&self, price: f64, interval_months: u32, tax_included: bool) -> String {
        let net_or_gross = self
            .translator
            .translate(if tax_included { keys::GROSS } else { keys::NET });
        let cadence = self.translator.translate(if interval_months == 12 {
            keys::PER_YEAR
        } else {
            keys::PER_MONTH
        });
        format!(
            "{} {} ({})",
            self.currency.format_amount(price, true),
            cadence,
            net_or_gross
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    struct KeyEchoTranslator;

    impl Translator for KeyEchoTranslator {
        fn translate(&self, key: &str) -> String {
            format!("[{key}]")
        }
    }

    struct PlainFormatter;

    impl CurrencyFormatter for PlainFormatter {
        fn format_amount(&self, value: f64, with_symbol: bool) -> String {
            if with_symbol {
                format!("{value:.2} EUR")
            } else {
                format!("{value:.2}")
            }
        }
    }

    fn display() -> PriceDisplay {
        PriceDisplay::new(Arc::new(KeyEchoTranslator), Arc::new(PlainFormatter))
    }

    #[test]
    fn yearly_gross_price() {
        assert_eq!(
            display().format_price(12.0, 12, true),
            "12.00 EUR [pricing.perYear_label] ([gross_label])"
        );
    }

    #[test]
    fn monthly_net_price() {
        assert_eq!(
            display().format_price(12.0, 1, false),
            "12.00 EUR [pricing.perMonth_label] ([net_label])"
        );
    }

    #[test]
    fn unexpected_interval_reads_as_monthly() {
        let formatted = display().format_price(4.8, 3, false);
        assert!(formatted.contains("[pricing.perMonth_label]"));
    }

    #[test]
    fn price_data_fields_are_passed_through() {
        let data: PriceData = serde_json::from_str(
            r#"{"taxIncluded": true, "paymentInterval": "12", "price": "14.40", "items": []}"#,
        )
        .unwrap();
        assert_eq!(
            display().format_price_data(&data),
            "14.40 EUR [pricing.perYear_label] ([gross_label])"
        );
    }

    proptest! {
        #[test]
        fn every_interval_other_than_twelve_is_monthly(interval in 0u32..1000) {
            prop_assume!(interval != 12);
            let formatted = display().format_price(1.0, interval, false);
            prop_assert!(formatted.contains("[pricing.perMonth_label]"));
        }
    }
}
