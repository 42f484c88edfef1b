//! Built-in English translation table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::ports::{keys, Translator};

static LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (keys::PAYMENT_METHOD_ON_ACCOUNT, "Purchase on account"),
        (keys::PAYMENT_METHOD_CREDIT_CARD, "Credit card"),
        (keys::SELECTION_NONE, "None"),
        (keys::ENDS_WITH, "ends with"),
        (keys::GROSS, "gross"),
        (keys::NET, "net"),
        (keys::PER_YEAR, "per year"),
        (keys::PER_MONTH, "per month"),
        (keys::INVOICE_STATE_OPEN, "Open"),
        (keys::INVOICE_STATE_PAYMENT_FAILED, "Payment failed"),
        (keys::INVOICE_STATE_PAID, "Paid"),
        (keys::INVOICE_STATE_RESOLVING, "Resolving"),
        (keys::INVOICE_STATE_REFUNDED, "Refunded"),
        (keys::INVOICE_STATE_CANCELLED, "Cancelled"),
    ])
});

/// English fallback translator backed by a static table.
///
/// Hosts with a full localization stack implement [`Translator`] themselves;
/// this adapter serves tests and English-only builds. Unknown keys resolve
/// to the key itself so the screen still shows something traceable.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticTranslator;

impl Translator for StaticTranslator {
    fn translate(&self, key: &str) -> String {
        LABELS.get(key).copied().unwrap_or(key).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_key_the_crate_uses() {
        for &key in keys::ALL {
            let label = StaticTranslator.translate(key);
            assert_ne!(label, key, "missing label for {key}");
        }
    }

    #[test]
    fn unknown_key_falls_back_to_the_key() {
        assert_eq!(StaticTranslator.translate("missing_label"), "missing_label");
    }
}
