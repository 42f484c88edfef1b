//! Label resolution for payment methods and invoice statuses.

use std::sync::Arc;

use tracing::debug;

use crate::domain::billing::{AccountingInfo, Invoice, InvoiceStatus, PaymentMethod};
use crate::ports::{keys, Translator};

/// Resolves billing enums to display strings.
///
/// Every operation is total: unknown or unset values fall back to a
/// placeholder or an empty string, never an error.
pub struct BillingLabels {
    translator: Arc<dyn Translator>,
}

impl BillingLabels {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    /// Display name of a payment method.
    ///
    /// SEPA and PayPal are brand names and stay untranslated. An unset
    /// method renders as the "none selected" placeholder in angle brackets.
    pub fn payment_method_name(&self, method: Option<PaymentMethod>) -> String {
        match method {
            Some(PaymentMethod::Invoice) => {
                self.translator.translate(keys::PAYMENT_METHOD_ON_ACCOUNT)
            }
            Some(PaymentMethod::CreditCard) => {
                self.translator.translate(keys::PAYMENT_METHOD_CREDIT_CARD)
            }
            Some(PaymentMethod::Sepa) => "SEPA".to_string(),
            Some(PaymentMethod::Paypal) => "PayPal".to_string(),
            None => format!("<{}>", self.translator.translate(keys::SELECTION_NONE)),
        }
    }

    /// Descriptor text for the selected payment method.
    ///
    /// Card suffixes get an "ends with" prefix; every other method shows
    /// the descriptor as-is. Empty when no descriptor is set.
    pub fn payment_method_info_text(&self, info: &AccountingInfo) -> String {
        match &info.payment_method_info {
            Some(text) if info.payment_method == Some(PaymentMethod::CreditCard) => {
                format!("{} {}", self.translator.translate(keys::ENDS_WITH), text)
            }
            Some(text) => text.clone(),
            None => String::new(),
        }
    }

    /// Display text for an invoice's status.
    ///
    /// Statuses without a label render as an empty string.
    pub fn invoice_status_text(&self, invoice: &Invoice) -> String {
        match Self::status_label_key(invoice.status) {
            Some(key) => self.translator.translate(key),
            None => {
                debug!(status = ?invoice.status, "invoice status has no display label");
                String::new()
            }
        }
    }

    /// Grouped status-to-label mapping. Exhaustive so that a new status
    /// forces a decision here.
    fn status_label_key(status: InvoiceStatus) -> Option<&'static str> {
        use InvoiceStatus::*;
        match status {
            Created | PublishedForAutomatic | PublishedForManual => {
                Some(keys::INVOICE_STATE_OPEN)
            }
            DebitFailed | FirstReminder | SecondReminder => {
                Some(keys::INVOICE_STATE_PAYMENT_FAILED)
            }
            Paid => Some(keys::INVOICE_STATE_PAID),
            Disputed => Some(keys::INVOICE_STATE_RESOLVING),
            Refunded | DisputeAccepted => Some(keys::INVOICE_STATE_REFUNDED),
            Cancelled => Some(keys::INVOICE_STATE_CANCELLED),
            PartnerManaged => None,
        }
    }
}
