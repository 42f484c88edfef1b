//! Payment method enum and accounting info record.

use serde::{Deserialize, Serialize};

/// Payment method selected on the account.
///
/// Closed set; "no method selected" is represented as
/// `Option<PaymentMethod>::None` by the records that carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Purchase on account (pay by invoice).
    Invoice,
    CreditCard,
    Sepa,
    Paypal,
}

impl PaymentMethod {
    /// Decodes the source system's numeric wire code.
    ///
    /// Unknown codes decode to `None`; display falls back to the
    /// "none selected" placeholder, same as an unset method.
    pub fn from_wire_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(PaymentMethod::Invoice),
            "1" => Some(PaymentMethod::CreditCard),
            "2" => Some(PaymentMethod::Sepa),
            "3" => Some(PaymentMethod::Paypal),
            _ => None,
        }
    }
}

/// Accounting info for the signed-in account.
///
/// Owned and mutated by account management elsewhere; read-only here.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "AccountingInfoRecord")]
pub struct AccountingInfo {
    pub payment_method: Option<PaymentMethod>,

    /// Opaque descriptor for the selected method, e.g. a masked card or
    /// account suffix. Normalized at construction: an empty wire string
    /// becomes `None`.
    pub payment_method_info: Option<String>,
}

impl AccountingInfo {
    pub fn new(payment_method: Option<PaymentMethod>, payment_method_info: Option<String>) -> Self {
        Self {
            payment_method,
            payment_method_info: payment_method_info.filter(|info| !info.is_empty()),
        }
    }
}

/// Wire shape of an accounting info record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountingInfoRecord {
    #[serde(default)]
    payment_method: Option<String>,
    #[serde(default)]
    payment_method_info: Option<String>,
}

impl From<AccountingInfoRecord> for AccountingInfo {
    fn from(record: AccountingInfoRecord) -> Self {
        AccountingInfo::new(
            record
                .payment_method
                .as_deref()
                .and_then(PaymentMethod::from_wire_code),
            record.payment_method_info,
        )
    }
}
