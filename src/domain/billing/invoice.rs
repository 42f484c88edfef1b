//! Invoice record and its lifecycle status enum.

use serde::{Deserialize, Serialize};

/// Invoice lifecycle status.
///
/// Mirrors the source system's invoice state machine. Several states share
/// one display label; `PartnerManaged` has no label at all and renders as an
/// empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Created,
    /// Published, payment will be collected by automatic debit.
    PublishedForAutomatic,
    /// Published, customer pays manually.
    PublishedForManual,
    Paid,
    DebitFailed,
    Disputed,
    Cancelled,
    /// Handled by a reseller partner; never shown with a status text.
    PartnerManaged,
    FirstReminder,
    Refunded,
    DisputeAccepted,
    SecondReminder,
}

impl InvoiceStatus {
    /// Decodes the source system's numeric wire code.
    pub fn from_wire_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(InvoiceStatus::Created),
            "1" => Some(InvoiceStatus::PublishedForAutomatic),
            "2" => Some(InvoiceStatus::PublishedForManual),
            "3" => Some(InvoiceStatus::Paid),
            "4" => Some(InvoiceStatus::DebitFailed),
            "5" => Some(InvoiceStatus::Disputed),
            "6" => Some(InvoiceStatus::Cancelled),
            "7" => Some(InvoiceStatus::PartnerManaged),
            "8" => Some(InvoiceStatus::FirstReminder),
            "9" => Some(InvoiceStatus::Refunded),
            "10" => Some(InvoiceStatus::DisputeAccepted),
            "11" => Some(InvoiceStatus::SecondReminder),
            _ => None,
        }
    }
}

/// Invoice as shown in the billing screens. Read-only here.
#[derive(Debug, Clone, Deserialize)]
pub struct Invoice {
    pub status: InvoiceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_wire_codes() {
        assert_eq!(
            InvoiceStatus::from_wire_code("0"),
            Some(InvoiceStatus::Created)
        );
        assert_eq!(
            InvoiceStatus::from_wire_code("7"),
            Some(InvoiceStatus::PartnerManaged)
        );
        assert_eq!(
            InvoiceStatus::from_wire_code("11"),
            Some(InvoiceStatus::SecondReminder)
        );
    }

    #[test]
    fn unknown_wire_code_decodes_to_none() {
        assert_eq!(InvoiceStatus::from_wire_code("12"), None);
        assert_eq!(InvoiceStatus::from_wire_code("paid"), None);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&InvoiceStatus::DebitFailed).unwrap();
        assert_eq!(json, "\"debit_failed\"");
    }
}
