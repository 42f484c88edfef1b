//! Translator port for localized label lookup.

/// Port for resolving label keys to localized strings.
///
/// Resolution is the implementation's concern; a missing key must still
/// yield a displayable string, never an error.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

/// Label keys this crate resolves through the [`Translator`] port.
///
/// The key names come from the source system's localization table.
pub mod keys {
    pub const PAYMENT_METHOD_ON_ACCOUNT: &str = "paymentMethodOnAccount_label";
    pub const PAYMENT_METHOD_CREDIT_CARD: &str = "paymentMethodCreditCard_label";
    pub const SELECTION_NONE: &str = "comboBoxSelectionNone_msg";
    pub const ENDS_WITH: &str = "endsWith_label";
    pub const GROSS: &str = "gross_label";
    pub const NET: &str = "net_label";
    pub const PER_YEAR: &str = "pricing.perYear_label";
    pub const PER_MONTH: &str = "pricing.perMonth_label";
    pub const INVOICE_STATE_OPEN: &str = "invoiceStateOpen_label";
    pub const INVOICE_STATE_PAYMENT_FAILED: &str = "invoiceStatePaymentFailed_label";
    pub const INVOICE_STATE_PAID: &str = "invoiceStatePaid_label";
    pub const INVOICE_STATE_RESOLVING: &str = "invoiceStateResolving_label";
    pub const INVOICE_STATE_REFUNDED: &str = "invoiceStateRefunded_label";
    pub const INVOICE_STATE_CANCELLED: &str = "invoiceStateCancelled_label";

    /// Every key above, for translation-completeness checks.
    pub const ALL: &[&str] = &[
        PAYMENT_METHOD_ON_ACCOUNT,
        PAYMENT_METHOD_CREDIT_CARD,
        SELECTION_NONE,
        ENDS_WITH,
        GROSS,
        NET,
        PER_YEAR,
        PER_MONTH,
        INVOICE_STATE_OPEN,
        INVOICE_STATE_PAYMENT_FAILED,
        INVOICE_STATE_PAID,
        INVOICE_STATE_RESOLVING,
        INVOICE_STATE_REFUNDED,
        INVOICE_STATE_CANCELLED,
    ];
}
