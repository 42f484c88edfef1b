//! Account tier port.

/// Read-only view of the signed-in account's tier.
///
/// Injected instead of read from ambient session state so gating logic can
/// be tested without a live login.
pub trait AccountTierProvider: Send + Sync {
    /// True when the signed-in account is on the free tier.
    fn is_free_account(&self) -> bool;
}
