//! Upgrade dialog port.

/// Port for the "not available on the free plan" explainer dialog.
pub trait UpgradeDialog: Send + Sync {
    /// Shows the explainer. Fire-and-forget; the wording depends on whether
    /// the locked feature is part of the premium plan.
    fn show_upgrade_required(&self, included_in_premium: bool);
}
