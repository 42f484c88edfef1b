//! Tier-gated purchase action construction.
//!
//! Buy buttons on billing screens must not run their purchase flow for free
//! accounts, or inside mobile app contexts whose store rules forbid it. The
//! factory here wraps the caller's action so the restricted paths show the
//! upgrade explainer instead.

use std::sync::Arc;

use crate::ports::{AccountTierProvider, PlatformContextProvider, UpgradeDialog};

/// Zero-argument click action supplied by the caller.
pub type ClickHandler = Box<dyn Fn() + Send + Sync>;

/// Opaque icon reference, resolved by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon(pub String);

impl Icon {
    pub fn named(name: impl Into<String>) -> Self {
        Icon(name.into())
    }
}

/// A constructed button. Rendering is the view layer's concern; this type
/// only carries the label key, icon, and the (possibly gated) handler.
pub struct Button {
    pub label: String,
    pub icon: Icon,
    click: ClickHandler,
}

impl Button {
    pub fn click(&self) {
        (self.click)()
    }
}

/// Attributes-only variant for view code that builds its own button.
pub struct ButtonAttrs {
    pub label: String,
    pub icon: Icon,
    pub click: ClickHandler,
}

/// Builds buttons whose action only runs for paying accounts on
/// unrestricted platforms.
pub struct GatedActionFactory {
    account_tier: Arc<dyn AccountTierProvider>,
    platform: Arc<dyn PlatformContextProvider>,
    upgrade_dialog: Arc<dyn UpgradeDialog>,
}

impl GatedActionFactory {
    pub fn new(
        account_tier: Arc<dyn AccountTierProvider>,
        platform: Arc<dyn PlatformContextProvider>,
        upgrade_dialog: Arc<dyn UpgradeDialog>,
    ) -> Self {
        Self {
            account_tier,
            platform,
            upgrade_dialog,
        }
    }

    /// Button whose buy action is replaced by the upgrade explainer for
    /// free accounts and restricted mobile contexts.
    pub fn not_available_for_free_button(
        &self,
        label: impl Into<String>,
        buy_action: ClickHandler,
        icon: Icon,
        included_in_premium: bool,
    ) -> Button {
        Button {
            label: label.into(),
            icon,
            click: self.guard(buy_action, included_in_premium),
        }
    }

    /// Attributes-only variant of [`Self::not_available_for_free_button`].
    pub fn not_available_for_free_button_attrs(
        &self,
        label: impl Into<String>,
        buy_action: ClickHandler,
        icon: Icon,
        included_in_premium: bool,
    ) -> ButtonAttrs {
        ButtonAttrs {
            label: label.into(),
            icon,
            click: self.guard(buy_action, included_in_premium),
        }
    }

    /// The gate itself. Tier and platform are read per click, not captured
    /// at construction, so an upgrade takes effect without rebuilding the
    /// button.
    fn guard(&self, buy_action: ClickHandler, included_in_premium: bool) -> ClickHandler {
        let account_tier = Arc::clone(&self.account_tier);
        let platform = Arc::clone(&self.platform);
        let upgrade_dialog = Arc::clone(&self.upgrade_dialog);
        Box::new(move || {
            if account_tier.is_free_account() || platform.is_restricted_mobile_context() {
                upgrade_dialog.show_upgrade_required(included_in_premium);
            } else {
                buy_action();
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FixedTier(bool);

    impl AccountTierProvider for FixedTier {
        fn is_free_account(&self) -> bool {
            self.0
        }
    }

    struct FixedPlatform(bool);

    impl PlatformContextProvider for FixedPlatform {
        fn is_restricted_mobile_context(&self) -> bool {
            self.0
        }
    }

    /// Records every explainer invocation with its premium flag.
    #[derive(Default)]
    struct RecordingDialog {
        calls: Mutex<Vec<bool>>,
    }

    impl UpgradeDialog for RecordingDialog {
        fn show_upgrade_required(&self, included_in_premium: bool) {
            self.calls.lock().unwrap().push(included_in_premium);
        }
    }

    fn factory(
        free_account: bool,
        restricted_platform: bool,
    ) -> (GatedActionFactory, Arc<RecordingDialog>) {
        let dialog = Arc::new(RecordingDialog::default());
        let factory = GatedActionFactory::new(
            Arc::new(FixedTier(free_account)),
            Arc::new(FixedPlatform(restricted_platform)),
            dialog.clone(),
        );
        (factory, dialog)
    }

    fn counting_action() -> (ClickHandler, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let action = {
            let count = count.clone();
            Box::new(move || {
                count.fetch_add(1, Ordering::SeqCst);
            })
        };
        (action, count)
    }

    #[test]
    fn paid_account_on_open_platform_runs_the_action() {
        let (factory, dialog) = factory(false, false);
        let (action, runs) = counting_action();
        let button =
            factory.not_available_for_free_button("storage_label", action, Icon::named("premium"), true);

        button.click();

        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(dialog.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn free_account_sees_the_explainer_instead() {
        let (factory, dialog) = factory(true, false);
        let (action, runs) = counting_action();
        let button =
            factory.not_available_for_free_button("storage_label", action, Icon::named("premium"), true);

        button.click();

        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert_eq!(*dialog.calls.lock().unwrap(), vec![true]);
    }

    #[test]
    fn restricted_platform_blocks_even_paid_accounts() {
        let (factory, dialog) = factory(false, true);
        let (action, runs) = counting_action();
        let button =
            factory.not_available_for_free_button("storage_label", action, Icon::named("premium"), false);

        button.click();

        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert_eq!(*dialog.calls.lock().unwrap(), vec![false]);
    }

    #[test]
    fn both_restrictions_show_the_explainer_once_per_click() {
        let (factory, dialog) = factory(true, true);
        let (action, runs) = counting_action();
        let button =
            factory.not_available_for_free_button("storage_label", action, Icon::named("premium"), true);

        button.click();
        button.click();

        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert_eq!(*dialog.calls.lock().unwrap(), vec![true, true]);
    }

    #[test]
    fn attrs_variant_gates_the_same_way() {
        let (factory, dialog) = factory(true, false);
        let (action, runs) = counting_action();
        let attrs = factory.not_available_for_free_button_attrs(
            "storage_label",
            action,
            Icon::named("premium"),
            false,
        );

        (attrs.click)();

        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert_eq!(*dialog.calls.lock().unwrap(), vec![false]);
    }

    #[test]
    fn attrs_variant_runs_action_when_unrestricted() {
        let (factory, dialog) = factory(false, false);
        let (action, runs) = counting_action();
        let attrs = factory.not_available_for_free_button_attrs(
            "storage_label",
            action,
            Icon::named("premium"),
            true,
        );

        (attrs.click)();

        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(dialog.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn button_keeps_label_and_icon() {
        let (factory, _) = factory(false, false);
        let (action, _) = counting_action();
        let button =
            factory.not_available_for_free_button("storage_label", action, Icon::named("premium"), true);

        assert_eq!(button.label, "storage_label");
        assert_eq!(button.icon, Icon::named("premium"));
    }
}
