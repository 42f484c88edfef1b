//! Application layer - display services consumed by the view code.
//!
//! Services hold their collaborators as `Arc<dyn Port>` and expose
//! synchronous, infallible display operations.

mod billing_labels;
mod gated_action;
mod price_display;

pub use billing_labels::BillingLabels;
pub use gated_action::{Button, ButtonAttrs, ClickHandler, GatedActionFactory, Icon};
pub use price_display::PriceDisplay;
