//! Domain layer - owned value types and pure billing lookup logic.

pub mod billing;
pub mod foundation;
