//! Display configuration module.

mod display;
mod error;

pub use display::DisplayConfig;
pub use error::ValidationError;
