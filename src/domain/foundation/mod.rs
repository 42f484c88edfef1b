//! Foundation - shared primitives used across the domain.

mod numeric;

pub use numeric::{parse_amount, parse_interval};
