//! Numeric-string parsing for wire records.
//!
//! The source system serializes every number as a string. All parsing
//! happens here, once, when a record is constructed; the rest of the crate
//! operates on numbers.

use tracing::warn;

/// Parses an amount or count field from a wire record.
///
/// Malformed input yields `f64::NAN` rather than an error. Display code
/// passes the value through unchanged and the formatter renders what it
/// gets; nothing downstream branches on it.
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            warn!(raw, "malformed numeric string in billing record");
            f64::NAN
        }
    }
}

/// Parses a payment interval field ("1" or "12" expected) into months.
///
/// Malformed input yields 0. Formatting treats every non-12 interval as
/// monthly, so the observable output is the same as for any other
/// unexpected interval.
pub fn parse_interval(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(months) => months,
        Err(_) => {
            warn!(raw, "malformed payment interval in billing record");
            0
        }
    }
}
