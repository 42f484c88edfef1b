//! Currency formatting adapters.

mod decimal_formatter;

pub use decimal_formatter::DecimalCurrencyFormatter;
