//! Billing domain module.
//!
//! Read-only views of the billing records the source system hands to the
//! client, plus the lookup logic the display layer runs over them.
//!
//! # Module Structure
//!
//! - `payment_method` - PaymentMethod enum and AccountingInfo record
//! - `invoice` - InvoiceStatus lifecycle enum and Invoice record
//! - `price` - PriceData/Booking records and line-item lookups

mod invoice;
mod payment_method;
mod price;

pub use invoice::{Invoice, InvoiceStatus};
pub use payment_method::{AccountingInfo, PaymentMethod};
pub use price::{
    count_from_price_data, current_count, price_from_price_data, price_item, Booking, BookingItem,
    PriceData, PriceItem,
};
