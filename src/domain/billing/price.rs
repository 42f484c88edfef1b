//! Pricing and booking records plus line-item lookups.
//!
//! The source system serializes all numeric fields as strings. These types
//! parse them once at construction (see `domain::foundation::numeric`); the
//! lookup functions below then work with plain numbers.

use serde::Deserialize;

use crate::domain::foundation::{parse_amount, parse_interval};

/// One bookable line inside a [`PriceData`] record.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "PriceItemRecord")]
pub struct PriceItem {
    /// Key identifying the bookable feature this line prices.
    pub feature_type: String,
    pub count: f64,
    pub price: f64,
}

/// Wire shape of a price item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceItemRecord {
    feature_type: String,
    count: String,
    price: String,
}

impl From<PriceItemRecord> for PriceItem {
    fn from(record: PriceItemRecord) -> Self {
        PriceItem {
            feature_type: record.feature_type,
            count: parse_amount(&record.count),
            price: parse_amount(&record.price),
        }
    }
}

/// Price quote for a (prospective) booking.
///
/// `items` carries no uniqueness invariant; lookups return the first match.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "PriceDataRecord")]
pub struct PriceData {
    pub tax_included: bool,
    /// Billing cadence in months. 1 and 12 are the expected values.
    pub payment_interval: u32,
    pub price: f64,
    pub items: Vec<PriceItem>,
}

/// Wire shape of a price data record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceDataRecord {
    tax_included: bool,
    payment_interval: String,
    price: String,
    #[serde(default)]
    items: Vec<PriceItemRecord>,
}

impl From<PriceDataRecord> for PriceData {
    fn from(record: PriceDataRecord) -> Self {
        PriceData {
            tax_included: record.tax_included,
            payment_interval: parse_interval(&record.payment_interval),
            price: parse_amount(&record.price),
            items: record.items.into_iter().map(PriceItem::from).collect(),
        }
    }
}

/// One booked line inside a [`Booking`].
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "BookingItemRecord")]
pub struct BookingItem {
    pub feature_type: String,
    pub current_count: f64,
}

/// Wire shape of a booking item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingItemRecord {
    feature_type: String,
    current_count: String,
}

impl From<BookingItemRecord> for BookingItem {
    fn from(record: BookingItemRecord) -> Self {
        BookingItem {
            feature_type: record.feature_type,
            current_count: parse_amount(&record.current_count),
        }
    }
}

/// The account's current booking. Read-only here.
#[derive(Debug, Clone, Deserialize)]
pub struct Booking {
    pub items: Vec<BookingItem>,
}

/// Finds the price line for the given feature type.
///
/// Returns `None` when no price data is available or no line matches.
/// First match wins; duplicate feature types later in the list are ignored.
pub fn price_item<'a>(
    price_data: Option<&'a PriceData>,
    feature_type: &str,
) -> Option<&'a PriceItem> {
    price_data?
        .items
        .iter()
        .find(|item| item.feature_type == feature_type)
}

/// Booked count for the feature type from the price data, or 0 if absent.
pub fn count_from_price_data(price_data: Option<&PriceData>, feature_type: &str) -> f64 {
    price_item(price_data, feature_type)
        .map(|item| item.count)
        .unwrap_or(0.0)
}

/// Price for the feature type from the price data, or 0 if absent.
pub fn price_from_price_data(price_data: Option<&PriceData>, feature_type: &str) -> f64 {
    price_item(price_data, feature_type)
        .map(|item| item.price)
        .unwrap_or(0.0)
}

/// Currently booked count for the feature type, or 0 if absent.
///
/// Scans the booking's own lines, not price data. The two record shapes
/// differ, so this stays a separate scan rather than sharing [`price_item`].
pub fn current_count(feature_type: &str, booking: Option<&Booking>) -> f64 {
    booking
        .and_then(|b| b.items.iter().find(|item| item.feature_type == feature_type))
        .map(|item| item.current_count)
        .unwrap_or(0.0)
}
