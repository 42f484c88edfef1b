//! Billing Display - Presentation helpers for billing and subscription screens
//!
//! This crate translates billing enums into localized display strings, looks
//! up line items inside pricing records, formats prices for display, and
//! gates purchase actions behind the signed-in account's tier.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
