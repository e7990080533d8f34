//! Built-in readings used when the configured CSV cannot be fetched.
//!
//! The data is embedded at compile time and goes through the same parser as a
//! fetched file, so the result is indistinguishable from a real load.

use crate::parser::parse_csv;
use crate::record::Record;

/// Embedded fallback CSV (two months of daily readings).
pub const FALLBACK_CSV: &str = include_str!("../fixtures/fallback.csv");

/// The fallback dataset, sorted ascending by date.
pub fn fallback_records() -> Vec<Record> {
    parse_csv(FALLBACK_CSV).into_records()
}
