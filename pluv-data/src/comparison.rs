//! Month-against-month comparison.
//!
//! Two calendar months are overlaid on a common day-of-month axis. Days with
//! no reading stay `None` so the chart shows a gap instead of a zero.

use chrono::{Datelike, NaiveDate};
use pluv_core::Record;
use pluv_utils::locale::Locale;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A calendar month of a given year. Orders by year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthKey {
    pub year: i32,
    /// 1 = January
    pub month: u32,
}

/// Selector value that is not `YYYY-MM` with a month in 1..=12.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid month \"{0}\" (expected YYYY-MM)")]
pub struct MonthKeyError(pub String);

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// From a zero-based month index (0 = January).
    pub fn from_zero_based(month0: u32, year: i32) -> Option<Self> {
        Self::new(year, month0.checked_add(1)?)
    }

    pub fn of(date: &NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// "junho de 2024" / "June 2024"
    pub fn label(&self, locale: Locale) -> String {
        locale.month_label(self.year, self.month)
    }

    /// Month name alone, e.g. "junho".
    pub fn short_label(&self, locale: Locale) -> String {
        locale.month_name(self.month).unwrap_or("?").to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MonthKeyError(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(err)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(err());
        }
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        MonthKey::new(year, month).ok_or_else(err)
    }
}

/// Every distinct month present in `records`, most recent first.
pub fn available_months(records: &[Record]) -> Vec<MonthKey> {
    let months: BTreeSet<MonthKey> = records.iter().map(|r| MonthKey::of(&r.date)).collect();
    months.into_iter().rev().collect()
}

/// Two series aligned on day-of-month.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ComparisonSeries {
    /// 1 through the largest day observed in either month
    pub days: Vec<u32>,
    pub first: Vec<Option<f64>>,
    pub second: Vec<Option<f64>>,
}

/// Align two monthly subsets on day-of-month.
///
/// The axis runs from day 1 to the latest day seen in either subset; both empty
/// gives an empty axis. When a day has several readings the last one in input
/// order is plotted.
pub fn build_series(first: &[Record], second: &[Record]) -> ComparisonSeries {
    let first_by_day = by_day(first);
    let second_by_day = by_day(second);

    let last_day = first_by_day
        .keys()
        .chain(second_by_day.keys())
        .copied()
        .max()
        .unwrap_or(0);

    let days: Vec<u32> = (1..=last_day).collect();
    ComparisonSeries {
        first: days.iter().map(|d| first_by_day.get(d).copied()).collect(),
        second: days.iter().map(|d| second_by_day.get(d).copied()).collect(),
        days,
    }
}

fn by_day(records: &[Record]) -> BTreeMap<u32, f64> {
    let mut map = BTreeMap::new();
    for r in records {
        map.insert(r.date.day(), r.precipitation);
    }
    map
}
