//! A single daily rain gauge reading.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One validated reading: date, precipitation in millimeters, free-text notes.
///
/// Dates are not unique across a dataset. Two readings on the same day are kept
/// as two records in their original relative order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub date: NaiveDate,
    /// Millimeters, always finite and >= 0
    pub precipitation: f64,
    /// Possibly empty
    pub notes: String,
}

impl Record {
    pub fn new(date: NaiveDate, precipitation: f64, notes: impl Into<String>) -> Self {
        Self {
            date,
            precipitation,
            notes: notes.into(),
        }
    }

    /// True when the reading falls in the given calendar month (1-12) of `year`.
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}

/// Stable sort by date only; readings sharing a date keep their input order.
pub fn sort_by_date(records: &mut [Record]) {
    records.sort_by_key(|r| r.date);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sort_by_date_is_stable_for_duplicates() {
        let mut records = vec![
            Record::new(day(2024, 6, 3), 1.0, "b"),
            Record::new(day(2024, 6, 1), 2.0, ""),
            Record::new(day(2024, 6, 3), 3.0, "a"),
        ];
        sort_by_date(&mut records);
        assert_eq!(records[0].date, day(2024, 6, 1));
        assert_eq!(records[1].notes, "b");
        assert_eq!(records[2].notes, "a");
    }

    #[test]
    fn test_in_month() {
        let r = Record::new(day(2024, 6, 30), 0.0, "");
        assert!(r.in_month(2024, 6));
        assert!(!r.in_month(2023, 6));
        assert!(!r.in_month(2024, 7));
        assert!(!r.has_notes());
    }
}
