//! Data processing for rain gauge readings.
//!
//! This crate turns the parsed dataset into the subsets and summaries the
//! dashboard displays: trailing-window and calendar-month filters, summary
//! statistics, and the day-of-month series used to compare two months.

pub mod comparison;
pub mod stats;

pub use comparison::{available_months, build_series, ComparisonSeries, MonthKey, MonthKeyError};
pub use stats::{calculate_stats, MaxReading, Stats};

/// Trailing-window period selector.
pub mod period {
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use std::str::FromStr;
    use thiserror::Error;

    /// Default trailing window, in days.
    pub const DEFAULT_DAYS: u32 = 30;

    /// Either the last N days (counted back from today) or the whole dataset.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(try_from = "RawPeriod", into = "String")]
    pub enum Period {
        All,
        Days(u32),
    }

    impl Default for Period {
        fn default() -> Self {
            Period::Days(DEFAULT_DAYS)
        }
    }

    /// A period string that is neither `all` nor a non-negative day count.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    #[error("invalid period \"{0}\" (expected a number of days or \"all\")")]
    pub struct PeriodError(pub String);

    impl FromStr for Period {
        type Err = PeriodError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let trimmed = s.trim();
            if trimmed.eq_ignore_ascii_case("all") {
                return Ok(Period::All);
            }
            trimmed
                .parse::<u32>()
                .map(Period::Days)
                .map_err(|_| PeriodError(s.to_string()))
        }
    }

    impl fmt::Display for Period {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Period::All => write!(f, "all"),
                Period::Days(days) => write!(f, "{}", days),
            }
        }
    }

    impl From<Period> for String {
        fn from(value: Period) -> Self {
            value.to_string()
        }
    }

    /// Config files may spell the period as `30` or `"30"` or `"all"`.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPeriod {
        Days(u32),
        Text(String),
    }

    impl TryFrom<RawPeriod> for Period {
        type Error = PeriodError;

        fn try_from(value: RawPeriod) -> Result<Self, Self::Error> {
            match value {
                RawPeriod::Days(days) => Ok(Period::Days(days)),
                RawPeriod::Text(text) => text.parse(),
            }
        }
    }

}

/// Subset selection over the loaded dataset.
pub mod filter {
    use crate::comparison::MonthKey;
    use crate::period::Period;
    use chrono::NaiveDate;
    use pluv_core::Record;
    use pluv_utils::dates::days_before;

    /// Earliest date kept by `period` as of `today`, or None for no lower bound.
    pub fn cutoff(period: Period, today: NaiveDate) -> Option<NaiveDate> {
        match period {
            Period::All => None,
            Period::Days(days) => Some(days_before(today, days)),
        }
    }

    /// Readings on or after `today - N days`; everything for [`Period::All`].
    ///
    /// Comparison is by calendar date only, so the cutoff day itself is kept.
    /// Input order is preserved.
    pub fn filter_by_period(records: &[Record], period: Period, today: NaiveDate) -> Vec<Record> {
        let kept: Vec<Record> = match cutoff(period, today) {
            None => records.to_vec(),
            Some(from) => records.iter().filter(|r| r.date >= from).cloned().collect(),
        };
        log::debug!("period {}: {} of {} readings", period, kept.len(), records.len());
        kept
    }

    /// Readings in the given zero-based month (0 = January) of `year`.
    ///
    /// An out-of-range month index matches nothing.
    pub fn filter_by_month_year(records: &[Record], month0: u32, year: i32) -> Vec<Record> {
        match MonthKey::from_zero_based(month0, year) {
            Some(key) => filter_by_month(records, key),
            None => Vec::new(),
        }
    }

    /// Readings in the calendar month named by `key`.
    pub fn filter_by_month(records: &[Record], key: MonthKey) -> Vec<Record> {
        records
            .iter()
            .filter(|r| r.in_month(key.year, key.month))
            .cloned()
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn day(y: i32, m: u32, d: u32) -> NaiveDate {
            NaiveDate::from_ymd_opt(y, m, d).unwrap()
        }

        fn rec(y: i32, m: u32, d: u32, mm: f64) -> Record {
            Record::new(day(y, m, d), mm, "")
        }

        #[test]
        fn test_all_returns_everything_in_order() {
            let records = vec![rec(2024, 1, 1, 1.0), rec(2024, 1, 1, 2.0), rec(2024, 5, 1, 3.0)];
            let today = day(2024, 6, 1);
            assert_eq!(filter_by_period(&records, Period::All, today), records);
        }

        #[test]
        fn test_trailing_window_keeps_cutoff_day() {
            let today = day(2024, 6, 30);
            let records = vec![
                rec(2024, 6, 22, 1.0),
                rec(2024, 6, 23, 2.0),
                rec(2024, 6, 30, 3.0),
            ];
            let kept = filter_by_period(&records, Period::Days(7), today);
            assert_eq!(kept.len(), 2);
            assert!(kept.iter().all(|r| r.date >= day(2024, 6, 23)));
        }

        #[test]
        fn test_trailing_window_zero_days_is_today_onward() {
            let today = day(2024, 6, 30);
            let records = vec![rec(2024, 6, 29, 1.0), rec(2024, 6, 30, 2.0), rec(2024, 7, 1, 3.0)];
            let kept = filter_by_period(&records, Period::Days(0), today);
            assert_eq!(kept.len(), 2);
        }

        #[test]
        fn test_month_year_uses_zero_based_month() {
            let records = vec![
                rec(2024, 7, 1, 1.0),
                rec(2024, 6, 30, 2.0),
                rec(2023, 6, 15, 3.0),
                rec(2024, 6, 1, 4.0),
            ];
            let june = filter_by_month_year(&records, 5, 2024);
            assert_eq!(june.len(), 2);
            assert!(june.iter().all(|r| r.in_month(2024, 6)));
            assert_eq!(june[0].precipitation, 2.0);
        }

        #[test]
        fn test_month_year_out_of_range_matches_nothing() {
            let records = vec![rec(2024, 6, 1, 1.0)];
            assert!(filter_by_month_year(&records, 12, 2024).is_empty());
        }

        #[test]
        fn test_empty_dataset() {
            let today = day(2024, 6, 30);
            assert!(filter_by_period(&[], Period::All, today).is_empty());
            assert!(filter_by_month_year(&[], 5, 2024).is_empty());
        }
    }
}
