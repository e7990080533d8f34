//! Summary statistics over a set of readings.

use chrono::NaiveDate;
use pluv_core::Record;
use serde::Serialize;

/// The highest reading and the day it fell on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaxReading {
    pub value: f64,
    /// None when no reading exceeded zero
    pub date: Option<NaiveDate>,
}

/// Total, mean and maximum precipitation. Recomputed on every filter change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub total: f64,
    pub average: f64,
    pub max: MaxReading,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            total: 0.0,
            average: 0.0,
            max: MaxReading {
                value: 0.0,
                date: None,
            },
        }
    }
}

/// Reduce readings to [`Stats`].
///
/// The maximum starts from a synthetic zero reading with no date and is only
/// replaced by a strictly greater value, so the first of several equal peaks
/// wins and an all-zero set reports `0` with no date.
pub fn calculate_stats(records: &[Record]) -> Stats {
    if records.is_empty() {
        return Stats::default();
    }

    let total: f64 = records.iter().map(|r| r.precipitation).sum();
    let average = total / records.len() as f64;
    let max = records.iter().fold(
        MaxReading {
            value: 0.0,
            date: None,
        },
        |max, r| {
            if r.precipitation > max.value {
                MaxReading {
                    value: r.precipitation,
                    date: Some(r.date),
                }
            } else {
                max
            }
        },
    );

    Stats {
        total,
        average,
        max,
    }
}
