//! CSV parsing for rain gauge readings.
//!
//! Expected layout (header row is required but its content is ignored):
//!
//! ```text
//! date,precipitation,notes
//! 2024-06-01,12.5,"Chuva forte, com vento"
//! 2024-06-02,0,
//! ```
//!
//! Fields are split on every comma. Quotes are not interpreted as CSV quoting:
//! everything after the second field is re-joined into the notes, trimmed, and
//! stripped of one leading and one trailing `"`. Rows that fail validation are
//! dropped and reported; they never abort the parse.

use crate::error::RowError;
use crate::record::{sort_by_date, Record};
use csv::{ReaderBuilder, StringRecord};
use pluv_utils::dates::parse_iso_date;

/// A dropped row: 1-based line number in the source text and why it was dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct RowIssue {
    pub line: usize,
    pub error: RowError,
}

/// Result of parsing a whole CSV document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCsv {
    /// Surviving readings, sorted ascending by date
    pub records: Vec<Record>,
    /// One entry per dropped row, in source order
    pub issues: Vec<RowIssue>,
}

impl ParsedCsv {
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// Parse CSV text into date-sorted records.
///
/// Each rejected row is logged at `warn` level with its line number and kept in
/// [`ParsedCsv::issues`].
pub fn parse_csv(text: &str) -> ParsedCsv {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut parsed = ParsedCsv::default();

    // The input is already UTF-8 and quoting is off, so the reader has no
    // failure left to report.
    for (index, row) in rdr.records().flatten().enumerate() {
        let line = row
            .position()
            .map(|p| source_line(text, p.byte()))
            .unwrap_or(index + 2);

        match parse_row(&row) {
            Ok(record) => parsed.records.push(record),
            Err(error) => {
                log::warn!("line {}: {}", line, error);
                parsed.issues.push(RowIssue { line, error });
            }
        }
    }

    sort_by_date(&mut parsed.records);
    log::info!(
        "parsed {} readings, dropped {} rows",
        parsed.records.len(),
        parsed.issues.len()
    );
    parsed
}

/// 1-based physical line of the row starting at `byte`.
///
/// The reader skips blank lines without counting them, so the offset may sit
/// before them; skip forward to the first byte of the row, then count newlines.
fn source_line(text: &str, byte: u64) -> usize {
    let bytes = text.as_bytes();
    let mut start = usize::try_from(byte).unwrap_or(bytes.len()).min(bytes.len());
    while matches!(bytes.get(start), Some(b'\n') | Some(b'\r')) {
        start += 1;
    }
    bytes[..start].iter().filter(|b| **b == b'\n').count() + 1
}

/// Validate one split row into a [`Record`].
fn parse_row(row: &StringRecord) -> Result<Record, RowError> {
    let date_str = row.get(0).unwrap_or("").trim();
    let date = parse_iso_date(date_str).ok_or_else(|| RowError::InvalidDate(date_str.to_string()))?;

    let precip_str = row
        .get(1)
        .ok_or(RowError::MissingField("precipitation"))?
        .trim();
    let precipitation = parse_precipitation(precip_str)
        .ok_or_else(|| RowError::InvalidPrecipitation(precip_str.to_string()))?;

    let joined = row.iter().skip(2).collect::<Vec<_>>().join(",");

    Ok(Record {
        date,
        precipitation,
        notes: clean_notes(&joined),
    })
}

/// Finite, non-negative millimeters.
fn parse_precipitation(s: &str) -> Option<f64> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Trim, then drop at most one `"` from each end.
fn clean_notes(raw: &str) -> String {
    let trimmed = raw.trim();
    let start = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let end = start.strip_suffix('"').unwrap_or(start);
    end.to_string()
}
