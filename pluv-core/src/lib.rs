//! Core types for rain gauge (pluviômetro) readings.
//!
//! - `record`: the validated daily reading
//! - `parser`: CSV text to sorted records, with per-row diagnostics
//! - `error`: row-level and fetch error taxonomy
//! - `fallback`: the built-in dataset used when the CSV cannot be fetched

pub mod error;
pub mod fallback;
pub mod parser;
pub mod record;

pub use error::{FetchError, RowError};
pub use parser::{parse_csv, ParsedCsv, RowIssue};
pub use record::Record;
