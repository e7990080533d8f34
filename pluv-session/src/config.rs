//! Dashboard configuration.

use pluv_data::period::Period;
use pluv_utils::locale::Locale;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Relative path (or URL) of the readings CSV.
pub const DEFAULT_CSV_PATH: &str = "data/pluviometro.csv";

/// Settings shared by the web dashboard and the CLI.
///
/// Every field has a default, so `{}` is a valid JSON config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Where the readings CSV is fetched from
    pub csv_path: String,
    /// Trailing window shown on first render
    pub default_period: Period,
    /// Date and month label formatting
    pub locale: Locale,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            csv_path: DEFAULT_CSV_PATH.to_string(),
            default_period: Period::default(),
            locale: Locale::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }
}
