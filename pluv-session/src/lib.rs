//! Session controller for the rain gauge dashboard.
//!
//! This crate provides:
//! - `config`: `DashboardConfig` (CSV location, default period, locale)
//! - `source`: the `CsvSource` trait and native sources
//! - `dashboard`: the `Dashboard` trait implemented by each front end
//! - `view`: pure projections from readings to chart, table and stats values
//! - `session`: `Session`, which owns the cached dataset and UI mode

pub mod config;
pub mod dashboard;
pub mod session;
pub mod source;
pub mod view;

pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use session::Session;
pub use source::CsvSource;
