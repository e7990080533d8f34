//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the display signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The session itself lives in its own `Signal<Session>` context.

use dioxus::prelude::*;
use pluv_data::period::Period;
use pluv_session::view::{MonthOption, StatsPanel, TableRow};

/// Everything the page shows, as written by `WebDashboard`.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the CSV fetch is still in flight
    pub loading: Signal<bool>,
    /// Whether the load error banner is shown
    pub error_visible: Signal<bool>,
    /// Caption of the chart on screen
    pub chart_title: Signal<String>,
    /// Period of the highlighted filter button
    pub active_period: Signal<Period>,
    /// Whether the month selectors are shown
    pub comparison_visible: Signal<bool>,
    /// Options for both month selectors, most recent first
    pub month_options: Signal<Vec<MonthOption>>,
    pub stats: Signal<StatsPanel>,
    /// Rows of the accessible data table
    pub table: Signal<Vec<TableRow>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new(period: Period) -> Self {
        Self {
            loading: Signal::new(false),
            error_visible: Signal::new(false),
            chart_title: Signal::new(String::new()),
            active_period: Signal::new(period),
            comparison_visible: Signal::new(false),
            month_options: Signal::new(Vec::new()),
            stats: Signal::new(StatsPanel::default()),
            table: Signal::new(Vec::new()),
        }
    }
}
