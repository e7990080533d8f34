//! `Dashboard` implementation that writes into the reactive `AppState`.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use pluv_session::view::{ChartSpec, MonthOption, StatsPanel, TableRow};
use pluv_session::Dashboard;

/// DOM id of the chart canvas.
pub const CHART_CANVAS_ID: &str = "precipitation-chart";

/// Cheap to construct per event: it only holds copies of the state signals.
#[derive(Clone, Copy)]
pub struct WebDashboard {
    state: AppState,
}

impl WebDashboard {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl Dashboard for WebDashboard {
    fn set_loading(&mut self, visible: bool) {
        self.state.loading.set(visible);
    }

    fn set_error_visible(&mut self, visible: bool) {
        self.state.error_visible.set(visible);
    }

    fn destroy_chart(&mut self) {
        js_bridge::destroy_chart(CHART_CANVAS_ID);
    }

    fn draw_chart(&mut self, chart: &ChartSpec) {
        self.state.chart_title.set(chart.title.clone());
        js_bridge::render_chart(CHART_CANVAS_ID, &chart.to_json());
    }

    fn show_table(&mut self, rows: &[TableRow]) {
        self.state.table.set(rows.to_vec());
    }

    fn show_stats(&mut self, panel: &StatsPanel) {
        self.state.stats.set(panel.clone());
    }

    fn show_month_options(&mut self, options: &[MonthOption]) {
        self.state.month_options.set(options.to_vec());
    }

    fn set_comparison_visible(&mut self, visible: bool) {
        self.state.comparison_visible.set(visible);
    }
}
