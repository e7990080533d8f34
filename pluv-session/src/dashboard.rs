//! The UI collaborator driven by [`Session`](crate::Session).

use crate::view::{ChartSpec, MonthOption, StatsPanel, TableRow};

/// Everything the session pushes into the page: indicators, the chart, the
/// accessible table, the stats panel and the comparison selectors.
///
/// Implementations only display what they are given; all filtering and
/// formatting has already happened.
pub trait Dashboard {
    /// Show or hide the loading indicator.
    fn set_loading(&mut self, visible: bool);

    /// Show or hide the load error banner.
    fn set_error_visible(&mut self, visible: bool);

    /// Tear down the chart currently on screen. Called before every redraw.
    fn destroy_chart(&mut self);

    fn draw_chart(&mut self, chart: &ChartSpec);

    fn show_table(&mut self, rows: &[TableRow]);

    fn show_stats(&mut self, panel: &StatsPanel);

    /// Replace the options of both month selectors.
    fn show_month_options(&mut self, options: &[MonthOption]);

    /// Show or hide the month selectors.
    fn set_comparison_visible(&mut self, visible: bool);
}
