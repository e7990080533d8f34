//! Plain-text `Dashboard` for the terminal.
//!
//! Like the page, only the latest chart, table and stats are kept; a
//! destroyed chart disappears from the output. Everything is printed once,
//! in page order, by [`ConsoleDashboard::into_output`].

use pluv_session::view::{ChartKind, ChartSpec, MonthOption, StatsPanel, TableRow};
use pluv_session::Dashboard;

/// Printed first when the readings could not be loaded.
pub const LOAD_ERROR_BANNER: &str = "warning: could not load readings, showing sample data\n";

const BAR_WIDTH: f64 = 40.0;

/// Which parts of the page a command prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sections {
    pub chart: bool,
    pub table: bool,
    pub stats: bool,
    pub months: bool,
}

#[derive(Debug, Default)]
pub struct ConsoleDashboard {
    sections: Sections,
    error_visible: bool,
    chart: Option<String>,
    table: Option<String>,
    stats: Option<String>,
    months: Option<String>,
}

impl ConsoleDashboard {
    pub fn new(sections: Sections) -> Self {
        Self {
            sections,
            ..Self::default()
        }
    }

    /// The banner (if any) followed by the enabled sections.
    pub fn into_output(self) -> String {
        let mut out = String::new();
        if self.error_visible {
            out.push_str(LOAD_ERROR_BANNER);
        }
        let parts = [
            (self.sections.months, self.months),
            (self.sections.chart, self.chart),
            (self.sections.table, self.table),
            (self.sections.stats, self.stats),
        ];
        for (enabled, text) in parts {
            if let (true, Some(text)) = (enabled, text) {
                out.push_str(&text);
            }
        }
        out
    }
}

impl Dashboard for ConsoleDashboard {
    fn set_loading(&mut self, visible: bool) {
        if visible {
            log::info!("loading readings...");
        }
    }

    fn set_error_visible(&mut self, visible: bool) {
        self.error_visible = visible;
    }

    fn destroy_chart(&mut self) {
        self.chart = None;
    }

    fn draw_chart(&mut self, chart: &ChartSpec) {
        self.chart = Some(match chart.kind {
            ChartKind::Bar => bar_chart(chart),
            ChartKind::Line => series_table(chart),
        });
    }

    fn show_table(&mut self, rows: &[TableRow]) {
        let mut text = String::new();
        for row in rows {
            text.push_str(&format!("{}\t{}\t{}\n", row.date, row.precipitation, row.notes));
        }
        self.table = Some(text);
    }

    fn show_stats(&mut self, panel: &StatsPanel) {
        self.stats = Some(format!(
            "Total: {} mm\nAverage: {} mm\nMaximum: {} mm\nDate of maximum: {}\n",
            panel.total, panel.average, panel.max, panel.max_date
        ));
    }

    fn show_month_options(&mut self, options: &[MonthOption]) {
        let mut text = String::new();
        for option in options {
            text.push_str(&format!("{}\t{}\n", option.value, option.label));
        }
        self.months = Some(text);
    }

    fn set_comparison_visible(&mut self, _visible: bool) {}
}

/// One `#` bar per reading, scaled to the largest value in the chart.
fn bar_chart(chart: &ChartSpec) -> String {
    let Some(series) = chart.datasets.first() else {
        return String::new();
    };
    let max = series.data.iter().flatten().copied().fold(0.0, f64::max);
    let width = chart.labels.iter().map(|l| l.len()).max().unwrap_or(0);

    let mut text = format!("{} - {}\n", chart.title, chart.y_title);
    for (i, label) in chart.labels.iter().enumerate() {
        let value = series.data.get(i).copied().flatten().unwrap_or(0.0);
        let len = if max > 0.0 {
            (value / max * BAR_WIDTH).round() as usize
        } else {
            0
        };
        text.push_str(&format!("{:>width$} | {} {:.1}", label, "#".repeat(len), value));
        match chart.tooltips.get(i) {
            Some(note) if !note.is_empty() => text.push_str(&format!("  ({})\n", note)),
            _ => text.push('\n'),
        }
    }
    text
}

/// Day-by-day columns for a comparison; gaps print as `-`.
fn series_table(chart: &ChartSpec) -> String {
    let mut text = format!("{}\n{}", chart.title, chart.x_title);
    for series in &chart.datasets {
        text.push('\t');
        text.push_str(&series.label);
    }
    text.push('\n');

    for (i, label) in chart.labels.iter().enumerate() {
        text.push_str(label);
        for series in &chart.datasets {
            match series.data.get(i).copied().flatten() {
                Some(v) => text.push_str(&format!("\t{:.1}", v)),
                None => text.push_str("\t-"),
            }
        }
        text.push('\n');
    }
    text
}
