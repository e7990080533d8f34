//! Pure projections from readings to what the dashboard displays.
//!
//! Chart specs serialize to the JSON shape consumed by the chart bridge
//! (`labels`, `datasets`, axis titles and precomputed tooltip lines).

use pluv_core::Record;
use pluv_data::period::Period;
use pluv_data::{ComparisonSeries, MonthKey, Stats};
use pluv_utils::locale::Locale;
use serde::Serialize;

const PRIMARY_FILL: &str = "rgba(87, 108, 188, 0.6)";
const PRIMARY_LINE: &str = "rgba(87, 108, 188, 1)";
const PRIMARY_TRANSLUCENT: &str = "rgba(87, 108, 188, 0.2)";
const SECONDARY_LINE: &str = "rgba(113, 138, 240, 1)";
const SECONDARY_TRANSLUCENT: &str = "rgba(113, 138, 240, 0.2)";

/// Placeholder shown when there is no maximum date.
pub const NO_DATE: &str = "--";

struct Captions {
    series: &'static str,
    date_axis: &'static str,
    day_axis: &'static str,
    note: &'static str,
}

fn captions(locale: Locale) -> Captions {
    match locale {
        Locale::PtBr => Captions {
            series: "Precipitação (mm)",
            date_axis: "Data",
            day_axis: "Dia do Mês",
            note: "Obs",
        },
        Locale::EnUs => Captions {
            series: "Precipitation (mm)",
            date_axis: "Date",
            day_axis: "Day of Month",
            note: "Note",
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// One plotted series. `None` points are gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub fill: bool,
    pub span_gaps: bool,
}

/// A complete chart description handed to the charting collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    /// What the chart shows, e.g. "Últimos 30 dias"
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartSeries>,
    pub x_title: String,
    pub y_title: String,
    /// Extra tooltip line per point index; empty string for none
    pub tooltips: Vec<String>,
}

impl ChartSpec {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// One row of the accessible data table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub date: String,
    pub precipitation: String,
    pub notes: String,
}

/// Display strings for the stats panel.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StatsPanel {
    pub total: String,
    pub average: String,
    pub max: String,
    pub max_date: String,
}

/// A month selector option: `value` is `YYYY-MM`, `label` is localized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthOption {
    pub value: String,
    pub label: String,
}

/// Tooltip line for the point at `index`: `"Obs: <notes>"`, or empty when the
/// reading has no notes or the index is out of range.
pub fn tooltip_note(records: &[Record], index: usize, locale: Locale) -> String {
    match records.get(index) {
        Some(r) if r.has_notes() => format!("{}: {}", captions(locale).note, r.notes),
        _ => String::new(),
    }
}

/// Caption for a trailing window.
pub fn period_caption(period: Period, locale: Locale) -> String {
    match (period, locale) {
        (Period::All, Locale::PtBr) => "Todo o período".to_string(),
        (Period::All, Locale::EnUs) => "All readings".to_string(),
        (Period::Days(days), Locale::PtBr) => format!("Últimos {} dias", days),
        (Period::Days(days), Locale::EnUs) => format!("Last {} days", days),
    }
}

/// Bar chart of the readings in the trailing window `period`.
pub fn period_chart(records: &[Record], period: Period, locale: Locale) -> ChartSpec {
    let c = captions(locale);
    ChartSpec {
        kind: ChartKind::Bar,
        title: period_caption(period, locale),
        labels: records.iter().map(|r| locale.format_date(&r.date)).collect(),
        datasets: vec![ChartSeries {
            label: c.series.to_string(),
            data: records.iter().map(|r| Some(r.precipitation)).collect(),
            background_color: PRIMARY_FILL.to_string(),
            border_color: PRIMARY_LINE.to_string(),
            border_width: 1,
            fill: false,
            span_gaps: false,
        }],
        x_title: c.date_axis.to_string(),
        y_title: c.series.to_string(),
        tooltips: (0..records.len())
            .map(|i| tooltip_note(records, i, locale))
            .collect(),
    }
}

/// Two-line chart overlaying two months by day of month.
pub fn comparison_chart(
    series: &ComparisonSeries,
    first_label: &str,
    second_label: &str,
    locale: Locale,
) -> ChartSpec {
    let c = captions(locale);
    let line = |label: &str, data: &[Option<f64>], border: &str, background: &str| ChartSeries {
        label: label.to_string(),
        data: data.to_vec(),
        background_color: background.to_string(),
        border_color: border.to_string(),
        border_width: 2,
        fill: false,
        span_gaps: true,
    };

    ChartSpec {
        kind: ChartKind::Line,
        title: format!("{} × {}", first_label, second_label),
        labels: series.days.iter().map(|d| d.to_string()).collect(),
        datasets: vec![
            line(first_label, &series.first, PRIMARY_LINE, PRIMARY_TRANSLUCENT),
            line(second_label, &series.second, SECONDARY_LINE, SECONDARY_TRANSLUCENT),
        ],
        x_title: c.day_axis.to_string(),
        y_title: c.series.to_string(),
        tooltips: Vec::new(),
    }
}

pub fn table_rows(records: &[Record], locale: Locale) -> Vec<TableRow> {
    records
        .iter()
        .map(|r| TableRow {
            date: locale.format_date(&r.date),
            precipitation: format!("{:.1}", r.precipitation),
            notes: r.notes.clone(),
        })
        .collect()
}

/// Total to 1 decimal, average to 2, maximum to 1, max date or `--`.
pub fn stats_panel(stats: &Stats, locale: Locale) -> StatsPanel {
    StatsPanel {
        total: format!("{:.1}", stats.total),
        average: format!("{:.2}", stats.average),
        max: format!("{:.1}", stats.max.value),
        max_date: stats
            .max
            .date
            .map(|d| locale.format_date(&d))
            .unwrap_or_else(|| NO_DATE.to_string()),
    }
}

/// Both months side by side, `first / second`. The date slot names the months.
pub fn comparison_stats_panel(
    first: (&Stats, MonthKey),
    second: (&Stats, MonthKey),
    locale: Locale,
) -> StatsPanel {
    let (a, a_key) = first;
    let (b, b_key) = second;
    StatsPanel {
        total: format!("{:.1} / {:.1}", a.total, b.total),
        average: format!("{:.2} / {:.2}", a.average, b.average),
        max: format!("{:.1} / {:.1}", a.max.value, b.max.value),
        max_date: format!("{} / {}", a_key.short_label(locale), b_key.short_label(locale)),
    }
}

pub fn month_options(months: &[MonthKey], locale: Locale) -> Vec<MonthOption> {
    months
        .iter()
        .map(|m| MonthOption {
            value: m.to_string(),
            label: m.label(locale),
        })
        .collect()
}
