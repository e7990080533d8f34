//! The dashboard session: cached dataset plus UI mode.
//!
//! A `Session` is created once per page (or CLI run). The dataset is loaded at
//! most once; a failed fetch installs the built-in fallback readings, which
//! then serve every later call just like a successful load would.

use crate::config::DashboardConfig;
use crate::dashboard::Dashboard;
use crate::source::CsvSource;
use crate::view;
use pluv_core::fallback::fallback_records;
use pluv_core::{parse_csv, FetchError, Record};
use pluv_data::filter;
use pluv_data::period::Period;
use pluv_data::{available_months, build_series, calculate_stats, MonthKey};
use pluv_utils::dates::{format_iso, today};

pub struct Session {
    config: DashboardConfig,
    /// None until the first load completes
    dataset: Option<Vec<Record>>,
    loading: bool,
    load_error: Option<FetchError>,
    current_period: Period,
    comparison_mode: bool,
    first_month: Option<MonthKey>,
    second_month: Option<MonthKey>,
    /// Whether a chart is on screen and must be destroyed before the next draw
    chart_active: bool,
}

impl Session {
    pub fn new(config: DashboardConfig) -> Self {
        let current_period = config.default_period;
        Self {
            config,
            dataset: None,
            loading: false,
            load_error: None,
            current_period,
            comparison_mode: false,
            first_month: None,
            second_month: None,
            chart_active: false,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    // ─── Loading ───

    /// Return the cached readings, fetching and parsing them on first use.
    ///
    /// The loading indicator is shown for the duration of the fetch. On failure
    /// the error banner is shown and the fallback readings are cached instead.
    pub async fn load<S, D>(&mut self, source: &S, ui: &mut D) -> &[Record]
    where
        S: CsvSource,
        D: Dashboard,
    {
        if self.dataset.is_some() {
            log::info!("using cached readings");
            return self.records();
        }
        if !self.begin_load(ui) {
            return self.records();
        }
        let outcome = source.fetch().await;
        self.finish_load(outcome, ui)
    }

    /// True when nothing is cached and no fetch is in flight.
    pub fn needs_fetch(&self) -> bool {
        self.dataset.is_none() && !self.loading
    }

    /// Mark a fetch as started and show the loading indicator.
    ///
    /// Returns false (and does nothing) when a fetch is not needed. Front ends
    /// that cannot hold the session across an await call this, fetch, then
    /// hand the outcome to [`Session::finish_load`].
    pub fn begin_load<D: Dashboard>(&mut self, ui: &mut D) -> bool {
        if !self.needs_fetch() {
            return false;
        }
        self.loading = true;
        ui.set_loading(true);
        true
    }

    /// Install the outcome of a fetch and hide the loading indicator.
    pub fn finish_load<D: Dashboard>(
        &mut self,
        outcome: Result<String, FetchError>,
        ui: &mut D,
    ) -> &[Record] {
        self.loading = false;
        ui.set_loading(false);

        if self.dataset.is_some() {
            log::warn!("ignoring late load result, readings already cached");
            return self.records();
        }

        match outcome {
            Ok(text) => {
                let records = parse_csv(&text).into_records();
                match (records.first(), records.last()) {
                    (Some(first), Some(last)) => log::info!(
                        "loaded {} readings from {} ({} to {})",
                        records.len(),
                        self.config.csv_path,
                        format_iso(&first.date),
                        format_iso(&last.date)
                    ),
                    _ => log::info!("no readings in {}", self.config.csv_path),
                }
                ui.set_error_visible(false);
                self.dataset = Some(records);
            }
            Err(e) => {
                log::error!("failed to load {}: {}", self.config.csv_path, e);
                ui.set_error_visible(true);
                let records = fallback_records();
                log::info!("falling back to {} built-in readings", records.len());
                self.load_error = Some(e);
                self.dataset = Some(records);
            }
        }
        self.records()
    }

    /// The fetch error that caused the fallback dataset to be used, if any.
    pub fn load_error(&self) -> Option<&FetchError> {
        self.load_error.as_ref()
    }

    /// Cached readings, or an empty slice before the first load.
    pub fn records(&self) -> &[Record] {
        self.dataset.as_deref().unwrap_or(&[])
    }

    // ─── Filtering ───

    /// Readings in the trailing window ending today.
    pub fn filter_by_period(&self, period: Period) -> Vec<Record> {
        filter::filter_by_period(self.records(), period, today())
    }

    /// Readings in the zero-based `month0` of `year`.
    pub fn filter_by_month_year(&self, month0: u32, year: i32) -> Vec<Record> {
        filter::filter_by_month_year(self.records(), month0, year)
    }

    pub fn available_months(&self) -> Vec<MonthKey> {
        available_months(self.records())
    }

    // ─── Mode ───

    pub fn current_period(&self) -> Period {
        self.current_period
    }

    pub fn comparison_mode(&self) -> bool {
        self.comparison_mode
    }

    pub fn selected_months(&self) -> (Option<MonthKey>, Option<MonthKey>) {
        (self.first_month, self.second_month)
    }

    /// Make `period` current and draw it.
    ///
    /// A filter button always redraws the trailing window, even in comparison
    /// mode; the next month selection draws the comparison again.
    pub fn select_period<D: Dashboard>(&mut self, period: Period, ui: &mut D) {
        self.current_period = period;
        self.render_period(ui);
    }

    /// Enter or leave comparison mode.
    ///
    /// Entering fills the month selectors and draws the comparison for the
    /// current selection. Leaving redraws the trailing window.
    pub fn set_comparison_mode<D: Dashboard>(&mut self, enabled: bool, ui: &mut D) {
        self.comparison_mode = enabled;
        ui.set_comparison_visible(enabled);
        if enabled {
            self.populate_month_selectors(ui);
            self.update_comparison(ui);
        } else {
            self.render_period(ui);
        }
    }

    /// Change the month pair. Redraws when comparison mode is on.
    pub fn select_months<D: Dashboard>(
        &mut self,
        first: Option<MonthKey>,
        second: Option<MonthKey>,
        ui: &mut D,
    ) {
        self.first_month = first;
        self.second_month = second;
        if self.comparison_mode {
            self.update_comparison(ui);
        }
    }

    // ─── Rendering ───

    /// Chart, table and stats for the current trailing window.
    pub fn render_period<D: Dashboard>(&mut self, ui: &mut D) {
        let locale = self.config.locale;
        let readings = self.filter_by_period(self.current_period);

        self.replace_chart(&view::period_chart(&readings, self.current_period, locale), ui);
        ui.show_table(&view::table_rows(&readings, locale));
        ui.show_stats(&view::stats_panel(&calculate_stats(&readings), locale));
    }

    /// Draw the month comparison. Returns false (no redraw) unless both months
    /// are selected.
    pub fn update_comparison<D: Dashboard>(&mut self, ui: &mut D) -> bool {
        let (Some(first), Some(second)) = (self.first_month, self.second_month) else {
            return false;
        };
        let locale = self.config.locale;
        let first_readings = filter::filter_by_month(self.records(), first);
        let second_readings = filter::filter_by_month(self.records(), second);

        let series = build_series(&first_readings, &second_readings);
        let chart = view::comparison_chart(
            &series,
            &first.label(locale),
            &second.label(locale),
            locale,
        );
        self.replace_chart(&chart, ui);

        let first_stats = calculate_stats(&first_readings);
        let second_stats = calculate_stats(&second_readings);
        ui.show_stats(&view::comparison_stats_panel(
            (&first_stats, first),
            (&second_stats, second),
            locale,
        ));
        true
    }

    /// Refill both selectors. Refilling resets each to the first option, the
    /// most recent month.
    fn populate_month_selectors<D: Dashboard>(&mut self, ui: &mut D) {
        let months = self.available_months();
        ui.show_month_options(&view::month_options(&months, self.config.locale));

        let latest = months.first().copied();
        self.first_month = latest;
        self.second_month = latest;
    }

    fn replace_chart<D: Dashboard>(&mut self, chart: &view::ChartSpec, ui: &mut D) {
        if self.chart_active {
            ui.destroy_chart();
        }
        ui.draw_chart(chart);
        self.chart_active = true;
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use crate::view::{ChartKind, ChartSpec, MonthOption, StatsPanel, TableRow};
    use pluv_utils::dates::days_before;

    /// Records every call so tests can assert on the sequence.
    #[derive(Default)]
    struct RecordingDashboard {
        events: Vec<String>,
        charts: Vec<ChartSpec>,
        tables: Vec<Vec<TableRow>>,
        stats: Vec<StatsPanel>,
        options: Vec<Vec<MonthOption>>,
    }

    impl RecordingDashboard {
        fn count(&self, event: &str) -> usize {
            self.events.iter().filter(|e| e.as_str() == event).count()
        }
    }

    impl Dashboard for RecordingDashboard {
        fn set_loading(&mut self, visible: bool) {
            self.events.push(format!("loading:{}", visible));
        }
        fn set_error_visible(&mut self, visible: bool) {
            self.events.push(format!("error:{}", visible));
        }
        fn destroy_chart(&mut self) {
            self.events.push("destroy".to_string());
        }
        fn draw_chart(&mut self, chart: &ChartSpec) {
            self.events.push("draw".to_string());
            self.charts.push(chart.clone());
        }
        fn show_table(&mut self, rows: &[TableRow]) {
            self.tables.push(rows.to_vec());
        }
        fn show_stats(&mut self, panel: &StatsPanel) {
            self.stats.push(panel.clone());
        }
        fn show_month_options(&mut self, options: &[MonthOption]) {
            self.options.push(options.to_vec());
        }
        fn set_comparison_visible(&mut self, visible: bool) {
            self.events.push(format!("comparison:{}", visible));
        }
    }

    const CSV: &str = "date,precipitation,notes
2024-06-02,4.0,
2024-05-01,3.0,Garoa
2024-06-01,1.0,
2024-05-03,0.0,
";

    fn failing() -> StaticSource {
        StaticSource::failing(FetchError::Status {
            status: 404,
            reason: "Not Found".to_string(),
        })
    }

    fn session() -> Session {
        Session::new(DashboardConfig::default())
    }

    #[tokio::test]
    async fn test_load_parses_and_caches() {
        let source = StaticSource::ok(CSV);
        let mut ui = RecordingDashboard::default();
        let mut s = session();

        assert!(s.records().is_empty());
        let count = s.load(&source, &mut ui).await.len();
        assert_eq!(count, 4);
        assert!(s.records().windows(2).all(|w| w[0].date <= w[1].date));
        assert_eq!(ui.events, vec!["loading:true", "loading:false", "error:false"]);
        assert!(s.load_error().is_none());
    }

    #[tokio::test]
    async fn test_repeated_load_never_refetches() {
        let source = StaticSource::ok(CSV);
        let mut ui = RecordingDashboard::default();
        let mut s = session();

        s.load(&source, &mut ui).await;
        s.load(&source, &mut ui).await;
        s.load(&source, &mut ui).await;
        assert_eq!(source.fetch_count(), 1);
        assert_eq!(ui.count("loading:true"), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_falls_back_once() {
        let source = failing();
        let mut ui = RecordingDashboard::default();
        let mut s = session();

        let loaded = s.load(&source, &mut ui).await.to_vec();
        assert_eq!(loaded, fallback_records());
        assert_eq!(ui.count("error:true"), 1);
        assert_eq!(ui.count("loading:false"), 1);
        assert!(matches!(s.load_error(), Some(FetchError::Status { status: 404, .. })));

        // The fallback is now the cache: no second fetch, no second banner.
        s.load(&source, &mut ui).await;
        assert_eq!(source.fetch_count(), 1);
        assert_eq!(ui.count("error:true"), 1);
    }

    #[test]
    fn test_split_load_used_by_async_front_ends() {
        let mut ui = RecordingDashboard::default();
        let mut s = session();

        assert!(s.needs_fetch());
        assert!(s.begin_load(&mut ui));
        assert!(!s.begin_load(&mut ui), "no second fetch while one is in flight");
        s.finish_load(Ok(CSV.to_string()), &mut ui);
        assert!(!s.needs_fetch());
        assert_eq!(s.records().len(), 4);

        // A straggling result cannot replace the cache.
        s.finish_load(Ok("date,precipitation,notes\n".to_string()), &mut ui);
        assert_eq!(s.records().len(), 4);
    }

    #[test]
    fn test_filters_before_load_are_empty() {
        let s = session();
        assert!(s.filter_by_period(Period::All).is_empty());
        assert!(s.filter_by_month_year(5, 2024).is_empty());
    }

    #[tokio::test]
    async fn test_filter_by_period_relative_to_today() {
        let now = today();
        let csv = format!(
            "date,precipitation,notes\n{},1,\n{},2,\n{},3,\n",
            format_iso(&days_before(now, 8)),
            format_iso(&days_before(now, 7)),
            format_iso(&now),
        );
        let source = StaticSource::ok(csv);
        let mut ui = RecordingDashboard::default();
        let mut s = session();
        s.load(&source, &mut ui).await;

        let week = s.filter_by_period(Period::Days(7));
        assert_eq!(week.len(), 2);
        assert!(week.iter().all(|r| r.date >= days_before(now, 7)));
        assert_eq!(s.filter_by_period(Period::All), s.records().to_vec());
    }

    #[tokio::test]
    async fn test_filter_by_month_year_ignores_order() {
        let source = StaticSource::ok(CSV);
        let mut ui = RecordingDashboard::default();
        let mut s = session();
        s.load(&source, &mut ui).await;

        let june = s.filter_by_month_year(5, 2024);
        assert_eq!(june.len(), 2);
        assert!(june.iter().all(|r| r.in_month(2024, 6)));
    }

    #[tokio::test]
    async fn test_chart_destroyed_before_each_redraw() {
        let source = StaticSource::ok(CSV);
        let mut ui = RecordingDashboard::default();
        let mut s = session();
        s.load(&source, &mut ui).await;
        ui.events.clear();

        s.select_period(Period::All, &mut ui);
        s.select_period(Period::Days(7), &mut ui);
        s.select_period(Period::All, &mut ui);
        assert_eq!(ui.events, vec!["draw", "destroy", "draw", "destroy", "draw"]);
        assert_eq!(ui.charts[0].kind, ChartKind::Bar);
        assert_eq!(ui.tables[0].len(), 4);
        assert_eq!(ui.stats[0].total, "8.0");
    }

    #[tokio::test]
    async fn test_entering_comparison_populates_and_draws() {
        let source = StaticSource::ok(CSV);
        let mut ui = RecordingDashboard::default();
        let mut s = session();
        s.load(&source, &mut ui).await;
        s.select_period(Period::All, &mut ui);

        s.set_comparison_mode(true, &mut ui);
        let values: Vec<&str> = ui.options[0].iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["2024-06", "2024-05"]);
        assert_eq!(ui.options[0][0].label, "junho de 2024");

        // Both selectors default to the most recent month.
        let latest = MonthKey::new(2024, 6);
        assert_eq!(s.selected_months(), (latest, latest));
        let chart = ui.charts.last().unwrap();
        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.labels, vec!["1", "2"]);

        s.select_months(MonthKey::new(2024, 5), MonthKey::new(2024, 6), &mut ui);
        let chart = ui.charts.last().unwrap();
        assert_eq!(chart.labels, vec!["1", "2", "3"]);
        assert_eq!(chart.datasets[0].data, vec![Some(3.0), None, Some(0.0)]);
        assert_eq!(chart.datasets[1].data, vec![Some(1.0), Some(4.0), None]);
        let panel = ui.stats.last().unwrap();
        assert_eq!(panel.total, "3.0 / 5.0");
        assert_eq!(panel.max_date, "maio / junho");
    }

    #[tokio::test]
    async fn test_comparison_with_missing_selection_is_a_no_op() {
        let source = StaticSource::ok("date,precipitation,notes\n");
        let mut ui = RecordingDashboard::default();
        let mut s = session();
        s.load(&source, &mut ui).await;

        s.set_comparison_mode(true, &mut ui);
        assert_eq!(s.selected_months(), (None, None));
        assert!(ui.charts.is_empty());

        s.select_months(MonthKey::new(2024, 6), None, &mut ui);
        assert!(ui.charts.is_empty());
        assert!(!s.update_comparison(&mut ui));
    }

    #[tokio::test]
    async fn test_period_button_redraws_while_comparing() {
        let source = StaticSource::ok(CSV);
        let mut ui = RecordingDashboard::default();
        let mut s = session();
        s.load(&source, &mut ui).await;

        s.set_comparison_mode(true, &mut ui);
        assert_eq!(ui.charts.last().map(|c| c.kind), Some(ChartKind::Line));

        s.select_period(Period::All, &mut ui);
        assert!(s.comparison_mode());
        assert_eq!(s.current_period(), Period::All);
        assert_eq!(ui.charts.last().map(|c| c.kind), Some(ChartKind::Bar));
        assert_eq!(ui.stats.last().map(|p| p.total.as_str()), Some("8.0"));

        // A month selection takes the chart back.
        s.select_months(MonthKey::new(2024, 5), MonthKey::new(2024, 6), &mut ui);
        assert_eq!(ui.charts.last().map(|c| c.kind), Some(ChartKind::Line));
    }

    #[tokio::test]
    async fn test_reentering_comparison_resets_selection_to_latest() {
        let source = StaticSource::ok(CSV);
        let mut ui = RecordingDashboard::default();
        let mut s = session();
        s.load(&source, &mut ui).await;

        s.set_comparison_mode(true, &mut ui);
        s.select_months(MonthKey::new(2024, 5), MonthKey::new(2024, 5), &mut ui);
        s.set_comparison_mode(false, &mut ui);
        s.set_comparison_mode(true, &mut ui);

        let latest = MonthKey::new(2024, 6);
        assert_eq!(s.selected_months(), (latest, latest));
        assert_eq!(ui.options.len(), 2);
        assert_eq!(ui.stats.last().map(|p| p.max_date.as_str()), Some("junho / junho"));
    }

    #[tokio::test]
    async fn test_leaving_comparison_restores_period_view() {
        let source = StaticSource::ok(CSV);
        let mut ui = RecordingDashboard::default();
        let mut s = session();
        s.load(&source, &mut ui).await;
        s.select_period(Period::All, &mut ui);

        s.set_comparison_mode(true, &mut ui);
        assert_eq!(ui.charts.last().map(|c| c.kind), Some(ChartKind::Line));

        s.set_comparison_mode(false, &mut ui);
        assert!(!s.comparison_mode());
        assert_eq!(ui.charts.last().map(|c| c.kind), Some(ChartKind::Bar));
        assert_eq!(ui.tables.last().map(|t| t.len()), Some(4));
        assert_eq!(ui.count("comparison:false"), 1);
    }
}
