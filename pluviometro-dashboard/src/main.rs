//! Rain gauge dashboard
//!
//! Data flow:
//! 1. On mount: install the Chart.js glue and start fetching `data/pluviometro.csv`.
//! 2. When the fetch settles the session caches the readings (or the built-in
//!    fallback readings when it failed) and draws the default trailing window.
//! 3. Filter buttons and the comparison controls drive the session, which
//!    writes chart, table and stats updates back through `WebDashboard`.

use dioxus::prelude::*;
use pluv_chart_ui::components::{
    ChartContainer, ChartHeader, ComparisonControls, DataTable, ErrorDisplay, LoadingSpinner,
    PeriodFilter, StatsPanelView,
};
use pluv_chart_ui::js_bridge;
use pluv_chart_ui::state::AppState;
use pluv_chart_ui::web_dashboard::{WebDashboard, CHART_CANVAS_ID};
use pluv_chart_ui::web_source::WebSource;
use pluv_session::{CsvSource, DashboardConfig, Session};

const LOAD_ERROR_MESSAGE: &str =
    "Não foi possível carregar os dados do pluviômetro. Exibindo dados de exemplo.";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("pluviometro-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let config = DashboardConfig::default();
    let period = config.default_period;
    let state = use_context_provider(|| AppState::new(period));
    let session = use_context_provider(|| Signal::new(Session::new(config)));

    // ─── Load once on mount ───
    // The session is only written around the await, never held across it.
    use_effect(move || {
        js_bridge::init_charts();

        let mut session = session;
        let mut ui = WebDashboard::new(state);
        if !session.write().begin_load(&mut ui) {
            return;
        }
        let url = session.peek().config().csv_path.clone();
        log::info!("fetching readings from {}", url);

        spawn(async move {
            let outcome = WebSource::new(url).fetch().await;
            let mut ui = WebDashboard::new(state);
            let mut session = session.write();
            session.finish_load(outcome, &mut ui);
            session.render_period(&mut ui);
        });
    });

    let error_message = match session.peek().load_error() {
        Some(e) => format!("{} ({})", LOAD_ERROR_MESSAGE, e),
        None => LOAD_ERROR_MESSAGE.to_string(),
    };

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if (state.error_visible)() {
                ErrorDisplay { message: error_message }
            }

            if (state.loading)() {
                LoadingSpinner {}
            }

            ChartHeader { title: "Pluviômetro".to_string() }

            PeriodFilter {}
            ComparisonControls {}

            ChartContainer {
                id: CHART_CANVAS_ID.to_string(),
                loading: (state.loading)(),
            }

            StatsPanelView {}
            DataTable {}
        }
    }
}
