//! Summary statistics panel.

use crate::state::AppState;
use dioxus::prelude::*;

/// Total, average, maximum and date of the maximum for the current view.
#[component]
pub fn StatsPanelView() -> Element {
    let state = use_context::<AppState>();
    let stats = state.stats.read().clone();

    rsx! {
        div {
            style: "margin: 12px 0; display: flex; gap: 16px; flex-wrap: wrap; font-size: 14px;",
            StatCard { id: "stat-total", label: "Total (mm)", value: stats.total }
            StatCard { id: "stat-average", label: "Média diária (mm)", value: stats.average }
            StatCard { id: "stat-max", label: "Máxima (mm)", value: stats.max }
            StatCard { id: "stat-max-date", label: "Data da máxima", value: stats.max_date }
        }
    }
}

#[component]
fn StatCard(id: String, label: String, value: String) -> Element {
    rsx! {
        div {
            style: "padding: 8px 12px; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 4px; min-width: 120px;",
            div { style: "color: #666; font-size: 12px;", "{label}" }
            div { id: "{id}", style: "font-weight: bold; font-size: 18px;", "{value}" }
        }
    }
}
