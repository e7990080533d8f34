//! Page title with a caption naming what the chart currently shows.

use crate::state::AppState;
use dioxus::prelude::*;

/// Title line, then the chart caption (trailing window or month pair) with
/// the unit. The caption is announced to screen readers when it changes.
#[component]
pub fn ChartHeader(title: String) -> Element {
    let state = use_context::<AppState>();
    let caption = state.chart_title.read().clone();

    rsx! {
        div {
            style: "margin-bottom: 8px; display: flex; align-items: baseline; gap: 12px; flex-wrap: wrap;",
            h2 {
                style: "margin: 0; font-size: 20px;",
                "{title}"
            }
            span {
                id: "chart-caption",
                aria_live: "polite",
                style: "font-size: 13px; color: #576CBC;",
                if caption.is_empty() {
                    "Precipitação diária (mm)"
                } else {
                    "{caption} · mm"
                }
            }
        }
    }
}
