//! Trailing-window filter buttons.

use crate::state::AppState;
use crate::web_dashboard::WebDashboard;
use dioxus::prelude::*;
use pluv_data::period::Period;
use pluv_session::Session;

/// Button choices, in display order.
const PERIODS: [(Period, &str); 4] = [
    (Period::Days(7), "7 dias"),
    (Period::Days(15), "15 dias"),
    (Period::Days(30), "30 dias"),
    (Period::All, "Todos"),
];

/// Row of period buttons; the active one is highlighted.
#[component]
pub fn PeriodFilter() -> Element {
    let mut state = use_context::<AppState>();
    let mut session = use_context::<Signal<Session>>();
    let active = (state.active_period)();

    rsx! {
        div {
            role: "group",
            style: "margin: 8px 0; display: flex; gap: 8px;",
            for (period, label) in PERIODS {
                button {
                    class: if period == active { "filter-btn active" } else { "filter-btn" },
                    "data-period": "{period}",
                    style: if period == active {
                        "padding: 4px 12px; border: 1px solid #576CBC; border-radius: 4px; background: #576CBC; color: white;"
                    } else {
                        "padding: 4px 12px; border: 1px solid #576CBC; border-radius: 4px; background: white; color: #576CBC;"
                    },
                    onclick: move |_| {
                        let mut ui = WebDashboard::new(state);
                        session.write().select_period(period, &mut ui);
                        state.active_period.set(period);
                    },
                    "{label}"
                }
            }
        }
    }
}
