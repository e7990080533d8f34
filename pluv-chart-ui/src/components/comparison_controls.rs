//! Comparison mode toggle and the two month selectors.

use crate::state::AppState;
use crate::web_dashboard::WebDashboard;
use dioxus::prelude::*;
use pluv_data::MonthKey;
use pluv_session::Session;

/// Checkbox that switches comparison mode, plus the month pair selectors.
/// Reads options from AppState and the current selection from the session.
#[component]
pub fn ComparisonControls() -> Element {
    let state = use_context::<AppState>();
    let mut session = use_context::<Signal<Session>>();
    let enabled = session.read().comparison_mode();
    let (first, second) = session.read().selected_months();
    let options = state.month_options.read().clone();
    let visible = (state.comparison_visible)();

    let on_toggle = move |_evt: Event<FormData>| {
        let enabled = !session.peek().comparison_mode();
        let mut ui = WebDashboard::new(state);
        session.write().set_comparison_mode(enabled, &mut ui);
    };

    let on_first_change = move |evt: Event<FormData>| {
        let key = evt.value().parse::<MonthKey>().ok();
        let (_, second) = session.peek().selected_months();
        let mut ui = WebDashboard::new(state);
        session.write().select_months(key, second, &mut ui);
    };

    let on_second_change = move |evt: Event<FormData>| {
        let key = evt.value().parse::<MonthKey>().ok();
        let (first, _) = session.peek().selected_months();
        let mut ui = WebDashboard::new(state);
        session.write().select_months(first, key, &mut ui);
    };

    let first_value = first.map(|k| k.to_string()).unwrap_or_default();
    let second_value = second.map(|k| k.to_string()).unwrap_or_default();

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                input {
                    id: "comparisonToggle",
                    r#type: "checkbox",
                    checked: enabled,
                    onchange: on_toggle,
                }
                " Comparar dois meses"
            }
            if visible {
                div {
                    id: "comparisonSelectors",
                    style: "margin-top: 8px; display: flex; gap: 12px; align-items: center;",
                    label {
                        r#for: "period1",
                        style: "font-weight: bold;",
                        "Primeiro mês: "
                    }
                    select {
                        id: "period1",
                        onchange: on_first_change,
                        for opt in options.iter() {
                            option {
                                value: "{opt.value}",
                                selected: opt.value == first_value,
                                "{opt.label}"
                            }
                        }
                    }
                    label {
                        r#for: "period2",
                        style: "font-weight: bold;",
                        "Segundo mês: "
                    }
                    select {
                        id: "period2",
                        onchange: on_second_change,
                        for opt in options.iter() {
                            option {
                                value: "{opt.value}",
                                selected: opt.value == second_value,
                                "{opt.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
