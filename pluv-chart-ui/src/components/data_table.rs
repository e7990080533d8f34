//! Accessible tabular view of the readings behind the chart.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn DataTable() -> Element {
    let state = use_context::<AppState>();
    let rows = state.table.read().clone();

    rsx! {
        table {
            style: "width: 100%; border-collapse: collapse; font-size: 13px; margin-top: 12px;",
            caption { style: "text-align: left; color: #666;", "Leituras diárias" }
            thead {
                tr {
                    th { style: "text-align: left;", "Data" }
                    th { style: "text-align: right;", "Precipitação (mm)" }
                    th { style: "text-align: left;", "Observações" }
                }
            }
            tbody {
                id: "data-table-body",
                for row in rows.iter() {
                    tr {
                        td { "{row.date}" }
                        td { style: "text-align: right;", "{row.precipitation}" }
                        td { "{row.notes}" }
                    }
                }
            }
        }
    }
}
