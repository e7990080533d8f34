//! Chart container component with loading state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the canvas (Chart.js will render into this)
    pub id: String,
    /// Whether the data is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Optional height in pixels
    #[props(default = 360)]
    pub height: u32,
}

/// A fixed-height box holding the chart canvas, with a loading overlay.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "height: {}px; position: relative; width: 100%;",
        props.height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Carregando gráfico..."
                }
            }
            canvas {
                id: "{props.id}",
                role: "img",
                aria_label: "Gráfico de precipitação diária",
            }
        }
    }
}
