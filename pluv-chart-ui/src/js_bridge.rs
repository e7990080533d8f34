//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Chart.js glue lives in `assets/js/precipitation-chart.js` and is
//! evaluated as globals (no ES modules) once Chart.js itself has loaded.
//! Chart specs cross the boundary as JSON strings.

// Embed the chart glue at compile time
static PRECIPITATION_CHART_JS: &str = include_str!("../assets/js/precipitation-chart.js");

/// Chart.js UMD build, injected when the page did not include it.
const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Pluviometro JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Load Chart.js if needed and install the chart glue. Call once at app startup.
///
/// The glue is evaluated at global scope (indirect eval) once `Chart` exists,
/// and its functions are promoted to `window.*`.
pub fn init_charts() {
    let store_js = format!(
        "window.__pluvChartScripts = {};",
        js_literal(PRECIPITATION_CHART_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (window.__pluvChartsReady || window.__pluvChartsInit) return;
            window.__pluvChartsInit = true;
            if (typeof Chart === 'undefined' && !document.getElementById('pluv-chartjs')) {{
                var s = document.createElement('script');
                s.id = 'pluv-chartjs';
                s.src = {url};
                document.head.appendChild(s);
            }}
            var waitForChart = setInterval(function() {{
                if (typeof Chart !== 'undefined') {{
                    clearInterval(waitForChart);
                    (0, eval)(window.__pluvChartScripts);
                    delete window.__pluvChartScripts;
                    if (typeof renderPrecipitationChart !== 'undefined') window.renderPrecipitationChart = renderPrecipitationChart;
                    if (typeof destroyPrecipitationChart !== 'undefined') window.destroyPrecipitationChart = destroyPrecipitationChart;
                    window.__pluvChartsReady = true;
                    console.log('Pluviometro charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        url = js_literal(CHART_JS_URL),
    );
    let _ = js_sys::eval(&init_js);
}

/// Render a chart spec (bar or line) into the canvas with the given id.
///
/// Until Chart.js, the glue and the canvas are all present the spec is parked
/// as the canvas's pending spec. Each canvas has at most one poller; a newer
/// spec replaces the parked one instead of starting another timer.
pub fn render_chart(canvas_id: &str, spec_json: &str) {
    call_js(&render_script(canvas_id, spec_json));
}

fn render_script(canvas_id: &str, spec_json: &str) -> String {
    let id = js_literal(canvas_id);
    let spec = js_literal(spec_json);
    format!(
        r#"
        (function() {{
            var pending = window.__pluvPendingCharts = window.__pluvPendingCharts || {{}};
            var pollers = window.__pluvChartPollers = window.__pluvChartPollers || {{}};
            pending[{id}] = {spec};
            if (pollers[{id}]) return;
            pollers[{id}] = setInterval(function() {{
                if (window.__pluvChartsReady &&
                    typeof window.renderPrecipitationChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(pollers[{id}]);
                    delete pollers[{id}];
                    var next = pending[{id}];
                    delete pending[{id}];
                    if (next === undefined) return;
                    try {{
                        window.renderPrecipitationChart({id}, next);
                    }} catch(e) {{ console.error('[Pluviometro] renderPrecipitationChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Destroy the Chart.js instance bound to the given canvas, if any, and drop
/// any spec still waiting to be drawn there along with its poller.
pub fn destroy_chart(canvas_id: &str) {
    call_js(&destroy_script(canvas_id));
}

fn destroy_script(canvas_id: &str) -> String {
    let id = js_literal(canvas_id);
    format!(
        r#"
        (function() {{
            var pollers = window.__pluvChartPollers || {{}};
            if (pollers[{id}]) {{ clearInterval(pollers[{id}]); delete pollers[{id}]; }}
            if (window.__pluvPendingCharts) delete window.__pluvPendingCharts[{id}];
            if (window.destroyPrecipitationChart) window.destroyPrecipitationChart({id});
        }})();
        "#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_parks_spec_behind_a_single_poller() {
        let js = render_script("precipitation-chart", r#"{"kind":"bar"}"#);
        assert!(js.contains(r#"pending["precipitation-chart"] = "{\"kind\":\"bar\"}";"#));
        assert!(js.contains(r#"if (pollers["precipitation-chart"]) return;"#));
        assert_eq!(js.matches("setInterval").count(), 1);
    }

    #[test]
    fn test_destroy_clears_poller_and_pending_spec() {
        let js = destroy_script("precipitation-chart");
        assert!(js.contains(r#"clearInterval(pollers["precipitation-chart"])"#));
        assert!(js.contains(r#"delete window.__pluvPendingCharts["precipitation-chart"]"#));
        assert!(js.contains(r#"window.destroyPrecipitationChart("precipitation-chart")"#));
    }

    #[test]
    fn test_js_literal_escapes_quotes() {
        assert_eq!(js_literal(r#"a "b" 'c'"#), r#""a \"b\" 'c'""#);
    }
}
