//! Shared Dioxus components and Chart.js bridge for the rain gauge dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Chart.js calls via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `web_dashboard`: the `Dashboard` implementation that writes into AppState
//! - `web_source`: a `CsvSource` backed by the browser `fetch` API
//! - `components`: Reusable RSX components (filters, selectors, panels, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod web_dashboard;
pub mod web_source;
