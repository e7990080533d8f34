//! Reusable Dioxus RSX components for the rain gauge dashboard.

mod chart_container;
mod chart_header;
mod comparison_controls;
mod data_table;
mod error_display;
mod loading_spinner;
mod period_filter;
mod stats_panel;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use comparison_controls::ComparisonControls;
pub use data_table::DataTable;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use period_filter::PeriodFilter;
pub use stats_panel::StatsPanelView;
