//! simtrack-report — Chart rendering for simtrack.
//!
//! Turns a profile's [`PerformanceChart`](simtrack_core::traits::PerformanceChart)
//! into a self-contained HTML page and provides the viewer the binary uses.

pub mod chart;
pub mod viewer;

pub use chart::{generate_html, write_chart_page};
pub use viewer::HtmlChartViewer;
