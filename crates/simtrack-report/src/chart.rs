//! SVG/HTML chart generator.
//!
//! Produces a self-contained HTML page with both panels of a
//! [`PerformanceChart`] drawn side by side as inline SVG.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use simtrack_core::traits::{ChartPanel, PanelKind, PerformanceChart};

const PANEL_WIDTH: f64 = 560.0;
const PANEL_HEIGHT: f64 = 420.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 100.0;
const Y_TICKS: u32 = 5;

/// Escape a string for safe HTML/SVG insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Vertical extent of a panel: its fixed range, or zero up to the data
/// maximum rounded up to the next hundred.
fn y_bounds(panel: &ChartPanel) -> (f64, f64) {
    if let Some((lo, hi)) = panel.y_range {
        if hi > lo {
            return (lo as f64, hi as f64);
        }
    }
    let max = panel.values.iter().copied().max().unwrap_or(0);
    let top = max.div_ceil(100).max(1) * 100;
    (0.0, top as f64)
}

struct Frame {
    lo: f64,
    hi: f64,
    band: f64,
}

impl Frame {
    fn new(panel: &ChartPanel) -> Self {
        let (lo, hi) = y_bounds(panel);
        let count = panel.categories.len().max(1) as f64;
        Self {
            lo,
            hi,
            band: plot_width() / count,
        }
    }

    fn x(&self, index: usize) -> f64 {
        MARGIN_LEFT + self.band * (index as f64 + 0.5)
    }

    /// Pixel row for a value, clamped to the plot area.
    fn y(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.lo, self.hi);
        MARGIN_TOP + plot_height() * (1.0 - (clamped - self.lo) / (self.hi - self.lo))
    }
}

fn plot_width() -> f64 {
    PANEL_WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    PANEL_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

/// Render one panel as a standalone `<svg>` element.
pub fn generate_panel_svg(panel: &ChartPanel) -> String {
    let frame = Frame::new(panel);
    let baseline = MARGIN_TOP + plot_height();
    let right = MARGIN_LEFT + plot_width();

    let mut svg = format!(
        "<svg class=\"panel\" width=\"{PANEL_WIDTH}\" height=\"{PANEL_HEIGHT}\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    );

    // Title and axis labels
    let _ = writeln!(
        svg,
        "  <text class=\"title\" x=\"{}\" y=\"24\" font-size=\"16\" font-weight=\"bold\" fill=\"currentColor\" text-anchor=\"middle\">{}</text>",
        PANEL_WIDTH / 2.0,
        html_escape(&panel.title)
    );
    let _ = writeln!(
        svg,
        "  <text class=\"x-label\" x=\"{}\" y=\"{}\" font-size=\"13\" fill=\"currentColor\" text-anchor=\"middle\">{}</text>",
        MARGIN_LEFT + plot_width() / 2.0,
        PANEL_HEIGHT - 8.0,
        html_escape(&panel.x_label)
    );
    let _ = writeln!(
        svg,
        "  <text class=\"y-label\" x=\"16\" y=\"{}\" font-size=\"13\" fill=\"currentColor\" text-anchor=\"middle\" transform=\"rotate(-90 16 {})\">{}</text>",
        MARGIN_TOP + plot_height() / 2.0,
        MARGIN_TOP + plot_height() / 2.0,
        html_escape(&panel.y_label)
    );

    // Gridlines and y ticks
    for i in 0..=Y_TICKS {
        let value = frame.lo + (frame.hi - frame.lo) * f64::from(i) / f64::from(Y_TICKS);
        let y = frame.y(value);
        let _ = writeln!(
            svg,
            "  <line x1=\"{MARGIN_LEFT}\" y1=\"{y:.1}\" x2=\"{right}\" y2=\"{y:.1}\" stroke=\"#d1d5db\" stroke-width=\"1\"/>"
        );
        let _ = writeln!(
            svg,
            "  <text class=\"y-tick\" x=\"{}\" y=\"{y:.1}\" font-size=\"11\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{value:.0}</text>",
            MARGIN_LEFT - 6.0
        );
    }

    // Axes
    let _ = writeln!(
        svg,
        "  <line x1=\"{MARGIN_LEFT}\" y1=\"{MARGIN_TOP}\" x2=\"{MARGIN_LEFT}\" y2=\"{baseline}\" stroke=\"currentColor\"/>"
    );
    let _ = writeln!(
        svg,
        "  <line x1=\"{MARGIN_LEFT}\" y1=\"{baseline}\" x2=\"{right}\" y2=\"{baseline}\" stroke=\"currentColor\"/>"
    );

    match panel.kind {
        PanelKind::Line => push_line_series(&mut svg, panel, &frame),
        PanelKind::Bar => push_bar_series(&mut svg, panel, &frame, baseline),
    }

    // Category labels, slanted so long module names do not overlap
    for (i, category) in panel.categories.iter().enumerate() {
        let x = frame.x(i);
        let y = baseline + 14.0;
        let _ = writeln!(
            svg,
            "  <text class=\"x-tick\" x=\"{x:.1}\" y=\"{y:.1}\" font-size=\"11\" fill=\"currentColor\" text-anchor=\"end\" transform=\"rotate(-30 {x:.1} {y:.1})\">{}</text>",
            html_escape(category)
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_line_series(svg: &mut String, panel: &ChartPanel, frame: &Frame) {
    let points: Vec<String> = panel
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| format!("{:.1},{:.1}", frame.x(i), frame.y(f64::from(v))))
        .collect();

    if points.len() > 1 {
        let _ = writeln!(
            svg,
            "  <polyline points=\"{}\" fill=\"none\" stroke=\"#2563eb\" stroke-width=\"2\"/>",
            points.join(" ")
        );
    }
    for (i, &v) in panel.values.iter().enumerate() {
        let _ = writeln!(
            svg,
            "  <circle class=\"marker\" cx=\"{:.1}\" cy=\"{:.1}\" r=\"4\" fill=\"#2563eb\"><title>{v}</title></circle>",
            frame.x(i),
            frame.y(f64::from(v))
        );
    }
}

fn push_bar_series(svg: &mut String, panel: &ChartPanel, frame: &Frame, baseline: f64) {
    let width = frame.band * 0.6;
    for (i, &v) in panel.values.iter().enumerate() {
        let top = frame.y(f64::from(v));
        let _ = writeln!(
            svg,
            "  <rect class=\"bar\" x=\"{:.1}\" y=\"{top:.1}\" width=\"{width:.1}\" height=\"{:.1}\" fill=\"#16a34a\" rx=\"2\"><title>{v}</title></rect>",
            frame.x(i) - width / 2.0,
            baseline - top
        );
    }
}

/// Generate the full chart page.
pub fn generate_html(chart: &PerformanceChart) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>simtrack results - {}</title>\n",
        html_escape(&chart.owner)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<header>\n");
    html.push_str(&format!(
        "<h1>Results for {}</h1>\n",
        html_escape(&chart.owner)
    ));
    html.push_str(&format!(
        "<p class=\"meta\">{} modules | generated {}</p>\n",
        chart.accuracy.categories.len(),
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    html.push_str("<section class=\"panels\">\n");
    for panel in chart.panels() {
        html.push_str(&generate_panel_svg(panel));
    }
    html.push_str("</section>\n");

    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(chart).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write the chart page to a file, creating parent directories.
pub fn write_chart_page(chart: &PerformanceChart, path: &Path) -> Result<()> {
    let html = generate_html(chart);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write chart to {}", path.display()))?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
.meta { color: #6b7280; }
.panels { display: flex; flex-wrap: wrap; gap: 1.5rem; }
.panel { border: 1px solid var(--border); border-radius: 8px; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
"#;
