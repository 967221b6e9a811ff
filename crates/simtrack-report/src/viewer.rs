//! Chart viewer that writes HTML pages.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use simtrack_core::menu::LineSource;
use simtrack_core::traits::{ChartViewer, PerformanceChart};

use crate::chart::write_chart_page;

/// Writes each chart to `<chart_dir>/chart-<owner>-<timestamp>-<n>.html`,
/// where `n` counts the pages this viewer has written.
///
/// When a dismissal source is attached, `display` blocks until the operator
/// enters a line, so the caller does not continue until the chart is closed.
pub struct HtmlChartViewer {
    chart_dir: PathBuf,
    dismiss: Option<Box<dyn LineSource>>,
    out: Box<dyn Write>,
    written: Vec<PathBuf>,
}

impl HtmlChartViewer {
    /// A non-blocking viewer printing to stdout.
    pub fn new(chart_dir: impl Into<PathBuf>) -> Self {
        Self {
            chart_dir: chart_dir.into(),
            dismiss: None,
            out: Box::new(io::stdout()),
            written: Vec::new(),
        }
    }

    /// Block on `source` after each chart until a line (or end of input) arrives.
    pub fn wait_on(mut self, source: Box<dyn LineSource>) -> Self {
        self.dismiss = Some(source);
        self
    }

    /// Send viewer messages somewhere other than stdout.
    pub fn with_output(mut self, out: Box<dyn Write>) -> Self {
        self.out = out;
        self
    }

    pub fn chart_dir(&self) -> &Path {
        &self.chart_dir
    }

    /// Pages written so far, oldest first.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn page_path(&self, owner: &str) -> PathBuf {
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
        let seq = self.written.len() + 1;
        self.chart_dir
            .join(format!("chart-{}-{timestamp}-{seq}.html", slugify(owner)))
    }
}

impl ChartViewer for HtmlChartViewer {
    fn display(&mut self, chart: &PerformanceChart) -> Result<()> {
        let path = self.page_path(&chart.owner);
        write_chart_page(chart, &path)?;
        tracing::info!(owner = %chart.owner, path = %path.display(), "chart written");

        writeln!(self.out, "Chart for {} written to: {}", chart.owner, path.display())?;
        self.written.push(path);

        if let Some(source) = self.dismiss.as_mut() {
            write!(self.out, "Press Enter to close the chart viewer...")?;
            self.out.flush()?;
            if source.next_line()?.is_none() {
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}

/// Lowercase ASCII slug for file names; anything else collapses to `-`.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "profile".to_string()
    } else {
        slug.to_string()
    }
}
