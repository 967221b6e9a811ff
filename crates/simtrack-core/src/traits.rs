//! Chart data and the viewer trait.
//!
//! A profile turns its history into a [`PerformanceChart`] and hands it to a
//! [`ChartViewer`]. The `simtrack-report` crate provides the HTML viewer used
//! by the binary.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Chart data
// ---------------------------------------------------------------------------

/// How a panel plots its series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    /// Connected points with markers.
    Line,
    /// One bar per category.
    Bar,
}

/// One panel of a performance chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPanel {
    pub kind: PanelKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Category labels along the x axis, in insertion order.
    pub categories: Vec<String>,
    /// One value per category.
    pub values: Vec<u32>,
    /// Fixed y axis range. `None` lets the renderer fit the data.
    #[serde(default)]
    pub y_range: Option<(u32, u32)>,
}

/// Two side-by-side panels describing a profile's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceChart {
    /// Name of the profile owner.
    pub owner: String,
    /// Left panel: accuracy by module.
    pub accuracy: ChartPanel,
    /// Right panel: duration by module.
    pub duration: ChartPanel,
}

impl PerformanceChart {
    /// Both panels, left to right.
    pub fn panels(&self) -> [&ChartPanel; 2] {
        [&self.accuracy, &self.duration]
    }
}

// ---------------------------------------------------------------------------
// Chart viewer trait
// ---------------------------------------------------------------------------

/// Displays a chart to the operator.
///
/// Implementations block until the operator dismisses the chart.
pub trait ChartViewer {
    fn display(&mut self, chart: &PerformanceChart) -> anyhow::Result<()>;
}

/// Viewer that discards every chart.
pub struct NoopViewer;

impl ChartViewer for NoopViewer {
    fn display(&mut self, _: &PerformanceChart) -> anyhow::Result<()> {
        Ok(())
    }
}
