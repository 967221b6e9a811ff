//! User profiles and their session history.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::model::{EmotionalState, SessionRecord};
use crate::table::results_table;
use crate::traits::{ChartPanel, ChartViewer, PanelKind, PerformanceChart};

/// Fixed y axis range of the accuracy panel.
pub const ACCURACY_AXIS: (u32, u32) = (60, 100);

/// A tracked resident or student and their accumulated sessions.
///
/// Identity fields are fixed at construction. Records are append-only and
/// kept in the order they were recorded.
#[derive(Debug, Clone)]
pub struct Profile {
    name: String,
    program: String,
    graduation_year: i32,
    records: Vec<SessionRecord>,
}

/// What [`Profile::show_results`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOutcome {
    /// No records yet; only the notice was printed.
    Empty,
    /// Table printed and chart handed to the viewer.
    Displayed,
}

impl Profile {
    pub fn new(name: impl Into<String>, program: impl Into<String>, graduation_year: i32) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            graduation_year,
            records: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn graduation_year(&self) -> i32 {
        self.graduation_year
    }

    /// Recorded sessions, oldest first.
    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    /// Append a session built from the given values and confirm it on `out`.
    ///
    /// Returns the record as stored.
    #[allow(clippy::too_many_arguments)]
    pub fn record_session(
        &mut self,
        module: &str,
        accuracy: u32,
        duration_secs: u32,
        errors: u32,
        complexity: i32,
        emotional_state: EmotionalState,
        out: &mut dyn Write,
    ) -> io::Result<&SessionRecord> {
        self.records.push(SessionRecord::new(
            module,
            accuracy,
            duration_secs,
            errors,
            complexity,
            emotional_state,
        ));
        writeln!(
            out,
            "\n[Module '{module}'] Result successfully added for {}.",
            self.name
        )?;
        Ok(&self.records[self.records.len() - 1])
    }

    /// Write a feedback block for every record, oldest first.
    pub fn report_feedback(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "\nFeedback for {} ({}, {}):",
            self.name, self.program, self.graduation_year
        )?;
        for record in &self.records {
            writeln!(out, "\nModule: {}", record.module())?;
            writeln!(out, "Accuracy: {}%", record.accuracy())?;
            writeln!(out, "Time: {} seconds", record.duration_secs())?;
            writeln!(out, "Errors made: {}", record.errors())?;
            writeln!(out, "Complexity: {}/5", record.complexity())?;
            writeln!(out, "Emotional state: {}", record.emotional_state())?;
            writeln!(out, "{}", record.tier().message())?;
        }
        Ok(())
    }

    /// Print the history as a table, then show it as a chart.
    ///
    /// Profiles without records only print a notice; neither the table nor the
    /// viewer is touched in that case.
    pub fn show_results(
        &self,
        out: &mut dyn Write,
        viewer: &mut dyn ChartViewer,
    ) -> Result<ShowOutcome> {
        if self.records.is_empty() {
            writeln!(out, "{} has not completed any modules yet.", self.name)?;
            return Ok(ShowOutcome::Empty);
        }

        writeln!(out, "\nResults for {}:", self.name)?;
        writeln!(out, "{}", results_table(&self.records))?;
        out.flush()?;

        viewer
            .display(&self.performance_chart())
            .with_context(|| format!("failed to display chart for {}", self.name))?;
        Ok(ShowOutcome::Displayed)
    }

    fn performance_chart(&self) -> PerformanceChart {
        let categories: Vec<String> = self
            .records
            .iter()
            .map(|r| r.module().to_string())
            .collect();

        PerformanceChart {
            owner: self.name.clone(),
            accuracy: ChartPanel {
                kind: PanelKind::Line,
                title: format!("Accuracy across modules - {}", self.name),
                x_label: "Module".into(),
                y_label: "Accuracy (%)".into(),
                categories: categories.clone(),
                values: self.records.iter().map(|r| r.accuracy()).collect(),
                y_range: Some(ACCURACY_AXIS),
            },
            duration: ChartPanel {
                kind: PanelKind::Bar,
                title: format!("Execution time per module - {}", self.name),
                x_label: "Module".into(),
                y_label: "Time (seconds)".into(),
                categories,
                values: self.records.iter().map(|r| r.duration_secs()).collect(),
                y_range: None,
            },
        }
    }
}
