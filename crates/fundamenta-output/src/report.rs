//! Run report for a screening run.

use crate::export::RankingRow;
use crate::summary::ScreeningSummary;
use chrono::{DateTime, Utc};
use fundamenta_scoring::{RankedResult, RankingConfig, ScoringConfig};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required part of the report was not supplied.
    #[error("Missing report field: {0}")]
    Missing(&'static str),
}

/// Everything needed to audit one screening run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Report generation timestamp.
    pub generated_at: DateTime<Utc>,

    /// Input the companies were read from.
    pub input: Option<String>,

    /// Scoring configuration used.
    pub scoring: ScoringConfig,

    /// Selection parameters used.
    pub ranking: RankingConfig,

    /// Run statistics.
    pub summary: ScreeningSummary,

    /// Top-N rows of the ranking.
    pub top: Vec<RankingRow>,

    /// Symbols skipped before scoring.
    pub skipped: Vec<String>,

    /// Files written during the run.
    pub outputs: Vec<PathBuf>,
}

impl RunReport {
    /// Convert report to JSON string.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as pretty JSON, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Builder for creating run reports.
#[derive(Debug, Default)]
pub struct ReportBuilder<'a> {
    input: Option<String>,
    scoring: Option<ScoringConfig>,
    result: Option<&'a RankedResult>,
    summary: Option<ScreeningSummary>,
    skipped: Vec<String>,
    outputs: Vec<PathBuf>,
}

impl<'a> ReportBuilder<'a> {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input description.
    pub fn input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Set the scoring configuration.
    pub fn scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = Some(scoring);
        self
    }

    /// Set the ranking.
    pub const fn result(mut self, result: &'a RankedResult) -> Self {
        self.result = Some(result);
        self
    }

    /// Set the run summary.
    pub fn summary(mut self, summary: ScreeningSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Set the skipped symbols.
    pub fn skipped(mut self, skipped: Vec<String>) -> Self {
        self.skipped = skipped;
        self
    }

    /// Record a file written during the run.
    pub fn output(mut self, path: PathBuf) -> Self {
        self.outputs.push(path);
        self
    }

    /// Build the report.
    ///
    /// The ranking is required; the summary is derived from it when not set.
    pub fn build(self) -> Result<RunReport, ReportError> {
        let result = self.result.ok_or(ReportError::Missing("result"))?;
        let summary = self
            .summary
            .unwrap_or_else(|| ScreeningSummary::new(result, self.skipped.len(), 0));
        Ok(RunReport {
            generated_at: Utc::now(),
            input: self.input,
            scoring: self.scoring.unwrap_or_default(),
            ranking: *result.config(),
            summary,
            top: result.top_n().iter().map(RankingRow::from).collect(),
            skipped: self.skipped,
            outputs: self.outputs,
        })
    }
}
