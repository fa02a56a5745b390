//! Report generation for comparison results.
//!
//! Two output formats are provided:
//! - Console: grouped, optionally colorized terminal output
//! - JSON: a single structured document for programmatic use
//!
//! Reporters only format; every decision (what changed, how risky it is)
//! is made before a reporter sees the data.

mod console;
mod json;
mod types;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::diff::DiffResult;
use crate::history::{HistoryEntry, HistoryInsights};
use crate::model::Document;
use crate::risk::RiskAssessment;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for one comparison
    fn generate_compare_report(
        &self,
        diff: &DiffResult,
        risk: &RiskAssessment,
        old: &Document,
        new: &Document,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Generate a report of saved comparisons and their insights
    fn generate_history_report(
        &self,
        entries: &[HistoryEntry],
        insights: &HistoryInsights,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write a comparison report to a writer
    fn write_compare_report(
        &self,
        diff: &DiffResult,
        risk: &RiskAssessment,
        old: &Document,
        new: &Document,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_compare_report(diff, risk, old, new, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Console => {
            if use_color {
                Box::new(ConsoleReporter::new())
            } else {
                Box::new(ConsoleReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
