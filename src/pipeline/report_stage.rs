//! Report output stage.
//!
//! Handles generating and writing comparison and history reports.

use super::{should_use_color, write_output, Comparison, OutputTarget, PipelineError};
use crate::config::{CompareConfig, HistoryViewConfig};
use crate::history::{HistoryEntry, HistoryInsights};
use crate::model::Document;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportMetadata};
use crate::schema::SchemaValidation;
use anyhow::Result;

/// Output a comparison report to the configured destination.
pub fn output_report(
    config: &CompareConfig,
    comparison: &Comparison,
    old: &Document,
    new: &Document,
    schema_results: Vec<SchemaValidation>,
) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());

    let report_config = ReportConfig {
        metadata: ReportMetadata {
            generated_at: Some(chrono::Utc::now().to_rfc3339()),
            ..ReportMetadata::new().with_files(old.label(), new.label())
        },
        ..ReportConfig::default()
    }
    .with_schema_results(schema_results);

    let use_color = should_use_color(config.output.no_color, &output_target);
    let reporter = create_reporter_with_options(config.output.format, use_color);
    let report = reporter
        .generate_compare_report(&comparison.diff, &comparison.risk, old, new, &report_config)
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;

    write_output(&report, &output_target, config.behavior.quiet)
}

/// Output saved history and its insights.
pub fn output_history_report(
    config: &HistoryViewConfig,
    entries: &[HistoryEntry],
    insights: &HistoryInsights,
) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let report_config = ReportConfig {
        metadata: ReportMetadata {
            generated_at: Some(chrono::Utc::now().to_rfc3339()),
            ..ReportMetadata::new()
        },
        ..ReportConfig::default()
    };

    let use_color = should_use_color(config.output.no_color, &output_target);
    let reporter = create_reporter_with_options(config.output.format, use_color);
    let report = reporter
        .generate_history_report(entries, insights, &report_config)
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;

    write_output(&report, &output_target, config.quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, ComparePaths};
    use crate::history::analyze;
    use crate::model::DocumentFormat;
    use crate::reports::ReportFormat;
    use crate::pipeline::compute_comparison;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_json_report_written_to_file() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("report.json");
        let app = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .output_file(Some(out.clone()))
            .quiet(true)
            .build();
        let config = CompareConfig::from_app(
            app,
            ComparePaths {
                file_a: PathBuf::from("a.json"),
                file_b: PathBuf::from("b.json"),
            },
            None,
            None,
        );
        let old = Document::new(json!({"a": 1}), DocumentFormat::Json).with_source("a.json");
        let new = Document::new(json!({"a": 1, "b": 2}), DocumentFormat::Json)
            .with_source("b.json");
        let comparison = compute_comparison(&config, &old, &new).unwrap();

        output_report(&config, &comparison, &old, &new, Vec::new()).unwrap();

        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(report["summary"]["added"], 1);
        assert_eq!(report["changes"][0]["path"], "b");
    }

    #[test]
    fn test_history_report_written_to_file() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("history.txt");
        let config = HistoryViewConfig::from_app(
            AppConfig::builder()
                .output_file(Some(out.clone()))
                .quiet(true)
                .build(),
        );

        output_history_report(&config, &[], &analyze(&[])).unwrap();

        let text = std::fs::read_to_string(out).unwrap();
        assert!(text.contains("Comparison History (0 entries)"));
        assert!(!text.contains("\x1b["));
    }
}
