//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{ChangeRecord, DiffResult};
use crate::history::{HistoryEntry, HistoryInsights};
use crate::model::Document;
use crate::risk::{ImpactRecord, LevelCounts, RiskAssessment, RiskLevel};
use crate::schema::SchemaValidation;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, report: &T) -> Result<String, ReportError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        rendered.map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_compare_report(
        &self,
        diff: &DiffResult,
        risk: &RiskAssessment,
        old: &Document,
        new: &Document,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonCompareReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo::current(),
                generated_at: config
                    .metadata
                    .generated_at
                    .clone()
                    .unwrap_or_else(|| Utc::now().to_rfc3339()),
                file_a: DocumentInfo::new(old, config.metadata.file_a.as_deref()),
                file_b: DocumentInfo::new(new, config.metadata.file_b.as_deref()),
            },
            summary: JsonSummary {
                total_changes: diff.summary.total,
                added: diff.summary.added,
                removed: diff.summary.removed,
                modified: diff.summary.modified,
                ignored: diff.ignored,
                impacts: risk.counts,
            },
            overall_risk: risk.overall,
            changes: &diff.changes,
            impacts: &risk.impacts,
            validation: &config.schema_results,
        };
        self.render(&report)
    }

    fn generate_history_report(
        &self,
        entries: &[HistoryEntry],
        insights: &HistoryInsights,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.render(&JsonHistoryReport {
            tool: ToolInfo::current(),
            total_entries: entries.len(),
            entries,
            insights,
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON structures

#[derive(Serialize)]
struct JsonCompareReport<'a> {
    metadata: JsonReportMetadata,
    summary: JsonSummary,
    overall_risk: Option<RiskLevel>,
    changes: &'a [ChangeRecord],
    impacts: &'a [ImpactRecord],
    #[serde(skip_serializing_if = "no_results")]
    validation: &'a [SchemaValidation],
}

fn no_results(results: &&[SchemaValidation]) -> bool {
    results.is_empty()
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    file_a: DocumentInfo,
    file_b: DocumentInfo,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

impl ToolInfo {
    fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Serialize)]
struct DocumentInfo {
    path: String,
    format: String,
    top_level_keys: usize,
}

impl DocumentInfo {
    fn new(document: &Document, path: Option<&str>) -> Self {
        Self {
            path: path.map_or_else(|| document.label(), str::to_string),
            format: document.format.to_string(),
            top_level_keys: document.top_level_key_count(),
        }
    }
}

#[derive(Serialize)]
struct JsonSummary {
    total_changes: usize,
    added: usize,
    removed: usize,
    modified: usize,
    ignored: usize,
    impacts: LevelCounts,
}

#[derive(Serialize)]
struct JsonHistoryReport<'a> {
    tool: ToolInfo,
    total_entries: usize,
    entries: &'a [HistoryEntry],
    insights: &'a HistoryInsights,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff_values;
    use crate::history::{analyze, MemoryHistoryStore, HistoryStore};
    use crate::model::DocumentFormat;
    use crate::risk::RiskClassifier;
    use crate::schema::{SchemaViolation, ViolationKind};
    use serde_json::{json, Value};

    #[test]
    fn test_compare_report_shape() {
        let old = json!({"timeout": 30, "color": "red"});
        let new = json!({"timeout": 10, "port": 80});
        let diff = DiffResult::new(diff_values(&old, &new));
        let risk = RiskClassifier::new().assess(&diff.changes);
        let config = ReportConfig::default().with_schema_results(vec![SchemaValidation::new(
            "b.yaml",
            vec![SchemaViolation::new("name", ViolationKind::MissingRequired, "missing")],
        )]);

        let output = JsonReporter::new()
            .generate_compare_report(
                &diff,
                &risk,
                &Document::new(old, DocumentFormat::Json).with_source("a.json"),
                &Document::new(new, DocumentFormat::Yaml).with_source("b.yaml"),
                &config,
            )
            .unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["metadata"]["tool"]["name"], "cfgdiff");
        assert_eq!(parsed["metadata"]["file_a"]["path"], "a.json");
        assert_eq!(parsed["metadata"]["file_b"]["format"], "yaml");
        assert_eq!(parsed["summary"]["total_changes"], 3);
        assert_eq!(parsed["summary"]["added"], 1);
        assert_eq!(parsed["summary"]["removed"], 1);
        assert_eq!(parsed["summary"]["modified"], 1);
        assert_eq!(parsed["overall_risk"], "high");
        assert_eq!(parsed["changes"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["impacts"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["validation"][0]["violations"][0]["kind"], "MissingRequired");
    }

    #[test]
    fn test_validation_omitted_when_absent() {
        let diff = DiffResult::default();
        let doc = Document::new(json!({}), DocumentFormat::Json);
        let output = JsonReporter::new()
            .pretty(false)
            .generate_compare_report(&diff, &RiskAssessment::default(), &doc, &doc, &ReportConfig::default())
            .unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.get("validation").is_none());
        assert!(parsed["overall_risk"].is_null());
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_history_report() {
        let mut store = MemoryHistoryStore::new();
        let diff = DiffResult::new(diff_values(&json!({"a": 1}), &json!({"a": 2})));
        for name in ["one", "two"] {
            store
                .append(HistoryEntry::new(name, "a", "b", &diff, &RiskAssessment::default()))
                .unwrap();
        }
        let entries = store.load().unwrap();
        let output = JsonReporter::new()
            .generate_history_report(&entries, &analyze(&entries), &ReportConfig::default())
            .unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["total_entries"], 2);
        assert_eq!(parsed["entries"][0]["name"], "two");
        assert!(parsed["insights"]["frequent_fields"].as_array().unwrap().is_empty());
    }
}
