//! Report type definitions.

use crate::schema::SchemaValidation;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Grouped, colorized terminal output
    #[default]
    Console,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Console => write!(f, "console"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
    /// Schema validation results, one per input document
    #[serde(default)]
    pub schema_results: Vec<SchemaValidation>,
}

impl ReportConfig {
    pub fn with_schema_results(mut self, results: Vec<SchemaValidation>) -> Self {
        self.schema_results = results;
        self
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// First input path
    pub file_a: Option<String>,
    /// Second input path
    pub file_b: Option<String>,
    /// Tool version
    pub tool_version: String,
    /// Generation timestamp
    pub generated_at: Option<String>,
}

impl ReportMetadata {
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }

    pub fn with_files(mut self, file_a: impl Into<String>, file_b: impl Into<String>) -> Self {
        self.file_a = Some(file_a.into());
        self.file_b = Some(file_b.into());
        self
    }
}
