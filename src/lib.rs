//! **Structural diff and risk classification for configuration files.**
//!
//! `cfgdiff` compares two JSON or YAML documents, lists every added, removed
//! and modified leaf by dotted path, and rates each change by how risky it is
//! to deploy. Comparisons can be checked against a small schema, saved to a
//! local history, and mined for fields that change again and again.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Document`], the format-independent tree every input is
//!   decoded into.
//! - **[`parsers`]**: format detection and JSON/YAML decoding.
//! - **[`diff`]**: the [`DiffEngine`], producing [`ChangeRecord`]s.
//! - **[`risk`]**: the [`RiskClassifier`], mapping changes to impacts via a
//!   rule table and escalation table.
//! - **[`schema`]**: validation of a document against a minimal schema.
//! - **[`history`]**: saved comparisons behind the [`HistoryStore`] trait,
//!   plus the frequency analyzer.
//! - **[`reports`]**: console and JSON output.
//! - **[`pipeline`]**: the stages the CLI chains together.
//!
//! ## Comparing Two Files
//!
//! ```no_run
//! use std::path::Path;
//! use cfgdiff::{parse_document, DiffEngine, RiskClassifier};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let old = parse_document(Path::new("config/prod.yaml"))?;
//!     let new = parse_document(Path::new("config/prod.next.yaml"))?;
//!
//!     let diff = DiffEngine::new().diff(&old, &new);
//!     let risk = RiskClassifier::new().assess(&diff.changes);
//!
//!     for impact in &risk.impacts {
//!         println!("[{}] {}: {}", impact.level.label(), impact.path, impact.description);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Validating Against a Schema
//!
//! ```no_run
//! use std::path::Path;
//! use cfgdiff::{parse_document, Schema};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let schema = Schema::load(Path::new("schema.yaml"))?;
//!     let doc = parse_document(Path::new("app.json"))?;
//!
//!     let result = schema.validate(&doc);
//!     for violation in &result.violations {
//!         println!("{}: {}", violation.path, violation.message);
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod history;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod risk;
pub mod schema;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, CompareConfig, HistoryViewConfig};
pub use config::{ConfigError, Validatable};
pub use diff::{ChangeKind, ChangeRecord, DiffEngine, DiffResult, DiffSummary};
pub use error::{CfgDiffError, ErrorContext, OptionContext, Result};
pub use history::{
    analyze, FileHistoryStore, HistoryEntry, HistoryInsights, HistoryStore, MemoryHistoryStore,
};
pub use model::{Document, DocumentFormat};
pub use parsers::{parse_document, parse_document_str};
pub use reports::{ReportFormat, ReportGenerator};
pub use risk::{ImpactCategory, ImpactRecord, RiskAssessment, RiskClassifier, RiskLevel};
pub use schema::{Schema, SchemaValidation};
