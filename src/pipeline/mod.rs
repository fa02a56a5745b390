//! Pipeline orchestration for comparisons.
//!
//! This module provides the shared load → diff → classify → validate → report
//! stages used by the CLI command handlers.

mod diff_stage;
mod history_stage;
mod output;
mod parse;
mod report_stage;
mod validate_stage;

pub use diff_stage::{compute_comparison, Comparison};
pub use history_stage::{open_history_store, record_comparison, resolve_history_path};
pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::load_document_with_context;
pub use report_stage::{output_history_report, output_report};
pub use validate_stage::validate_documents;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Risk rules could not be compiled
    #[error("Invalid risk rules: {source}")]
    RulesFailed {
        #[source]
        source: crate::error::CfgDiffError,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Comparison completed (changes or not)
    pub const SUCCESS: i32 = 0;
    /// An error occurred
    pub const ERROR: i32 = 1;
    /// Overall risk met the `--fail-on` threshold
    pub const RISK_THRESHOLD_EXCEEDED: i32 = 2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::ERROR, 1);
        assert_eq!(exit_codes::RISK_THRESHOLD_EXCEEDED, 2);
    }

    #[test]
    fn test_pipeline_error_display() {
        let err = PipelineError::RulesFailed {
            source: crate::error::CfgDiffError::config("bad pattern"),
        };
        assert!(err.to_string().starts_with("Invalid risk rules"));
        assert!(err.to_string().contains("bad pattern"));
    }
}
