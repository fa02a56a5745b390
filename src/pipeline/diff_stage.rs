//! Diff and classification stage.
//!
//! Builds the engine and the rule table from configuration, runs the diff
//! and classifies every surviving change.

use super::PipelineError;
use crate::config::CompareConfig;
use crate::diff::{DiffEngine, DiffResult};
use crate::model::Document;
use crate::risk::{RiskAssessment, RiskClassifier, RuleTable};
use anyhow::Result;

/// Output of a finished comparison.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    pub diff: DiffResult,
    pub risk: RiskAssessment,
}

impl Comparison {
    /// Whether the overall risk reaches the configured `--fail-on` level.
    #[must_use]
    pub fn fails(&self, config: &CompareConfig) -> bool {
        config
            .behavior
            .fail_on
            .is_some_and(|threshold| self.risk.exceeds(threshold))
    }
}

/// Diff two documents and classify the changes.
pub fn compute_comparison(
    config: &CompareConfig,
    old: &Document,
    new: &Document,
) -> Result<Comparison> {
    let quiet = config.behavior.quiet;

    let rules = RuleTable::with_custom(&config.risk.rules)
        .map_err(|source| PipelineError::RulesFailed { source })?;
    if !config.risk.rules.is_empty() && !quiet {
        tracing::info!("Using {} custom risk rules", config.risk.rules.len());
    }

    if !quiet {
        tracing::info!("Computing structural diff...");
    }
    let engine = DiffEngine::new().with_ignore_paths(&config.diff.ignore_paths);
    let diff = engine.diff(old, new);

    if !quiet {
        tracing::info!(
            "Diff: {} changes ({} added, {} removed, {} modified)",
            diff.summary.total,
            diff.summary.added,
            diff.summary.removed,
            diff.summary.modified
        );
        if diff.ignored > 0 {
            tracing::info!("Ignored {} changes under excluded paths", diff.ignored);
        }
    }

    let risk = RiskClassifier::with_rules(rules).assess(&diff.changes);

    Ok(Comparison { diff, risk })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, ComparePaths};
    use crate::model::DocumentFormat;
    use crate::risk::{ImpactCategory, RiskLevel, RuleSpec};
    use serde_json::json;
    use std::path::PathBuf;

    fn config(app: AppConfig) -> CompareConfig {
        CompareConfig::from_app(
            app,
            ComparePaths {
                file_a: PathBuf::from("a.json"),
                file_b: PathBuf::from("b.json"),
            },
            None,
            None,
        )
    }

    fn doc(value: serde_json::Value) -> Document {
        Document::new(value, DocumentFormat::Json)
    }

    #[test]
    fn test_timeout_reduction() {
        let comparison = compute_comparison(
            &config(AppConfig::default()),
            &doc(json!({"timeout": 30})),
            &doc(json!({"timeout": 10})),
        )
        .unwrap();
        assert_eq!(comparison.diff.changes.len(), 1);
        assert_eq!(comparison.risk.overall, Some(RiskLevel::High));
    }

    #[test]
    fn test_ignore_paths_applied() {
        let app = AppConfig::builder()
            .ignore_paths(vec!["metadata".to_string()])
            .build();
        let comparison = compute_comparison(
            &config(app),
            &doc(json!({"metadata": {"built": "mon"}, "port": 1})),
            &doc(json!({"metadata": {"built": "tue"}, "port": 2})),
        )
        .unwrap();
        assert_eq!(comparison.diff.changes.len(), 1);
        assert_eq!(comparison.diff.ignored, 1);
    }

    #[test]
    fn test_custom_rules_and_fail_on() {
        let mut app = AppConfig::builder()
            .fail_on(Some(RiskLevel::Medium))
            .build();
        app.risk.rules.push(RuleSpec {
            name: Some("replicas".to_string()),
            pattern: "^replicas$".to_string(),
            level: RiskLevel::Medium,
            category: ImpactCategory::Performance,
        });
        let config = config(app);
        let comparison = compute_comparison(
            &config,
            &doc(json!({"replicas": 3})),
            &doc(json!({"replicas": 5})),
        )
        .unwrap();
        assert_eq!(comparison.risk.overall, Some(RiskLevel::Medium));
        assert!(comparison.fails(&config));
    }

    #[test]
    fn test_no_threshold_never_fails() {
        let config = config(AppConfig::default());
        let comparison = compute_comparison(
            &config,
            &doc(json!({"secret": "x"})),
            &doc(json!({})),
        )
        .unwrap();
        assert_eq!(comparison.risk.overall, Some(RiskLevel::Critical));
        assert!(!comparison.fails(&config));
    }

    #[test]
    fn test_invalid_rule_is_an_error() {
        let mut app = AppConfig::default();
        app.risk.rules.push(RuleSpec {
            name: None,
            pattern: "(".to_string(),
            level: RiskLevel::High,
            category: ImpactCategory::General,
        });
        let err = compute_comparison(&config(app), &doc(json!({})), &doc(json!({})))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid risk rules"));
    }
}
