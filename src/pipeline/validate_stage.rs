//! Schema validation stage.

use crate::model::Document;
use crate::schema::{Schema, SchemaValidation};
use anyhow::{Context, Result};
use std::path::Path;

/// Validate every document against the schema at `schema_path`.
///
/// Violations are reported, never fatal; only an unreadable schema fails.
pub fn validate_documents(
    schema_path: &Path,
    documents: &[&Document],
    quiet: bool,
) -> Result<Vec<SchemaValidation>> {
    let schema = Schema::load(schema_path)
        .with_context(|| format!("Failed to load schema {}", schema_path.display()))?;

    let results: Vec<SchemaValidation> = documents
        .iter()
        .map(|document| schema.validate(document))
        .collect();

    if !quiet {
        for result in &results {
            if result.is_valid {
                tracing::info!("{} conforms to schema", result.document);
            } else {
                tracing::warn!(
                    "{} has {} schema errors and {} warnings",
                    result.document,
                    result.error_count,
                    result.warning_count
                );
            }
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentFormat;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_validate_both_documents() {
        let tmp = TempDir::new().unwrap();
        let schema_path = tmp.path().join("schema.json");
        std::fs::write(
            &schema_path,
            r#"{"required": ["name"], "properties": {"port": {"type": "integer"}}}"#,
        )
        .unwrap();

        let good = Document::new(json!({"name": "api", "port": 80}), DocumentFormat::Json)
            .with_source("good.json");
        let bad = Document::new(json!({"port": "80"}), DocumentFormat::Json)
            .with_source("bad.json");

        let results = validate_documents(&schema_path, &[&good, &bad], true).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_valid);
        assert!(!results[1].is_valid);
        assert_eq!(results[1].error_count, 2);
    }

    #[test]
    fn test_missing_schema_is_error() {
        let doc = Document::new(json!({}), DocumentFormat::Json);
        let err = validate_documents(Path::new("/nonexistent/schema.json"), &[&doc], true)
            .unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load schema"));
    }
}
