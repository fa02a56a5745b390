//! Validation of documents against a schema.

use super::types::{Schema, SchemaValidation, SchemaViolation, ViolationKind};
use crate::error::{CfgDiffError, ErrorContext, ParseErrorKind, Result};
use crate::model::{deep_equal, display_value, join_key, Document, ValueKind};
use crate::parsers::parse_document;
use serde_json::Value;
use std::path::Path;

impl Schema {
    /// Interpret a decoded tree as a schema.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(CfgDiffError::parse(
                "",
                ParseErrorKind::InvalidSchema(format!(
                    "schema root must be a mapping, found {}",
                    ValueKind::of(&value)
                )),
            ));
        }
        serde_json::from_value(value)
            .map_err(|e| CfgDiffError::parse("", ParseErrorKind::InvalidSchema(e.to_string())))
    }

    /// Load a schema file. JSON or YAML, selected like any input document.
    pub fn load(path: &Path) -> Result<Self> {
        let document = parse_document(path)?;
        Self::from_value(document.root).with_context(|| path.display().to_string())
    }

    /// Validate a document against this schema.
    #[must_use]
    pub fn validate(&self, document: &Document) -> SchemaValidation {
        let violations = self.validate_value(&document.root);
        tracing::debug!(
            "Schema validation of {}: {} violation(s)",
            document.label(),
            violations.len()
        );
        SchemaValidation::new(document.label(), violations)
    }

    /// Validate a raw tree, returning violations in walk order.
    #[must_use]
    pub fn validate_value(&self, value: &Value) -> Vec<SchemaViolation> {
        let mut out = Vec::new();
        check(self, value, "", &mut out);
        out
    }
}

fn check(schema: &Schema, value: &Value, path: &str, out: &mut Vec<SchemaViolation>) {
    if let Some(expected) = &schema.type_spec {
        if !expected.accepts(value) {
            out.push(SchemaViolation::new(
                display(path),
                ViolationKind::TypeMismatch,
                format!(
                    "expected {}, found {}",
                    expected.describe(),
                    ValueKind::of(value)
                ),
            ));
            // Nested keywords are meaningless once the type is wrong.
            return;
        }
    }

    if let Some(allowed) = &schema.allowed {
        if !allowed.iter().any(|candidate| deep_equal(candidate, value)) {
            let choices: Vec<String> = allowed.iter().map(display_value).collect();
            out.push(SchemaViolation::new(
                display(path),
                ViolationKind::InvalidEnum,
                format!(
                    "value {} is not one of [{}]",
                    display_value(value),
                    choices.join(", ")
                ),
            ));
        }
    }

    let Value::Object(map) = value else {
        return;
    };

    for field in &schema.required {
        if !map.contains_key(field) {
            out.push(SchemaViolation::new(
                join_key(path, field),
                ViolationKind::MissingRequired,
                format!("required field '{field}' is missing"),
            ));
        }
    }

    for (key, child_schema) in &schema.properties {
        if let Some(child) = map.get(key) {
            check(child_schema, child, &join_key(path, key), out);
        }
    }
}

fn display(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentFormat;
    use crate::schema::ViolationSeverity;
    use serde_json::json;

    fn schema(value: Value) -> Schema {
        Schema::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_required() {
        let s = schema(json!({"required": ["name", "port"]}));
        let violations = s.validate_value(&json!({"name": "api"}));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "port");
        assert_eq!(violations[0].kind, ViolationKind::MissingRequired);
        assert_eq!(violations[0].severity, ViolationSeverity::Error);
    }

    #[test]
    fn test_type_mismatch_and_union_types() {
        let s = schema(json!({
            "properties": {
                "port": {"type": "integer"},
                "proxy": {"type": ["string", "null"]},
                "ratio": {"type": "number"}
            }
        }));
        let violations = s.validate_value(&json!({"port": "8080", "proxy": null, "ratio": 1}));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "port");
        assert_eq!(violations[0].kind, ViolationKind::TypeMismatch);
        assert!(violations[0].message.contains("integer"));
        assert!(violations[0].message.contains("string"));

        assert!(s.validate_value(&json!({"port": 8080.0, "proxy": "p"})).is_empty());
        assert_eq!(s.validate_value(&json!({"port": 1.5})).len(), 1);
    }

    #[test]
    fn test_enum_is_warning() {
        let s = schema(json!({"properties": {"env": {"enum": ["dev", "prod"]}}}));
        let violations = s.validate_value(&json!({"env": "staging"}));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::InvalidEnum);
        assert_eq!(violations[0].severity, ViolationSeverity::Warning);
        assert!(violations[0].message.contains("staging"));
    }

    #[test]
    fn test_nested_properties() {
        let s = schema(json!({
            "properties": {
                "db": {
                    "type": "object",
                    "required": ["host"],
                    "properties": {"port": {"type": "integer"}}
                }
            }
        }));
        let violations = s.validate_value(&json!({"db": {"port": "x"}}));
        let paths: Vec<_> = violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["db.host", "db.port"]);
    }

    #[test]
    fn test_wrong_type_skips_nested_checks() {
        let s = schema(json!({
            "properties": {"db": {"type": "object", "required": ["host"]}}
        }));
        let violations = s.validate_value(&json!({"db": "sqlite"}));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::TypeMismatch);
    }

    #[test]
    fn test_document_summary() {
        let s = schema(json!({"required": ["a"], "properties": {"b": {"enum": [1]}}}));
        let doc = Document::new(json!({"b": 2}), DocumentFormat::Json).with_source("cfg.json");
        let result = s.validate(&doc);
        assert!(!result.is_valid);
        assert_eq!(result.error_count, 1);
        assert_eq!(result.warning_count, 1);
        assert_eq!(result.document, "cfg.json");
    }

    #[test]
    fn test_invalid_schema() {
        assert!(matches!(
            Schema::from_value(json!(["not", "a", "schema"])),
            Err(CfgDiffError::Parse { source: ParseErrorKind::InvalidSchema(_), .. })
        ));
        assert!(matches!(
            Schema::from_value(json!({"required": "name"})),
            Err(CfgDiffError::Parse { source: ParseErrorKind::InvalidSchema(_), .. })
        ));
        assert!(matches!(
            Schema::from_value(json!({"properties": {"a": {"type": "decimal"}}})),
            Err(CfgDiffError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_yaml_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.yaml");
        std::fs::write(&path, "required:\n  - name\nproperties:\n  name:\n    type: string\n").unwrap();
        let s = Schema::load(&path).unwrap();
        assert_eq!(s.required, vec!["name".to_string()]);
        assert!(s.properties.contains_key("name"));
    }
}
