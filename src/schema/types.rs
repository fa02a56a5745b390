//! Schema and validation result types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON type names accepted in a schema's `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

impl SchemaType {
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::String, Value::String(_))
            | (Self::Number, Value::Number(_))
            | (Self::Boolean, Value::Bool(_))
            | (Self::Object, Value::Object(_))
            | (Self::Array, Value::Array(_))
            | (Self::Null, Value::Null) => true,
            (Self::Integer, Value::Number(n)) => {
                n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
            }
            _ => false,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Null => "null",
        }
    }
}

/// `type` keyword: a single type or a list of alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    One(SchemaType),
    Any(Vec<SchemaType>),
}

impl TypeSpec {
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::One(t) => t.accepts(value),
            Self::Any(types) => types.iter().any(|t| t.accepts(value)),
        }
    }

    /// Human-readable expectation, e.g. `string or null`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::One(t) => t.name().to_string(),
            Self::Any(types) => types
                .iter()
                .map(SchemaType::name)
                .collect::<Vec<_>>()
                .join(" or "),
        }
    }
}

/// Supported subset of JSON Schema. Unknown keywords are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_spec: Option<TypeSpec>,
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,
}

/// What a violation is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    MissingRequired,
    TypeMismatch,
    InvalidEnum,
}

impl ViolationKind {
    /// Errors for structural problems, warnings for enum mismatches.
    #[must_use]
    pub const fn severity(&self) -> ViolationSeverity {
        match self {
            Self::MissingRequired | Self::TypeMismatch => ViolationSeverity::Error,
            Self::InvalidEnum => ViolationSeverity::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationSeverity {
    Error,
    Warning,
}

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaViolation {
    pub path: String,
    pub kind: ViolationKind,
    pub message: String,
    pub severity: ViolationSeverity,
}

impl SchemaViolation {
    pub fn new(path: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
            severity: kind.severity(),
        }
    }
}

/// Validation outcome for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaValidation {
    /// Label of the validated document
    pub document: String,
    pub is_valid: bool,
    pub violations: Vec<SchemaViolation>,
    pub error_count: usize,
    pub warning_count: usize,
}

impl SchemaValidation {
    pub fn new(document: impl Into<String>, violations: Vec<SchemaViolation>) -> Self {
        let error_count = violations
            .iter()
            .filter(|v| v.severity == ViolationSeverity::Error)
            .count();
        let warning_count = violations.len() - error_count;
        Self {
            document: document.into(),
            is_valid: error_count == 0,
            violations,
            error_count,
            warning_count,
        }
    }
}
