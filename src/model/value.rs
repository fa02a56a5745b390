//! Helpers over document tree nodes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Longest rendering `display_value` produces before truncating.
const MAX_DISPLAY_CHARS: usize = 80;

/// Runtime type of a document node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Structural equality where numbers compare by value.
///
/// `serde_json` distinguishes `1` from `1.0`; configuration authors do not,
/// so integers and floats that denote the same quantity are equal here.
/// Two integers are always compared exactly.
#[must_use]
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                return x == y;
            }
            if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                return x == y;
            }
            // Two integers that fit no common type differ; floats compare as f64.
            if !x.is_f64() && !y.is_f64() {
                return false;
            }
            match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            }
        }
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| deep_equal(x, y)))
        }
        _ => a == b,
    }
}

/// Interpret a node as a number: JSON numbers, or strings holding one.
#[must_use]
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Compact single-line rendering for reports.
#[must_use]
pub fn display_value(value: &Value) -> String {
    let rendered = value.to_string();
    if rendered.chars().count() <= MAX_DISPLAY_CHARS {
        return rendered;
    }
    let truncated: String = rendered.chars().take(MAX_DISPLAY_CHARS - 1).collect();
    format!("{truncated}…")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_kind() {
        assert_eq!(ValueKind::of(&json!(null)), ValueKind::Null);
        assert_eq!(ValueKind::of(&json!(true)), ValueKind::Boolean);
        assert_eq!(ValueKind::of(&json!(1.5)), ValueKind::Number);
        assert_eq!(ValueKind::of(&json!("x")), ValueKind::String);
        assert_eq!(ValueKind::of(&json!([1])), ValueKind::Array);
        assert_eq!(ValueKind::of(&json!({})), ValueKind::Object);
        assert_eq!(ValueKind::Array.to_string(), "array");
    }

    #[test]
    fn test_deep_equal_numbers() {
        assert!(deep_equal(&json!(1), &json!(1.0)));
        assert!(deep_equal(&json!(-3), &json!(-3)));
        assert!(!deep_equal(&json!(1), &json!(2)));
        assert!(!deep_equal(&json!(1), &json!("1")));
    }

    #[test]
    fn test_deep_equal_large_integers_are_exact() {
        assert!(!deep_equal(&json!(9_007_199_254_740_993_i64), &json!(9_007_199_254_740_992_i64)));
        assert!(!deep_equal(&json!(u64::MAX), &json!(u64::MAX - 1)));
        assert!(!deep_equal(&json!(-1), &json!(u64::MAX)));
        assert!(deep_equal(&json!(u64::MAX), &json!(u64::MAX)));
        assert!(deep_equal(&json!(5_u64), &json!(5_i64)));
    }

    #[test]
    fn test_deep_equal_nested() {
        assert!(deep_equal(
            &json!({"a": [1, {"b": 2.0}], "c": null}),
            &json!({"c": null, "a": [1.0, {"b": 2}]})
        ));
        assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
        assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!deep_equal(&json!({"a": 1}), &json!({"b": 1})));
    }

    #[test]
    fn test_numeric_value() {
        assert_eq!(numeric_value(&json!(30)), Some(30.0));
        assert_eq!(numeric_value(&json!(" 2.5 ")), Some(2.5));
        assert_eq!(numeric_value(&json!("30s")), None);
        assert_eq!(numeric_value(&json!("NaN")), None);
        assert_eq!(numeric_value(&json!(true)), None);
    }

    #[test]
    fn test_display_value_truncates() {
        assert_eq!(display_value(&json!("abc")), "\"abc\"");
        assert_eq!(display_value(&json!(10)), "10");

        let long = json!("x".repeat(200));
        let shown = display_value(&long);
        assert_eq!(shown.chars().count(), MAX_DISPLAY_CHARS);
        assert!(shown.ends_with('…'));
    }
}
