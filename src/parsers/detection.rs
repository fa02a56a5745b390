//! Format detection for configuration files.

use super::{parse_json, parse_yaml};
use crate::model::DocumentFormat;
use serde_json::Value;
use std::path::Path;

/// Select a decoder from the file extension alone.
///
/// Returns `None` when the extension is not recognized; callers then fall
/// back to [`sniff_content`].
#[must_use]
pub fn detect_format(path: &Path) -> Option<DocumentFormat> {
    DocumentFormat::from_path(path)
}

/// Decode content of unknown format.
///
/// JSON is tried first. YAML accepts nearly any text as a bare scalar, so a
/// YAML result is only trusted when the root is a mapping.
#[must_use]
pub fn sniff_content(content: &str) -> Option<(Value, DocumentFormat)> {
    if let Ok(value) = parse_json(content) {
        return Some((value, DocumentFormat::Json));
    }
    match parse_yaml(content) {
        Ok(value) if value.is_object() && !content.trim().is_empty() => {
            Some((value, DocumentFormat::Yaml))
        }
        _ => None,
    }
}
