//! Loaded configuration documents.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// On-disk encoding of a document, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Map a path's extension to a format. Returns `None` for anything
    /// other than `.json`, `.yaml`, or `.yml` (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A decoded configuration document.
///
/// Immutable after loading; the differ only ever borrows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Root node of the tree
    pub root: Value,
    /// Format the document was decoded from
    pub format: DocumentFormat,
    /// Source file, if loaded from disk
    pub source: Option<PathBuf>,
}

impl Document {
    /// Wrap an already-decoded tree.
    #[must_use]
    pub const fn new(root: Value, format: DocumentFormat) -> Self {
        Self {
            root,
            format,
            source: None,
        }
    }

    /// Attach the file the document was read from.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Display label: the source path, or `"<memory>"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.source
            .as_ref()
            .map_or_else(|| "<memory>".to_string(), |p| p.display().to_string())
    }

    /// Number of top-level keys, or 0 if the root is not a mapping.
    #[must_use]
    pub fn top_level_key_count(&self) -> usize {
        self.root.as_object().map_or(0, serde_json::Map::len)
    }

    /// Number of scalar and sequence leaves reachable through mappings.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        fn count(value: &Value) -> usize {
            match value {
                Value::Object(map) => map.values().map(count).sum(),
                _ => 1,
            }
        }
        match &self.root {
            Value::Object(map) if map.is_empty() => 0,
            other => count(other),
        }
    }
}
