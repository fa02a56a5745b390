//! Diff result structures.

use crate::model::last_key;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// Kind of structural change at a field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

impl ChangeKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Removed => "Removed",
            Self::Modified => "Modified",
        }
    }

    /// Single-character marker used in console output.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Added => '+',
            Self::Removed => '-',
            Self::Modified => '~',
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One structural difference between two documents.
///
/// `path` is a chain of mapping keys in the syntax of [`crate::model::path`];
/// the empty path denotes the document root. Added records carry only `new_value`, removed records only
/// `old_value`, modified records both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub kind: ChangeKind,
    pub path: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_value"
    )]
    pub old_value: Option<Value>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_value"
    )]
    pub new_value: Option<Value>,
}

/// Keep an explicit `null` as `Some(Value::Null)` rather than `None`.
fn present_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl ChangeRecord {
    pub fn added(path: impl Into<String>, value: Value) -> Self {
        Self {
            kind: ChangeKind::Added,
            path: path.into(),
            old_value: None,
            new_value: Some(value),
        }
    }

    pub fn removed(path: impl Into<String>, value: Value) -> Self {
        Self {
            kind: ChangeKind::Removed,
            path: path.into(),
            old_value: Some(value),
            new_value: None,
        }
    }

    pub fn modified(path: impl Into<String>, old: Value, new: Value) -> Self {
        Self {
            kind: ChangeKind::Modified,
            path: path.into(),
            old_value: Some(old),
            new_value: Some(new),
        }
    }

    /// Final mapping key, the name the classifier matches against.
    #[must_use]
    pub fn field_name(&self) -> Cow<'_, str> {
        last_key(&self.path)
    }

    /// Path for display; the root renders as `<root>`.
    #[must_use]
    pub fn display_path(&self) -> &str {
        if self.path.is_empty() {
            "<root>"
        } else {
            &self.path
        }
    }
}

/// Counts per change kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub total: usize,
}

impl DiffSummary {
    #[must_use]
    pub fn from_changes(changes: &[ChangeRecord]) -> Self {
        let mut summary = Self::default();
        for change in changes {
            match change.kind {
                ChangeKind::Added => summary.added += 1,
                ChangeKind::Removed => summary.removed += 1,
                ChangeKind::Modified => summary.modified += 1,
            }
        }
        summary.total = changes.len();
        summary
    }

    #[must_use]
    pub const fn count(&self, kind: ChangeKind) -> usize {
        match kind {
            ChangeKind::Added => self.added,
            ChangeKind::Removed => self.removed,
            ChangeKind::Modified => self.modified,
        }
    }
}

/// Complete result of diffing two documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct DiffResult {
    /// Summary statistics
    pub summary: DiffSummary,
    /// Change records in walk order
    pub changes: Vec<ChangeRecord>,
    /// Records dropped by the ignore list
    #[serde(default)]
    pub ignored: usize,
}

impl DiffResult {
    pub fn new(changes: Vec<ChangeRecord>) -> Self {
        let mut result = Self {
            summary: DiffSummary::default(),
            changes,
            ignored: 0,
        };
        result.calculate_summary();
        result
    }

    /// Recompute summary statistics from `changes`.
    pub fn calculate_summary(&mut self) {
        self.summary = DiffSummary::from_changes(&self.changes);
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Changes of one kind, in walk order.
    pub fn by_kind(&self, kind: ChangeKind) -> impl Iterator<Item = &ChangeRecord> {
        self.changes.iter().filter(move |c| c.kind == kind)
    }

    /// Look up the change recorded at an exact path.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&ChangeRecord> {
        self.changes.iter().find(|c| c.path == path)
    }
}
