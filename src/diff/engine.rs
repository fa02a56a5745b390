//! Recursive structural differ.

use super::result::{ChangeRecord, DiffResult};
use crate::model::path::is_within;
use crate::model::{deep_equal, join_key, Document};
use serde_json::Value;

/// Structural diff engine.
///
/// Walks the union of mapping keys level by level. Only mappings are
/// descended into; sequences and scalars are compared whole.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    ignore_paths: Vec<String>,
}

impl DiffEngine {
    /// Create a new diff engine with no ignored paths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop changes at, or nested under, the given dotted paths.
    ///
    /// A trailing `.*` is accepted and means the same as the bare prefix.
    #[must_use]
    pub fn with_ignore_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_paths.extend(paths.into_iter().map(|p| {
            let p: String = p.into();
            p.strip_suffix(".*").map(str::to_string).unwrap_or(p)
        }));
        self
    }

    /// Diff two documents.
    pub fn diff(&self, old: &Document, new: &Document) -> DiffResult {
        let mut changes = diff_values(&old.root, &new.root);
        let before = changes.len();
        if !self.ignore_paths.is_empty() {
            changes.retain(|change| !self.is_ignored(&change.path));
        }

        let mut result = DiffResult::new(changes);
        result.ignored = before - result.changes.len();
        if result.ignored > 0 {
            tracing::debug!("Ignored {} change(s) via ignore list", result.ignored);
        }
        result
    }

    fn is_ignored(&self, path: &str) -> bool {
        self.ignore_paths.iter().any(|ignored| is_within(path, ignored))
    }
}

/// Diff two raw trees, returning change records in walk order.
///
/// `old`'s keys are visited first in map order, then keys only present in
/// `new`. Callers must not rely on sibling order.
#[must_use]
pub fn diff_values(old: &Value, new: &Value) -> Vec<ChangeRecord> {
    let mut changes = Vec::new();
    walk("", old, new, &mut changes);
    changes
}

fn walk(prefix: &str, old: &Value, new: &Value, out: &mut Vec<ChangeRecord>) {
    match (old, new) {
        (Value::Object(old_map), Value::Object(new_map)) => {
            for (key, old_child) in old_map {
                let path = join_key(prefix, key);
                match new_map.get(key) {
                    Some(new_child) => walk(&path, old_child, new_child, out),
                    None => out.push(ChangeRecord::removed(path, old_child.clone())),
                }
            }
            for (key, new_child) in new_map {
                if !old_map.contains_key(key) {
                    out.push(ChangeRecord::added(
                        join_key(prefix, key),
                        new_child.clone(),
                    ));
                }
            }
        }
        _ => {
            if !deep_equal(old, new) {
                out.push(ChangeRecord::modified(prefix, old.clone(), new.clone()));
            }
        }
    }
}
