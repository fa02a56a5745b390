//! Structural diff of configuration documents.
//!
//! The [`DiffEngine`] walks two document trees in parallel and reports
//! every added, removed, and modified field as a [`ChangeRecord`].
//!
//! # Example
//!
//! ```
//! use cfgdiff::diff::{diff_values, ChangeKind};
//! use serde_json::json;
//!
//! let changes = diff_values(&json!({"a": 1}), &json!({"a": 1, "b": 2}));
//! assert_eq!(changes.len(), 1);
//! assert_eq!(changes[0].kind, ChangeKind::Added);
//! assert_eq!(changes[0].path, "b");
//! ```

mod engine;
mod result;

pub use engine::{diff_values, DiffEngine};
pub use result::{ChangeKind, ChangeRecord, DiffResult, DiffSummary};
