//! In-memory document model.
//!
//! Every input file, regardless of its on-disk format, is decoded into a
//! [`Document`]: a tree of mappings, sequences, and scalars backed by
//! [`serde_json::Value`]. The differ, classifier, and schema validator all
//! operate on this single representation.

mod document;
pub mod path;
mod value;

pub use document::{Document, DocumentFormat};
pub use path::{join_key, last_key};
pub use value::{deep_equal, display_value, numeric_value, ValueKind};
