//! Schema validation of configuration documents.
//!
//! Supports a small subset of JSON Schema: `type` (single or list),
//! `enum`, `required` and nested `properties`. Validation is independent of
//! the diff; each input document is checked on its own.

mod types;
mod validator;

pub use types::{
    Schema, SchemaType, SchemaValidation, SchemaViolation, TypeSpec, ViolationKind,
    ViolationSeverity,
};
