//! Document loading stage.

use crate::model::Document;
use crate::parsers::parse_document;
use anyhow::Result;
use std::path::Path;

/// Load a document, logging progress unless `quiet`.
///
/// Library errors already name the offending path, so they are passed
/// through without extra context.
pub fn load_document_with_context(path: &Path, quiet: bool) -> Result<Document> {
    if !quiet {
        tracing::info!("Loading {}", path.display());
    }

    let document = parse_document(path)?;

    if !quiet {
        tracing::info!(
            "Loaded {} document with {} top-level keys",
            document.format,
            document.top_level_key_count()
        );
    }

    Ok(document)
}
