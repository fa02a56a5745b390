//! Document loaders.
//!
//! Decodes configuration files into the [`Document`] tree. The format is
//! chosen by file extension:
//!
//! - `.json` is parsed as strict JSON
//! - `.yaml` / `.yml` go through a standard YAML parser
//! - anything else is sniffed: JSON first, then YAML if it yields a mapping
//!
//! ## Usage
//!
//! ```no_run
//! use cfgdiff::parsers::parse_document;
//! use std::path::Path;
//!
//! let doc = parse_document(Path::new("config/app.yaml")).unwrap();
//! println!("{} top-level keys", doc.top_level_key_count());
//! ```

mod detection;
mod yaml;

pub use detection::{detect_format, sniff_content};
pub use yaml::parse_yaml;

use crate::error::{CfgDiffError, ErrorContext, ParseErrorKind, Result};
use crate::model::{Document, DocumentFormat};
use serde_json::Value;
use std::path::Path;

/// Maximum document size (64 MB). Configuration files are loaded whole.
pub const MAX_DOCUMENT_SIZE: u64 = 64 * 1024 * 1024;

/// Load and decode a document from disk.
///
/// Fails with [`CfgDiffError::FileNotFound`] when the path does not exist,
/// [`CfgDiffError::Parse`] on malformed content, and
/// [`CfgDiffError::UnsupportedFormat`] when an unrecognized extension holds
/// neither JSON nor a YAML mapping.
pub fn parse_document(path: &Path) -> Result<Document> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CfgDiffError::file_not_found(path));
        }
        Err(e) => return Err(CfgDiffError::io(path, e)),
    };
    if metadata.is_dir() {
        return Err(CfgDiffError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path is a directory"),
        ));
    }
    if metadata.len() > MAX_DOCUMENT_SIZE {
        return Err(CfgDiffError::io(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!(
                    "document is {} MB, exceeding the {} MB limit",
                    metadata.len() / (1024 * 1024),
                    MAX_DOCUMENT_SIZE / (1024 * 1024)
                ),
            ),
        ));
    }

    let content = std::fs::read_to_string(path).map_err(|e| CfgDiffError::io(path, e))?;

    let (root, format) = match detect_format(path) {
        Some(format) => {
            let root = parse_document_str(&content, format)
                .with_context(|| path.display().to_string())?;
            (root, format)
        }
        None => {
            tracing::debug!(
                "Unrecognized extension for {}, sniffing content",
                path.display()
            );
            sniff_content(&content).ok_or_else(|| {
                CfgDiffError::unsupported_format(
                    path,
                    "content is neither JSON nor a YAML mapping",
                )
            })?
        }
    };

    Ok(Document::new(root, format).with_source(path))
}

/// Decode in-memory content with an explicit format.
pub fn parse_document_str(content: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => parse_json(content),
        DocumentFormat::Yaml => parse_yaml(content),
    }
}

/// Strict JSON decoding.
pub fn parse_json(content: &str) -> Result<Value> {
    serde_json::from_str(content)
        .map_err(|e| CfgDiffError::parse("", ParseErrorKind::InvalidJson(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "app.json", r#"{"server": {"port": 8080}}"#);

        let doc = parse_document(&path).unwrap();
        assert_eq!(doc.format, DocumentFormat::Json);
        assert_eq!(doc.root, json!({"server": {"port": 8080}}));
        assert_eq!(doc.source.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_parse_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "app.yml",
            "server:\n  port: 8080\n  tls: true\nname: \"svc\"\n",
        );

        let doc = parse_document(&path).unwrap();
        assert_eq!(doc.format, DocumentFormat::Yaml);
        assert_eq!(
            doc.root,
            json!({"server": {"port": 8080, "tls": true}, "name": "svc"})
        );
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let err = parse_document(Path::new("/nonexistent/cfgdiff/app.json")).unwrap_err();
        assert!(matches!(err, CfgDiffError::FileNotFound { .. }), "{err:?}");
    }

    #[test]
    fn test_malformed_json_is_parse_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "broken.json", r#"{"a": 1,"#);

        match parse_document(&path).unwrap_err() {
            CfgDiffError::Parse { context, source } => {
                assert!(context.contains("broken.json"), "{context}");
                assert!(matches!(source, ParseErrorKind::InvalidJson(_)));
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_extension_sniffs_json_then_yaml() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = write_temp(&dir, "app.conf", r#"{"a": 1}"#);
        let doc = parse_document(&json_path).unwrap();
        assert_eq!(doc.format, DocumentFormat::Json);

        let yaml_path = write_temp(&dir, "app.cfg", "a: 1\nb:\n  c: x\n");
        let doc = parse_document(&yaml_path).unwrap();
        assert_eq!(doc.format, DocumentFormat::Yaml);
        assert_eq!(doc.root, json!({"a": 1, "b": {"c": "x"}}));
    }

    #[test]
    fn test_unknown_extension_plain_text_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "notes.txt", "just some words here");

        let err = parse_document(&path).unwrap_err();
        assert!(
            matches!(err, CfgDiffError::UnsupportedFormat { .. }),
            "{err:?}"
        );
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_document(dir.path()).unwrap_err();
        assert!(matches!(err, CfgDiffError::Io { .. }), "{err:?}");
    }
}
