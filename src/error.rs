//! Unified error types for cfgdiff.
//!
//! Every fallible library operation returns [`CfgDiffError`]. The binary
//! converts to `anyhow::Error` at the boundary and prints a single line.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cfgdiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CfgDiffError {
    /// The input path does not exist
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Malformed JSON, YAML, or schema content
    #[error("Failed to parse document: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Unknown extension whose content is neither JSON nor a YAML mapping
    #[error("Unsupported format for {}: {reason}", path.display())]
    UnsupportedFormat { path: PathBuf, reason: String },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// History store failures
    #[error("History store error: {0}")]
    History(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML: {0}")]
    InvalidYaml(String),

    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for cfgdiff operations
pub type Result<T> = std::result::Result<T, CfgDiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl CfgDiffError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a not-found error for a path
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an unsupported-format error
    pub fn unsupported_format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a history store error
    pub fn history(message: impl Into<String>) -> Self {
        Self::History(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for CfgDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CfgDiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for CfgDiffError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse(
            "YAML deserialization",
            ParseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to whatever context the error already
/// carries, so the final message reads outermost-first.
///
/// # Example
///
/// ```ignore
/// use cfgdiff::error::ErrorContext;
///
/// let raw: serde_json::Value = serde_json::from_str(&content)
///     .with_context(|| format!("parsing {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<CfgDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
///
/// Path-carrying variants keep their shape; the path already identifies
/// the failure.
fn add_context_to_error(err: CfgDiffError, new_ctx: &str) -> CfgDiffError {
    match err {
        CfgDiffError::Parse {
            context: existing,
            source,
        } => CfgDiffError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        CfgDiffError::Io {
            path,
            message,
            source,
        } => CfgDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        CfgDiffError::History(msg) => CfgDiffError::History(chain_context(new_ctx, &msg)),
        CfgDiffError::Config(msg) => CfgDiffError::Config(chain_context(new_ctx, &msg)),
        CfgDiffError::Validation(msg) => CfgDiffError::Validation(chain_context(new_ctx, &msg)),
        other @ (CfgDiffError::FileNotFound { .. } | CfgDiffError::UnsupportedFormat { .. }) => {
            other
        }
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a validation error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| CfgDiffError::Validation(context.into()))
    }
}
