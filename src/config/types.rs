//! Configuration types for cfgdiff operations.
//!
//! Provides structured configuration for the compare and history commands.

use crate::reports::ReportFormat;
use crate::risk::{RiskLevel, RuleSpec};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI values are layered over file values with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Diff options
    pub diff: DiffSettings,
    /// Extra risk rules
    pub risk: RiskConfig,
    /// History persistence
    pub history: HistoryConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Exit with a distinct code when overall risk reaches `level`.
    pub const fn fail_on(mut self, level: Option<RiskLevel>) -> Self {
        self.config.behavior.fail_on = level;
        self
    }

    pub fn ignore_paths(mut self, paths: Vec<String>) -> Self {
        self.config.diff.ignore_paths = paths;
        self
    }

    pub fn history_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.history.file = file;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress progress logging
    pub quiet: bool,
    /// Exit with code 2 when overall risk meets this level
    pub fail_on: Option<RiskLevel>,
}

/// Diff options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffSettings {
    /// Dotted paths whose changes are dropped (subtrees included)
    pub ignore_paths: Vec<String>,
}

/// Risk classification options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Rules evaluated before the built-in table
    pub rules: Vec<RuleSpec>,
}

/// History persistence options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// History file (defaults to `~/.cfgdiff_history.json`)
    pub file: Option<PathBuf>,
    /// Entries kept
    pub max_entries: usize,
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for a comparison run
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Paths to compare
    pub paths: ComparePaths,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
    pub diff: DiffSettings,
    pub risk: RiskConfig,
    pub history: HistoryConfig,
    /// Schema to validate both documents against
    pub schema: Option<PathBuf>,
    /// Save the run to history under this name
    pub save_as: Option<String>,
}

impl CompareConfig {
    /// Assemble a run configuration from merged application settings.
    #[must_use]
    pub fn from_app(
        app: AppConfig,
        paths: ComparePaths,
        schema: Option<PathBuf>,
        save_as: Option<String>,
    ) -> Self {
        Self {
            paths,
            output: app.output,
            behavior: app.behavior,
            diff: app.diff,
            risk: app.risk,
            history: app.history,
            schema,
            save_as,
        }
    }
}

/// Paths for a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparePaths {
    /// First (baseline) document
    pub file_a: PathBuf,
    /// Second (candidate) document
    pub file_b: PathBuf,
}

/// Configuration for listing saved history
#[derive(Debug, Clone, Default)]
pub struct HistoryViewConfig {
    pub output: OutputConfig,
    pub history: HistoryConfig,
    pub quiet: bool,
}

impl HistoryViewConfig {
    #[must_use]
    pub fn from_app(app: AppConfig) -> Self {
        Self {
            output: app.output,
            history: app.history,
            quiet: app.behavior.quiet,
        }
    }
}
