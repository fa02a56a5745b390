//! Configuration module for cfgdiff.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.cfgdiff.yaml` file in your project root or `~/.config/cfgdiff/`:
//!
//! ```yaml
//! output:
//!   format: json
//! behavior:
//!   fail_on: high
//! diff:
//!   ignore_paths:
//!     - metadata.generated_at
//! risk:
//!   rules:
//!     - pattern: "^replicas$"
//!       level: medium
//!       category: performance
//! history:
//!   max_entries: 50
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_MAX_HISTORY_ENTRIES, HISTORY_FILE_ENV};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CompareConfig, ComparePaths, DiffSettings,
    HistoryConfig, HistoryViewConfig, OutputConfig, RiskConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{discover_config_file, load_config_file, load_or_default, ConfigFileError};
