//! Configuration validation for cfgdiff.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, CompareConfig, HistoryConfig, OutputConfig, RiskConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.risk.validate());
        errors.extend(self.history.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
        }

        errors
    }
}

impl Validatable for RiskConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.rules
            .iter()
            .enumerate()
            .filter_map(|(i, spec)| {
                spec.compile().err().map(|e| ConfigError {
                    field: format!("risk.rules[{i}].pattern"),
                    message: e.to_string(),
                })
            })
            .collect()
    }
}

impl Validatable for HistoryConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.max_entries == 0 {
            errors.push(ConfigError {
                field: "history.max_entries".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        errors
    }
}

impl Validatable for CompareConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.risk.validate());
        errors.extend(self.history.validate());

        if let Some(ref name) = self.save_as {
            if name.trim().is_empty() {
                errors.push(ConfigError {
                    field: "save".to_string(),
                    message: "history entry name must not be empty".to_string(),
                });
            }
        }
        if self.diff.ignore_paths.iter().any(|p| p.trim().is_empty()) {
            errors.push(ConfigError {
                field: "diff.ignore_paths".to_string(),
                message: "ignore paths must not be empty".to_string(),
            });
        }

        errors
    }
}
