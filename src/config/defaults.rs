//! Default values for cfgdiff configuration.

use super::types::{HistoryConfig, OutputConfig};
use crate::history::MAX_HISTORY_ENTRIES;
use crate::reports::ReportFormat;

/// Environment variable overriding the history file location.
pub const HISTORY_FILE_ENV: &str = "CFGDIFF_HISTORY_FILE";

/// Default number of history entries kept.
pub const DEFAULT_MAX_HISTORY_ENTRIES: usize = MAX_HISTORY_ENTRIES;

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Console,
            file: None,
            no_color: false,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            file: None,
            max_entries: DEFAULT_MAX_HISTORY_ENTRIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.output.format, ReportFormat::Console);
        assert_eq!(config.history.max_entries, 100);
        assert!(config.history.file.is_none());
        assert!(config.behavior.fail_on.is_none());
        assert!(config.diff.ignore_paths.is_empty());
    }
}
