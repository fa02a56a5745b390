//! History persistence stage.

use super::Comparison;
use crate::config::{CompareConfig, HistoryConfig};
use crate::error::OptionContext;
use crate::history::{default_history_path, FileHistoryStore, HistoryEntry, HistoryStore};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// History file from configuration, falling back to the home directory.
pub fn resolve_history_path(config: &HistoryConfig) -> Result<PathBuf> {
    let path = config
        .file
        .clone()
        .or_else(default_history_path)
        .context_none("cannot determine home directory; pass --history-file")?;
    Ok(path)
}

/// Open the configured file-backed history store.
pub fn open_history_store(config: &HistoryConfig) -> Result<FileHistoryStore> {
    let path = resolve_history_path(config)?;
    Ok(FileHistoryStore::new(path).with_max_entries(config.max_entries))
}

/// Save a finished comparison under `name`.
pub fn record_comparison(
    store: &mut dyn HistoryStore,
    name: &str,
    config: &CompareConfig,
    comparison: &Comparison,
) -> Result<()> {
    let entry = HistoryEntry::new(
        name,
        config.paths.file_a.display().to_string(),
        config.paths.file_b.display().to_string(),
        &comparison.diff,
        &comparison.risk,
    );
    store
        .append(entry)
        .with_context(|| format!("Failed to save comparison '{name}'"))?;

    if !config.behavior.quiet {
        tracing::info!("Saved comparison '{}' to {}", name, store.describe());
    }
    Ok(())
}
