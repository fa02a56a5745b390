//! History command handler.
//!
//! Implements `--history`: list saved comparisons with insights.

use crate::config::HistoryViewConfig;
use crate::history::{analyze, HistoryStore};
use crate::pipeline::{exit_codes, open_history_store, output_history_report};
use anyhow::Result;

/// Print saved comparisons and their insights.
#[allow(clippy::needless_pass_by_value)]
pub fn run_history(config: HistoryViewConfig) -> Result<i32> {
    let store = open_history_store(&config.history)?;
    run_history_with_store(&config, &store)
}

/// History listing over any store.
pub(crate) fn run_history_with_store(
    config: &HistoryViewConfig,
    store: &dyn HistoryStore,
) -> Result<i32> {
    let entries = store.list(None)?;
    if !config.quiet {
        tracing::info!("Loaded {} history entries from {}", entries.len(), store.describe());
    }

    let insights = analyze(&entries);
    output_history_report(config, &entries, &insights)?;

    Ok(exit_codes::SUCCESS)
}
