//! Frequency analysis over saved comparisons.

use super::entry::HistoryEntry;
use crate::risk::RiskLevel;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Entries required before any insight is reported.
pub const MIN_ENTRIES: usize = 3;
/// Occurrences for a path to count as frequently changed.
pub const MIN_OCCURRENCES: usize = 3;
/// Frequent paths reported.
pub const MAX_FREQUENT_FIELDS: usize = 5;

/// A path and how many times it changed across history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFrequency {
    pub path: String,
    pub count: usize,
}

/// Patterns found across saved comparisons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryInsights {
    pub entries_analyzed: usize,
    /// Most frequently changed paths, descending by count
    pub frequent_fields: Vec<FieldFrequency>,
    /// Number of entries whose overall risk was high or critical
    pub high_risk_runs: usize,
}

impl HistoryInsights {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequent_fields.is_empty()
    }
}

/// Analyze history. Returns empty insights for fewer than
/// [`MIN_ENTRIES`] entries.
#[must_use]
pub fn analyze(history: &[HistoryEntry]) -> HistoryInsights {
    if history.len() < MIN_ENTRIES {
        return HistoryInsights::default();
    }

    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for change in history.iter().flat_map(|entry| &entry.changes) {
        *counts.entry(change.path.as_str()).or_default() += 1;
    }

    let mut frequent: Vec<FieldFrequency> = counts
        .into_iter()
        .filter(|(_, count)| *count >= MIN_OCCURRENCES)
        .map(|(path, count)| FieldFrequency {
            path: path.to_string(),
            count,
        })
        .collect();
    // Stable sort keeps first-appearance order among equal counts.
    frequent.sort_by(|a, b| b.count.cmp(&a.count));
    frequent.truncate(MAX_FREQUENT_FIELDS);

    let high_risk_runs = history
        .iter()
        .filter(|entry| entry.risk_level.is_some_and(|l| l >= RiskLevel::High))
        .count();

    tracing::debug!(
        "Analyzed {} history entries: {} frequent field(s)",
        history.len(),
        frequent.len()
    );

    HistoryInsights {
        entries_analyzed: history.len(),
        frequent_fields: frequent,
        high_risk_runs,
    }
}
