//! Persisted comparison records.

use crate::diff::{ChangeRecord, DiffResult, DiffSummary};
use crate::risk::{ImpactRecord, LevelCounts, RiskAssessment, RiskLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Change and impact counts of a stored comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub changes: DiffSummary,
    pub impacts: LevelCounts,
}

/// One saved comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// User-supplied label (`--save <name>`)
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub file_a: String,
    pub file_b: String,
    #[serde(default)]
    pub changes: Vec<ChangeRecord>,
    #[serde(default)]
    pub impacts: Vec<ImpactRecord>,
    /// Highest impact level, `None` when nothing was flagged
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
    #[serde(default)]
    pub summary: HistorySummary,
}

impl HistoryEntry {
    /// Capture a finished comparison, timestamped now.
    pub fn new(
        name: impl Into<String>,
        file_a: impl Into<String>,
        file_b: impl Into<String>,
        diff: &DiffResult,
        assessment: &RiskAssessment,
    ) -> Self {
        Self {
            name: name.into(),
            timestamp: Utc::now(),
            file_a: file_a.into(),
            file_b: file_b.into(),
            changes: diff.changes.clone(),
            impacts: assessment.impacts.clone(),
            risk_level: assessment.overall,
            summary: HistorySummary {
                changes: diff.summary,
                impacts: assessment.counts,
            },
        }
    }

    /// Override the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
