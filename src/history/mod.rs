//! Saved comparison history and its analysis.

mod analyzer;
mod entry;
mod store;

pub use analyzer::{
    analyze, FieldFrequency, HistoryInsights, MAX_FREQUENT_FIELDS, MIN_ENTRIES, MIN_OCCURRENCES,
};
pub use entry::{HistoryEntry, HistorySummary};
pub use store::{
    default_history_path, FileHistoryStore, HistoryStore, MemoryHistoryStore,
    DEFAULT_HISTORY_FILE, MAX_HISTORY_ENTRIES,
};
