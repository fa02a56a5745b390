//! History persistence.
//!
//! [`HistoryStore`] is the seam between the pipeline and storage: the CLI
//! uses [`FileHistoryStore`], tests use [`MemoryHistoryStore`].

use super::entry::HistoryEntry;
use crate::error::{CfgDiffError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Most recent entries kept by default.
pub const MAX_HISTORY_ENTRIES: usize = 100;

/// File name of the default history file in the home directory.
pub const DEFAULT_HISTORY_FILE: &str = ".cfgdiff_history.json";

/// Storage for saved comparisons, newest first.
pub trait HistoryStore {
    /// Read all stored entries, newest first.
    fn load(&self) -> Result<Vec<HistoryEntry>>;

    /// Prepend an entry and persist, keeping only the newest entries.
    fn append(&mut self, entry: HistoryEntry) -> Result<()>;

    /// Stored entries, newest first, optionally truncated.
    fn list(&self, limit: Option<usize>) -> Result<Vec<HistoryEntry>> {
        let mut entries = self.load()?;
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        Ok(entries)
    }

    /// Short description for logging.
    fn describe(&self) -> String;
}

/// Default history path, `~/.cfgdiff_history.json`.
#[must_use]
pub fn default_history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_HISTORY_FILE))
}

/// History kept in a single JSON file.
///
/// The whole file is rewritten on every append: the new array goes to a
/// sibling temp file which is then renamed over the original. A file that
/// does not parse is an error and is never overwritten.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    path: PathBuf,
    max_entries: usize,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_entries: MAX_HISTORY_ENTRIES,
        }
    }

    #[must_use]
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries.max(1);
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_HISTORY_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        let data = serde_json::to_string_pretty(entries)
            .map_err(|e| CfgDiffError::history(format!("failed to serialize history: {e}")))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| CfgDiffError::io(parent, e))?;
            }
        }

        let tmp = self.temp_path();
        fs::write(&tmp, data).map_err(|e| CfgDiffError::io(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(CfgDiffError::io(&self.path, e));
        }
        Ok(())
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> Result<Vec<HistoryEntry>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CfgDiffError::io(&self.path, e)),
        };
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str::<Vec<HistoryEntry>>(&data).map_err(|e| {
            CfgDiffError::history(format!(
                "cannot parse history file {}: {e}",
                self.path.display()
            ))
        })
    }

    fn append(&mut self, entry: HistoryEntry) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(0, entry);
        entries.truncate(self.max_entries);
        self.save(&entries)?;
        tracing::debug!(
            "Saved history entry to {} ({} stored)",
            self.path.display(),
            entries.len()
        );
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory history, used in tests and dry runs.
#[derive(Debug, Clone)]
pub struct MemoryHistoryStore {
    entries: Vec<HistoryEntry>,
    max_entries: usize,
}

impl Default for MemoryHistoryStore {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            max_entries: MAX_HISTORY_ENTRIES,
        }
    }
}

impl MemoryHistoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with entries already ordered newest first.
    #[must_use]
    pub fn with_entries(mut self, entries: Vec<HistoryEntry>) -> Self {
        self.entries = entries;
        self.entries.truncate(self.max_entries);
        self
    }

    #[must_use]
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries.max(1);
        self.entries.truncate(self.max_entries);
        self
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.entries.clone())
    }

    fn append(&mut self, entry: HistoryEntry) -> Result<()> {
        self.entries.insert(0, entry);
        self.entries.truncate(self.max_entries);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
