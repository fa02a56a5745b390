//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs. Each returns the process exit code
//! instead of exiting, so the caller stays in control of termination.

mod compare;
mod history;

pub use compare::run_compare;
pub use history::run_history;

// Re-export config types used by handlers
pub use crate::config::{CompareConfig, HistoryViewConfig};
