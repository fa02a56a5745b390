//! Risk classification of configuration changes.
//!
//! A change's baseline level comes from its field name via an ordered
//! [`RuleTable`]; an ordered table of escalations then raises levels for
//! removals, shortened timeouts, flipped toggles and type changes.

mod classifier;
mod escalation;
mod impact;
mod level;
mod rules;

pub use classifier::RiskClassifier;
pub use escalation::{Escalation, EscalationText, ESCALATIONS};
pub use impact::{ImpactCategory, ImpactRecord, ImpactTrigger, LevelCounts, RiskAssessment};
pub use level::RiskLevel;
pub use rules::{normalize_field, RuleSpec, RuleTable, TierRule, DEFAULT_TIER};
