//! Change-kind escalations applied after the baseline tier.

use super::impact::ImpactTrigger;
use super::level::RiskLevel;
use super::rules::normalize_field;
use crate::diff::{ChangeKind, ChangeRecord};
use crate::model::{display_value, numeric_value, ValueKind};
use regex::Regex;
use std::sync::LazyLock;

static TIMEOUT_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)timeout").expect("static regex"));
static TOGGLE_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|[_-])(enabled|active)$").expect("static regex"));

/// Text an escalation contributes when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscalationText {
    pub description: String,
    pub recommendation: &'static str,
}

/// One row of the escalation table.
///
/// `check` receives the change and the level reached so far and returns
/// the replacement text when the escalation applies.
pub struct Escalation {
    pub trigger: ImpactTrigger,
    pub level: RiskLevel,
    pub check: fn(&ChangeRecord, RiskLevel) -> Option<EscalationText>,
}

impl std::fmt::Debug for Escalation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Escalation")
            .field("trigger", &self.trigger)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

/// Escalations in application order.
pub static ESCALATIONS: [Escalation; 4] = [
    Escalation {
        trigger: ImpactTrigger::RemovalFloor,
        level: RiskLevel::Medium,
        check: removal_floor,
    },
    Escalation {
        trigger: ImpactTrigger::TimeoutReduced,
        level: RiskLevel::High,
        check: timeout_reduced,
    },
    Escalation {
        trigger: ImpactTrigger::ToggleChanged,
        level: RiskLevel::Critical,
        check: toggle_changed,
    },
    Escalation {
        trigger: ImpactTrigger::TypeChanged,
        level: RiskLevel::High,
        check: type_changed,
    },
];

fn removal_floor(change: &ChangeRecord, current: RiskLevel) -> Option<EscalationText> {
    if change.kind != ChangeKind::Removed || current != RiskLevel::Low {
        return None;
    }
    Some(EscalationText {
        description: format!(
            "Field '{}' was removed; consumers reading it will fall back to defaults or fail",
            change.display_path()
        ),
        recommendation: "Confirm no service still reads this field before removing it",
    })
}

fn timeout_reduced(change: &ChangeRecord, _current: RiskLevel) -> Option<EscalationText> {
    if change.kind != ChangeKind::Modified
        || !TIMEOUT_FIELD.is_match(&normalize_field(&change.field_name()))
    {
        return None;
    }
    let old = change.old_value.as_ref()?;
    let new = change.new_value.as_ref()?;
    let (old_n, new_n) = (numeric_value(old)?, numeric_value(new)?);
    if new_n >= old_n {
        return None;
    }
    Some(EscalationText {
        description: format!(
            "Timeout reduced from {} to {}; slow operations may start failing",
            display_value(old),
            display_value(new)
        ),
        recommendation: "Check p99 latencies of the affected calls against the new timeout",
    })
}

fn toggle_changed(change: &ChangeRecord, _current: RiskLevel) -> Option<EscalationText> {
    if change.kind != ChangeKind::Modified
        || !TOGGLE_FIELD.is_match(&normalize_field(&change.field_name()))
    {
        return None;
    }
    let describe = |v: Option<&serde_json::Value>| v.map_or_else(String::new, display_value);
    Some(EscalationText {
        description: format!(
            "Toggle '{}' changed from {} to {}; this switches behavior on or off for all traffic",
            change.display_path(),
            describe(change.old_value.as_ref()),
            describe(change.new_value.as_ref())
        ),
        recommendation: "Roll the toggle out gradually and keep a revert ready",
    })
}

fn type_changed(change: &ChangeRecord, _current: RiskLevel) -> Option<EscalationText> {
    if change.kind != ChangeKind::Modified {
        return None;
    }
    let old = ValueKind::of(change.old_value.as_ref()?);
    let new = ValueKind::of(change.new_value.as_ref()?);
    if old == new {
        return None;
    }
    Some(EscalationText {
        description: format!(
            "Field '{}' changed type from {old} to {new}; strict parsers may reject it",
            change.display_path()
        ),
        recommendation: "Verify every consumer accepts the new value type",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_removal_floor_only_lifts_low() {
        let change = ChangeRecord::removed("color", json!("red"));
        assert!(removal_floor(&change, RiskLevel::Low).is_some());
        assert!(removal_floor(&change, RiskLevel::Medium).is_none());
        let added = ChangeRecord::added("color", json!("red"));
        assert!(removal_floor(&added, RiskLevel::Low).is_none());
    }

    #[test]
    fn test_timeout_reduced_requires_numbers() {
        let lowered = ChangeRecord::modified("http.read_timeout", json!(30), json!("10"));
        let text = timeout_reduced(&lowered, RiskLevel::High).unwrap();
        assert!(text.description.contains("30"));
        assert!(text.description.contains("10"));

        let camel = ChangeRecord::modified("http.readTimeout", json!(30), json!(5));
        assert!(timeout_reduced(&camel, RiskLevel::High).is_some());

        let raised = ChangeRecord::modified("timeout", json!(10), json!(30));
        assert!(timeout_reduced(&raised, RiskLevel::High).is_none());

        let textual = ChangeRecord::modified("timeout", json!("30s"), json!("10s"));
        assert!(timeout_reduced(&textual, RiskLevel::High).is_none());
    }

    #[test]
    fn test_toggle_matches_enabled_and_active_only() {
        let flip = ChangeRecord::modified("feature.enabled", json!(true), json!(false));
        assert!(toggle_changed(&flip, RiskLevel::Critical).is_some());
        let disabled = ChangeRecord::modified("disabled", json!(true), json!(false));
        assert!(toggle_changed(&disabled, RiskLevel::Critical).is_none());
        for field in ["featureEnabled", "isActive", "flags.betaEnabled"] {
            let flip = ChangeRecord::modified(field, json!(true), json!(false));
            assert!(toggle_changed(&flip, RiskLevel::Critical).is_some(), "{field}");
        }
    }

    #[test]
    fn test_type_changed() {
        let change = ChangeRecord::modified("replicas", json!("3"), json!(3));
        let text = type_changed(&change, RiskLevel::Low).unwrap();
        assert!(text.description.contains("string"));
        assert!(text.description.contains("number"));
        let same = ChangeRecord::modified("replicas", json!(3), json!(4.5));
        assert!(type_changed(&same, RiskLevel::Low).is_none());
    }

    #[test]
    fn test_table_order() {
        let order: Vec<_> = ESCALATIONS.iter().map(|e| e.trigger).collect();
        assert_eq!(
            order,
            vec![
                ImpactTrigger::RemovalFloor,
                ImpactTrigger::TimeoutReduced,
                ImpactTrigger::ToggleChanged,
                ImpactTrigger::TypeChanged,
            ]
        );
    }
}
