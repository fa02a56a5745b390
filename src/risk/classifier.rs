//! Risk classifier over change records.

use super::escalation::ESCALATIONS;
use super::impact::{ImpactCategory, ImpactRecord, ImpactTrigger, RiskAssessment};
use super::level::RiskLevel;
use super::rules::RuleTable;
use crate::diff::{ChangeKind, ChangeRecord};

/// Maps change records to impact records.
///
/// Each change gets a baseline tier from the [`RuleTable`], then every
/// escalation in table order may raise it. Escalations never lower a level.
#[derive(Debug, Clone, Default)]
pub struct RiskClassifier {
    rules: RuleTable,
}

impl RiskClassifier {
    /// Classifier over the built-in rule table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_rules(rules: RuleTable) -> Self {
        Self { rules }
    }

    /// Classify changes, dropping low-risk additions and modifications.
    ///
    /// Output order follows input order and each change yields at most one
    /// impact.
    #[must_use]
    pub fn classify(&self, changes: &[ChangeRecord]) -> Vec<ImpactRecord> {
        changes
            .iter()
            .map(|change| self.classify_change(change))
            .filter(|impact| {
                impact.level != RiskLevel::Low || impact.change_kind == ChangeKind::Removed
            })
            .collect()
    }

    /// Classify changes and aggregate the result.
    #[must_use]
    pub fn assess(&self, changes: &[ChangeRecord]) -> RiskAssessment {
        let assessment = RiskAssessment::from_impacts(self.classify(changes));
        tracing::debug!(
            "Classified {} change(s): {} impact(s), overall {}",
            changes.len(),
            assessment.impacts.len(),
            assessment.overall.map_or("none", |l| l.name())
        );
        assessment
    }

    /// Classify a single change without applying the output filter.
    #[must_use]
    pub fn classify_change(&self, change: &ChangeRecord) -> ImpactRecord {
        let field = change.field_name();
        let (mut level, category) = match self.rules.match_field(&field) {
            Some(rule) => {
                tracing::debug!("{}: matched rule '{}' ({})", change.display_path(), rule.name, rule.level);
                (rule.level, rule.category)
            }
            None => (RiskLevel::Low, ImpactCategory::General),
        };

        let mut trigger = ImpactTrigger::Pattern;
        let mut description = baseline_description(change, category);
        let mut recommendation = category.recommendation().to_string();

        for escalation in &ESCALATIONS {
            let Some(text) = (escalation.check)(change, level) else {
                continue;
            };
            if escalation.level >= level {
                tracing::debug!(
                    "{}: escalation {} -> {}",
                    change.display_path(),
                    escalation.trigger.name(),
                    escalation.level
                );
                trigger = escalation.trigger;
                description = text.description;
                recommendation = text.recommendation.to_string();
            }
            level = level.max(escalation.level);
        }

        ImpactRecord {
            level,
            path: change.path.clone(),
            title: title(change),
            description,
            recommendation,
            change_kind: change.kind,
            category,
            trigger,
        }
    }
}

fn title(change: &ChangeRecord) -> String {
    let field = change.field_name();
    let field = if field.is_empty() { "<root>" } else { &*field };
    format!("{} {field}", change.kind.name())
}

fn baseline_description(change: &ChangeRecord, category: ImpactCategory) -> String {
    let path = change.display_path();
    let area = match category {
        ImpactCategory::Security => "a credential or secret",
        ImpactCategory::Database => "a database connection setting",
        ImpactCategory::FeatureFlag => "a feature toggle",
        ImpactCategory::Performance => "a capacity or timing limit",
        ImpactCategory::Connectivity => "a network address",
        ImpactCategory::Metadata => "descriptive metadata",
        ImpactCategory::General => "a configuration value",
    };
    match change.kind {
        ChangeKind::Added => format!("'{path}' was added; it is {area}"),
        ChangeKind::Removed => format!("'{path}' was removed; it is {area}"),
        ChangeKind::Modified => format!("'{path}' was modified; it is {area}"),
    }
}
