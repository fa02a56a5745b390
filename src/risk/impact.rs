//! Impact records and aggregate risk assessment.

use super::level::RiskLevel;
use crate::diff::ChangeKind;
use serde::{Deserialize, Serialize};

/// Operational area a field belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImpactCategory {
    /// Credentials, keys, tokens
    Security,
    /// Database connection settings
    Database,
    /// Feature toggles
    FeatureFlag,
    /// Timeouts, limits, retries
    Performance,
    /// Hosts, ports, endpoints
    Connectivity,
    /// Descriptive fields such as names and versions
    Metadata,
    #[default]
    General,
}

impl ImpactCategory {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Database => "database",
            Self::FeatureFlag => "feature-flag",
            Self::Performance => "performance",
            Self::Connectivity => "connectivity",
            Self::Metadata => "metadata",
            Self::General => "general",
        }
    }

    /// Generic follow-up advice for a change in this area.
    #[must_use]
    pub const fn recommendation(&self) -> &'static str {
        match self {
            Self::Security => {
                "Rotate affected credentials and confirm secrets are sourced from a secure store"
            }
            Self::Database => "Verify database connectivity and run a migration dry-run before deploying",
            Self::FeatureFlag => "Confirm the toggle state is intended and stage the rollout",
            Self::Performance => "Load-test the new limits against expected peak traffic",
            Self::Connectivity => "Check that dependent services and firewall rules match the new address",
            Self::Metadata => "Confirm consumers do not key off the changed value",
            Self::General => "Review the change with the service owner",
        }
    }
}

impl std::fmt::Display for ImpactCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rule that produced an impact's final text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImpactTrigger {
    /// Field-name pattern tier
    Pattern,
    /// Removal of an otherwise low-risk field
    RemovalFloor,
    /// Numeric timeout lowered
    TimeoutReduced,
    /// Enable/active toggle flipped
    ToggleChanged,
    /// Value changed runtime type
    TypeChanged,
}

impl ImpactTrigger {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pattern => "pattern",
            Self::RemovalFloor => "removal-floor",
            Self::TimeoutReduced => "timeout-reduced",
            Self::ToggleChanged => "toggle-changed",
            Self::TypeChanged => "type-changed",
        }
    }
}

/// Risk assessment of a single change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactRecord {
    pub level: RiskLevel,
    pub path: String,
    pub title: String,
    pub description: String,
    pub recommendation: String,
    pub change_kind: ChangeKind,
    pub category: ImpactCategory,
    pub trigger: ImpactTrigger,
}

/// Per-level impact counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl LevelCounts {
    #[must_use]
    pub fn from_impacts(impacts: &[ImpactRecord]) -> Self {
        let mut counts = Self::default();
        for impact in impacts {
            *counts.slot(impact.level) += 1;
        }
        counts
    }

    fn slot(&mut self, level: RiskLevel) -> &mut usize {
        match level {
            RiskLevel::Critical => &mut self.critical,
            RiskLevel::High => &mut self.high,
            RiskLevel::Medium => &mut self.medium,
            RiskLevel::Low => &mut self.low,
        }
    }

    #[must_use]
    pub const fn get(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Critical => self.critical,
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// Classified impacts of one comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub impacts: Vec<ImpactRecord>,
    /// Highest level among `impacts`; `None` when nothing was flagged.
    pub overall: Option<RiskLevel>,
    pub counts: LevelCounts,
}

impl RiskAssessment {
    #[must_use]
    pub fn from_impacts(impacts: Vec<ImpactRecord>) -> Self {
        let overall = impacts.iter().map(|i| i.level).max();
        let counts = LevelCounts::from_impacts(&impacts);
        Self {
            impacts,
            overall,
            counts,
        }
    }

    /// Whether the overall risk meets or exceeds `threshold`.
    #[must_use]
    pub fn exceeds(&self, threshold: RiskLevel) -> bool {
        self.overall.is_some_and(|level| level.meets(threshold))
    }

    /// Impacts at one level, in input order.
    pub fn at_level(&self, level: RiskLevel) -> impl Iterator<Item = &ImpactRecord> {
        self.impacts.iter().filter(move |i| i.level == level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impact(level: RiskLevel) -> ImpactRecord {
        ImpactRecord {
            level,
            path: "x".to_string(),
            title: "Modified x".to_string(),
            description: String::new(),
            recommendation: String::new(),
            change_kind: ChangeKind::Modified,
            category: ImpactCategory::General,
            trigger: ImpactTrigger::Pattern,
        }
    }

    #[test]
    fn test_assessment_overall_and_counts() {
        let assessment = RiskAssessment::from_impacts(vec![
            impact(RiskLevel::Medium),
            impact(RiskLevel::High),
            impact(RiskLevel::Medium),
        ]);
        assert_eq!(assessment.overall, Some(RiskLevel::High));
        assert_eq!(assessment.counts.medium, 2);
        assert_eq!(assessment.counts.high, 1);
        assert_eq!(assessment.counts.total(), 3);
        assert!(assessment.exceeds(RiskLevel::High));
        assert!(!assessment.exceeds(RiskLevel::Critical));
        assert_eq!(assessment.at_level(RiskLevel::Medium).count(), 2);
    }

    #[test]
    fn test_empty_assessment_exceeds_nothing() {
        let assessment = RiskAssessment::from_impacts(Vec::new());
        assert_eq!(assessment.overall, None);
        assert!(!assessment.exceeds(RiskLevel::Low));
    }

    #[test]
    fn test_category_serializes_kebab_case() {
        let json = serde_json::to_string(&ImpactCategory::FeatureFlag).unwrap();
        assert_eq!(json, "\"feature-flag\"");
    }
}
