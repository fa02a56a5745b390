//! Field-name pattern tiers.
//!
//! The baseline level of a change comes from matching the final key of its
//! path against an ordered table of rules. The first matching rule wins,
//! so the table order is the priority order.
//!
//! Keys are normalized to lower snake case before matching, so
//! `clientSecret`, `client-secret` and `CLIENT_SECRET` are all seen as
//! `client_secret`.

use super::impact::ImpactCategory;
use super::level::RiskLevel;
use crate::error::{CfgDiffError, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// One row of the rule table.
#[derive(Debug, Clone)]
pub struct TierRule {
    /// Name for logging
    pub name: String,
    /// Matched against the normalized field name
    pub pattern: Regex,
    pub level: RiskLevel,
    pub category: ImpactCategory,
}

impl TierRule {
    /// Compile a rule; the pattern is matched case-insensitively.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        level: RiskLevel,
        category: ImpactCategory,
    ) -> Result<Self> {
        let name = name.into();
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| CfgDiffError::config(format!("risk rule '{name}': {e}")))?;
        Ok(Self {
            name,
            pattern,
            level,
            category,
        })
    }

    #[must_use]
    pub fn matches(&self, field: &str) -> bool {
        self.pattern.is_match(field)
    }
}

/// User-supplied rule as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Optional label (defaults to the pattern)
    #[serde(default)]
    pub name: Option<String>,
    /// Regex matched against the field name
    pub pattern: String,
    pub level: RiskLevel,
    #[serde(default)]
    pub category: ImpactCategory,
}

impl RuleSpec {
    pub fn compile(&self) -> Result<TierRule> {
        let name = self.name.clone().unwrap_or_else(|| self.pattern.clone());
        TierRule::new(name, &self.pattern, self.level, self.category)
    }
}

const BUILTIN_PATTERNS: &[(&str, &str, RiskLevel, ImpactCategory)] = &[
    (
        "secret",
        r"(^|[_-])(secrets?|password|passwd|token|credentials?)($|[_-])",
        RiskLevel::Critical,
        ImpactCategory::Security,
    ),
    ("api-key", r"api[_-]?key", RiskLevel::Critical, ImpactCategory::Security),
    ("auth", r"^auth", RiskLevel::Critical, ImpactCategory::Security),
    ("private-key", r"private[_-]?key", RiskLevel::Critical, ImpactCategory::Security),
    (
        "database",
        r"^(database|db)|(^|[_-])dsn$|conn(ection)?[_-]?str(ing)?",
        RiskLevel::Critical,
        ImpactCategory::Database,
    ),
    (
        "toggle",
        r"(^|[_-])(enabled|active|disabled)$",
        RiskLevel::Critical,
        ImpactCategory::FeatureFlag,
    ),
    (
        "capacity",
        r"timeout|limit|^max|^min|threshold|retr(y|ies)",
        RiskLevel::High,
        ImpactCategory::Performance,
    ),
    (
        "address",
        r"(^|[_-])(port|host|hostname|endpoint|url|uri)s?($|[_-])",
        RiskLevel::High,
        ImpactCategory::Connectivity,
    ),
    (
        "descriptive",
        r"(^|[_-])(name|type|version|format|encoding|locale|timezone)$",
        RiskLevel::Medium,
        ImpactCategory::Metadata,
    ),
];

static BUILTIN_RULES: LazyLock<Vec<TierRule>> = LazyLock::new(|| {
    BUILTIN_PATTERNS
        .iter()
        .map(|(name, pattern, level, category)| TierRule {
            name: (*name).to_string(),
            pattern: RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .expect("static regex"),
            level: *level,
            category: *category,
        })
        .collect()
});

/// Lower snake case form of a field name.
///
/// Word boundaries are taken from camelCase humps (`baseUrl`), acronym ends
/// (`HTTPTimeout`) and any non-alphanumeric character (`app.kubernetes.io/name`),
/// each becoming a single `_`.
#[must_use]
pub fn normalize_field(field: &str) -> String {
    let chars: Vec<char> = field.chars().collect();
    let mut out = String::with_capacity(field.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() {
            if c.is_uppercase() {
                let prev = i.checked_sub(1).map(|j| chars[j]);
                let next = chars.get(i + 1);
                let hump = prev.is_some_and(|p| p.is_lowercase() || p.is_numeric());
                let acronym_end = prev.is_some_and(char::is_uppercase)
                    && next.is_some_and(|n| n.is_lowercase());
                if (hump || acronym_end) && !out.ends_with('_') {
                    out.push('_');
                }
                out.extend(c.to_lowercase());
            } else {
                out.push(c);
            }
        } else {
            out.push('_');
        }
    }
    out
}

/// Ordered rule table, first match wins.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<TierRule>,
}

/// Baseline for a field no rule matches.
pub const DEFAULT_TIER: (RiskLevel, ImpactCategory) = (RiskLevel::Low, ImpactCategory::General);

impl RuleTable {
    /// The built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            rules: BUILTIN_RULES.clone(),
        }
    }

    /// Built-in table with user rules evaluated first.
    pub fn with_custom(specs: &[RuleSpec]) -> Result<Self> {
        let mut rules = specs
            .iter()
            .map(RuleSpec::compile)
            .collect::<Result<Vec<_>>>()?;
        rules.extend(BUILTIN_RULES.iter().cloned());
        Ok(Self { rules })
    }

    /// First rule matching `field`, if any.
    #[must_use]
    pub fn match_field(&self, field: &str) -> Option<&TierRule> {
        let field = normalize_field(field);
        self.rules.iter().find(|rule| rule.matches(&field))
    }

    /// Baseline level and category for `field`.
    #[must_use]
    pub fn tier(&self, field: &str) -> (RiskLevel, ImpactCategory) {
        self.match_field(field)
            .map_or(DEFAULT_TIER, |rule| (rule.level, rule.category))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
