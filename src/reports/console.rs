//! Console report generator.
//!
//! Groups changes by kind and impacts by level, with counts.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{ChangeKind, ChangeRecord, DiffResult};
use crate::history::{HistoryEntry, HistoryInsights, MIN_ENTRIES};
use crate::model::{display_value, Document};
use crate::risk::{RiskAssessment, RiskLevel};
use crate::schema::{SchemaValidation, ViolationSeverity};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "magenta" => format!("\x1b[35m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn kind_color(kind: ChangeKind) -> &'static str {
    match kind {
        ChangeKind::Added => "green",
        ChangeKind::Removed => "red",
        ChangeKind::Modified => "yellow",
    }
}

const fn level_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Critical => "magenta",
        RiskLevel::High => "red",
        RiskLevel::Medium => "yellow",
        RiskLevel::Low => "cyan",
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}

/// Console reporter for terminal output
pub struct ConsoleReporter {
    /// Use colored output
    colored: bool,
}

impl ConsoleReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn rule(&self) -> String {
        self.color("─".repeat(48).as_str(), "dim")
    }

    fn change_line(&self, change: &ChangeRecord) -> String {
        let marker = self.color(&change.kind.symbol().to_string(), kind_color(change.kind));
        let value = match (change.kind, &change.old_value, &change.new_value) {
            (ChangeKind::Modified, Some(old), Some(new)) => {
                format!("{} → {}", display_value(old), display_value(new))
            }
            (_, _, Some(new)) => display_value(new),
            (_, Some(old), _) => display_value(old),
            _ => String::new(),
        };
        format!("  {marker} {}: {value}", change.display_path())
    }

    fn push_changes(&self, lines: &mut Vec<String>, diff: &DiffResult) {
        let summary = &diff.summary;
        if !diff.has_changes() {
            lines.push(format!("  {}", self.color("No changes", "dim")));
        } else {
            let counts: Vec<String> = [ChangeKind::Added, ChangeKind::Removed, ChangeKind::Modified]
                .into_iter()
                .filter(|kind| summary.count(*kind) > 0)
                .map(|kind| {
                    self.color(
                        &format!("{}{} {}", kind.symbol(), summary.count(kind), kind.name().to_lowercase()),
                        kind_color(kind),
                    )
                })
                .collect();
            lines.push(format!(
                "{}  {} {} ({})",
                self.color("Changes:", "cyan"),
                summary.total,
                plural(summary.total, "change", "changes"),
                counts.join(", ")
            ));

            for kind in [ChangeKind::Added, ChangeKind::Removed, ChangeKind::Modified] {
                let count = summary.count(kind);
                if count == 0 {
                    continue;
                }
                lines.push(String::new());
                lines.push(self.color(&format!("{} ({count})", kind.name()), "bold"));
                lines.extend(diff.by_kind(kind).map(|c| self.change_line(c)));
            }
        }
        if diff.ignored > 0 {
            lines.push(format!(
                "  {}",
                self.color(&format!("{} change(s) ignored", diff.ignored), "dim")
            ));
        }
    }

    fn push_risk(&self, lines: &mut Vec<String>, risk: &RiskAssessment) {
        lines.push(String::new());
        let Some(overall) = risk.overall else {
            lines.push(format!(
                "{}  {}",
                self.color("Risk:", "cyan"),
                self.color("no risky changes detected", "green")
            ));
            return;
        };
        lines.push(format!(
            "{}  {} ({} {})",
            self.color("Risk:", "cyan"),
            self.color(overall.label(), level_color(overall)),
            risk.impacts.len(),
            plural(risk.impacts.len(), "impact", "impacts")
        ));

        for level in RiskLevel::DESCENDING {
            let count = risk.counts.get(level);
            if count == 0 {
                continue;
            }
            lines.push(String::new());
            lines.push(self.color(&format!("{} ({count})", level.label()), level_color(level)));
            for impact in risk.at_level(level) {
                lines.push(format!(
                    "  {} {}",
                    self.color(&format!("[{}]", impact.category), "dim"),
                    self.color(&impact.title, "bold")
                ));
                lines.push(format!("    {}", impact.description));
                lines.push(format!("    {} {}", self.color("→", "cyan"), impact.recommendation));
            }
        }
    }

    fn push_validation(&self, lines: &mut Vec<String>, results: &[SchemaValidation]) {
        if results.is_empty() {
            return;
        }
        lines.push(String::new());
        lines.push(self.color("Schema Validation:", "bold"));
        for result in results {
            if result.violations.is_empty() {
                lines.push(format!("  {} {}", self.color("✓", "green"), result.document));
                continue;
            }
            lines.push(format!(
                "  {} {}: {} {}, {} {}",
                self.color(if result.is_valid { "!" } else { "✗" }, if result.is_valid { "yellow" } else { "red" }),
                result.document,
                result.error_count,
                plural(result.error_count, "error", "errors"),
                result.warning_count,
                plural(result.warning_count, "warning", "warnings")
            ));
            for violation in &result.violations {
                let tag = match violation.severity {
                    ViolationSeverity::Error => self.color("error", "red"),
                    ViolationSeverity::Warning => self.color("warning", "yellow"),
                };
                lines.push(format!("    {tag} {}: {}", violation.path, violation.message));
            }
        }
    }

    fn push_insights(&self, lines: &mut Vec<String>, insights: &HistoryInsights, entries: usize) {
        lines.push(String::new());
        lines.push(self.color("Insights:", "bold"));
        if entries < MIN_ENTRIES {
            lines.push(format!(
                "  {}",
                self.color(
                    &format!("Not enough history for insights (need at least {MIN_ENTRIES} entries)"),
                    "dim"
                )
            ));
            return;
        }
        if insights.is_empty() {
            lines.push(format!("  {}", self.color("No frequently changed fields", "dim")));
        } else {
            lines.push("  Frequently changed fields:".to_string());
            for field in &insights.frequent_fields {
                lines.push(format!(
                    "    {}  {} {}",
                    self.color(&field.path, "yellow"),
                    field.count,
                    plural(field.count, "change", "changes")
                ));
            }
        }
        if insights.high_risk_runs > 0 {
            lines.push(format!(
                "  {} of {} runs were high risk or worse",
                insights.high_risk_runs, insights.entries_analyzed
            ));
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for ConsoleReporter {
    fn generate_compare_report(
        &self,
        diff: &DiffResult,
        risk: &RiskAssessment,
        old: &Document,
        new: &Document,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        let title = config.title.as_deref().unwrap_or("Configuration Diff");
        lines.push(self.color(title, "bold"));
        lines.push(self.rule());

        let file_a = config.metadata.file_a.clone().unwrap_or_else(|| old.label());
        let file_b = config.metadata.file_b.clone().unwrap_or_else(|| new.label());
        lines.push(format!("{}  {file_a} → {file_b}", self.color("Files:", "cyan")));
        lines.push(format!(
            "{}  {} → {}",
            self.color("Format:", "cyan"),
            old.format,
            new.format
        ));
        lines.push(String::new());

        self.push_changes(&mut lines, diff);
        self.push_risk(&mut lines, risk);
        self.push_validation(&mut lines, &config.schema_results);

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn generate_history_report(
        &self,
        entries: &[HistoryEntry],
        insights: &HistoryInsights,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        lines.push(self.color(
            &format!("Comparison History ({} {})", entries.len(), plural(entries.len(), "entry", "entries")),
            "bold",
        ));
        lines.push(self.rule());

        if entries.is_empty() {
            lines.push(format!("  {}", self.color("No saved comparisons", "dim")));
        }
        for entry in entries {
            let risk = entry.risk_level.map_or_else(
                || self.color("none", "green"),
                |level| self.color(level.name(), level_color(level)),
            );
            lines.push(format!(
                "  {}  {}  {} → {}  {} {}, risk {}",
                self.color(&entry.timestamp.format("%Y-%m-%d %H:%M").to_string(), "dim"),
                self.color(&entry.name, "bold"),
                entry.file_a,
                entry.file_b,
                entry.summary.changes.total,
                plural(entry.summary.changes.total, "change", "changes"),
                risk
            ));
        }

        self.push_insights(&mut lines, insights, entries.len());
        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Console
    }
}
