//! Rebrand engine — apply an ordered plan of literal edits to a document.
//!
//! Applying a plan is a pure function from old text to new text: each rule
//! replaces every occurrence of its search literal in the current text, in
//! strict declaration order. A rule whose literal is absent is silently
//! skipped; there is no fuzzy matching and no validation of the result.

use crate::error::Result;
use crate::rebrand::plan::{RebrandPlan, RuleKind};
use crate::utils::io;
use serde::Serialize;
use std::path::Path;

/// Outcome of a single rule, in plan order.
#[derive(Debug, Clone, Serialize)]
pub struct RuleOutcome {
    pub label: String,
    pub kind: RuleKind,
    /// Number of occurrences replaced. Zero means the rule no-opped.
    pub replacements: usize,
}

/// The full result of applying a plan.
#[derive(Debug, Clone, Serialize)]
pub struct RebrandReport {
    pub outcomes: Vec<RuleOutcome>,
    pub total_replacements: usize,
    /// Whether any rule changed the text.
    pub changed: bool,
    /// Whether the transformed text was written to disk.
    pub applied: bool,
}

impl RebrandReport {
    /// Block rules that matched zero times.
    ///
    /// A whole-block rule silently no-ops when the live markup has drifted
    /// by even one whitespace character, so these are worth surfacing.
    pub fn missed_blocks(&self) -> Vec<&RuleOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.kind == RuleKind::Block && o.replacements == 0)
            .collect()
    }
}

impl RebrandPlan {
    /// Apply every rule in declaration order and report per-rule counts.
    ///
    /// Occurrences created by an earlier rule are eligible for matching by
    /// later rules; occurrences consumed by an earlier rule are gone.
    pub fn apply(&self, text: &str) -> (String, RebrandReport) {
        let mut current = text.to_string();
        let mut outcomes = Vec::with_capacity(self.rules.len());
        let mut total = 0;

        for rule in &self.rules {
            let count = current.matches(rule.from.as_str()).count();
            if count > 0 {
                current = current.replace(&rule.from, &rule.to);
            }
            total += count;
            outcomes.push(RuleOutcome {
                label: rule.label.clone(),
                kind: rule.kind,
                replacements: count,
            });
        }

        let report = RebrandReport {
            outcomes,
            total_replacements: total,
            changed: current != text,
            applied: false,
        };

        (current, report)
    }
}

/// Apply `plan` to the file at `path`, writing the result back in place.
///
/// The file is read and written as UTF-8. The write truncates and replaces
/// prior content; no backup is made.
pub fn apply_plan(plan: &RebrandPlan, path: &Path) -> Result<RebrandReport> {
    let text = io::read_file(path, &format!("read {}", path.display()))?;
    let (new_text, mut report) = plan.apply(&text);
    io::write_file(path, &new_text, &format!("write {}", path.display()))?;
    report.applied = true;
    Ok(report)
}

/// Compute the report for `path` without writing anything.
pub fn preview_plan(plan: &RebrandPlan, path: &Path) -> Result<RebrandReport> {
    let text = io::read_file(path, &format!("read {}", path.display()))?;
    let (_, report) = plan.apply(&text);
    Ok(report)
}
