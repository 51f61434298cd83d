//! Branding migration — rewrite a static HTML file's visual identity.
//!
//! A `RebrandPlan` is a fixed, auditable sequence of literal search-and-replace
//! rules (plus one table-driven batch of class substitutions). Applying it is
//! a straight-line pass over the document text; the file-level entry points
//! read the target, apply the plan, and write the result back in place.

mod engine;
mod plan;

pub use engine::{apply_plan, preview_plan, RebrandReport, RuleOutcome};
pub use plan::{BatchTable, RebrandPlan, Rule, RuleKind};
