// Public modules
pub mod error;
pub mod rebrand;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use rebrand::{apply_plan, preview_plan, BatchTable, RebrandPlan, RebrandReport, Rule, RuleKind, RuleOutcome};
