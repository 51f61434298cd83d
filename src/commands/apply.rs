use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use rebrand::log_status;
use rebrand::{apply_plan, preview_plan, Error, RebrandPlan, RebrandReport, RuleKind};

use crate::commands::CmdResult;

#[derive(Args)]
pub struct ApplyArgs {
    /// HTML file to rewrite in place (tilde-expanded)
    pub file: String,

    /// Compute the report without writing changes
    #[arg(long)]
    pub dry_run: bool,

    /// Print the full JSON report instead of the completion message
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "command")]
pub enum ApplyOutput {
    #[serde(rename = "apply")]
    Apply {
        file: String,
        dry_run: bool,
        applied: bool,
        changed: bool,
        total_replacements: usize,
        rules: Vec<RuleSummary>,
    },
}

#[derive(Debug, Serialize)]
pub struct RuleSummary {
    pub label: String,
    pub kind: RuleKind,
    pub replacements: usize,
}

pub fn run(args: ApplyArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ApplyOutput> {
    if args.file.trim().is_empty() {
        return Err(
            Error::validation_invalid_argument("file", "Path must not be empty")
                .with_hint("Pass the HTML file to rewrite, e.g. 'rebrand apply index.html'"),
        );
    }

    let path = PathBuf::from(shellexpand::tilde(&args.file).to_string());

    let plan = RebrandPlan::basa();
    let report = if args.dry_run {
        preview_plan(&plan, &path)?
    } else {
        apply_plan(&plan, &path)?
    };

    warn_missed_blocks(&report);

    Ok((
        ApplyOutput::Apply {
            file: path.display().to_string(),
            dry_run: args.dry_run,
            applied: report.applied,
            changed: report.changed,
            total_replacements: report.total_replacements,
            rules: report
                .outcomes
                .iter()
                .map(|o| RuleSummary {
                    label: o.label.clone(),
                    kind: o.kind,
                    replacements: o.replacements,
                })
                .collect(),
        },
        0,
    ))
}

/// Run `apply` and render the plain-text output for non-JSON mode.
pub fn run_raw(
    args: ApplyArgs,
    global: &crate::commands::GlobalArgs,
) -> rebrand::Result<(String, i32)> {
    let (output, exit_code) = run(args, global)?;

    let ApplyOutput::Apply {
        dry_run,
        total_replacements,
        ..
    } = output;

    let content = if dry_run {
        format!(
            "Dry run: {} replacement(s); file not modified.\n",
            total_replacements
        )
    } else {
        "Branding update finished.\n".to_string()
    };

    Ok((content, exit_code))
}

/// A whole-block rule that matched nothing usually means the live markup
/// drifted in whitespace. Surface it without changing behavior.
fn warn_missed_blocks(report: &RebrandReport) {
    for missed in report.missed_blocks() {
        log_status!(
            "rebrand",
            "Block rule '{}' matched nothing; target markup may have drifted",
            missed.label
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::GlobalArgs;

    #[test]
    fn blank_file_argument_is_rejected() {
        let args = ApplyArgs {
            file: "   ".to_string(),
            dry_run: true,
            json: true,
        };

        let err = run(args, &GlobalArgs {}).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert!(!err.hints.is_empty());
    }

    #[test]
    fn dry_run_reports_without_touching_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        let doc = "<title>Fluxo 360 Ultimate - Stable</title>";
        std::fs::write(&path, doc).unwrap();

        let args = ApplyArgs {
            file: path.display().to_string(),
            dry_run: true,
            json: true,
        };
        let (output, exit_code) = run(args, &GlobalArgs {}).unwrap();

        let ApplyOutput::Apply {
            dry_run,
            applied,
            changed,
            total_replacements,
            ..
        } = output;

        assert_eq!(exit_code, 0);
        assert!(dry_run);
        assert!(!applied);
        assert!(changed);
        assert_eq!(total_replacements, 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), doc);
    }

    #[test]
    fn raw_mode_prints_the_completion_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, "<p>plain</p>").unwrap();

        let args = ApplyArgs {
            file: path.display().to_string(),
            dry_run: false,
            json: false,
        };
        let (content, exit_code) = run_raw(args, &GlobalArgs {}).unwrap();

        assert_eq!(content, "Branding update finished.\n");
        assert_eq!(exit_code, 0);
    }
}
