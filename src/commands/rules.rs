use clap::Args;
use serde::Serialize;

use rebrand::{RebrandPlan, RuleKind};

use crate::commands::CmdResult;

#[derive(Args)]
pub struct RulesArgs {
    /// Print the full JSON listing instead of the plain-text table
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum RulesOutput {
    #[serde(rename = "rules")]
    Rules {
        total: usize,
        rules: Vec<RuleListing>,
    },
}

#[derive(Serialize)]
pub struct RuleListing {
    pub label: String,
    pub kind: RuleKind,
    pub from: String,
    pub to: String,
}

pub fn run(_args: RulesArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<RulesOutput> {
    let plan = RebrandPlan::basa();

    let rules: Vec<RuleListing> = plan
        .rules
        .iter()
        .map(|r| RuleListing {
            label: r.label.clone(),
            kind: r.kind,
            from: r.from.clone(),
            to: r.to.clone(),
        })
        .collect();

    Ok((
        RulesOutput::Rules {
            total: rules.len(),
            rules,
        },
        0,
    ))
}

/// Run `rules` and render the plain-text listing for non-JSON mode.
///
/// Multi-line literals are debug-escaped so each rule stays on one line.
pub fn run_raw(
    args: RulesArgs,
    global: &crate::commands::GlobalArgs,
) -> rebrand::Result<(String, i32)> {
    let (output, exit_code) = run(args, global)?;
    let RulesOutput::Rules { rules, .. } = output;

    let mut content = String::new();
    for (idx, rule) in rules.iter().enumerate() {
        content.push_str(&format!(
            "{:2}. {} [{}] {:?} -> {:?}\n",
            idx + 1,
            rule.label,
            rule.kind.as_str(),
            rule.from,
            rule.to
        ));
    }

    Ok((content, exit_code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::GlobalArgs;

    #[test]
    fn listing_covers_every_plan_rule_in_order() {
        let (output, exit_code) = run(RulesArgs { json: true }, &GlobalArgs {}).unwrap();
        let RulesOutput::Rules { total, rules } = output;

        assert_eq!(exit_code, 0);
        assert_eq!(total, rules.len());
        assert_eq!(rules.first().unwrap().label, "title");
        assert_eq!(rules.last().unwrap().label, "nav-active-bg");
    }

    #[test]
    fn raw_listing_keeps_one_line_per_rule() {
        let plan_len = RebrandPlan::basa().rules.len();
        let (content, _) = run_raw(RulesArgs { json: false }, &GlobalArgs {}).unwrap();

        assert_eq!(content.lines().count(), plan_len);
        // Block literals span lines but the listing escapes them.
        assert!(content.contains("logo-block [block]"));
        assert!(content.contains("\\n"));
    }
}
