//! Edit plan types — ordered literal rules, the batch class table, and the
//! built-in BASA migration plan.

use serde::Serialize;

/// How a rule's search literal is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Single-line literal. Every occurrence is replaced.
    Literal,
    /// Multi-line literal spanning whole lines of markup. The live text
    /// must match byte-for-byte, including whitespace and line breaks,
    /// or the rule is a silent no-op.
    Block,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Literal => "literal",
            RuleKind::Block => "block",
        }
    }
}

/// An unconditional search-and-replace pair.
///
/// Rules carry no condition: each is applied to every occurrence of its
/// search literal in the current document text. A rule whose literal is
/// absent simply does nothing.
#[derive(Debug, Clone, Serialize)]
pub struct Rule {
    /// Short identifier for reports and warnings.
    pub label: String,
    pub from: String,
    pub to: String,
    pub kind: RuleKind,
}

impl Rule {
    pub fn literal(
        label: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Rule {
            label: label.into(),
            from: from.into(),
            to: to.into(),
            kind: RuleKind::Literal,
        }
    }

    pub fn block(
        label: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Rule {
            label: label.into(),
            from: from.into(),
            to: to.into(),
            kind: RuleKind::Block,
        }
    }
}

/// Ordered mapping from search literal to replacement literal.
///
/// Inserting a key that already exists keeps the key's original position
/// and overwrites its value, so a duplicated key yields exactly one
/// effective rule. Iteration is insertion order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchTable {
    entries: Vec<(String, String)>,
}

impl BatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let from = from.into();
        let to = to.into();
        if let Some(entry) = self.entries.iter_mut().find(|(f, _)| *f == from) {
            entry.1 = to;
        } else {
            self.entries.push((from, to));
        }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

/// A fixed, auditable sequence of text edits.
///
/// Rules are applied strictly in declaration order; later rules operate on
/// the output of earlier rules, so overlapping literals are order-sensitive.
#[derive(Debug, Clone, Serialize)]
pub struct RebrandPlan {
    pub rules: Vec<Rule>,
}

// The logo markup blocks must match the live document byte-for-byte,
// including the 12/16-space indentation carried in these literals.
const OLD_LOGO_BLOCK: &str = r#"<div class="w-10 h-10 bg-indigo-600 rounded-xl flex items-center justify-center text-white shadow-lg shadow-indigo-200">
                <i class="fas fa-cube text-xl"></i>
            </div>
            <div>
                <h1 class="text-lg font-black tracking-tight leading-none">FLUXO 360</h1>
                <p class="text-[10px] text-slate-400 font-bold uppercase tracking-widest">Ultimate</p>
            </div>"#;

const NEW_LOGO_BLOCK: &str = r#"<div class="w-10 h-10 bg-[#006739] rounded-xl flex items-center justify-center text-white shadow-lg shadow-emerald-200">
                <i class="fas fa-university text-xl"></i>
            </div>
            <div>
                <h1 class="text-lg font-black tracking-tight leading-none text-[#006739]">BASA</h1>
                <p class="text-[10px] text-[#FDB913] font-bold uppercase tracking-widest">360º Ultimate</p>
            </div>"#;

impl RebrandPlan {
    /// Built-in plan migrating the Fluxo 360 indigo identity to the BASA
    /// green/gold identity.
    ///
    /// Step order matters: the specific selector rules run before the bare
    /// `#6366f1` sweep, and the class table runs after the logo block swap
    /// so a near-miss block still gets its class tokens migrated.
    pub fn basa() -> Self {
        let mut rules = vec![
            Rule::literal(
                "title",
                "<title>Fluxo 360 Ultimate - Stable</title>",
                "<title>BASA 360º Ultimate</title>",
            ),
            Rule::literal("primary-var", "--primary: #4f46e5;", "--primary: #006739;"),
            Rule::literal(
                "border-left-color",
                "border-left-color: #4f46e5;",
                "border-left-color: #006739;",
            ),
            Rule::literal(
                "active-rgba",
                "rgba(79, 70, 229, 0.15)",
                "rgba(0, 103, 57, 0.15)",
            ),
            Rule::literal(
                "active-border-bottom",
                "border-bottom: 3px solid #6366f1 !important;",
                "border-bottom: 3px solid #006739 !important;",
            ),
            // Broad pass: every remaining occurrence of the bare hex code,
            // anywhere in the document.
            Rule::literal("indigo-hex-sweep", "#6366f1", "#006739"),
            Rule::block("logo-block", OLD_LOGO_BLOCK, NEW_LOGO_BLOCK),
        ];

        let mut classes = BatchTable::new();
        classes.insert("bg-indigo-600", "bg-[#006739]");
        classes.insert("hover:bg-indigo-700", "hover:bg-[#004d2c]");
        classes.insert("text-indigo-600", "text-[#006739]");
        classes.insert("text-indigo-700", "text-[#004d2c]");
        classes.insert("text-indigo-500", "text-[#006739]");
        classes.insert("border-indigo-500", "border-[#006739]");
        classes.insert("focus:border-indigo-500", "focus:border-[#006739]");
        classes.insert("shadow-indigo-200", "shadow-emerald-200");
        classes.insert("bg-indigo-50", "bg-emerald-50");
        classes.insert("bg-indigo-500", "bg-[#006739]");
        classes.insert("hover:bg-indigo-600", "hover:bg-[#004d2c]");
        classes.insert("focus:ring-indigo-300", "focus:ring-[#8DC63F]");
        classes.insert("from-indigo-50", "from-emerald-50");
        classes.insert("to-purple-50", "to-yellow-50");
        // Repeated key from the authored table; the mapping keeps the first
        // position and the last value, so this contributes no extra rule.
        classes.insert("text-indigo-500", "text-[#006739]");

        rules.extend(
            classes
                .entries()
                .iter()
                .map(|(from, to)| {
                    Rule::literal(format!("class.{}", from), from.as_str(), to.as_str())
                }),
        );

        rules.push(Rule::literal(
            "header-gradient",
            "background: linear-gradient(135deg, #1e293b 0%, #334155 100%)",
            "background: linear-gradient(135deg, #006739 0%, #004d2c 100%)",
        ));
        // Class opener plus gradient line; the trailing space and 12-space
        // indent are part of the literal.
        rules.push(Rule::block(
            "card-gradient",
            ".card-visa { \n            background: linear-gradient(135deg, #0f172a 0%, #334155 100%);",
            ".card-visa { \n            background: linear-gradient(135deg, #006739 0%, #004d2c 100%);",
        ));
        rules.push(Rule::literal(
            "nav-active-bg",
            ".nav-item.active { background: #1e293b;",
            ".nav-item.active { background: #006739;",
        ));

        RebrandPlan { rules }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_table_keeps_insertion_order() {
        let mut table = BatchTable::new();
        table.insert("a", "1");
        table.insert("b", "2");
        table.insert("c", "3");

        let keys: Vec<&str> = table.entries().iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn batch_table_duplicate_key_keeps_position_takes_last_value() {
        let mut table = BatchTable::new();
        table.insert("a", "1");
        table.insert("b", "2");
        table.insert("a", "9");

        assert_eq!(table.entries().len(), 2);
        assert_eq!(table.entries()[0], ("a".to_string(), "9".to_string()));
        assert_eq!(table.entries()[1], ("b".to_string(), "2".to_string()));
    }

    #[test]
    fn basa_plan_has_expected_shape() {
        let plan = RebrandPlan::basa();

        // 7 leading rules + 14 effective class entries + 3 trailing rules.
        assert_eq!(plan.rules.len(), 24);

        let labels: Vec<&str> = plan.rules.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels[0], "title");
        assert_eq!(labels[6], "logo-block");
        assert_eq!(labels[23], "nav-active-bg");

        // The duplicated class key collapsed to a single rule.
        let dup_count = labels
            .iter()
            .filter(|l| **l == "class.text-indigo-500")
            .count();
        assert_eq!(dup_count, 1);
    }

    #[test]
    fn basa_plan_sweep_runs_after_specific_selectors() {
        let plan = RebrandPlan::basa();
        let pos = |label: &str| {
            plan.rules
                .iter()
                .position(|r| r.label == label)
                .unwrap_or_else(|| panic!("missing rule {}", label))
        };

        assert!(pos("active-border-bottom") < pos("indigo-hex-sweep"));
        assert!(pos("indigo-hex-sweep") < pos("logo-block"));
        assert!(pos("logo-block") < pos("class.bg-indigo-600"));
    }

    #[test]
    fn block_rules_span_multiple_lines() {
        let plan = RebrandPlan::basa();
        for rule in plan.rules.iter().filter(|r| r.kind == RuleKind::Block) {
            assert!(
                rule.from.contains('\n'),
                "block rule '{}' should span lines",
                rule.label
            );
        }
    }
}
