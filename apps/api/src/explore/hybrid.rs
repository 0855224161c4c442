//! Hybrid role suggestions: a declarative lookup table over the top-ranked job names.
//!
//! Each rule is evaluated independently against the first `HYBRID_WINDOW` names;
//! every rule that holds contributes its suggestion, in declaration order.
//! When none holds, the single fallback is returned.

/// Only this many top-ranked names are visible to the rules.
pub const HYBRID_WINDOW: usize = 5;

pub const FALLBACK_SUGGESTION: &str =
    "Portfolio career: combina 2-3 attività part-time invece di un solo lavoro";

/// Condition evaluated over the windowed job names.
#[derive(Debug, Clone, Copy)]
pub enum RuleCondition {
    /// Every listed name appears exactly.
    AllPresent(&'static [&'static str]),
    /// At least one name contains the fragment.
    AnyContains(&'static str),
}

impl RuleCondition {
    pub fn holds(&self, names: &[&str]) -> bool {
        match self {
            RuleCondition::AllPresent(required) => {
                required.iter().all(|r| names.iter().any(|n| n == r))
            }
            RuleCondition::AnyContains(fragment) => names.iter().any(|n| n.contains(*fragment)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HybridRule {
    pub condition: RuleCondition,
    pub suggestion: &'static str,
}

pub const HYBRID_RULES: &[HybridRule] = &[
    HybridRule {
        condition: RuleCondition::AllPresent(&["Sports Journalist", "UX Designer"]),
        suggestion: "UX Researcher per app sportive (unisce sport + psicologia + design)",
    },
    HybridRule {
        condition: RuleCondition::AllPresent(&["Data Analyst", "Content Creator"]),
        suggestion: "Data Storyteller (analisi dati + comunicazione)",
    },
    HybridRule {
        condition: RuleCondition::AnyContains("Product Manager"),
        suggestion: "Founder di micro-prodotto digitale basato sulle tue passioni",
    },
];

/// Applies `rules` to the first `HYBRID_WINDOW` of `top_jobs`.
pub fn apply_rules<S: AsRef<str>>(top_jobs: &[S], rules: &[HybridRule]) -> Vec<String> {
    let names: Vec<&str> = top_jobs
        .iter()
        .take(HYBRID_WINDOW)
        .map(|s| s.as_ref())
        .collect();

    let suggestions: Vec<String> = rules
        .iter()
        .filter(|rule| rule.condition.holds(&names))
        .map(|rule| rule.suggestion.to_string())
        .collect();

    if suggestions.is_empty() {
        vec![FALLBACK_SUGGESTION.to_string()]
    } else {
        suggestions
    }
}

/// Hybrid suggestions from the built-in rule table.
pub fn hybrid_suggestions<S: AsRef<str>>(top_jobs: &[S]) -> Vec<String> {
    apply_rules(top_jobs, HYBRID_RULES)
}
