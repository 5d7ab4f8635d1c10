//! Pattern classifier: syntax validation, danger taxonomy, recursive-delete targets and
//! the prefix allowlist, composed into one verdict.

mod prefix;
mod removal;
mod syntax;
mod taxonomy;


pub use prefix::{build_allow_template, extract_prefix, matches_allowed_prefix};
pub use removal::{SAFE_REMOVAL_TARGETS, is_dangerous_removal};
pub use syntax::{MAX_PATTERN_CHARS, SyntaxIssue, SyntaxReport, validate_syntax};
pub use taxonomy::{
    Category, DangerPattern, danger_taxonomy, matches_danger_taxonomy, taxonomy_matches,
};

use crate::model::Rule;
use crate::policy::PrefixMode;
use approvalguard_types::ids;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskVerdict {
    Safe,
    Risky,
}

impl RiskVerdict {
    pub fn is_risky(self) -> bool {
        self == RiskVerdict::Risky
    }
}

/// Why a rule was judged risky.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RiskReason {
    InvalidSyntax(Vec<SyntaxIssue>),
    /// Labels of the matching taxonomy entries.
    DangerTaxonomy(Vec<&'static str>),
    DangerousRemoval,
    PrefixNotAllowed,
}

impl RiskReason {
    pub fn code(&self) -> &'static str {
        match self {
            RiskReason::InvalidSyntax(_) => ids::REASON_INVALID_SYNTAX,
            RiskReason::DangerTaxonomy(_) => ids::REASON_DANGER_TAXONOMY,
            RiskReason::DangerousRemoval => ids::REASON_DANGEROUS_REMOVAL,
            RiskReason::PrefixNotAllowed => ids::REASON_PREFIX_NOT_ALLOWED,
        }
    }
}

impl std::fmt::Display for RiskReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskReason::InvalidSyntax(issues) => {
                let labels: Vec<&str> = issues.iter().map(|i| i.as_str()).collect();
                write!(f, "{} ({})", self.code(), labels.join(", "))
            }
            RiskReason::DangerTaxonomy(labels) => {
                write!(f, "{} ({})", self.code(), labels.join(", "))
            }
            _ => f.write_str(self.code()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub verdict: RiskVerdict,
    /// Every check that fired; empty exactly when the verdict is safe.
    pub reasons: Vec<RiskReason>,
}

/// Classify a rule. The enablement flag is not consulted; callers decide which rules
/// are evaluated.
pub fn classify(rule: &Rule, mode: &PrefixMode) -> Classification {
    classify_pattern(&rule.pattern, mode)
}

/// Risky when any check fires: invalid syntax, a taxonomy match, a dangerous recursive
/// delete, or a pattern outside the allowlist.
pub fn classify_pattern(pattern: &str, mode: &PrefixMode) -> Classification {
    let mut reasons = Vec::new();

    let syntax = validate_syntax(pattern);
    if !syntax.valid {
        reasons.push(RiskReason::InvalidSyntax(syntax.issues));
    }

    let matched: Vec<&'static str> = taxonomy_matches(pattern)
        .into_iter()
        .map(|entry| entry.label)
        .collect();
    if !matched.is_empty() {
        reasons.push(RiskReason::DangerTaxonomy(matched));
    }

    if is_dangerous_removal(pattern) {
        reasons.push(RiskReason::DangerousRemoval);
    }

    if !matches_allowed_prefix(pattern, mode) {
        reasons.push(RiskReason::PrefixNotAllowed);
    }

    let verdict = if reasons.is_empty() {
        RiskVerdict::Safe
    } else {
        RiskVerdict::Risky
    };
    Classification { verdict, reasons }
}
