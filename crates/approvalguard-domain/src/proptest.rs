//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Syntax validation of quote balance
//! - Recursive-delete target handling
//! - Classifier purity
//! - Prefix health bookkeeping and merge laws

use crate::classify::{
    SAFE_REMOVAL_TARGETS, SyntaxIssue, classify_pattern, is_dangerous_removal, validate_syntax,
};
use crate::engine::evaluate;
use crate::health::PrefixHealthMap;
use crate::model::{AuditModel, Rule, RuleEntry, RuleMap, SettingsSource};
use crate::policy::PrefixMode;
use approvalguard_types::SourcePath;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Text free of quotes and backslashes.
fn arb_plain_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 :_()-]{0,8}").unwrap()
}

/// Text containing an odd number of single quotes and no escapes.
fn arb_odd_single_quotes() -> impl Strategy<Value = String> {
    (0usize..4)
        .prop_flat_map(|k| prop::collection::vec(arb_plain_segment(), 2 * k + 1))
        .prop_map(|segments| segments.iter().map(|s| format!("{s}'")).collect::<String>())
}

fn arb_rm_flags() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("-rf"),
        Just("-fr"),
        Just("-Rf"),
        Just("-r -f"),
        Just("--recursive --force"),
    ]
}

fn arb_absolute_path() -> impl Strategy<Value = String> {
    prop::string::string_regex("/[a-z0-9_./-]{0,20}").unwrap()
}

fn arb_safe_target() -> impl Strategy<Value = String> {
    (
        prop::sample::select(SAFE_REMOVAL_TARGETS),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(name, dot, slash)| {
            format!(
                "{}{}{}",
                if dot { "./" } else { "" },
                name,
                if slash { "/" } else { "" }
            )
        })
}

fn arb_mode() -> impl Strategy<Value = PrefixMode> {
    prop_oneof![
        Just(PrefixMode::AutoScan),
        Just(PrefixMode::from_prefixes(["tachyon", "web"]).unwrap()),
    ]
}

fn arb_entry() -> impl Strategy<Value = RuleEntry> {
    prop_oneof![
        4 => (".{0,40}", any::<bool>())
            .prop_map(|(pattern, enabled)| RuleEntry::Flag(Rule::new(pattern, enabled))),
        1 => ".{0,40}".prop_map(|pattern| RuleEntry::NonBoolean { pattern }),
        2 => (prop::sample::select(vec!["tachyon", "web", "bad"]), "[a-z]{1,6}")
            .prop_map(|(p, n)| RuleEntry::Flag(Rule::new(format!(":{p}-{n}"), true))),
    ]
}

fn arb_model() -> impl Strategy<Value = AuditModel> {
    prop::collection::vec(prop::collection::vec(arb_entry(), 0..12), 0..5).prop_map(|files| {
        AuditModel {
            sources: files
                .into_iter()
                .enumerate()
                .map(|(i, entries)| SettingsSource {
                    path: SourcePath::new(format!("p{i}/.vscode/settings.json")),
                    rules: RuleMap::new(entries),
                })
                .collect(),
        }
    })
}

fn arb_health_map() -> impl Strategy<Value = PrefixHealthMap> {
    prop::collection::vec(
        (prop::sample::select(vec!["a", "b", "c"]), "[a-z]{1,4}", any::<bool>()),
        0..10,
    )
    .prop_map(|records| {
        let mut map = PrefixHealthMap::new();
        for (prefix, pattern, risky) in records {
            map.record(prefix, &pattern, risky);
        }
        map
    })
}

fn counts(map: &PrefixHealthMap) -> Vec<(String, u32, u32, u32)> {
    map.iter()
        .map(|h| {
            (
                h.prefix.clone(),
                h.total_patterns,
                h.risky_patterns,
                h.safe_patterns,
            )
        })
        .collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn odd_single_quotes_are_unterminated(pattern in arb_odd_single_quotes()) {
        let report = validate_syntax(&pattern);
        prop_assert!(!report.valid);
        prop_assert!(report.issues.contains(&SyntaxIssue::UnterminatedSingleQuote));
    }

    #[test]
    fn recursive_delete_of_absolute_path_is_dangerous(
        flags in arb_rm_flags(),
        path in arb_absolute_path(),
        prefixed in any::<bool>(),
    ) {
        let pattern = if prefixed {
            format!(":task:rm {flags} {path}")
        } else {
            format!("rm {flags} {path}")
        };
        prop_assert!(is_dangerous_removal(&pattern));
    }

    #[test]
    fn flags_after_an_unknown_target_are_dangerous(
        flags in arb_rm_flags(),
        target in "[a-z]{1,8}",
    ) {
        prop_assume!(!SAFE_REMOVAL_TARGETS.contains(&target.as_str()));
        let pattern = format!("rm {target} {flags}");
        prop_assert!(is_dangerous_removal(&pattern));
    }

    #[test]
    fn recursive_delete_of_build_artifact_is_not_dangerous(
        flags in arb_rm_flags(),
        target in arb_safe_target(),
    ) {
        let pattern = format!("rm {flags} {target}");
        prop_assert!(!is_dangerous_removal(&pattern));
    }

    #[test]
    fn classification_is_idempotent(pattern in ".{0,80}", mode in arb_mode()) {
        let first = classify_pattern(&pattern, &mode);
        let second = classify_pattern(&pattern, &mode);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn safe_verdict_has_no_reasons(pattern in ".{0,80}", mode in arb_mode()) {
        let result = classify_pattern(&pattern, &mode);
        prop_assert_eq!(result.verdict.is_risky(), !result.reasons.is_empty());
    }

    #[test]
    fn prefix_health_counts_stay_consistent(model in arb_model(), mode in arb_mode()) {
        let report = evaluate(&model, &mode);
        let mut total = 0;
        for health in report.prefix_health.iter() {
            prop_assert_eq!(health.risky_patterns + health.safe_patterns, health.total_patterns);
            prop_assert_eq!(health.patterns.len() as u32, health.total_patterns);
            prop_assert_eq!(health.risky_list.len() as u32, health.risky_patterns);
            total += health.total_patterns;
        }
        prop_assert_eq!(total, report.data.rules_evaluated);
    }

    #[test]
    fn findings_only_for_files_with_risky_or_non_boolean(model in arb_model(), mode in arb_mode()) {
        let report = evaluate(&model, &mode);
        for finding in &report.findings {
            prop_assert!(!finding.risky_patterns.is_empty() || !finding.non_boolean.is_empty());
        }
        let with_non_boolean = model
            .sources
            .iter()
            .filter(|s| s.rules.entries.iter().any(|e| matches!(e, RuleEntry::NonBoolean { .. })))
            .count();
        prop_assert!(report.findings.len() >= with_non_boolean);
    }

    #[test]
    fn merge_is_commutative_on_counts(a in arb_health_map(), b in arb_health_map()) {
        let ab = a.clone().merge(b.clone());
        let ba = b.merge(a);
        prop_assert_eq!(counts(&ab), counts(&ba));
    }

    #[test]
    fn merge_is_associative(
        a in arb_health_map(),
        b in arb_health_map(),
        c in arb_health_map(),
    ) {
        let left = a.clone().merge(b.clone()).merge(c.clone());
        let right = a.merge(b.merge(c));
        prop_assert_eq!(left, right);
    }
}
