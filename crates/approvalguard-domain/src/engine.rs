use crate::classify::{classify, extract_prefix};
use crate::health::PrefixHealthMap;
use crate::model::{AuditModel, RuleEntry, RuleMap};
use crate::policy::PrefixMode;
use crate::report::{DomainReport, FileResult};
use approvalguard_types::{AuditData, Finding, SourcePath};
use tracing::trace;

/// Classify the enabled rules of one file and record them in `health`.
///
/// Non-boolean entries are collected but never classified. Disabled rules are skipped
/// entirely: they count toward neither the file's findings nor any prefix total.
pub fn ingest(
    file: &SourcePath,
    rules: &RuleMap,
    mode: &PrefixMode,
    health: &mut PrefixHealthMap,
) -> FileResult {
    let mut result = FileResult {
        file: file.clone(),
        ..FileResult::default()
    };

    for entry in &rules.entries {
        match entry {
            RuleEntry::NonBoolean { pattern } => result.non_boolean.push(pattern.clone()),
            RuleEntry::Flag(rule) if !rule.enabled => result.disabled += 1,
            RuleEntry::Flag(rule) => {
                let prefix = extract_prefix(&rule.pattern);
                let classification = classify(rule, mode);
                let risky = classification.verdict.is_risky();
                trace!(
                    file = %file,
                    pattern = %rule.pattern,
                    prefix,
                    reasons = ?classification.reasons,
                    "classified rule"
                );

                health.record(prefix, &rule.pattern, risky);
                result.evaluated += 1;
                if risky {
                    result.risky.push(rule.pattern.clone());
                }
            }
        }
    }

    result
}

/// One finding per file with risky or non-boolean entries, in file order.
pub fn aggregate<'a, I>(results: I) -> Vec<Finding>
where
    I: IntoIterator<Item = &'a FileResult>,
{
    results
        .into_iter()
        .filter(|r| r.has_finding())
        .map(|r| Finding {
            file: r.file.clone(),
            risky_patterns: r.risky.clone(),
            non_boolean: r.non_boolean.clone(),
        })
        .collect()
}

pub fn evaluate(model: &AuditModel, mode: &PrefixMode) -> DomainReport {
    let mut prefix_health = PrefixHealthMap::new();
    let results: Vec<FileResult> = model
        .sources
        .iter()
        .map(|source| ingest(&source.path, &source.rules, mode, &mut prefix_health))
        .collect();

    let data = AuditData {
        files_scanned: results.len() as u32,
        rules_evaluated: results.iter().map(|r| r.evaluated).sum(),
        rules_disabled: results.iter().map(|r| r.disabled).sum(),
    };

    DomainReport {
        findings: aggregate(&results),
        prefix_health,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{allowlist, flag, model, non_boolean, rules, source};

    #[test]
    fn scenario_allowlisted_rules_produce_no_finding() {
        let model = model(vec![source(
            ".vscode/settings.json",
            vec![flag(":tachyon-build", true), flag(":clean", true)],
        )]);

        let report = evaluate(&model, &allowlist(&["tachyon"]));
        assert!(report.findings.is_empty());
        assert_eq!(report.data.rules_evaluated, 2);
    }

    #[test]
    fn scenario_rule_outside_allowlist_is_a_finding() {
        let model = model(vec![source(
            ".vscode/settings.json",
            vec![flag(":tachyon-build", true), flag(":unknown-task", true)],
        )]);

        let report = evaluate(&model, &allowlist(&["tachyon"]));
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].risky_patterns, vec![":unknown-task"]);
        assert!(report.findings[0].non_boolean.is_empty());
    }

    #[test]
    fn scenario_non_boolean_entry_alone_is_a_finding() {
        let model = model(vec![source(
            ".vscode/settings.json",
            vec![flag(":safe-task", true), non_boolean(":non-boolean-task")],
        )]);

        let report = evaluate(&model, &allowlist(&["safe"]));
        assert_eq!(report.findings.len(), 1);
        assert!(report.findings[0].risky_patterns.is_empty());
        assert_eq!(report.findings[0].non_boolean, vec![":non-boolean-task"]);
    }

    #[test]
    fn scenario_destructive_prefix_is_fully_risky() {
        let model = model(vec![source(
            ".vscode/settings.json",
            vec![flag(":bad:rm -rf /", true), flag(":bad:rm -rf *", true)],
        )]);

        let report = evaluate(&model, &PrefixMode::AutoScan);
        let bad = report.prefix_health.get("bad").expect("bad prefix");
        assert_eq!(bad.safe_patterns, 0);
        assert_eq!(bad.total_patterns, 2);
        assert_eq!(bad.risk_percent(), 100);
    }

    #[test]
    fn disabled_rules_are_excluded_from_every_tally() {
        let mut health = PrefixHealthMap::new();
        let result = ingest(
            &SourcePath::new("a.json"),
            &rules(vec![flag(":bad:rm -rf /", false), flag(":web-dev", true)]),
            &PrefixMode::AutoScan,
            &mut health,
        );

        assert!(result.risky.is_empty());
        assert_eq!(result.disabled, 1);
        assert_eq!(result.evaluated, 1);
        assert!(health.get("bad").is_none());
        assert_eq!(health.get("web").expect("web").total_patterns, 1);
    }

    #[test]
    fn non_boolean_entries_do_not_touch_prefix_health() {
        let mut health = PrefixHealthMap::new();
        ingest(
            &SourcePath::new("a.json"),
            &rules(vec![non_boolean(":web-dev")]),
            &PrefixMode::AutoScan,
            &mut health,
        );
        assert!(health.is_empty());
    }

    #[test]
    fn empty_rule_map_produces_no_finding() {
        let model = model(vec![source("a.json", Vec::new())]);
        let report = evaluate(&model, &allowlist(&["x"]));
        assert!(report.findings.is_empty());
        assert_eq!(report.data.files_scanned, 1);
    }

    #[test]
    fn findings_keep_file_order_and_health_spans_files() {
        let model = model(vec![
            source("z/.vscode/settings.json", vec![flag(":web-x &&", true)]),
            source("a/.vscode/settings.json", vec![flag(":web-dev", true)]),
            source("m/.vscode/settings.json", vec![flag("sudo ls", true)]),
        ]);

        let report = evaluate(&model, &PrefixMode::AutoScan);
        let files: Vec<&str> = report.findings.iter().map(|f| f.file.as_str()).collect();
        assert_eq!(
            files,
            vec!["z/.vscode/settings.json", "m/.vscode/settings.json"]
        );

        let web = report.prefix_health.get("web").expect("web");
        assert_eq!(web.total_patterns, 2);
        assert_eq!(web.risky_list, vec![":web-x &&"]);
        assert_eq!(
            report.prefix_health.get("unknown").expect("unknown").risky_patterns,
            1
        );
    }

    #[test]
    fn rule_order_within_a_file_is_preserved() {
        let model = model(vec![source(
            "a.json",
            vec![flag(":z-1 ;", true), flag(":a-1 ;", true)],
        )]);
        let report = evaluate(&model, &PrefixMode::AutoScan);
        assert_eq!(report.findings[0].risky_patterns, vec![":z-1 ;", ":a-1 ;"]);
    }
}
