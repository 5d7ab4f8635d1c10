use crate::model::{AuditModel, Rule, RuleEntry, RuleMap, SettingsSource};
use crate::policy::PrefixMode;
use approvalguard_types::SourcePath;

pub fn flag(pattern: &str, enabled: bool) -> RuleEntry {
    RuleEntry::Flag(Rule::new(pattern, enabled))
}

pub fn non_boolean(pattern: &str) -> RuleEntry {
    RuleEntry::NonBoolean {
        pattern: pattern.to_string(),
    }
}

pub fn rules(entries: Vec<RuleEntry>) -> RuleMap {
    RuleMap::new(entries)
}

pub fn source(path: &str, entries: Vec<RuleEntry>) -> SettingsSource {
    SettingsSource {
        path: SourcePath::new(path),
        rules: RuleMap::new(entries),
    }
}

pub fn model(sources: Vec<SettingsSource>) -> AuditModel {
    AuditModel { sources }
}

pub fn allowlist(prefixes: &[&str]) -> PrefixMode {
    PrefixMode::from_prefixes(prefixes.iter().copied()).expect("test prefixes are valid")
}
