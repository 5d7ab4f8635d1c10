use crate::health::PrefixHealthMap;
use approvalguard_types::{AuditData, Finding, SourcePath};

/// Outcome of ingesting one settings file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileResult {
    pub file: SourcePath,
    pub risky: Vec<String>,
    pub non_boolean: Vec<String>,
    /// Enabled rules that were classified.
    pub evaluated: u32,
    /// Rules with value `false`; skipped entirely.
    pub disabled: u32,
}

impl FileResult {
    pub fn has_finding(&self) -> bool {
        !self.risky.is_empty() || !self.non_boolean.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct DomainReport {
    pub findings: Vec<Finding>,
    pub prefix_health: PrefixHealthMap,
    pub data: AuditData,
}
