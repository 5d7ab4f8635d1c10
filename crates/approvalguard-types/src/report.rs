use crate::SourcePath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable schema identifier for approvalguard reports.
pub const SCHEMA_REPORT_V1: &str = "approvalguard.report.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Risky and non-boolean rules of one settings file.
///
/// Only emitted for files with at least one entry in either list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub file: SourcePath,
    pub risky_patterns: Vec<String>,
    /// Entries whose value is not a boolean; these are never classified.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub non_boolean: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Mixed,
    Critical,
}

impl HealthStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Mixed => "mixed",
            HealthStatus::Critical => "critical",
        }
    }
}

/// Risk statistics for every evaluated rule sharing a prefix.
///
/// Invariant: `total_patterns == risky_patterns + safe_patterns` and
/// `patterns.len() == total_patterns`. Only `record` mutates the counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrefixHealth {
    pub prefix: String,
    pub total_patterns: u32,
    pub risky_patterns: u32,
    pub safe_patterns: u32,
    pub patterns: Vec<String>,
    pub risky_list: Vec<String>,
}

impl PrefixHealth {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, pattern: &str, risky: bool) {
        self.total_patterns += 1;
        self.patterns.push(pattern.to_string());
        if risky {
            self.risky_patterns += 1;
            self.risky_list.push(pattern.to_string());
        } else {
            self.safe_patterns += 1;
        }
    }

    /// Fold `other` into `self`. Counts add, lists append.
    pub fn absorb(&mut self, other: PrefixHealth) {
        self.total_patterns += other.total_patterns;
        self.risky_patterns += other.risky_patterns;
        self.safe_patterns += other.safe_patterns;
        self.patterns.extend(other.patterns);
        self.risky_list.extend(other.risky_list);
    }

    /// `round(risky / total * 100)`; 0 for a prefix with no patterns.
    pub fn risk_percent(&self) -> u32 {
        if self.total_patterns == 0 {
            return 0;
        }
        (f64::from(self.risky_patterns) / f64::from(self.total_patterns) * 100.0).round() as u32
    }

    pub fn status(&self) -> HealthStatus {
        if self.risky_patterns == 0 {
            HealthStatus::Healthy
        } else if self.safe_patterns == 0 {
            HealthStatus::Critical
        } else {
            HealthStatus::Mixed
        }
    }
}

/// Summary counters for one audit run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditData {
    pub files_scanned: u32,
    pub rules_evaluated: u32,
    pub rules_disabled: u32,
}

/// The machine-readable audit report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub schema: String,
    pub tool: ToolMeta,
    pub findings: Vec<Finding>,
    /// Allowed prefixes in effect; empty when auditing in auto-scan mode.
    pub prefixes: Vec<String>,
    pub prefix_health: BTreeMap<String, PrefixHealth>,
    pub data: AuditData,
}

impl AuditReport {
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }
}
