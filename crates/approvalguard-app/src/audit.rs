//! The `audit` use case: resolve config, load settings files, classify, report.

use anyhow::Context;
use approvalguard_repo::SourceInput;
use approvalguard_settings::{ApprovalguardConfigV1, Overrides, ResolvedConfig};
use approvalguard_types::{AuditReport, SCHEMA_REPORT_V1, ToolMeta};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

pub const EXIT_OK: i32 = 0;
/// Findings exist and fail-on-risk was requested.
pub const EXIT_RISK: i32 = 1;
/// The run could not complete (bad config, unreadable root).
pub const EXIT_ERROR: i32 = 2;

#[derive(Clone, Debug)]
pub struct AuditInput<'a> {
    /// Directory walked for `.vscode/settings.json`.
    pub root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    pub overrides: Overrides,
    /// Audit only this file instead of discovering.
    pub settings_file: Option<Utf8PathBuf>,
}

#[derive(Clone, Debug)]
pub struct AuditOutput {
    pub report: AuditReport,
    pub resolved: ResolvedConfig,
    pub exit_code: i32,
}

pub fn run_audit(input: AuditInput<'_>) -> anyhow::Result<AuditOutput> {
    let cfg = if input.config_text.trim().is_empty() {
        ApprovalguardConfigV1::default()
    } else {
        approvalguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved =
        approvalguard_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    let source_input = match input.settings_file {
        Some(path) => SourceInput::Explicit(path),
        None => SourceInput::Discover {
            root: input.root.to_owned(),
            skip_dirs: resolved.skip_dirs.clone(),
            include_user_settings: resolved.include_user_settings,
        },
    };
    let model = approvalguard_repo::load_model(&source_input).context("load settings")?;
    debug!(sources = model.sources.len(), "settings loaded");

    let mode = &resolved.effective.mode;
    let domain = approvalguard_domain::evaluate(&model, mode);

    let report = AuditReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "approvalguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        findings: domain.findings,
        prefixes: mode.prefixes().to_vec(),
        prefix_health: domain.prefix_health.into_inner(),
        data: domain.data,
    };
    let exit_code = audit_exit_code(&report, resolved.effective.fail_on_risk);

    Ok(AuditOutput {
        report,
        resolved,
        exit_code,
    })
}

/// 1 when there are findings and the caller asked to fail on them, else 0.
pub fn audit_exit_code(report: &AuditReport, fail_on_risk: bool) -> i32 {
    if fail_on_risk && report.has_findings() {
        EXIT_RISK
    } else {
        EXIT_OK
    }
}
