//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::ApprovalguardConfigV1;
pub use resolve::{DEFAULT_SKIP_DIRS, Overrides, ResolvedConfig};

/// Parse `approvalguard.toml` into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ApprovalguardConfigV1> {
    let cfg: ApprovalguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config: CLI overrides win over the file, the file over defaults.
pub fn resolve_config(
    cfg: ApprovalguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
