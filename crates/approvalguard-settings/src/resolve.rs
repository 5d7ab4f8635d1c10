use crate::model::ApprovalguardConfigV1;
use anyhow::Context;
use approvalguard_domain::policy::{EffectiveConfig, PrefixMode};

/// Directory names never descended into during discovery.
pub const DEFAULT_SKIP_DIRS: &[&str] = &["node_modules", ".git", "target"];

/// Values supplied on the command line. `None` defers to the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub allow_prefixes: Option<Vec<String>>,
    pub fail_on_risk: Option<bool>,
    pub scan_prefixes: Option<bool>,
    pub include_user_settings: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub include_user_settings: bool,
    pub skip_dirs: Vec<String>,
}

pub fn resolve_config(
    cfg: ApprovalguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let prefixes = overrides
        .allow_prefixes
        .or(cfg.allow_prefixes)
        .unwrap_or_default();
    let mode = PrefixMode::from_prefixes(&prefixes)
        .with_context(|| format!("invalid allow prefixes: {}", prefixes.join(",")))?;

    let effective = EffectiveConfig {
        mode,
        fail_on_risk: overrides.fail_on_risk.or(cfg.fail_on_risk).unwrap_or(false),
        scan_prefixes: overrides
            .scan_prefixes
            .or(cfg.scan_prefixes)
            .unwrap_or(false),
    };

    let mut skip_dirs: Vec<String> = DEFAULT_SKIP_DIRS.iter().map(|d| d.to_string()).collect();
    for dir in cfg.skip_dirs {
        let dir = dir.trim().to_string();
        if dir.is_empty() || dir.contains('/') || dir.contains('\\') {
            anyhow::bail!("skip_dirs entries must be plain directory names: {dir:?}");
        }
        if !skip_dirs.contains(&dir) {
            skip_dirs.push(dir);
        }
    }

    Ok(ResolvedConfig {
        effective,
        include_user_settings: overrides
            .include_user_settings
            .or(cfg.include_user_settings)
            .unwrap_or(true),
        skip_dirs,
    })
}
