use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `approvalguard.toml` schema v1.
///
/// Every field is optional; anything left unset falls back to the CLI or the defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ApprovalguardConfigV1 {
    /// Optional schema string for tooling (`approvalguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Trusted rule prefixes. Unset or empty audits in auto-scan mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_prefixes: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on_risk: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_prefixes: Option<bool>,

    /// Also audit the editor's user-level settings file (default: true).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_user_settings: Option<bool>,

    /// Extra directory names not descended into during discovery.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skip_dirs: Vec<String>,
}
