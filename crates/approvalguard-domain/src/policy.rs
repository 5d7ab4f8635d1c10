use crate::classify::build_allow_template;
use regex::Regex;

/// How rules are judged against operator-trusted prefixes.
#[derive(Clone, Debug, PartialEq)]
pub enum PrefixMode {
    /// No prefixes supplied: the allow check is skipped and prefix health carries the signal.
    AutoScan,
    /// Rules must follow the `:<prefix>-<name>` template for one of these prefixes.
    ExplicitAllowlist(AllowedPrefixes),
}

impl PrefixMode {
    /// Build the mode from operator input. Blank entries are dropped; nothing left means
    /// [`PrefixMode::AutoScan`].
    pub fn from_prefixes<I, S>(prefixes: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let prefixes: Vec<String> = prefixes
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        if prefixes.is_empty() {
            return Ok(PrefixMode::AutoScan);
        }
        Ok(PrefixMode::ExplicitAllowlist(AllowedPrefixes::new(prefixes)?))
    }

    pub fn prefixes(&self) -> &[String] {
        match self {
            PrefixMode::AutoScan => &[],
            PrefixMode::ExplicitAllowlist(allowed) => allowed.prefixes(),
        }
    }

    pub fn is_auto_scan(&self) -> bool {
        matches!(self, PrefixMode::AutoScan)
    }
}

/// A non-empty prefix allowlist with its compiled template.
#[derive(Clone, Debug)]
pub struct AllowedPrefixes {
    prefixes: Vec<String>,
    template: Regex,
}

impl AllowedPrefixes {
    pub fn new(prefixes: Vec<String>) -> Result<Self, regex::Error> {
        let template = build_allow_template(&prefixes)?;
        Ok(Self { prefixes, template })
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn template(&self) -> &Regex {
        &self.template
    }
}

impl PartialEq for AllowedPrefixes {
    fn eq(&self, other: &Self) -> bool {
        self.prefixes == other.prefixes
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub mode: PrefixMode,
    pub fail_on_risk: bool,
    /// Report prefix health even when an explicit allowlist is in effect.
    pub scan_prefixes: bool,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            mode: PrefixMode::AutoScan,
            fail_on_risk: false,
            scan_prefixes: false,
        }
    }
}

impl EffectiveConfig {
    pub fn reports_prefix_health(&self) -> bool {
        self.scan_prefixes || self.mode.is_auto_scan()
    }
}
