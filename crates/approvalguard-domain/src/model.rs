use approvalguard_types::SourcePath;

/// One auto-approve rule with a boolean value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub pattern: String,
    pub enabled: bool,
}

impl Rule {
    pub fn new(pattern: impl Into<String>, enabled: bool) -> Self {
        Self {
            pattern: pattern.into(),
            enabled,
        }
    }
}

/// An entry of the auto-approve map, in file order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleEntry {
    Flag(Rule),
    /// The value was not a boolean (string, object, null, ...). Reported, never classified.
    NonBoolean { pattern: String },
}

impl RuleEntry {
    pub fn pattern(&self) -> &str {
        match self {
            RuleEntry::Flag(rule) => &rule.pattern,
            RuleEntry::NonBoolean { pattern } => pattern,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleMap {
    pub entries: Vec<RuleEntry>,
}

impl RuleMap {
    pub fn new(entries: Vec<RuleEntry>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A settings file that parsed successfully.
#[derive(Clone, Debug, Default)]
pub struct SettingsSource {
    pub path: SourcePath,
    pub rules: RuleMap,
}

/// Everything one audit run looks at.
#[derive(Clone, Debug, Default)]
pub struct AuditModel {
    /// Sources in discovery order; findings keep this order.
    pub sources: Vec<SettingsSource>,
}
