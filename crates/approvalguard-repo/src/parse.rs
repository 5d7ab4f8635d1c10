use approvalguard_domain::model::{Rule, RuleEntry, RuleMap};
use approvalguard_types::ids::SETTINGS_KEY_AUTO_APPROVE;
use camino::Utf8PathBuf;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("read {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Json5(#[from] json5::Error),
    #[error("settings document is not a JSON object")]
    NotAnObject,
}

/// Parse an editor settings document into its auto-approve rules, in document order.
///
/// The document is read as JSON5, which covers the comments and trailing commas editors
/// accept in settings files.
///
/// A missing auto-approve key, or one whose value is not an object, yields no rules.
pub fn parse_settings_text(text: &str) -> Result<RuleMap, ParseError> {
    let doc: Value = json5::from_str(text)?;
    let Value::Object(doc) = doc else {
        return Err(ParseError::NotAnObject);
    };

    let Some(Value::Object(rules)) = doc.get(SETTINGS_KEY_AUTO_APPROVE) else {
        return Ok(RuleMap::default());
    };

    let entries = rules
        .iter()
        .map(|(pattern, value)| match value {
            Value::Bool(enabled) => RuleEntry::Flag(Rule::new(pattern.as_str(), *enabled)),
            _ => RuleEntry::NonBoolean {
                pattern: pattern.clone(),
            },
        })
        .collect();

    Ok(RuleMap::new(entries))
}
