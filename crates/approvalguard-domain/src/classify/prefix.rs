use crate::policy::PrefixMode;
use approvalguard_types::ids;
use regex::Regex;
use std::sync::LazyLock;

static PREFIX_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^:([A-Za-z0-9_]+)(?:[-:\s]|$)").expect("prefix token regex is valid")
});

/// Grouping token of a rule: the identifier after the leading `:`, up to the first
/// hyphen or separator. Rules without one group under `"unknown"`.
pub fn extract_prefix(pattern: &str) -> &str {
    PREFIX_TOKEN
        .captures(pattern)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(ids::PREFIX_UNKNOWN)
}

/// Anchored template `:<prefix>-<name>[:<name>]` over the escaped prefixes.
pub fn build_allow_template(prefixes: &[String]) -> Result<Regex, regex::Error> {
    let alternatives = prefixes
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"^:(?:{alternatives})-[A-Za-z0-9_-]+(?::[A-Za-z0-9_-]+)?$"
    ))
}

/// Whether `pattern` conforms to the allowlist. Always true in auto-scan mode.
pub fn matches_allowed_prefix(pattern: &str, mode: &PrefixMode) -> bool {
    match mode {
        PrefixMode::AutoScan => true,
        PrefixMode::ExplicitAllowlist(allowed) => {
            pattern == ids::GLOBAL_CLEAN_TOKEN || allowed.template().is_match(pattern)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allow(prefixes: &[&str]) -> PrefixMode {
        PrefixMode::from_prefixes(prefixes.iter().copied()).expect("valid prefixes")
    }

    #[test]
    fn extracts_leading_token() {
        assert_eq!(extract_prefix(":tachyon-build"), "tachyon");
        assert_eq!(extract_prefix(":bad:rm -rf /"), "bad");
        assert_eq!(extract_prefix(":clean"), "clean");
        assert_eq!(extract_prefix(":web_app-dev"), "web_app");
    }

    #[test]
    fn missing_token_is_unknown() {
        assert_eq!(extract_prefix("npm test"), "unknown");
        assert_eq!(extract_prefix(""), "unknown");
        assert_eq!(extract_prefix(":-x"), "unknown");
        assert_eq!(extract_prefix(":a.b"), "unknown");
    }

    #[test]
    fn template_accepts_prefix_name_and_optional_segment() {
        let mode = allow(&["tachyon"]);
        assert!(matches_allowed_prefix(":tachyon-build", &mode));
        assert!(matches_allowed_prefix(":tachyon-test:unit", &mode));
        assert!(matches_allowed_prefix(":tachyon-build_all-2", &mode));
        assert!(matches_allowed_prefix(":clean", &mode));
    }

    #[test]
    fn template_rejects_everything_else() {
        let mode = allow(&["tachyon"]);
        assert!(!matches_allowed_prefix(":unknown-task", &mode));
        assert!(!matches_allowed_prefix("tachyon-build", &mode));
        assert!(!matches_allowed_prefix(":tachyon", &mode));
        assert!(!matches_allowed_prefix(":tachyon-build && rm -rf /", &mode));
        assert!(!matches_allowed_prefix(":tachyon-a:b:c", &mode));
        assert!(!matches_allowed_prefix(":cleanup", &mode));
    }

    #[test]
    fn prefixes_are_escaped() {
        let mode = allow(&["a.b"]);
        assert!(matches_allowed_prefix(":a.b-task", &mode));
        assert!(!matches_allowed_prefix(":axb-task", &mode));

        let mode = allow(&["c++"]);
        assert!(matches_allowed_prefix(":c++-build", &mode));
    }

    #[test]
    fn several_prefixes() {
        let mode = allow(&["web", "api"]);
        assert!(matches_allowed_prefix(":web-dev", &mode));
        assert!(matches_allowed_prefix(":api-test", &mode));
        assert!(!matches_allowed_prefix(":db-migrate", &mode));
    }

    #[test]
    fn auto_scan_allows_anything() {
        assert!(matches_allowed_prefix("anything at all", &PrefixMode::AutoScan));
    }
}
