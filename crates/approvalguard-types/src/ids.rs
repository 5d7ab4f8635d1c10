//! Stable identifiers for syntax issues, danger categories, and risk reasons.
//!
//! Syntax issue labels are kebab-case and appear verbatim in diagnostics.
//! Category and reason codes are short snake_case discriminators.

// Syntax issues
pub const ISSUE_UNTERMINATED_SINGLE_QUOTE: &str = "unterminated-single-quote";
pub const ISSUE_UNTERMINATED_DOUBLE_QUOTE: &str = "unterminated-double-quote";
pub const ISSUE_UNTERMINATED_BACKTICK: &str = "unterminated-backtick";
pub const ISSUE_UNBALANCED_PARENS: &str = "unbalanced-parens";
pub const ISSUE_UNBALANCED_BRACKETS: &str = "unbalanced-brackets";
pub const ISSUE_UNBALANCED_BRACES: &str = "unbalanced-braces";
pub const ISSUE_DIRECTORY_TRAVERSAL: &str = "directory-traversal";
pub const ISSUE_NULL_BYTE: &str = "null-byte";
pub const ISSUE_TOO_LONG: &str = "too-long";

// Danger taxonomy categories
pub const CATEGORY_FILESYSTEM: &str = "filesystem";
pub const CATEGORY_PRIVILEGE: &str = "privilege_escalation";
pub const CATEGORY_DESTRUCTIVE: &str = "destructive_system";
pub const CATEGORY_NETWORK_EXEC: &str = "network_exec";
pub const CATEGORY_CODE_EXEC: &str = "code_exec";
pub const CATEGORY_SENSITIVE_PATH: &str = "sensitive_path";
pub const CATEGORY_DATABASE: &str = "database";
pub const CATEGORY_PACKAGE_INSTALL: &str = "package_install";
pub const CATEGORY_GIT: &str = "git";
pub const CATEGORY_SHELL_META: &str = "shell_meta";
pub const CATEGORY_ENVIRONMENT: &str = "environment";

// Risk reasons (why a rule was classified risky)
pub const REASON_INVALID_SYNTAX: &str = "invalid_syntax";
pub const REASON_DANGER_TAXONOMY: &str = "danger_taxonomy";
pub const REASON_DANGEROUS_REMOVAL: &str = "dangerous_removal";
pub const REASON_PREFIX_NOT_ALLOWED: &str = "prefix_not_allowed";

/// Prefix assigned to rules with no leading identifier token.
pub const PREFIX_UNKNOWN: &str = "unknown";

/// Settings key holding the terminal auto-approve rule map.
pub const SETTINGS_KEY_AUTO_APPROVE: &str = "chat.tools.terminal.autoApprove";

/// Literal rule accepted by the allow template regardless of the configured prefixes.
pub const GLOBAL_CLEAN_TOKEN: &str = ":clean";

pub fn all_categories() -> &'static [&'static str] {
    &[
        CATEGORY_FILESYSTEM,
        CATEGORY_PRIVILEGE,
        CATEGORY_DESTRUCTIVE,
        CATEGORY_NETWORK_EXEC,
        CATEGORY_CODE_EXEC,
        CATEGORY_SENSITIVE_PATH,
        CATEGORY_DATABASE,
        CATEGORY_PACKAGE_INSTALL,
        CATEGORY_GIT,
        CATEGORY_SHELL_META,
        CATEGORY_ENVIRONMENT,
    ]
}
