use approvalguard_types::ids;
use regex::Regex;
use std::sync::LazyLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Filesystem,
    PrivilegeEscalation,
    DestructiveSystem,
    NetworkExec,
    CodeExec,
    SensitivePath,
    Database,
    PackageInstall,
    Git,
    ShellMeta,
    Environment,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Filesystem => ids::CATEGORY_FILESYSTEM,
            Category::PrivilegeEscalation => ids::CATEGORY_PRIVILEGE,
            Category::DestructiveSystem => ids::CATEGORY_DESTRUCTIVE,
            Category::NetworkExec => ids::CATEGORY_NETWORK_EXEC,
            Category::CodeExec => ids::CATEGORY_CODE_EXEC,
            Category::SensitivePath => ids::CATEGORY_SENSITIVE_PATH,
            Category::Database => ids::CATEGORY_DATABASE,
            Category::PackageInstall => ids::CATEGORY_PACKAGE_INSTALL,
            Category::Git => ids::CATEGORY_GIT,
            Category::ShellMeta => ids::CATEGORY_SHELL_META,
            Category::Environment => ids::CATEGORY_ENVIRONMENT,
        }
    }
}

/// One entry of the danger taxonomy.
#[derive(Debug)]
pub struct DangerPattern {
    pub category: Category,
    pub label: &'static str,
    regex: Regex,
}

impl DangerPattern {
    pub fn is_match(&self, pattern: &str) -> bool {
        self.regex.is_match(pattern)
    }
}

const TABLE: &[(Category, &str, &str)] = &[
    // Filesystem traversal and glob danger
    (Category::Filesystem, "recursive-glob", r"\*\*"),
    (Category::Filesystem, "parent-directory", r"\.\."),
    (Category::Filesystem, "absolute-path", r#"(?:^|[\s='"])(?:/|[A-Za-z]:[\\/])"#),
    (Category::Filesystem, "home-relative-path", r#"(?:^|[\s=:'"])~|\$\{?HOME\b"#),
    (Category::Filesystem, "double-slash", r"//"),
    // `[^\w-]` anchors keep hyphenated task-name tails like `:app-system` out.
    // Privilege escalation
    (Category::PrivilegeEscalation, "sudo", r"\b(?:sudo|doas)\b"),
    (Category::PrivilegeEscalation, "su", r"(?:^|[^\w-])su(?:\s|$)"),
    (
        Category::PrivilegeEscalation,
        "chmod-777",
        r"\bchmod\s+(?:-[A-Za-z]+\s+)*(?:0?777|a\+rwx)",
    ),
    (
        Category::PrivilegeEscalation,
        "chown-root",
        r"\bchown\s+(?:-[A-Za-z]+\s+)*root\b",
    ),
    // Destructive system operations
    (
        Category::DestructiveSystem,
        "disk-format",
        r"\b(?:mkfs(?:\.[a-z0-9]+)?|fdisk|parted|wipefs)\b|\bdd\s+if=|\bformat\s+[A-Za-z]:",
    ),
    (
        Category::DestructiveSystem,
        "shutdown",
        r"(?:^|[^\w-])(?:shutdown|reboot|halt|poweroff)\b",
    ),
    (
        Category::DestructiveSystem,
        "force-kill",
        r"\bkill\s+-(?:9|KILL|SIGKILL)\b|\b(?:pkill|killall)\b",
    ),
    // Network content executed by a shell, remote shells
    (
        Category::NetworkExec,
        "pipe-to-shell",
        r"\b(?:curl|wget)\b[^|]*\|\s*(?:sudo\s+)?(?:ba|z|da|k|fi)?sh\b",
    ),
    (Category::NetworkExec, "remote-shell", r"\b(?:ssh|scp|rsync|sftp)\b"),
    // Code-execution primitives
    (
        Category::CodeExec,
        "exec-primitive",
        r"(?:^|[^\w-])(?:eval|exec|system|subprocess|spawn)\b",
    ),
    (
        Category::CodeExec,
        "inline-interpreter",
        r"\b(?:python[23]?|node|deno|perl|ruby|php|bash|sh|zsh|pwsh|powershell)\s+-(?:e|c|Command)\b",
    ),
    // Sensitive paths
    (Category::SensitivePath, "ssh-directory", r"~/\.ssh\b|\.ssh/"),
    (
        Category::SensitivePath,
        "system-credentials",
        r"/etc/(?:passwd|shadow|sudoers|group)\b",
    ),
    (
        Category::SensitivePath,
        "system-directories",
        r#"(?:^|[\s='"])/(?:root|home|var/log|proc|sys)(?:/|\b)"#,
    ),
    // Database clients
    (
        Category::Database,
        "database-cli",
        r"\b(?:mysql|psql|mongo|mongosh|redis-cli|sqlite3|sqlcmd|pg_dump|mysqldump)\b",
    ),
    // Package installs with global or system-wide reach
    (
        Category::PackageInstall,
        "global-install",
        r"\b(?:npm|pnpm|bun)\s+(?:install|i|add)\b.*\s(?:-g|--global)\b",
    ),
    (Category::PackageInstall, "yarn-global", r"\byarn\s+global\s+add\b"),
    (
        Category::PackageInstall,
        "pip-system",
        r"\bpip3?\s+install\b.*\s--(?:user|break-system-packages)\b",
    ),
    // Git history and working-tree destruction
    (
        Category::Git,
        "force-push",
        r"\bgit\s+push\b.*(?:\s--force(?:-with-lease)?\b|\s-f\b|\s\+\S)",
    ),
    (Category::Git, "hard-reset", r"\bgit\s+reset\s+(?:.*\s)?--hard\b"),
    (Category::Git, "forced-clean", r"\bgit\s+clean\s+(?:.*\s)?-[A-Za-z]*f"),
    // Shell metacharacters
    (Category::ShellMeta, "backtick", r"`"),
    (Category::ShellMeta, "command-substitution", r"\$\("),
    (Category::ShellMeta, "output-suppression", r">\s*/dev/null|&>|2>&1"),
    (Category::ShellMeta, "trailing-operator", r"(?:&&|\|\||[&|;])\s*$"),
    // Environment and loader manipulation
    (
        Category::Environment,
        "library-path",
        r"\b(?:LD_PRELOAD|LD_LIBRARY_PATH|DYLD_[A-Z_]+|PATH|PYTHONPATH|NODE_OPTIONS)\s*=",
    ),
    (
        Category::Environment,
        "export",
        r"\bexport\s+[A-Za-z_][A-Za-z0-9_]*=",
    ),
];

static DANGER_TAXONOMY: LazyLock<Vec<DangerPattern>> = LazyLock::new(|| {
    TABLE
        .iter()
        .map(|&(category, label, source)| DangerPattern {
            category,
            label,
            regex: Regex::new(source).expect("danger taxonomy regexes are static and valid"),
        })
        .collect()
});

/// The full ordered taxonomy.
pub fn danger_taxonomy() -> &'static [DangerPattern] {
    &DANGER_TAXONOMY
}

/// Every taxonomy entry matching `pattern`, in table order.
pub fn taxonomy_matches(pattern: &str) -> Vec<&'static DangerPattern> {
    danger_taxonomy()
        .iter()
        .filter(|entry| entry.is_match(pattern))
        .collect()
}

pub fn matches_danger_taxonomy(pattern: &str) -> bool {
    danger_taxonomy().iter().any(|entry| entry.is_match(pattern))
}
