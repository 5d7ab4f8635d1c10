use regex::Regex;
use std::sync::LazyLock;

/// Build-artifact directories that are routinely wiped by cleanup tasks.
pub const SAFE_REMOVAL_TARGETS: &[&str] = &[
    "node_modules",
    "build",
    "dist",
    ".next",
    "out",
    ".cache",
    ".tmp",
    "temp",
    "tmp",
];

// `rm` as a command word, capturing its arguments up to the next shell separator.
static RM_INVOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[\s;&|:(])rm\s+([^;&|)]*)").expect("rm invocation regex is valid")
});

/// True when the pattern runs a recursive-force delete whose target is not a known
/// build-artifact directory.
///
/// Wildcards, `..`, absolute and home-relative targets are always dangerous. A delete with
/// no target at all is dangerous too.
pub fn is_dangerous_removal(pattern: &str) -> bool {
    RM_INVOCATION
        .captures_iter(pattern)
        .filter_map(|caps| caps.get(1))
        .any(|args| invocation_is_dangerous(args.as_str()))
}

// `rm` accepts options anywhere before a literal `--`, so flags after a target still apply.
fn invocation_is_dangerous(args: &str) -> bool {
    let mut recursive = false;
    let mut force = false;
    let mut targets: Vec<&str> = Vec::new();
    let mut options_done = false;

    for token in args.split_whitespace() {
        if options_done {
            targets.push(token);
            continue;
        }
        match token {
            "--" => options_done = true,
            "--recursive" => recursive = true,
            "--force" => force = true,
            long if long.starts_with("--") => {}
            short if short.len() > 1 && short.starts_with('-') => {
                for ch in short[1..].chars() {
                    match ch {
                        'r' | 'R' => recursive = true,
                        'f' => force = true,
                        _ => {}
                    }
                }
            }
            operand => targets.push(operand),
        }
    }

    if !(recursive && force) {
        return false;
    }
    if targets.is_empty() {
        return true;
    }
    if targets.iter().any(|t| is_always_dangerous_target(t)) {
        return true;
    }
    !targets.iter().all(|t| is_safe_target(t))
}

fn is_always_dangerous_target(target: &str) -> bool {
    let t = unquote(target);
    t.contains('*')
        || t.contains('?')
        || t.contains("..")
        || t.starts_with('/')
        || t.starts_with('\\')
        || has_drive_prefix(t)
        || t.starts_with('~')
        || t.contains("$HOME")
        || t.contains("${HOME}")
}

fn is_safe_target(target: &str) -> bool {
    let mut t = unquote(target);
    while let Some(rest) = t.strip_prefix("./") {
        t = rest;
    }
    let t = t.trim_end_matches('/');
    SAFE_REMOVAL_TARGETS.contains(&t)
}

fn unquote(token: &str) -> &str {
    token.trim_matches(|c| c == '\'' || c == '"')
}

fn has_drive_prefix(t: &str) -> bool {
    let bytes = t.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
