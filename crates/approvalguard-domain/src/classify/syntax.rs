use approvalguard_types::ids;

/// Patterns longer than this (in characters) are rejected outright.
pub const MAX_PATTERN_CHARS: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SyntaxIssue {
    UnterminatedSingleQuote,
    UnterminatedDoubleQuote,
    UnterminatedBacktick,
    UnbalancedParens,
    UnbalancedBrackets,
    UnbalancedBraces,
    DirectoryTraversal,
    NullByte,
    TooLong,
}

impl SyntaxIssue {
    pub fn as_str(self) -> &'static str {
        match self {
            SyntaxIssue::UnterminatedSingleQuote => ids::ISSUE_UNTERMINATED_SINGLE_QUOTE,
            SyntaxIssue::UnterminatedDoubleQuote => ids::ISSUE_UNTERMINATED_DOUBLE_QUOTE,
            SyntaxIssue::UnterminatedBacktick => ids::ISSUE_UNTERMINATED_BACKTICK,
            SyntaxIssue::UnbalancedParens => ids::ISSUE_UNBALANCED_PARENS,
            SyntaxIssue::UnbalancedBrackets => ids::ISSUE_UNBALANCED_BRACKETS,
            SyntaxIssue::UnbalancedBraces => ids::ISSUE_UNBALANCED_BRACES,
            SyntaxIssue::DirectoryTraversal => ids::ISSUE_DIRECTORY_TRAVERSAL,
            SyntaxIssue::NullByte => ids::ISSUE_NULL_BYTE,
            SyntaxIssue::TooLong => ids::ISSUE_TOO_LONG,
        }
    }
}

impl std::fmt::Display for SyntaxIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxReport {
    pub valid: bool,
    /// Every detected issue, in declaration order of [`SyntaxIssue`].
    pub issues: Vec<SyntaxIssue>,
}

#[derive(Default)]
struct Tally {
    single: usize,
    double: usize,
    backtick: usize,
    paren_open: usize,
    paren_close: usize,
    bracket_open: usize,
    bracket_close: usize,
    brace_open: usize,
    brace_close: usize,
}

/// Check a rule pattern for shell-level well-formedness.
///
/// A backslash suppresses the special meaning of the next character. Every unescaped
/// quote is counted; brackets are only counted outside an open quote.
pub fn validate_syntax(pattern: &str) -> SyntaxReport {
    let mut tally = Tally::default();
    let mut open_quote: Option<char> = None;
    let mut escaped = false;

    for ch in pattern.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '\'' | '"' | '`' => {
                match ch {
                    '\'' => tally.single += 1,
                    '"' => tally.double += 1,
                    _ => tally.backtick += 1,
                }
                open_quote = match open_quote {
                    None => Some(ch),
                    Some(q) if q == ch => None,
                    other => other,
                };
            }
            _ if open_quote.is_some() => {}
            '(' => tally.paren_open += 1,
            ')' => tally.paren_close += 1,
            '[' => tally.bracket_open += 1,
            ']' => tally.bracket_close += 1,
            '{' => tally.brace_open += 1,
            '}' => tally.brace_close += 1,
            _ => {}
        }
    }

    let mut issues = Vec::new();
    if tally.single % 2 != 0 {
        issues.push(SyntaxIssue::UnterminatedSingleQuote);
    }
    if tally.double % 2 != 0 {
        issues.push(SyntaxIssue::UnterminatedDoubleQuote);
    }
    if tally.backtick % 2 != 0 {
        issues.push(SyntaxIssue::UnterminatedBacktick);
    }
    if tally.paren_open != tally.paren_close {
        issues.push(SyntaxIssue::UnbalancedParens);
    }
    if tally.bracket_open != tally.bracket_close {
        issues.push(SyntaxIssue::UnbalancedBrackets);
    }
    if tally.brace_open != tally.brace_close {
        issues.push(SyntaxIssue::UnbalancedBraces);
    }
    if pattern.contains("/../") || pattern.contains("\\..\\") {
        issues.push(SyntaxIssue::DirectoryTraversal);
    }
    if pattern.contains('\0') {
        issues.push(SyntaxIssue::NullByte);
    }
    if pattern.chars().count() > MAX_PATTERN_CHARS {
        issues.push(SyntaxIssue::TooLong);
    }

    SyntaxReport {
        valid: issues.is_empty(),
        issues,
    }
}
