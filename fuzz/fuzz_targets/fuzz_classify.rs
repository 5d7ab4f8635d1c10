//! Fuzz target for rule classification.
//!
//! Goal: Classification should **never panic** on any pattern or prefix list,
//! and a safe verdict never carries reasons.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_classify
//! ```

#![no_main]

use approvalguard_domain::classify::classify_pattern;
use approvalguard_domain::policy::PrefixMode;
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct ClassifyInput {
    pattern: String,
    /// Allowed prefixes; empty means auto-scan.
    prefixes: Vec<String>,
}

fuzz_target!(|input: ClassifyInput| {
    if input.pattern.len() > 4096 || input.prefixes.len() > 16 {
        return;
    }

    let Ok(mode) = PrefixMode::from_prefixes(input.prefixes.iter().filter(|p| p.len() <= 64))
    else {
        return;
    };

    let result = classify_pattern(&input.pattern, &mode);
    assert_eq!(result.verdict.is_risky(), !result.reasons.is_empty());
});
