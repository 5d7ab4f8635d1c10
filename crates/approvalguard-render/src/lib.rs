//! Rendering for terminal text and JSON.

#![forbid(unsafe_code)]

mod palette;
mod text;

pub use palette::{AnsiPalette, Palette, PlainPalette};
pub use text::{MAX_RISKY_EXAMPLES, TextOptions, render_text};

use approvalguard_types::AuditReport;

/// The report as one pretty-printed JSON document.
pub fn render_json(report: &AuditReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
