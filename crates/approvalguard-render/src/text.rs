use crate::Palette;
use approvalguard_types::{AuditReport, HealthStatus, PrefixHealth};

/// Risky examples listed per prefix before the list is cut short.
pub const MAX_RISKY_EXAMPLES: usize = 3;

#[derive(Clone, Copy, Debug, Default)]
pub struct TextOptions {
    /// Drop the success line, the summary and prefix health.
    ///
    /// Findings are printed whether or not the run fails, so a silent run that exits 0
    /// still names every risky and non-boolean rule.
    pub silent: bool,
    pub show_prefix_health: bool,
    /// The run is about to exit non-zero because of findings.
    pub fail_triggered: bool,
}

pub fn render_text(report: &AuditReport, options: &TextOptions, palette: &dyn Palette) -> String {
    let mut out = String::new();

    if report.findings.is_empty() {
        if !options.silent {
            out.push_str(&palette.success(&format!(
                "No risky auto-approve rules found ({} files, {} rules checked)",
                report.data.files_scanned, report.data.rules_evaluated
            )));
            out.push('\n');
        }
    } else {
        for finding in &report.findings {
            out.push_str(&palette.heading(&format!("{}:", finding.file)));
            out.push('\n');
            for pattern in &finding.risky_patterns {
                out.push_str(&format!("  - {}\n", palette.danger(pattern)));
            }
            for pattern in &finding.non_boolean {
                out.push_str(&format!(
                    "  ? {} {}\n",
                    palette.warning(pattern),
                    palette.dim("(non-boolean value, not classified)")
                ));
            }
        }

        if !options.silent {
            let risky: usize = report.findings.iter().map(|f| f.risky_patterns.len()).sum();
            let non_boolean: usize = report.findings.iter().map(|f| f.non_boolean.len()).sum();
            out.push('\n');
            out.push_str(&palette.warning(&format!(
                "{risky} risky and {non_boolean} non-boolean rules in {} of {} files",
                report.findings.len(),
                report.data.files_scanned
            )));
            out.push('\n');
        }
    }

    if options.show_prefix_health && !options.silent && !report.prefix_health.is_empty() {
        out.push('\n');
        out.push_str(&palette.heading("Prefix health:"));
        out.push('\n');
        for health in report.prefix_health.values() {
            render_prefix(&mut out, health, palette);
        }
    }

    if options.fail_triggered {
        out.push('\n');
        out.push_str(&palette.danger(&format!(
            "audit failed: {} file(s) with risky auto-approve rules",
            report.findings.len()
        )));
        out.push('\n');
    }

    out
}

fn render_prefix(out: &mut String, health: &PrefixHealth, palette: &dyn Palette) {
    let status = health.status();
    let marker = format!("[{}]", status.as_str());
    let marker = match status {
        HealthStatus::Healthy => palette.success(&marker),
        HealthStatus::Mixed => palette.warning(&marker),
        HealthStatus::Critical => palette.danger(&marker),
    };
    out.push_str(&format!(
        "  {}: {}/{} safe ({}% risky) {}\n",
        health.prefix,
        health.safe_patterns,
        health.total_patterns,
        health.risk_percent(),
        marker
    ));

    if health.risky_list.is_empty() {
        return;
    }
    let mut examples: Vec<&str> = health
        .risky_list
        .iter()
        .take(MAX_RISKY_EXAMPLES)
        .map(String::as_str)
        .collect();
    if health.risky_list.len() > MAX_RISKY_EXAMPLES {
        examples.push("…");
    }
    out.push_str(&format!("    risky: {}\n", palette.dim(&examples.join(", "))));
}
