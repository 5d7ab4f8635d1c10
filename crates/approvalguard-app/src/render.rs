use crate::AuditOutput;
use crate::audit::EXIT_RISK;
use anyhow::Context;
use approvalguard_render::{AnsiPalette, Palette, PlainPalette, TextOptions};

#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    pub json: bool,
    pub silent: bool,
    pub color: bool,
}

/// Render an audit result as JSON or terminal text.
pub fn render_audit(output: &AuditOutput, options: RenderOptions) -> anyhow::Result<String> {
    if options.json {
        let mut json =
            approvalguard_render::render_json(&output.report).context("serialize report")?;
        json.push('\n');
        return Ok(json);
    }

    let text_options = TextOptions {
        silent: options.silent,
        show_prefix_health: output.resolved.effective.reports_prefix_health(),
        fail_triggered: output.exit_code == EXIT_RISK,
    };
    let palette: &dyn Palette = if options.color {
        &AnsiPalette
    } else {
        &PlainPalette
    };
    Ok(approvalguard_render::render_text(
        &output.report,
        &text_options,
        palette,
    ))
}
