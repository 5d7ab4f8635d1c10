//! CLI entry point for approvalguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `approvalguard-app` crate.

use anyhow::Context;
use approvalguard_app::{AuditInput, EXIT_ERROR, RenderOptions, render_audit, run_audit};
use approvalguard_settings::Overrides;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use std::io::{IsTerminal, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_CONFIG: &str = "approvalguard.toml";

#[derive(Parser, Debug)]
#[command(
    name = "approvalguard",
    version,
    about = "Audit editor auto-approve rules for risky terminal commands"
)]
struct Cli {
    /// Directory searched for `.vscode/settings.json` files.
    #[arg(long, global = true, default_value = ".")]
    root: Utf8PathBuf,

    /// Path to approvalguard config TOML (default: <root>/approvalguard.toml if present).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Log debug details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify every enabled auto-approve rule and report risky ones.
    Audit(AuditArgs),
}

#[derive(Args, Debug)]
struct AuditArgs {
    /// Trusted rule prefixes, comma separated. Omit to audit every rule.
    #[arg(long, value_delimiter = ',')]
    allow_prefix: Option<Vec<String>>,

    /// Audit only this settings file instead of discovering them.
    #[arg(long)]
    settings_file: Option<Utf8PathBuf>,

    /// Exit with status 1 when any finding is reported.
    #[arg(long)]
    fail_on_risk: bool,

    /// Print one JSON document instead of text.
    #[arg(long)]
    json: bool,

    /// Report prefix health even when prefixes are given.
    #[arg(long)]
    scan_prefixes: bool,

    /// Suppress success and summary output. Findings are still printed.
    #[arg(long)]
    silent: bool,

    /// Skip the editor's user-level settings file.
    #[arg(long)]
    no_user_settings: bool,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match &cli.cmd {
        Commands::Audit(args) => cmd_audit(&cli, args),
    };

    let code = match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("approvalguard error: {err:#}");
            EXIT_ERROR
        }
    };
    std::process::exit(code);
}

fn setup_logging(verbose: bool) {
    let default = if verbose {
        "approvalguard=debug"
    } else {
        "approvalguard=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn cmd_audit(cli: &Cli, args: &AuditArgs) -> anyhow::Result<i32> {
    let root = cli
        .root
        .canonicalize_utf8()
        .with_context(|| format!("root directory {}", cli.root))?;

    let config_text = read_config(cli, &root)?;

    let overrides = Overrides {
        allow_prefixes: args.allow_prefix.clone(),
        fail_on_risk: args.fail_on_risk.then_some(true),
        scan_prefixes: args.scan_prefixes.then_some(true),
        include_user_settings: args.no_user_settings.then_some(false),
    };

    let output = run_audit(AuditInput {
        root: &root,
        config_text: &config_text,
        overrides,
        settings_file: args.settings_file.clone(),
    })?;
    debug!(
        findings = output.report.findings.len(),
        exit_code = output.exit_code,
        "audit finished"
    );

    let color = !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();
    let rendered = render_audit(
        &output,
        RenderOptions {
            json: args.json,
            silent: args.silent,
            color,
        },
    )?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("write output")?;

    Ok(output.exit_code)
}

/// An explicit `--config` must exist; the default one is optional.
fn read_config(cli: &Cli, root: &Utf8Path) -> anyhow::Result<String> {
    match &cli.config {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read config {path}"))
        }
        None => {
            let path = root.join(DEFAULT_CONFIG);
            if path.is_file() {
                std::fs::read_to_string(&path).with_context(|| format!("read config {path}"))
            } else {
                Ok(String::new())
            }
        }
    }
}
