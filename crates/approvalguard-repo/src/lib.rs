//! Repository adapters: discover editor settings files, read and parse them.
//!
//! This crate is allowed to do filesystem IO. Everything it reads is turned into an
//! [`AuditModel`] for the pure domain crate.

#![forbid(unsafe_code)]

mod discover;
mod parse;

use approvalguard_domain::model::{AuditModel, SettingsSource};
use anyhow::Context;
use approvalguard_types::SourcePath;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

pub use discover::{discover_settings_files, user_settings_path};
pub use parse::{ParseError, parse_settings_text};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    /// Parse arbitrary text as an editor settings document.
    ///
    /// Returns the number of rule entries found. **Never panics** on any input.
    pub fn parse_settings(text: &str) -> Result<usize, super::ParseError> {
        Ok(super::parse_settings_text(text)?.len())
    }
}

/// Where settings files come from.
#[derive(Clone, Debug)]
pub enum SourceInput {
    /// Walk `root` for `.vscode/settings.json`, optionally adding the user-level settings file.
    Discover {
        root: Utf8PathBuf,
        skip_dirs: Vec<String>,
        include_user_settings: bool,
    },
    /// Audit exactly this file; discovery is skipped.
    Explicit(Utf8PathBuf),
}

/// Read and parse one settings file.
pub fn load_source(path: &Utf8Path, display: SourcePath) -> Result<SettingsSource, ParseError> {
    let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_owned(),
        source,
    })?;
    let rules = parse_settings_text(&text)?;
    Ok(SettingsSource {
        path: display,
        rules,
    })
}

/// Build the in-memory model the domain engine audits.
///
/// Files that cannot be read or parsed are left out of the model; they are logged at
/// debug level and never abort the run.
pub fn load_model(input: &SourceInput) -> anyhow::Result<AuditModel> {
    let candidates: Vec<(Utf8PathBuf, SourcePath)> = match input {
        SourceInput::Explicit(path) => vec![(path.clone(), SourcePath::new(path.as_str()))],
        SourceInput::Discover {
            root,
            skip_dirs,
            include_user_settings,
        } => {
            let mut out: Vec<(Utf8PathBuf, SourcePath)> = discover_settings_files(root, skip_dirs)
                .with_context(|| format!("discover settings under {root}"))?
                .into_iter()
                .map(|abs| {
                    let display = SourcePath::relative_to(root, &abs);
                    (abs, display)
                })
                .collect();

            if *include_user_settings
                && let Some(user) = user_settings_path()
                && user.is_file()
                && !out.iter().any(|(abs, _)| same_file(abs, &user))
            {
                let display = SourcePath::new(user.as_str());
                out.push((user, display));
            }
            out
        }
    };

    let mut model = AuditModel::default();
    for (abs, display) in candidates {
        match load_source(&abs, display) {
            Ok(source) => {
                debug!(file = %source.path, rules = source.rules.len(), "loaded settings");
                model.sources.push(source);
            }
            Err(err) => debug!(file = %abs, error = %err, "skipping settings file"),
        }
    }

    Ok(model)
}

fn same_file(a: &Utf8Path, b: &Utf8Path) -> bool {
    match (a.canonicalize_utf8(), b.canonicalize_utf8()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
