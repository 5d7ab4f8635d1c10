use camino::{Utf8Path, Utf8PathBuf};
use std::path::PathBuf;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

const SETTINGS_DIR: &str = ".vscode";
const SETTINGS_FILE: &str = "settings.json";

/// Find every `.vscode/settings.json` below `root`.
///
/// Directories named in `skip_dirs` are not descended into (the root itself is always
/// walked). Results are absolute and sorted so runs are deterministic.
pub fn discover_settings_files(
    root: &Utf8Path,
    skip_dirs: &[String],
) -> anyhow::Result<Vec<Utf8PathBuf>> {
    if !root.is_dir() {
        anyhow::bail!("{root} is not a directory");
    }

    let mut out: Vec<Utf8PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e, skip_dirs))
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!(error = %err, "skipping unreadable directory entry");
                None
            }
        })
        .filter(is_settings_file)
        .filter_map(|e| pathbuf_to_utf8(e.into_path()))
        .collect();

    out.sort();
    out.dedup();
    debug!(root = %root, count = out.len(), "discovered settings files");
    Ok(out)
}

/// The editor's user-level settings file for this platform, if a config directory exists.
///
/// The file itself may not exist; callers check.
pub fn user_settings_path() -> Option<Utf8PathBuf> {
    let base = pathbuf_to_utf8(dirs::config_dir()?)?;
    Some(base.join("Code").join("User").join(SETTINGS_FILE))
}

fn is_skipped_dir(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| skip_dirs.iter().any(|s| s == name))
}

fn is_settings_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry.file_name() == SETTINGS_FILE
        && entry
            .path()
            .parent()
            .and_then(|p| p.file_name())
            .is_some_and(|name| name == SETTINGS_DIR)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
