//! Recursive discovery of YAML files under a project root.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use rasalint_foundation::{Error, Result};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Directory names skipped unless configured otherwise.
pub const DEFAULT_IGNORE: [&str; 5] = [".vscode", "node_modules", "env", ".venv", ".git"];

/// Returns true for paths ending in `.yml` or `.yaml`.
#[must_use]
pub fn is_yaml_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml" | "yaml")
    )
}

fn is_ignored(name: &OsStr, ignore: &[String]) -> bool {
    ignore.iter().any(|skip| name == skip.as_str())
}

/// Finds every `.yml`/`.yaml` file under `root`, skipping entries whose name
/// is in `ignore`. The root itself is never skipped.
///
/// Symlinks are not followed. The result is sorted. Unreadable entries below
/// the root are logged and skipped.
///
/// # Errors
///
/// Returns an I/O error if `root` itself cannot be read.
pub fn discover(root: &Path, ignore: &[String]) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored(entry.file_name(), ignore));

    let mut files = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_dir() && is_yaml_path(entry.path()) {
                    files.push(entry.into_path());
                }
            }
            Err(e) if e.depth() == 0 => {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("cannot walk project root"));
                return Err(Error::io(root, &source));
            }
            Err(e) => warn!(path = ?e.path(), error = %e, "skipping unreadable entry"),
        }
    }
    debug!(root = %root.display(), count = files.len(), "discovered yaml files");
    Ok(files)
}
