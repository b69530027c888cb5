//! Text and JSON rendering of diagnostics and trees.

use std::fmt::Write;
use std::path::Path;

use rasalint_engine::{AnalysisState, Tree, TreeSource};
use rasalint_foundation::{Diagnostic, Error, ErrorKind, Result};
use serde::Serialize;

/// Returns `path` relative to `root` when it lies under it.
#[must_use]
pub fn relative<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

/// One `file:line:col: severity: message` line per diagnostic.
fn push_diagnostics(out: &mut String, root: &Path, file: &Path, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        let _ = writeln!(out, "{}:{diagnostic}", relative(root, file).display());
    }
}

/// Renders every diagnostic followed by a summary line.
#[must_use]
pub fn diagnostics_text(state: &AnalysisState, root: &Path) -> String {
    let mut out = String::new();
    let mut files = 0;
    for (file, diagnostics) in state.diagnostics.iter() {
        if diagnostics.is_empty() {
            continue;
        }
        files += 1;
        push_diagnostics(&mut out, root, file, diagnostics);
    }
    let errors = state.diagnostics.error_count();
    let warnings = state.diagnostics.warning_count();
    if errors + warnings == 0 {
        out.push_str("no problems found\n");
    } else {
        let _ = writeln!(
            out,
            "{errors} error{}, {warnings} warning{} in {files} file{}",
            plural(errors),
            plural(warnings),
            plural(files)
        );
    }
    out
}

/// Renders the diagnostics published after a rescan, one block per file.
#[must_use]
pub fn published_text(published: &[(std::path::PathBuf, Vec<Diagnostic>)], root: &Path) -> String {
    let mut out = String::new();
    for (file, diagnostics) in published {
        if diagnostics.is_empty() {
            let _ = writeln!(out, "{}: clean", relative(root, file).display());
        } else {
            push_diagnostics(&mut out, root, file, diagnostics);
        }
    }
    out
}

const fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[derive(Serialize)]
struct Report<'a> {
    root: &'a Path,
    errors: usize,
    warnings: usize,
    files: Vec<FileReport<'a>>,
}

#[derive(Serialize)]
struct FileReport<'a> {
    file: &'a Path,
    diagnostics: &'a [Diagnostic],
}

/// Renders every file with diagnostics as a JSON report.
///
/// # Errors
///
/// Returns an `Internal` error if serialization fails (paths that are not
/// valid UTF-8).
pub fn diagnostics_json(state: &AnalysisState, root: &Path) -> Result<String> {
    let report = Report {
        root,
        errors: state.diagnostics.error_count(),
        warnings: state.diagnostics.warning_count(),
        files: state
            .diagnostics
            .iter()
            .filter(|(_, diagnostics)| !diagnostics.is_empty())
            .map(|(file, diagnostics)| FileReport {
                file,
                diagnostics,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report).map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))
}

/// Renders a tree as an indented outline; leaves show where they are.
#[must_use]
pub fn tree_text<M: TreeSource + Clone>(tree: &Tree<M>, root: &Path) -> String {
    let mut out = String::new();
    for (depth, item) in tree.flatten() {
        let indent = "  ".repeat(depth);
        match item.target {
            Some(target) => {
                let _ = writeln!(
                    out,
                    "{indent}{}  {}:{}",
                    item.label,
                    relative(root, &target.file).display(),
                    target.range.start
                );
            }
            None => {
                let _ = writeln!(out, "{indent}{}", item.label);
            }
        }
    }
    out
}
