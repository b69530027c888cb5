//! Project roots and the initial full load.

use std::fs;
use std::path::{Path, PathBuf};

use rasalint_foundation::{Error, ErrorKind, Result};
use rasalint_model::ContributionStore;
use rasalint_syntax::extract_source;
use tracing::{info, warn};

use crate::config::CheckConfig;
use crate::controller::Effect;
use crate::source::SourceProvider;
use crate::state::AnalysisState;
use crate::tree::TreeKind;

/// Name of the marker file that opts a directory in.
pub const MARKER_FILE: &str = ".rasalint";

const MARKER_CONTENTS: &str = "# This directory is checked by rasalint.\n";

/// A directory that has been opted in with the marker file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectRoot {
    path: PathBuf,
}

impl ProjectRoot {
    /// Opens an initialized project.
    ///
    /// # Errors
    ///
    /// Returns `NoWorkspace` if `path` is not a directory and `NotAProject`
    /// if it has no marker file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = canonical_dir(path.into())?;
        if !Self::is_initialized(&path) {
            return Err(Error::not_a_project(&path));
        }
        Ok(Self { path })
    }

    /// Writes the marker file into `path` if it is not there yet.
    ///
    /// # Errors
    ///
    /// Returns `NoWorkspace` if `path` is not a directory and `Io` if the
    /// marker cannot be written.
    pub fn init(path: impl Into<PathBuf>) -> Result<Self> {
        let path = canonical_dir(path.into())?;
        let marker = path.join(MARKER_FILE);
        if marker.exists() {
            info!(root = %path.display(), "project already initialized");
        } else {
            fs::write(&marker, MARKER_CONTENTS).map_err(|e| Error::io(&marker, &e))?;
            info!(root = %path.display(), "wrote marker file");
        }
        Ok(Self { path })
    }

    /// Returns true if `path` contains the marker file.
    #[must_use]
    pub fn is_initialized(path: &Path) -> bool {
        path.join(MARKER_FILE).is_file()
    }

    /// The project directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the project's `rasalint.toml`, or defaults.
    ///
    /// # Errors
    ///
    /// See [`CheckConfig::load`].
    pub fn config(&self) -> Result<CheckConfig> {
        CheckConfig::load(&self.path)
    }
}

/// Resolves `path` to an absolute directory with no symlinks, so that it
/// compares equal to the paths reported by file watchers.
fn canonical_dir(path: PathBuf) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(Error::new(ErrorKind::NoWorkspace(path)));
    }
    fs::canonicalize(&path).map_err(|_| Error::new(ErrorKind::NoWorkspace(path)))
}

/// Performs the initial full load of a project.
///
/// Discovers every YAML file, extracts each into whichever corpora its
/// top-level keys name, then scans all training data files and all domain
/// files. Files that cannot be read or parsed are logged and skipped.
///
/// The effects publish every scanned file and refresh both trees.
///
/// # Errors
///
/// Returns an error only if `root` itself cannot be listed.
pub fn load_project<P: SourceProvider + ?Sized>(
    root: &Path,
    source: &P,
    config: CheckConfig,
) -> Result<(AnalysisState, Vec<Effect>)> {
    let files = source.discover(root, &config.scan.ignore)?;
    let mut state = AnalysisState::new(config);

    for file in &files {
        let text = match source.read(file) {
            Ok(text) => text,
            Err(e) => {
                warn!(file = %file.display(), error = %e, "skipping unreadable file");
                continue;
            }
        };
        let extracted = extract_source(file, &text);
        if extracted.role.domain {
            state.domain.replace_contributor(file, extracted.domain);
        }
        if extracted.role.training {
            state.training.replace_contributor(file, extracted.training);
        }
    }

    {
        let (xref, store) = state.split();
        xref.scan_all_training_data_files(store);
        xref.scan_all_domain_files(store);
    }

    info!(
        root = %root.display(),
        files = files.len(),
        domain = state.domain.file_paths().len(),
        training = state.training.file_paths().len(),
        errors = state.diagnostics.error_count(),
        warnings = state.diagnostics.warning_count(),
        "loaded project"
    );

    let mut effects: Vec<Effect> = state
        .diagnostics
        .iter()
        .map(|(file, diagnostics)| Effect::Publish {
            file: file.clone(),
            diagnostics: diagnostics.clone(),
        })
        .collect();
    effects.push(Effect::Refresh(TreeKind::Domain));
    effects.push(Effect::Refresh(TreeKind::TrainingData));
    Ok((state, effects))
}
