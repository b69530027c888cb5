//! Where file contents come from.
//!
//! The loader and the controller never touch the filesystem directly; they go
//! through a [`SourceProvider`], so the whole engine runs unchanged against an
//! in-memory file set in tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rasalint_foundation::{Error, Result};
use rasalint_syntax::is_yaml_path;

/// Supplies file lists and file contents.
pub trait SourceProvider {
    /// Reads the full text of `path`.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the file does not exist or cannot be read.
    fn read(&self, path: &Path) -> Result<String>;

    /// Lists every YAML file under `root`, sorted, skipping directories named
    /// in `ignore`.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if `root` cannot be listed.
    fn discover(&self, root: &Path, ignore: &[String]) -> Result<Vec<PathBuf>>;
}

/// Reads from the real filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsSource;

impl SourceProvider for FsSource {
    fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::io(path, &e))
    }

    fn discover(&self, root: &Path, ignore: &[String]) -> Result<Vec<PathBuf>> {
        rasalint_syntax::discover(root, ignore)
    }
}

/// An in-memory file set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySource {
    files: BTreeMap<PathBuf, String>,
}

impl MemorySource {
    /// Creates an empty file set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a file.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    /// Adds or overwrites a file.
    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }

    /// Removes a file. Returns its text if it existed.
    pub fn remove(&mut self, path: &Path) -> Option<String> {
        self.files.remove(path)
    }

    /// Returns true if the file exists.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

impl SourceProvider for MemorySource {
    fn read(&self, path: &Path) -> Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            Error::io(
                path,
                &std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            )
        })
    }

    fn discover(&self, root: &Path, ignore: &[String]) -> Result<Vec<PathBuf>> {
        Ok(self
            .files
            .keys()
            .filter(|path| is_yaml_path(path))
            .filter(|path| {
                path.strip_prefix(root).is_ok_and(|relative| {
                    !relative
                        .components()
                        .any(|c| ignore.iter().any(|skip| c.as_os_str() == skip.as_str()))
                })
            })
            .cloned()
            .collect())
    }
}
