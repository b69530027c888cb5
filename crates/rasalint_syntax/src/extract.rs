//! Per-file extraction.
//!
//! Reads one file's top-level blocks and returns every typed declaration
//! found in it, split by corpus. A file that fails to parse contributes
//! nothing; the failure is logged and never stops the scan of other files.

use std::fs;
use std::path::{Path, PathBuf};

use rasalint_foundation::{Corpus, Declaration, Error, Result};
use tracing::{debug, warn};

use crate::classify::{self, DOMAIN_KEYS, TRAINING_KEYS};
use crate::document::YamlDocument;

/// Which corpora a file contributes to, judged by its top-level keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FileRole {
    /// Has an `intents`, `actions`, or `responses` key.
    pub domain: bool,
    /// Has a `stories`, `rules`, or `nlu` key.
    pub training: bool,
}

impl FileRole {
    /// Derives the role from a list of top-level keys.
    #[must_use]
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut role = Self::default();
        for key in keys {
            role.domain |= DOMAIN_KEYS.contains(&key);
            role.training |= TRAINING_KEYS.contains(&key);
        }
        role
    }

    /// Returns true if the file matters to either corpus.
    #[must_use]
    pub const fn is_relevant(self) -> bool {
        self.domain || self.training
    }
}

/// The declarations found in one file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileDeclarations {
    /// The file these declarations came from.
    pub file: PathBuf,
    /// Which corpora the file contributes to.
    pub role: FileRole,
    /// Intent, action, and response declarations.
    pub domain: Vec<Declaration>,
    /// Story, rule, and NLU declarations.
    pub training: Vec<Declaration>,
}

impl FileDeclarations {
    fn empty(file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
            ..Self::default()
        }
    }

    /// Returns the declarations for one corpus.
    #[must_use]
    pub fn for_corpus(&self, corpus: Corpus) -> &[Declaration] {
        match corpus {
            Corpus::Domain => &self.domain,
            Corpus::TrainingData => &self.training,
        }
    }
}

/// Extracts the declarations of a file whose text is already in memory.
///
/// Never fails: unparseable text yields an empty result with no role.
#[must_use]
pub fn extract_source(file: &Path, text: &str) -> FileDeclarations {
    let doc = match YamlDocument::parse(file, text) {
        Ok(doc) => doc,
        Err(e) => {
            match &e.context {
                Some(at) => warn!(%at, error = %e, "skipping unparseable file"),
                None => warn!(file = %file.display(), error = %e, "skipping unparseable file"),
            }
            return FileDeclarations::empty(file);
        }
    };
    extract_document(&doc)
}

/// Extracts the declarations of an already parsed document.
#[must_use]
pub fn extract_document(doc: &YamlDocument) -> FileDeclarations {
    let file = doc.path();
    let keys = doc.top_level_keys();
    let mut out = FileDeclarations {
        file: file.to_path_buf(),
        role: FileRole::from_keys(keys.iter().copied()),
        ..FileDeclarations::default()
    };

    for key in keys {
        let Some(node) = doc.block(key) else {
            continue;
        };
        let Some(declarations) = classify::block(key, node, doc) else {
            continue;
        };
        if DOMAIN_KEYS.contains(&key) {
            out.domain.extend(declarations);
        } else {
            out.training.extend(declarations);
        }
    }

    debug!(
        file = %file.display(),
        domain = out.domain.len(),
        training = out.training.len(),
        "extracted declarations"
    );
    out
}

/// Reads and extracts a file from disk.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read. Parse failures are not
/// errors.
pub fn extract_file(file: &Path) -> Result<FileDeclarations> {
    let text = fs::read_to_string(file).map_err(|e| Error::io(file, &e))?;
    Ok(extract_source(file, &text))
}
