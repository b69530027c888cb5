//! The cross-reference engine.
//!
//! Two file-scoped validation directions:
//! - training data against the domain: every used or trained symbol must be
//!   declared (errors);
//! - the domain against training data: every declared symbol should be used,
//!   and every intent trained (warnings).
//!
//! Each pass computes the complete diagnostic set for one file, which then
//! replaces whatever the [`DiagnosticStore`] held for it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use im::OrdMap;
use rasalint_foundation::{Declaration, DeclarationKind, Diagnostic, DiagnosticClass};
use rasalint_model::{ContributionStore, Domain, TrainingData};
use tracing::debug;

use crate::config::CheckConfig;

// =============================================================================
// Diagnostic Store
// =============================================================================

/// The current diagnostics of every scanned file.
///
/// Writes replace a file's set wholesale; nothing is ever appended.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticStore {
    by_file: OrdMap<PathBuf, Vec<Diagnostic>>,
}

impl DiagnosticStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the diagnostics of `file`. Returns true if they changed.
    pub fn replace(&mut self, file: &Path, diagnostics: Vec<Diagnostic>) -> bool {
        if self.by_file.get(file) == Some(&diagnostics) {
            return false;
        }
        self.by_file.insert(file.to_path_buf(), diagnostics);
        true
    }

    /// Returns the diagnostics of `file`; empty for files never scanned.
    #[must_use]
    pub fn get(&self, file: &Path) -> &[Diagnostic] {
        self.by_file.get(file).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterates over `(file, diagnostics)` in path order, including files
    /// whose set is empty.
    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &Vec<Diagnostic>)> {
        self.by_file.iter()
    }

    /// Every diagnostic in the store.
    pub fn all(&self) -> impl Iterator<Item = &Diagnostic> {
        self.by_file.values().flatten()
    }

    /// Total number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_file.values().map(Vec::len).sum()
    }

    /// Returns true if there are no diagnostics at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of error-severity diagnostics.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.all().filter(|d| d.is_error()).count()
    }

    /// Number of warning-severity diagnostics.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.len() - self.error_count()
    }

    /// Returns true if any error-severity diagnostic exists.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.all().any(Diagnostic::is_error)
    }
}

// =============================================================================
// Cross Reference
// =============================================================================

/// A view of both corpora ready for membership tests.
///
/// Name sets are built once on construction, so a full pass costs one
/// traversal of each corpus plus one lookup per declaration.
pub struct CrossReference<'a> {
    domain: &'a Domain,
    training: &'a TrainingData,
    config: &'a CheckConfig,
    available_intents: HashSet<&'a str>,
    available_actions: HashSet<&'a str>,
    used_intents: HashSet<&'a str>,
    used_actions: HashSet<&'a str>,
    trained_intents: HashSet<&'a str>,
}

impl<'a> CrossReference<'a> {
    /// Prepares a cross reference of `domain` against `training`.
    #[must_use]
    pub fn new(domain: &'a Domain, training: &'a TrainingData, config: &'a CheckConfig) -> Self {
        Self {
            domain,
            training,
            config,
            available_intents: domain.available_intents().into_iter().collect(),
            available_actions: domain.available_actions().into_iter().collect(),
            used_intents: training.used_intents().into_iter().collect(),
            used_actions: training.used_actions().into_iter().collect(),
            trained_intents: training.trained_intents().into_iter().collect(),
        }
    }

    /// Computes the diagnostics of one training data file: every usage that
    /// the domain does not declare.
    ///
    /// Findings are ordered NLU entries, story intents, story actions, rule
    /// intents, rule actions. Unknown files have no findings.
    #[must_use]
    pub fn scan_training_data_file(&self, file: &Path) -> Vec<Diagnostic> {
        let Some(contribution) = self.training.contribution(file) else {
            return Vec::new();
        };
        contribution
            .nlu
            .iter()
            .chain(contribution.stories.intents.iter())
            .chain(contribution.stories.actions.iter())
            .chain(contribution.rules.intents.iter())
            .chain(contribution.rules.actions.iter())
            .filter_map(|usage| self.check_usage(usage))
            .collect()
    }

    /// Computes the diagnostics of one domain file: every declaration that
    /// training data never uses or trains.
    ///
    /// An intent can be both unused and untrained; it then gets two
    /// warnings.
    #[must_use]
    pub fn scan_domain_file(&self, file: &Path) -> Vec<Diagnostic> {
        let Some(contribution) = self.domain.contribution(file) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for declaration in contribution.iter() {
            self.check_declaration(declaration, &mut out);
        }
        out
    }

    /// Computes the complete diagnostic set of one file: its training data
    /// findings followed by its domain findings.
    ///
    /// A file contributing to only one corpus gets only that corpus's
    /// findings; a file carrying both kinds of block gets both.
    #[must_use]
    pub fn scan_file(&self, file: &Path) -> Vec<Diagnostic> {
        let mut out = self.scan_training_data_file(file);
        out.extend(self.scan_domain_file(file));
        out
    }

    /// Rescans every training data file into `store`. Returns the files
    /// whose diagnostics changed, in path order.
    pub fn scan_all_training_data_files(&self, store: &mut DiagnosticStore) -> Vec<PathBuf> {
        let changed = self.scan_all(&self.training.file_paths(), store);
        debug!(changed = changed.len(), "scanned all training data files");
        changed
    }

    /// Rescans every domain file into `store`. Returns the files whose
    /// diagnostics changed, in path order.
    pub fn scan_all_domain_files(&self, store: &mut DiagnosticStore) -> Vec<PathBuf> {
        let changed = self.scan_all(&self.domain.file_paths(), store);
        debug!(changed = changed.len(), "scanned all domain files");
        changed
    }

    fn scan_all(&self, files: &[&Path], store: &mut DiagnosticStore) -> Vec<PathBuf> {
        files
            .iter()
            .copied()
            .filter(|file| store.replace(file, self.scan_file(file)))
            .map(Path::to_path_buf)
            .collect()
    }

    fn check_usage(&self, usage: &Declaration) -> Option<Diagnostic> {
        let (class, noun, available) = match usage.kind {
            DeclarationKind::IntentInNlu => (
                DiagnosticClass::UndeclaredNluIntent,
                "Intent",
                &self.available_intents,
            ),
            DeclarationKind::IntentInStory | DeclarationKind::IntentInRule => (
                DiagnosticClass::UndeclaredIntent,
                "Intent",
                &self.available_intents,
            ),
            DeclarationKind::ActionInStory | DeclarationKind::ActionInRule => (
                DiagnosticClass::UndeclaredAction,
                "Action",
                &self.available_actions,
            ),
            DeclarationKind::StoryLocation
            | DeclarationKind::RuleLocation
            | DeclarationKind::IntentDeclaration
            | DeclarationKind::ActionDeclaration
            | DeclarationKind::ResponseDeclaration => return None,
        };
        if !self.config.is_enabled(class) || available.contains(usage.name.as_str()) {
            return None;
        }
        Some(Diagnostic::at(
            usage,
            class,
            format!("{noun} {} has not been declared in the domain yet.", usage.name),
        ))
    }

    fn check_declaration(&self, declaration: &Declaration, out: &mut Vec<Diagnostic>) {
        let name = declaration.name.as_str();
        let mut report = |class: DiagnosticClass, message: String| {
            if self.config.is_enabled(class) {
                out.push(Diagnostic::at(declaration, class, message));
            }
        };
        match declaration.kind {
            DeclarationKind::IntentDeclaration => {
                if !self.used_intents.contains(name) {
                    report(
                        DiagnosticClass::UnusedIntent,
                        format!("Intent {name} is not being used in any rule or story."),
                    );
                }
                if !self.trained_intents.contains(name) {
                    report(
                        DiagnosticClass::UntrainedIntent,
                        format!("Intent {name} has no training data associated in NLU."),
                    );
                }
            }
            DeclarationKind::ActionDeclaration | DeclarationKind::ResponseDeclaration => {
                let noun = if declaration.kind == DeclarationKind::ResponseDeclaration {
                    "Response"
                } else {
                    "Action"
                };
                if !self.used_actions.contains(name) {
                    report(
                        DiagnosticClass::UnusedAction,
                        format!("{noun} {name} is not being used in any rule or story."),
                    );
                }
            }
            DeclarationKind::IntentInStory
            | DeclarationKind::ActionInStory
            | DeclarationKind::IntentInRule
            | DeclarationKind::ActionInRule
            | DeclarationKind::IntentInNlu
            | DeclarationKind::StoryLocation
            | DeclarationKind::RuleLocation => {}
        }
    }
}
