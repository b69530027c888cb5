//! The analysis state: everything a rescan reads and writes.

use std::path::Path;

use rasalint_foundation::Diagnostic;
use rasalint_model::{Domain, TrainingData};

use crate::config::CheckConfig;
use crate::crossref::{CrossReference, DiagnosticStore};

/// Both corpora, the current diagnostics, and the configuration they were
/// computed with.
///
/// Owned by whoever drives the controller and passed through every handler.
/// All collections are persistent, so cloning is cheap and handlers return a
/// new value instead of mutating shared state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisState {
    /// Declared intents, actions, and responses.
    pub domain: Domain,
    /// Story, rule, and NLU usages.
    pub training: TrainingData,
    /// Current diagnostics per file.
    pub diagnostics: DiagnosticStore,
    /// Which classes of finding are reported.
    pub config: CheckConfig,
}

impl AnalysisState {
    /// Creates an empty state with the given configuration.
    #[must_use]
    pub fn new(config: CheckConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns a cross reference over the current corpora.
    #[must_use]
    pub fn cross_reference(&self) -> CrossReference<'_> {
        CrossReference::new(&self.domain, &self.training, &self.config)
    }

    /// Returns the diagnostics of one file.
    #[must_use]
    pub fn diagnostics_for(&self, file: &Path) -> &[Diagnostic] {
        self.diagnostics.get(file)
    }

    /// Splits the state into a cross reference and the diagnostic store it
    /// writes to.
    pub(crate) fn split(&mut self) -> (CrossReference<'_>, &mut DiagnosticStore) {
        let Self {
            domain,
            training,
            diagnostics,
            config,
        } = self;
        (CrossReference::new(domain, training, config), diagnostics)
    }
}
