//! The domain: what the bot declares it can recognize and do.

use std::path::{Path, PathBuf};

use im::{OrdMap, Vector};
use rasalint_foundation::{Corpus, Declaration, DeclarationKind};

use crate::store::ContributionStore;

/// The declarations one file contributes to the domain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DomainContribution {
    /// Intent declarations.
    pub intents: Vector<Declaration>,
    /// Action and response declarations.
    pub actions: Vector<Declaration>,
}

impl DomainContribution {
    /// Returns true if the file currently declares nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty() && self.actions.is_empty()
    }

    /// Iterates over every declaration, intents first.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.intents.iter().chain(self.actions.iter())
    }
}

/// Intent, action, and response declarations keyed by source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Domain {
    contributions: OrdMap<PathBuf, DomainContribution>,
}

impl Domain {
    /// Creates an empty domain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the contribution of one file.
    #[must_use]
    pub fn contribution(&self, file: &Path) -> Option<&DomainContribution> {
        self.contributions.get(file)
    }

    /// Iterates over every `(file, contribution)` pair in path order.
    pub fn contributions(&self) -> impl Iterator<Item = (&PathBuf, &DomainContribution)> {
        self.contributions.iter()
    }

    /// Names of all declared intents, across every file, duplicates kept.
    #[must_use]
    pub fn available_intents(&self) -> Vec<&str> {
        self.contributions
            .values()
            .flat_map(|c| c.intents.iter())
            .map(|d| d.name.as_str())
            .collect()
    }

    /// Names of all declared actions and responses, duplicates kept.
    #[must_use]
    pub fn available_actions(&self) -> Vec<&str> {
        self.contributions
            .values()
            .flat_map(|c| c.actions.iter())
            .map(|d| d.name.as_str())
            .collect()
    }

    /// Every intent declaration, in path order.
    pub fn intent_declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.contributions.values().flat_map(|c| c.intents.iter())
    }

    /// Every action and response declaration, in path order.
    pub fn action_declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.contributions.values().flat_map(|c| c.actions.iter())
    }

    /// Total number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contributions
            .values()
            .map(|c| c.intents.len() + c.actions.len())
            .sum()
    }

    /// Returns true if nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contributions.values().all(DomainContribution::is_empty)
    }
}

impl ContributionStore for Domain {
    const CORPUS: Corpus = Corpus::Domain;

    fn add_contribution(&mut self, file: &Path, declaration: Option<Declaration>) -> bool {
        if !self.contributions.contains_key(file) {
            self.contributions
                .insert(file.to_path_buf(), DomainContribution::default());
        }
        let Some(declaration) = declaration else {
            return true;
        };
        let Some(entry) = self.contributions.get_mut(file) else {
            return false;
        };
        match declaration.kind {
            DeclarationKind::IntentDeclaration => entry.intents.push_back(declaration),
            DeclarationKind::ActionDeclaration | DeclarationKind::ResponseDeclaration => {
                entry.actions.push_back(declaration);
            }
            DeclarationKind::IntentInStory
            | DeclarationKind::ActionInStory
            | DeclarationKind::IntentInRule
            | DeclarationKind::ActionInRule
            | DeclarationKind::IntentInNlu
            | DeclarationKind::StoryLocation
            | DeclarationKind::RuleLocation => return false,
        }
        true
    }

    fn reset_contributor(&mut self, file: &Path) {
        if let Some(entry) = self.contributions.get_mut(file) {
            *entry = DomainContribution::default();
        }
    }

    fn contains(&self, file: &Path) -> bool {
        self.contributions.contains_key(file)
    }

    fn file_paths(&self) -> Vec<&Path> {
        self.contributions.keys().map(PathBuf::as_path).collect()
    }
}
