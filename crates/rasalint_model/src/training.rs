//! Training data: the stories, rules, and NLU examples that use the domain.

use std::path::{Path, PathBuf};

use im::{OrdMap, Vector};
use rasalint_foundation::{Corpus, Declaration, DeclarationKind};

use crate::store::ContributionStore;

/// What one file's stories (or rules) contribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlowContribution {
    /// Story or rule names.
    pub locations: Vector<Declaration>,
    /// Intents named in steps.
    pub intents: Vector<Declaration>,
    /// Actions named in steps.
    pub actions: Vector<Declaration>,
}

impl FlowContribution {
    fn is_empty(&self) -> bool {
        self.locations.is_empty() && self.intents.is_empty() && self.actions.is_empty()
    }
}

/// The training data one file contributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrainingContribution {
    /// Intents with NLU examples.
    pub nlu: Vector<Declaration>,
    /// Story locations and usages.
    pub stories: FlowContribution,
    /// Rule locations and usages.
    pub rules: FlowContribution,
}

impl TrainingContribution {
    /// Returns true if the file currently contributes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nlu.is_empty() && self.stories.is_empty() && self.rules.is_empty()
    }

    /// Intents the file uses, stories first, then rules.
    pub fn used_intents(&self) -> impl Iterator<Item = &Declaration> {
        self.stories.intents.iter().chain(self.rules.intents.iter())
    }

    /// Actions the file uses, stories first, then rules.
    pub fn used_actions(&self) -> impl Iterator<Item = &Declaration> {
        self.stories.actions.iter().chain(self.rules.actions.iter())
    }
}

/// Story, rule, and NLU usages keyed by source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrainingData {
    contributions: OrdMap<PathBuf, TrainingContribution>,
}

impl TrainingData {
    /// Creates empty training data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the contribution of one file.
    #[must_use]
    pub fn contribution(&self, file: &Path) -> Option<&TrainingContribution> {
        self.contributions.get(file)
    }

    /// Iterates over every `(file, contribution)` pair in path order.
    pub fn contributions(&self) -> impl Iterator<Item = (&PathBuf, &TrainingContribution)> {
        self.contributions.iter()
    }

    /// Names of intents used in any story or rule, duplicates kept.
    #[must_use]
    pub fn used_intents(&self) -> Vec<&str> {
        self.contributions
            .values()
            .flat_map(TrainingContribution::used_intents)
            .map(|d| d.name.as_str())
            .collect()
    }

    /// Names of actions used in any story or rule, duplicates kept.
    #[must_use]
    pub fn used_actions(&self) -> Vec<&str> {
        self.contributions
            .values()
            .flat_map(TrainingContribution::used_actions)
            .map(|d| d.name.as_str())
            .collect()
    }

    /// Names of intents with NLU examples, duplicates kept.
    #[must_use]
    pub fn trained_intents(&self) -> Vec<&str> {
        self.contributions
            .values()
            .flat_map(|c| c.nlu.iter())
            .map(|d| d.name.as_str())
            .collect()
    }

    /// Every story location, in path order.
    pub fn story_locations(&self) -> impl Iterator<Item = &Declaration> {
        self.contributions
            .values()
            .flat_map(|c| c.stories.locations.iter())
    }

    /// Every rule location, in path order.
    pub fn rule_locations(&self) -> impl Iterator<Item = &Declaration> {
        self.contributions
            .values()
            .flat_map(|c| c.rules.locations.iter())
    }

    /// Every NLU entry, in path order.
    pub fn nlu_entries(&self) -> impl Iterator<Item = &Declaration> {
        self.contributions.values().flat_map(|c| c.nlu.iter())
    }

    /// Returns true if nothing is contributed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contributions
            .values()
            .all(TrainingContribution::is_empty)
    }
}

impl ContributionStore for TrainingData {
    const CORPUS: Corpus = Corpus::TrainingData;

    fn add_contribution(&mut self, file: &Path, declaration: Option<Declaration>) -> bool {
        if !self.contributions.contains_key(file) {
            self.contributions
                .insert(file.to_path_buf(), TrainingContribution::default());
        }
        let Some(declaration) = declaration else {
            return true;
        };
        let Some(entry) = self.contributions.get_mut(file) else {
            return false;
        };
        let list = match declaration.kind {
            DeclarationKind::IntentInNlu => &mut entry.nlu,
            DeclarationKind::StoryLocation => &mut entry.stories.locations,
            DeclarationKind::IntentInStory => &mut entry.stories.intents,
            DeclarationKind::ActionInStory => &mut entry.stories.actions,
            DeclarationKind::RuleLocation => &mut entry.rules.locations,
            DeclarationKind::IntentInRule => &mut entry.rules.intents,
            DeclarationKind::ActionInRule => &mut entry.rules.actions,
            DeclarationKind::IntentDeclaration
            | DeclarationKind::ActionDeclaration
            | DeclarationKind::ResponseDeclaration => return false,
        };
        list.push_back(declaration);
        true
    }

    fn reset_contributor(&mut self, file: &Path) {
        if let Some(entry) = self.contributions.get_mut(file) {
            *entry = TrainingContribution::default();
        }
    }

    fn contains(&self, file: &Path) -> bool {
        self.contributions.contains_key(file)
    }

    fn file_paths(&self) -> Vec<&Path> {
        self.contributions.keys().map(PathBuf::as_path).collect()
    }
}
