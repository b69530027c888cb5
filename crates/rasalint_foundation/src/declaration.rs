//! Typed, positioned declarations.
//!
//! A [`Declaration`] is one symbol found in one YAML file: an intent declared
//! in the domain, an action used in a story, the label of a rule, and so on.
//! Declarations are immutable; a file is always re-extracted wholesale.

use std::fmt;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Which corpus a declaration belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Corpus {
    /// Intent, action, and response declarations.
    Domain,
    /// Stories, rules, and NLU examples.
    TrainingData,
}

/// The kind of a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum DeclarationKind {
    /// An entry of the domain's `intents:` block.
    IntentDeclaration,
    /// An entry of the domain's `actions:` block.
    ActionDeclaration,
    /// A key of the domain's `responses:` block.
    ResponseDeclaration,
    /// An `intent:` step inside a story.
    IntentInStory,
    /// An `action:` step inside a story.
    ActionInStory,
    /// An `intent:` step inside a rule.
    IntentInRule,
    /// An `action:` step inside a rule.
    ActionInRule,
    /// The `intent:` label of an NLU entry.
    IntentInNlu,
    /// The name of a story.
    StoryLocation,
    /// The name of a rule.
    RuleLocation,
}

impl DeclarationKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::IntentDeclaration,
        Self::ActionDeclaration,
        Self::ResponseDeclaration,
        Self::IntentInStory,
        Self::ActionInStory,
        Self::IntentInRule,
        Self::ActionInRule,
        Self::IntentInNlu,
        Self::StoryLocation,
        Self::RuleLocation,
    ];

    /// Returns the corpus this kind is stored in.
    #[must_use]
    pub const fn corpus(self) -> Corpus {
        match self {
            Self::IntentDeclaration | Self::ActionDeclaration | Self::ResponseDeclaration => {
                Corpus::Domain
            }
            Self::IntentInStory
            | Self::ActionInStory
            | Self::IntentInRule
            | Self::ActionInRule
            | Self::IntentInNlu
            | Self::StoryLocation
            | Self::RuleLocation => Corpus::TrainingData,
        }
    }

    /// Returns true if the declared name refers to an intent.
    #[must_use]
    pub const fn names_intent(self) -> bool {
        matches!(
            self,
            Self::IntentDeclaration | Self::IntentInStory | Self::IntentInRule | Self::IntentInNlu
        )
    }

    /// Returns true if the declared name refers to an action (responses included).
    #[must_use]
    pub const fn names_action(self) -> bool {
        matches!(
            self,
            Self::ActionDeclaration
                | Self::ResponseDeclaration
                | Self::ActionInStory
                | Self::ActionInRule
        )
    }

    /// Human-readable name of the kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IntentDeclaration => "intent declaration",
            Self::ActionDeclaration => "action declaration",
            Self::ResponseDeclaration => "response declaration",
            Self::IntentInStory => "intent in story",
            Self::ActionInStory => "action in story",
            Self::IntentInRule => "intent in rule",
            Self::ActionInRule => "action in rule",
            Self::IntentInNlu => "intent in nlu",
            Self::StoryLocation => "story",
            Self::RuleLocation => "rule",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A zero-based line/column position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Position {
    /// Zero-based line number.
    pub line: u32,
    /// Zero-based column number, in characters.
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Editors count from one.
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A half-open highlight range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Range {
    /// Where the range starts.
    pub start: Position,
    /// Where the range ends (exclusive).
    pub end: Position,
}

impl Range {
    /// Creates a range covering `length` characters on a single line.
    #[must_use]
    pub const fn on_line(start: Position, length: u32) -> Self {
        Self {
            start,
            end: Position::new(start.line, start.column + length),
        }
    }
}

/// A typed symbol found in one source file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Declaration {
    /// What kind of declaration this is.
    pub kind: DeclarationKind,
    /// The symbol text, or the label of a story/rule.
    pub name: String,
    /// The file this declaration was found in.
    pub file: PathBuf,
    /// Start of the token.
    pub position: Position,
    /// Character length of the token.
    pub length: u32,
}

impl Declaration {
    /// Creates a new declaration.
    #[must_use]
    pub fn new(
        kind: DeclarationKind,
        name: impl Into<String>,
        file: impl Into<PathBuf>,
        position: Position,
        length: u32,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            file: file.into(),
            position,
            length,
        }
    }

    /// Returns the highlight range of the token.
    #[must_use]
    pub const fn range(&self) -> Range {
        Range::on_line(self.position, self.length)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} `{}` at {}:{}",
            self.kind,
            self.name,
            self.file.display(),
            self.position
        )
    }
}
