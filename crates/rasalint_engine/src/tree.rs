//! Browsable views of the two corpora.
//!
//! The domain tree has `Intents` and `Actions` at the root; the training data
//! tree has `Stories`, `Rules`, and `NLU`. Leaves are declarations and carry a
//! jump target into their source file.

use std::fmt;
use std::path::PathBuf;

use rasalint_foundation::{Declaration, DeclarationKind, Range};
use rasalint_model::{Domain, TrainingData};

/// Which of the two trees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TreeKind {
    /// Declared intents, actions, and responses.
    Domain,
    /// Stories, rules, and NLU entries.
    TrainingData,
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain => f.write_str("domain"),
            Self::TrainingData => f.write_str("training data"),
        }
    }
}

/// A root node of one of the trees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TreeCategory {
    /// Declared intents.
    Intents,
    /// Declared actions and responses.
    Actions,
    /// Story names.
    Stories,
    /// Rule names.
    Rules,
    /// Intents with NLU examples.
    Nlu,
}

impl TreeCategory {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Intents => "Intents",
            Self::Actions => "Actions",
            Self::Stories => "Stories",
            Self::Rules => "Rules",
            Self::Nlu => "NLU",
        }
    }

    /// Icon name.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Intents => "report",
            Self::Actions => "zap",
            Self::Stories => "bookmark",
            Self::Rules => "terminal",
            Self::Nlu => "list-tree",
        }
    }

    /// The tree this category is a root of.
    #[must_use]
    pub const fn tree(self) -> TreeKind {
        match self {
            Self::Intents | Self::Actions => TreeKind::Domain,
            Self::Stories | Self::Rules | Self::Nlu => TreeKind::TrainingData,
        }
    }
}

/// A node of either tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeNode {
    /// A root grouping.
    Category(TreeCategory),
    /// A declaration; has no children.
    Leaf(Declaration),
}

/// Where selecting a leaf should navigate to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JumpTarget {
    /// File to open.
    pub file: PathBuf,
    /// Range to select.
    pub range: Range,
}

/// What a view displays for a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeItem {
    /// Display label.
    pub label: String,
    /// Icon name.
    pub icon: &'static str,
    /// Whether the node can be expanded.
    pub collapsible: bool,
    /// Navigation target, for leaves.
    pub target: Option<JumpTarget>,
}

const fn leaf_icon(kind: DeclarationKind) -> &'static str {
    match kind {
        DeclarationKind::IntentDeclaration => "dash",
        DeclarationKind::ActionDeclaration => "zap",
        DeclarationKind::ResponseDeclaration => "comment",
        DeclarationKind::StoryLocation => "comment-discussion",
        DeclarationKind::RuleLocation => "source-control",
        DeclarationKind::IntentInNlu => "pencil",
        DeclarationKind::IntentInStory
        | DeclarationKind::IntentInRule
        | DeclarationKind::ActionInStory
        | DeclarationKind::ActionInRule => "symbol-misc",
    }
}

impl TreeNode {
    /// Returns what a view should display for this node.
    #[must_use]
    pub fn item(&self) -> TreeItem {
        match self {
            Self::Category(category) => TreeItem {
                label: category.label().to_string(),
                icon: category.icon(),
                collapsible: true,
                target: None,
            },
            Self::Leaf(declaration) => TreeItem {
                label: declaration.name.clone(),
                icon: leaf_icon(declaration.kind),
                collapsible: false,
                target: Some(JumpTarget {
                    file: declaration.file.clone(),
                    range: declaration.range(),
                }),
            },
        }
    }
}

/// A model that can be browsed as a tree.
pub trait TreeSource {
    /// Which tree this model backs.
    const KIND: TreeKind;

    /// The root categories, in display order.
    fn roots() -> Vec<TreeCategory>;

    /// The declarations under `category`, in path order. Empty for
    /// categories of the other tree.
    fn entries(&self, category: TreeCategory) -> Vec<Declaration>;
}

impl TreeSource for Domain {
    const KIND: TreeKind = TreeKind::Domain;

    fn roots() -> Vec<TreeCategory> {
        vec![TreeCategory::Intents, TreeCategory::Actions]
    }

    fn entries(&self, category: TreeCategory) -> Vec<Declaration> {
        match category {
            TreeCategory::Intents => self.intent_declarations().cloned().collect(),
            TreeCategory::Actions => self.action_declarations().cloned().collect(),
            TreeCategory::Stories | TreeCategory::Rules | TreeCategory::Nlu => Vec::new(),
        }
    }
}

impl TreeSource for TrainingData {
    const KIND: TreeKind = TreeKind::TrainingData;

    fn roots() -> Vec<TreeCategory> {
        vec![TreeCategory::Stories, TreeCategory::Rules, TreeCategory::Nlu]
    }

    fn entries(&self, category: TreeCategory) -> Vec<Declaration> {
        match category {
            TreeCategory::Stories => self.story_locations().cloned().collect(),
            TreeCategory::Rules => self.rule_locations().cloned().collect(),
            TreeCategory::Nlu => self.nlu_entries().cloned().collect(),
            TreeCategory::Intents | TreeCategory::Actions => Vec::new(),
        }
    }
}

/// Returns the children of `node`, or the roots when `node` is `None`.
#[must_use]
pub fn children<M: TreeSource>(node: Option<&TreeNode>, model: &M) -> Vec<TreeNode> {
    match node {
        None => M::roots().into_iter().map(TreeNode::Category).collect(),
        Some(TreeNode::Category(category)) => model
            .entries(*category)
            .into_iter()
            .map(TreeNode::Leaf)
            .collect(),
        Some(TreeNode::Leaf(_)) => Vec::new(),
    }
}

/// A tree view over a snapshot of its model.
///
/// Views never read the live model; they re-pull a snapshot on
/// [`Tree::refresh`], which must be called after every rescan.
#[derive(Clone, Debug)]
pub struct Tree<M> {
    snapshot: M,
    revision: u64,
}

/// The domain tree.
pub type DomainTree = Tree<Domain>;

/// The training data tree.
pub type TrainingDataTree = Tree<TrainingData>;

impl<M: TreeSource + Clone> Tree<M> {
    /// Creates a view of `model` at revision zero.
    #[must_use]
    pub fn new(model: &M) -> Self {
        Self {
            snapshot: model.clone(),
            revision: 0,
        }
    }

    /// Which tree this is.
    #[must_use]
    pub const fn kind(&self) -> TreeKind {
        M::KIND
    }

    /// Re-pulls the snapshot from `model`.
    pub fn refresh(&mut self, model: &M) {
        self.snapshot = model.clone();
        self.revision += 1;
    }

    /// How many times the view has been refreshed.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// The root nodes.
    #[must_use]
    pub fn roots(&self) -> Vec<TreeNode> {
        children(None, &self.snapshot)
    }

    /// The children of `node` in the current snapshot.
    #[must_use]
    pub fn children(&self, node: &TreeNode) -> Vec<TreeNode> {
        children(Some(node), &self.snapshot)
    }

    /// Every item, depth first, with its depth (roots are at depth 0).
    #[must_use]
    pub fn flatten(&self) -> Vec<(usize, TreeItem)> {
        let mut out = Vec::new();
        for root in self.roots() {
            out.push((0, root.item()));
            for child in self.children(&root) {
                out.push((1, child.item()));
            }
        }
        out
    }
}
