//! Declaration classifiers, one per top-level block kind.
//!
//! Each classifier composes the position extractor with a
//! [`DeclarationKind`]. They are pure: aggregation into the models happens in
//! the caller.

use marked_yaml::Node;
use rasalint_foundation::{Declaration, DeclarationKind};

use crate::document::YamlDocument;
use crate::locate::{Located, locate, locate_value};

/// Top-level keys that make a file a domain contributor.
pub const DOMAIN_KEYS: [&str; 3] = ["intents", "actions", "responses"];

/// Top-level keys that make a file a training data contributor.
pub const TRAINING_KEYS: [&str; 3] = ["stories", "rules", "nlu"];

fn declare(kind: DeclarationKind, doc: &YamlDocument, located: Located) -> Declaration {
    Declaration::new(kind, located.name, doc.path(), located.position, located.length)
}

fn declare_all(kind: DeclarationKind, doc: &YamlDocument, block: &Node) -> Vec<Declaration> {
    locate(block, doc)
        .into_iter()
        .map(|located| declare(kind, doc, located))
        .collect()
}

/// Classifies the `intents:` block.
#[must_use]
pub fn intents(block: &Node, doc: &YamlDocument) -> Vec<Declaration> {
    declare_all(DeclarationKind::IntentDeclaration, doc, block)
}

/// Classifies the `actions:` block.
#[must_use]
pub fn actions(block: &Node, doc: &YamlDocument) -> Vec<Declaration> {
    declare_all(DeclarationKind::ActionDeclaration, doc, block)
}

/// Classifies the `responses:` block; every key is a response.
#[must_use]
pub fn responses(block: &Node, doc: &YamlDocument) -> Vec<Declaration> {
    if block.as_mapping().is_none() {
        return Vec::new();
    }
    declare_all(DeclarationKind::ResponseDeclaration, doc, block)
}

/// Which conversational block a step list belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Story,
    Rule,
}

impl Flow {
    const fn label_key(self) -> &'static str {
        match self {
            Self::Story => "story",
            Self::Rule => "rule",
        }
    }

    const fn location(self) -> DeclarationKind {
        match self {
            Self::Story => DeclarationKind::StoryLocation,
            Self::Rule => DeclarationKind::RuleLocation,
        }
    }

    const fn intent(self) -> DeclarationKind {
        match self {
            Self::Story => DeclarationKind::IntentInStory,
            Self::Rule => DeclarationKind::IntentInRule,
        }
    }

    const fn action(self) -> DeclarationKind {
        match self {
            Self::Story => DeclarationKind::ActionInStory,
            Self::Rule => DeclarationKind::ActionInRule,
        }
    }
}

/// Classifies the `stories:` block.
///
/// Yields one [`DeclarationKind::StoryLocation`] per story followed by its
/// intent and action steps.
#[must_use]
pub fn stories(block: &Node, doc: &YamlDocument) -> Vec<Declaration> {
    flows(Flow::Story, block, doc)
}

/// Classifies the `rules:` block.
#[must_use]
pub fn rules(block: &Node, doc: &YamlDocument) -> Vec<Declaration> {
    flows(Flow::Rule, block, doc)
}

fn flows(flow: Flow, block: &Node, doc: &YamlDocument) -> Vec<Declaration> {
    let mut out = Vec::new();
    let Some(entries) = block.as_sequence() else {
        return out;
    };

    for entry in entries.iter() {
        let Some(map) = entry.as_mapping() else {
            continue;
        };
        if let Some(label) = locate_value(entry, flow.label_key(), doc) {
            out.push(declare(flow.location(), doc, label));
        }
        if let Some(steps) = map.get_node("steps") {
            walk_steps(flow, steps, doc, &mut out);
        }
    }
    out
}

fn walk_steps(flow: Flow, steps: &Node, doc: &YamlDocument, out: &mut Vec<Declaration>) {
    let Some(steps) = steps.as_sequence() else {
        return;
    };
    for step in steps.iter() {
        if let Some(intent) = locate_value(step, "intent", doc) {
            out.push(declare(flow.intent(), doc, intent));
        }
        if let Some(action) = locate_value(step, "action", doc) {
            out.push(declare(flow.action(), doc, action));
        }
        // `or:` groups alternative steps.
        if let Some(alternatives) = step.as_mapping().and_then(|m| m.get_node("or")) {
            walk_steps(flow, alternatives, doc, out);
        }
    }
}

/// Classifies the `nlu:` block.
///
/// Only entries with an `intent` key count; `synonym`, `regex`, and `lookup`
/// entries are ignored.
#[must_use]
pub fn nlu(block: &Node, doc: &YamlDocument) -> Vec<Declaration> {
    let Some(entries) = block.as_sequence() else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| locate_value(entry, "intent", doc))
        .map(|located| declare(DeclarationKind::IntentInNlu, doc, located))
        .collect()
}

/// Dispatches a top-level block to its classifier.
///
/// Returns `None` for keys that carry no declarations.
#[must_use]
pub fn block(key: &str, node: &Node, doc: &YamlDocument) -> Option<Vec<Declaration>> {
    let declarations = match key {
        "intents" => intents(node, doc),
        "actions" => actions(node, doc),
        "responses" => responses(node, doc),
        "stories" => stories(node, doc),
        "rules" => rules(node, doc),
        "nlu" => nlu(node, doc),
        _ => return None,
    };
    Some(declarations)
}
