//! The position extractor.
//!
//! Turns the children of a declaration block into `(name, position, length)`
//! records. `marked-yaml` markers are 1-based; positions here are zero-based.
//! Items without a usable start marker are skipped, never reported.
//!
//! A quoted scalar's marker sits on its opening quote. The located position
//! is moved onto the first character of the name, so that the range always
//! covers exactly the unquoted text.

use marked_yaml::Node;
use marked_yaml::types::MarkedScalarNode;
use rasalint_foundation::Position;

use crate::document::YamlDocument;

/// A located token: the name and where it sits in the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Located {
    /// The token text.
    pub name: String,
    /// Zero-based start of the token.
    pub position: Position,
    /// Character length of the token.
    pub length: u32,
}

/// Locates a single scalar.
///
/// Returns `None` for empty or null scalars and scalars without a start
/// marker.
#[must_use]
pub fn locate_scalar(scalar: &MarkedScalarNode, doc: &YamlDocument) -> Option<Located> {
    let name = scalar.as_str();
    if name.is_empty() || name == "~" {
        return None;
    }
    let marker = scalar.span().start()?;
    let line = u32::try_from(marker.line().checked_sub(1)?).ok()?;
    let column = u32::try_from(marker.column().checked_sub(1)?).ok()?;
    let mut position = Position::new(line, column);
    if matches!(doc.char_at(position), Some('"' | '\'')) {
        position.column += 1;
    }
    let length = u32::try_from(name.chars().count()).ok()?;
    Some(Located {
        name: name.to_string(),
        position,
        length,
    })
}

/// Locates every entry of a declaration block.
///
/// - a sequence of scalars (`- greet`) yields each scalar;
/// - a sequence of mappings (`- greet: {use_entities: []}`) yields each
///   mapping's first key;
/// - a mapping (`responses: {utter_greet: ...}`) yields each key;
/// - a lone scalar yields itself.
#[must_use]
pub fn locate(block: &Node, doc: &YamlDocument) -> Vec<Located> {
    match block {
        Node::Scalar(scalar) => locate_scalar(scalar, doc).into_iter().collect(),
        Node::Sequence(items) => items.iter().filter_map(|i| locate_item(i, doc)).collect(),
        Node::Mapping(map) => map.keys().filter_map(|k| locate_scalar(k, doc)).collect(),
    }
}

/// Locates the scalar value under `key` in a single-key mapping item such as
/// `- intent: greet`.
#[must_use]
pub fn locate_value(item: &Node, key: &str, doc: &YamlDocument) -> Option<Located> {
    let scalar = item.as_mapping()?.get_scalar(key)?;
    locate_scalar(scalar, doc)
}

fn locate_item(item: &Node, doc: &YamlDocument) -> Option<Located> {
    match item {
        Node::Scalar(scalar) => locate_scalar(scalar, doc),
        Node::Mapping(map) => map.keys().next().and_then(|k| locate_scalar(k, doc)),
        Node::Sequence(_) => None,
    }
}
