//! Parsed YAML documents.
//!
//! Wraps `marked-yaml`, which keeps a start marker on every node so that
//! declarations can be traced back to a line and column.

use std::path::{Path, PathBuf};

use marked_yaml::{LoadError, Marker, Node};
use rasalint_foundation::{Error, ErrorContext, Position, Result};

/// A YAML file parsed into a marked node tree.
#[derive(Debug, Clone)]
pub struct YamlDocument {
    path: PathBuf,
    root: Node,
    text: String,
    line_starts: Vec<usize>,
}

impl YamlDocument {
    /// Parses `text` as the contents of `path`.
    ///
    /// # Errors
    ///
    /// Returns a YAML error if the text is not valid YAML or its top level is
    /// not a mapping. The error's context carries the parser's position when
    /// it reports one.
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Result<Self> {
        let path = path.into();
        let root = marked_yaml::parse_yaml(0, text).map_err(|e| load_error(&path, &e))?;
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Ok(Self {
            path,
            root,
            text: text.to_string(),
            line_starts,
        })
    }

    /// Returns the path this document was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the character at a zero-based position of the source text.
    #[must_use]
    pub fn char_at(&self, position: Position) -> Option<char> {
        let start = *self.line_starts.get(position.line as usize)?;
        let line = self.text[start..].lines().next()?;
        line.chars().nth(position.column as usize)
    }

    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the top-level keys in document order.
    #[must_use]
    pub fn top_level_keys(&self) -> Vec<&str> {
        self.root
            .as_mapping()
            .map(|map| map.keys().map(|key| key.as_str()).collect())
            .unwrap_or_default()
    }

    /// Returns true if the document has the given top-level key.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.block(key).is_some()
    }

    /// Returns the node under a top-level key.
    #[must_use]
    pub fn block(&self, key: &str) -> Option<&Node> {
        self.root.as_mapping()?.get_node(key)
    }
}

fn load_error(path: &Path, error: &LoadError) -> Error {
    let mut context = ErrorContext::new().with_source(path);
    if let Some(position) = error_marker(error).and_then(zero_based) {
        context = context.with_position(position.line, position.column);
    }
    Error::yaml(path, error.to_string()).with_context(context)
}

fn error_marker(error: &LoadError) -> Option<Marker> {
    match error {
        LoadError::TopLevelMustBeMapping(marker)
        | LoadError::UnexpectedAnchor(marker)
        | LoadError::MappingKeyMustBeScalar(marker)
        | LoadError::UnexpectedTag(marker)
        | LoadError::ScanError(marker, _) => Some(*marker),
        LoadError::DuplicateKey(keys) => keys.key.span().start().copied(),
        _ => None,
    }
}

// Markers are 1-based.
fn zero_based(marker: Marker) -> Option<Position> {
    let line = u32::try_from(marker.line().checked_sub(1)?).ok()?;
    let column = u32::try_from(marker.column().checked_sub(1)?).ok()?;
    Some(Position::new(line, column))
}
