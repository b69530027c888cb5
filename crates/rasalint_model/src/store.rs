//! The contract shared by both contribution stores.

use std::path::Path;

use rasalint_foundation::{Corpus, Declaration};

/// A store of declarations keyed by the file that contributed them.
///
/// Files are never patched: a contributor is reset to empty and then
/// repopulated from a fresh extraction. A reset file keeps its key so that
/// consumers holding the path can still look it up.
pub trait ContributionStore {
    /// The corpus this store holds.
    const CORPUS: Corpus;

    /// Ensures an entry exists for `file` and, if given, routes the
    /// declaration into the right list by its kind.
    ///
    /// Returns false if the declaration belongs to the other corpus; it is
    /// dropped.
    fn add_contribution(&mut self, file: &Path, declaration: Option<Declaration>) -> bool;

    /// Empties the entry for `file`. Does nothing for unknown files.
    fn reset_contributor(&mut self, file: &Path);

    /// Returns true if `file` has an entry (possibly empty).
    fn contains(&self, file: &Path) -> bool;

    /// Returns every contributing file, in path order.
    fn file_paths(&self) -> Vec<&Path>;

    /// Registers `file` as a contributor with no content yet.
    fn register(&mut self, file: &Path) {
        self.add_contribution(file, None);
    }

    /// Resets `file` and repopulates it, registering it first if needed.
    fn replace_contributor<I>(&mut self, file: &Path, declarations: I)
    where
        I: IntoIterator<Item = Declaration>,
    {
        self.register(file);
        self.reset_contributor(file);
        for declaration in declarations {
            self.add_contribution(file, Some(declaration));
        }
    }
}
