//! The incremental rescan controller.
//!
//! One handler per file event. Each takes the current [`AnalysisState`] and
//! the event and returns the updated state plus the [`Effect`]s a host should
//! apply: diagnostics to publish and trees to refresh.
//!
//! Per file, a save or create:
//! 1. re-extracts the file on every side it belongs to (a known contributor
//!    of that corpus, or carrying that corpus's top-level keys);
//! 2. rescans the file itself;
//! 3. rescans every file of the *other* corpus, since the changed
//!    declarations feed their checks.
//!
//! A file belonging to neither side is ignored.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use rasalint_foundation::Diagnostic;
use rasalint_model::ContributionStore;
use rasalint_syntax::{FileDeclarations, extract_source};
use tracing::{debug, info, warn};

use crate::source::SourceProvider;
use crate::state::AnalysisState;
use crate::tree::TreeKind;

// =============================================================================
// Events and Effects
// =============================================================================

/// A change to one file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FileEvent {
    /// An existing file was written.
    Saved(PathBuf),
    /// A new file appeared.
    Created(PathBuf),
    /// A file was removed.
    Deleted(PathBuf),
}

impl FileEvent {
    /// The file the event is about.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Saved(path) | Self::Created(path) | Self::Deleted(path) => path,
        }
    }
}

/// Something the host should do after an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Replace the displayed diagnostics of a file.
    Publish {
        /// The file.
        file: PathBuf,
        /// Its complete diagnostic set.
        diagnostics: Vec<Diagnostic>,
    },
    /// Re-pull a tree from the model.
    Refresh(TreeKind),
}

impl Effect {
    fn publish(state: &AnalysisState, file: &Path) -> Self {
        Self::Publish {
            file: file.to_path_buf(),
            diagnostics: state.diagnostics_for(file).to_vec(),
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Which corpora a file is (re)extracted into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Sides {
    domain: bool,
    training: bool,
}

impl Sides {
    fn known(state: &AnalysisState, file: &Path) -> Self {
        Self {
            domain: state.domain.contains(file),
            training: state.training.contains(file),
        }
    }

    const fn any(self) -> bool {
        self.domain || self.training
    }
}

/// Handles file events against a source of file contents.
#[derive(Clone, Debug, Default)]
pub struct Controller<P> {
    source: P,
}

impl<P: SourceProvider> Controller<P> {
    /// Creates a controller reading from `source`.
    #[must_use]
    pub fn new(source: P) -> Self {
        Self { source }
    }

    /// The source the controller reads from.
    #[must_use]
    pub fn source(&self) -> &P {
        &self.source
    }

    /// Mutable access to the source, for in-memory hosts that edit files.
    pub fn source_mut(&mut self) -> &mut P {
        &mut self.source
    }

    /// Handles one event.
    #[must_use]
    pub fn handle(&self, state: AnalysisState, event: &FileEvent) -> (AnalysisState, Vec<Effect>) {
        match event {
            FileEvent::Saved(path) | FileEvent::Created(path) => self.on_write(state, path),
            FileEvent::Deleted(path) => on_delete(state, path),
        }
    }

    fn on_write(&self, state: AnalysisState, file: &Path) -> (AnalysisState, Vec<Effect>) {
        let text = match self.source.read(file) {
            Ok(text) => text,
            Err(e) => {
                warn!(file = %file.display(), error = %e, "cannot read changed file, treating as deleted");
                return on_delete(state, file);
            }
        };
        let extracted = extract_source(file, &text);
        let known = Sides::known(&state, file);
        let sides = Sides {
            domain: known.domain || extracted.role.domain,
            training: known.training || extracted.role.training,
        };
        if !sides.any() {
            debug!(file = %file.display(), "ignoring file with no domain or training keys");
            return (state, Vec::new());
        }
        info!(
            file = %file.display(),
            domain = sides.domain,
            training = sides.training,
            "rescanning"
        );
        apply(state, file, sides, Some(extracted))
    }
}

fn on_delete(state: AnalysisState, file: &Path) -> (AnalysisState, Vec<Effect>) {
    let sides = Sides::known(&state, file);
    if !sides.any() {
        debug!(file = %file.display(), "ignoring deletion of untracked file");
        return (state, Vec::new());
    }
    info!(file = %file.display(), "removing contributions of deleted file");
    apply(state, file, sides, None)
}

/// Replaces the contributions of `file` on the given sides (with nothing when
/// `extracted` is `None`) and rescans what depends on them.
fn apply(
    mut state: AnalysisState,
    file: &Path,
    sides: Sides,
    extracted: Option<FileDeclarations>,
) -> (AnalysisState, Vec<Effect>) {
    let (domain, training) = match extracted {
        Some(FileDeclarations {
            domain, training, ..
        }) => (domain, training),
        None => (Vec::new(), Vec::new()),
    };
    if sides.domain {
        state.domain.replace_contributor(file, domain);
    }
    if sides.training {
        state.training.replace_contributor(file, training);
    }

    let mut changed = Vec::new();
    {
        let (xref, store) = state.split();
        store.replace(file, xref.scan_file(file));
        if sides.training {
            changed.extend(xref.scan_all_domain_files(store));
        }
        if sides.domain {
            changed.extend(xref.scan_all_training_data_files(store));
        }
    }

    let mut effects = vec![Effect::publish(&state, file)];
    changed.sort();
    changed.dedup();
    effects.extend(
        changed
            .iter()
            .filter(|other| other.as_path() != file)
            .map(|other| Effect::publish(&state, other)),
    );
    if sides.domain {
        effects.push(Effect::Refresh(TreeKind::Domain));
    }
    if sides.training {
        effects.push(Effect::Refresh(TreeKind::TrainingData));
    }
    (state, effects)
}

// =============================================================================
// Event Queue
// =============================================================================

/// A serial queue of file events.
///
/// Events are handled strictly one at a time, in arrival order. A new event
/// identical to the one at the back of the queue is dropped, so editors that
/// fire several notifications per save cause one rescan.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<FileEvent>,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues an event. Returns false if it was coalesced.
    pub fn push(&mut self, event: FileEvent) -> bool {
        if self.pending.back() == Some(&event) {
            return false;
        }
        self.pending.push_back(event);
        true
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Handles every pending event in order, returning the final state and
    /// the effects of all events concatenated.
    #[must_use]
    pub fn drain<P: SourceProvider>(
        &mut self,
        controller: &Controller<P>,
        mut state: AnalysisState,
    ) -> (AnalysisState, Vec<Effect>) {
        let mut effects = Vec::new();
        while let Some(event) = self.pending.pop_front() {
            let (next, produced) = controller.handle(state, &event);
            state = next;
            effects.extend(produced);
        }
        (state, effects)
    }
}
