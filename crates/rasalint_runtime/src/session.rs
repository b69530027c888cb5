//! Session state shared by the CLI commands.
//!
//! A session owns the analysis state of one project, the two tree views, and
//! the event queue. It is the only place effects are applied: trees are
//! refreshed here, and published diagnostics are handed back to the caller
//! for display.

use std::path::{Path, PathBuf};

use rasalint_engine::{
    AnalysisState, CheckConfig, Controller, DomainTree, Effect, EventQueue, FileEvent, FsSource,
    ProjectRoot, SourceProvider, TrainingDataTree, TreeKind, load_project,
};
use rasalint_foundation::{Diagnostic, Result};
use tracing::debug;

/// Diagnostics to display after handling events: the latest set per file.
pub type Published = Vec<(PathBuf, Vec<Diagnostic>)>;

/// An open project.
pub struct Session<P: SourceProvider = FsSource> {
    /// The project directory.
    root: PathBuf,

    /// Reads files on each event.
    controller: Controller<P>,

    /// Both corpora and the current diagnostics.
    state: AnalysisState,

    /// Events waiting to be handled.
    queue: EventQueue,

    /// Domain tree view.
    domain_tree: DomainTree,

    /// Training data tree view.
    training_tree: TrainingDataTree,
}

impl Session<FsSource> {
    /// Opens an initialized project from disk and runs the initial load.
    ///
    /// # Errors
    ///
    /// Returns an environment error if `root` is missing or has no marker
    /// file, a `Config` error if `rasalint.toml` is malformed, and an `Io`
    /// error if the directory cannot be listed.
    pub fn open(root: &Path) -> Result<Self> {
        let project = ProjectRoot::open(root)?;
        let config = project.config()?;
        Self::load(project.path(), FsSource, config)
    }
}

impl<P: SourceProvider> Session<P> {
    /// Runs the initial load of `root` from an arbitrary source.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` cannot be listed.
    pub fn load(root: &Path, source: P, config: CheckConfig) -> Result<Self> {
        let (state, _) = load_project(root, &source, config)?;
        Ok(Self {
            root: root.to_path_buf(),
            domain_tree: DomainTree::new(&state.domain),
            training_tree: TrainingDataTree::new(&state.training),
            controller: Controller::new(source),
            state,
            queue: EventQueue::new(),
        })
    }

    /// The project directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The current analysis state.
    #[must_use]
    pub const fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// The domain tree view.
    #[must_use]
    pub const fn domain_tree(&self) -> &DomainTree {
        &self.domain_tree
    }

    /// The training data tree view.
    #[must_use]
    pub const fn training_tree(&self) -> &TrainingDataTree {
        &self.training_tree
    }

    /// The source files are read from.
    #[must_use]
    pub fn source(&self) -> &P {
        self.controller.source()
    }

    /// Mutable access to the source.
    pub fn source_mut(&mut self) -> &mut P {
        self.controller.source_mut()
    }

    /// Queues an event without handling it.
    pub fn submit(&mut self, event: FileEvent) {
        if !self.queue.push(event) {
            debug!("coalesced duplicate event");
        }
    }

    /// Handles every queued event, refreshes the trees they touched, and
    /// returns the diagnostics to publish, latest set per file.
    pub fn process(&mut self) -> Published {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = self.queue.drain(&self.controller, state);
        self.state = state;
        self.apply(effects)
    }

    /// Queues and handles a single event.
    pub fn handle(&mut self, event: FileEvent) -> Published {
        self.submit(event);
        self.process()
    }

    fn apply(&mut self, effects: Vec<Effect>) -> Published {
        let mut published = Published::new();
        for effect in effects {
            match effect {
                Effect::Publish { file, diagnostics } => {
                    if let Some(slot) = published.iter_mut().find(|(f, _)| *f == file) {
                        slot.1 = diagnostics;
                    } else {
                        published.push((file, diagnostics));
                    }
                }
                Effect::Refresh(TreeKind::Domain) => self.domain_tree.refresh(&self.state.domain),
                Effect::Refresh(TreeKind::TrainingData) => {
                    self.training_tree.refresh(&self.state.training);
                }
            }
        }
        published
    }
}
