//! Watch mode: file-system events in, rescans out.
//!
//! A `notify` watcher runs on its own thread and forwards raw events over a
//! channel. [`translate`] turns each raw event into zero or more
//! [`FileEvent`]s; the session queue coalesces and applies them in order.

use std::path::{Component, Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use notify::event::{EventKind, ModifyKind};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use rasalint_engine::{FileEvent, SourceProvider};
use rasalint_foundation::{Error, ErrorKind, Result};
use rasalint_syntax::is_yaml_path;
use tracing::{debug, warn};

use crate::session::{Published, Session};

/// How long to keep collecting after the first event of a burst.
pub const SETTLE_TIME: Duration = Duration::from_millis(150);

/// Converts one raw watcher event into file events.
///
/// Only YAML files under `root` count, and nothing inside an ignored
/// directory. Modifications are saves unless the file is gone by the time
/// the event is seen; renames become a delete of the old name and a create
/// of the new one.
#[must_use]
pub fn translate(event: &Event, root: &Path, ignore: &[String]) -> Vec<FileEvent> {
    event
        .paths
        .iter()
        .filter(|path| is_yaml_path(path) && !is_ignored(path, root, ignore))
        .filter_map(|path| {
            let path = path.clone();
            match event.kind {
                EventKind::Create(_) => Some(FileEvent::Created(path)),
                EventKind::Remove(_) => Some(FileEvent::Deleted(path)),
                EventKind::Modify(ModifyKind::Name(_)) => Some(if path.exists() {
                    FileEvent::Created(path)
                } else {
                    FileEvent::Deleted(path)
                }),
                EventKind::Modify(_) => Some(if path.exists() {
                    FileEvent::Saved(path)
                } else {
                    FileEvent::Deleted(path)
                }),
                EventKind::Access(_) | EventKind::Any | EventKind::Other => None,
            }
        })
        .collect()
}

fn is_ignored(path: &Path, root: &Path, ignore: &[String]) -> bool {
    let Ok(rel) = path.strip_prefix(root) else {
        return true;
    };
    rel.components().any(|c| match c {
        Component::Normal(name) => ignore.iter().any(|i| name == i.as_str()),
        _ => false,
    })
}

/// A recursive watcher over one project directory.
pub struct ProjectWatcher {
    // Dropping the watcher stops the notification thread.
    _watcher: RecommendedWatcher,
    events: Receiver<notify::Result<Event>>,
    root: PathBuf,
    ignore: Vec<String>,
}

impl ProjectWatcher {
    /// Starts watching `root` recursively.
    ///
    /// # Errors
    ///
    /// Returns a `Watch` error if the platform watcher cannot be created or
    /// the directory cannot be watched.
    pub fn new(root: &Path, ignore: Vec<String>) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                let _ = tx.send(res);
            },
            notify::Config::default(),
        )
        .map_err(watch_error)?;
        watcher
            .watch(root, RecursiveMode::Recursive)
            .map_err(watch_error)?;

        Ok(Self {
            _watcher: watcher,
            events: rx,
            root: root.to_path_buf(),
            ignore,
        })
    }

    /// Blocks until at least one relevant event arrives, then keeps
    /// collecting until the directory has been quiet for [`SETTLE_TIME`].
    ///
    /// # Errors
    ///
    /// Returns a `Watch` error if the watcher thread has gone away.
    pub fn next_batch(&self) -> Result<Vec<FileEvent>> {
        let mut batch = Vec::new();
        while batch.is_empty() {
            let raw = self
                .events
                .recv()
                .map_err(|e| Error::new(ErrorKind::Watch(e.to_string())))?;
            self.collect(raw, &mut batch);
        }
        loop {
            match self.events.recv_timeout(SETTLE_TIME) {
                Ok(raw) => self.collect(raw, &mut batch),
                Err(RecvTimeoutError::Timeout) => return Ok(batch),
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(Error::new(ErrorKind::Watch(
                        "watcher disconnected".to_string(),
                    )));
                }
            }
        }
    }

    fn collect(&self, raw: notify::Result<Event>, batch: &mut Vec<FileEvent>) {
        match raw {
            Ok(event) => {
                let events = translate(&event, &self.root, &self.ignore);
                debug!(kind = ?event.kind, count = events.len(), "watch event");
                batch.extend(events);
            }
            Err(e) => warn!(error = %e, "watcher reported an error"),
        }
    }
}

fn watch_error(e: notify::Error) -> Error {
    Error::new(ErrorKind::Watch(e.to_string()))
}

/// Feeds watcher batches through `session` forever, handing each set of
/// published diagnostics to `on_publish`.
///
/// # Errors
///
/// Returns when the watcher fails.
pub fn run<P: SourceProvider>(
    session: &mut Session<P>,
    watcher: &ProjectWatcher,
    mut on_publish: impl FnMut(&Published),
) -> Result<()> {
    loop {
        for event in watcher.next_batch()? {
            session.submit(event);
        }
        let published = session.process();
        if !published.is_empty() {
            on_publish(&published);
        }
    }
}
