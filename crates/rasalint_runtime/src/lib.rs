//! CLI, REPL, watch mode, and output rendering for rasalint.
//!
//! This crate provides:
//! - [`Session`] - One open project: state, trees, and the event queue
//! - [`Repl`] - Interactive loop issuing synthetic file events and queries
//! - [`ProjectWatcher`] - `notify`-backed watch mode
//! - [`render`] - Text and JSON output
//! - [`logging`] - `tracing` subscriber setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod logging;
pub mod render;
pub mod repl;
pub mod session;
pub mod watch;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Command, Repl, Reply};
pub use session::{Published, Session};
pub use watch::{ProjectWatcher, translate};
