//! Configuration, cross-reference checks, trees, and incremental rescans.
//!
//! This crate provides:
//! - [`CheckConfig`] - Which classes of finding are reported, loaded from
//!   `rasalint.toml`
//! - [`CrossReference`] - The file-scoped validation passes
//! - [`DiagnosticStore`] - Current diagnostics per file, replaced wholesale
//! - [`DomainTree`] / [`TrainingDataTree`] - Browsable views of the corpora
//! - [`Controller`] - Handles one file event and returns state plus effects
//! - [`load_project`] - The initial full load

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod controller;
pub mod crossref;
pub mod loader;
pub mod source;
pub mod state;
pub mod tree;


pub use config::{CONFIG_FILE, CheckConfig, ErrorsConfig, ScanConfig, WarningsConfig};
pub use controller::{Controller, Effect, EventQueue, FileEvent};
pub use crossref::{CrossReference, DiagnosticStore};
pub use loader::{MARKER_FILE, ProjectRoot, load_project};
pub use source::{FsSource, MemorySource, SourceProvider};
pub use state::AnalysisState;
pub use tree::{
    DomainTree, JumpTarget, TrainingDataTree, Tree, TreeCategory, TreeItem, TreeKind, TreeNode,
    TreeSource, children,
};
