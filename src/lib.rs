//! rasalint - Cross-reference checker for Rasa chatbot projects
//!
//! This crate re-exports all layers of the rasalint system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: rasalint_runtime    - CLI, REPL, watch mode, rendering, logging
//! Layer 3: rasalint_engine     - Config, cross-reference checks, trees, rescans
//! Layer 2: rasalint_model      - Domain and training data contribution stores
//! Layer 1: rasalint_syntax     - YAML documents, positions, classifiers, discovery
//! Layer 0: rasalint_foundation - Core types (Declaration, Diagnostic, Error)
//! ```

pub use rasalint_engine as engine;
pub use rasalint_foundation as foundation;
pub use rasalint_model as model;
pub use rasalint_runtime as runtime;
pub use rasalint_syntax as syntax;
