//! Cross-layer integration tests for rasalint
//!
//! Tests that drive whole projects on disk through the runtime layer.

mod fixtures;
mod project;
