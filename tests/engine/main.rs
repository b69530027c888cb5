//! Integration tests for Layer 3: Engine
//!
//! Tests for configuration, cross-reference checks, incremental rescans,
//! and tree views.

mod config;
mod fixtures;
mod rescans;
