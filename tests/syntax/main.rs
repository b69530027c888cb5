//! Integration tests for Layer 1: Syntax
//!
//! Tests for discovery and per-file extraction of positioned declarations.

mod extraction;
