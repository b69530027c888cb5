//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use std::path::PathBuf;

use rasalint_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn not_a_project_points_at_init() {
    let err = Error::not_a_project("/bot");
    assert!(matches!(err.kind, ErrorKind::NotAProject(_)));
    let msg = err.to_string();
    assert!(msg.contains("/bot"));
    assert!(msg.contains("rasalint init"));
}

#[test]
fn config_error_message() {
    let err = Error::config("unknown field `colour`");
    assert_eq!(err.to_string(), "configuration error: unknown field `colour`");
}

#[test]
fn yaml_error_mentions_file() {
    let err = Error::yaml("/bot/domain.yml", "did not find expected node content");
    let msg = err.to_string();
    assert!(msg.starts_with("yaml error in /bot/domain.yml"));
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn environment_errors() {
    assert!(Error::not_a_project("/bot").is_environment());
    assert!(Error::new(ErrorKind::NoWorkspace(PathBuf::from("/nope"))).is_environment());
}

#[test]
fn working_errors_are_not_environment() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    assert!(!Error::io("/bot/domain.yml", &io).is_environment());
    assert!(!Error::config("bad").is_environment());
    assert!(!Error::new(ErrorKind::Watch("gone".into())).is_environment());
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn context_without_source_is_empty() {
    let ctx = ErrorContext::new().with_position(1, 1);
    assert_eq!(ctx.to_string(), "");
}

#[test]
fn context_is_optional() {
    let err = Error::config("x");
    assert!(err.context.is_none());
    let err = err.with_context(ErrorContext::new().with_source("rasalint.toml"));
    assert_eq!(err.context.unwrap().to_string(), "at rasalint.toml");
}
