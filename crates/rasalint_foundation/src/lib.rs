//! Core types for rasalint.
//!
//! This crate provides:
//! - [`Declaration`] - A typed, positioned symbol extracted from a YAML file
//! - [`DeclarationKind`] - The closed set of declaration and usage kinds
//! - [`Diagnostic`] - A position-anchored finding with a severity
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod declaration;
pub mod diagnostic;
pub mod error;

pub use declaration::{Corpus, Declaration, DeclarationKind, Position, Range};
pub use diagnostic::{Diagnostic, DiagnosticClass, Severity};
pub use error::{Error, ErrorContext, ErrorKind, Result};
