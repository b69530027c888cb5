//! Error types for rasalint.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Extraction and cross-referencing never fail; these errors only come out
//! of the I/O-facing entry points (project loading, configuration, the CLI).

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for rasalint operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

/// Result type alias using the rasalint [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: &std::io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.as_ref().to_path_buf(),
            message: source.to_string(),
        })
    }

    /// Creates a YAML error for the given path.
    #[must_use]
    pub fn yaml(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Yaml {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        })
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Creates a "not a project" error for a directory without the marker file.
    #[must_use]
    pub fn not_a_project(root: impl AsRef<Path>) -> Self {
        Self::new(ErrorKind::NotAProject(root.as_ref().to_path_buf()))
    }

    /// Returns true if this error is an environment problem (no workspace,
    /// missing marker) rather than a failure while working.
    #[must_use]
    pub fn is_environment(&self) -> bool {
        matches!(self.kind, ErrorKind::NotAProject(_) | ErrorKind::NoWorkspace(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading or writing a file failed.
    #[error("i/o error on {}: {message}", .path.display())]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// A YAML document could not be parsed.
    #[error("yaml error in {}: {message}", .path.display())]
    Yaml {
        /// The offending document.
        path: PathBuf,
        /// The parser's message.
        message: String,
    },

    /// The configuration file is malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The directory has not been initialized as a project.
    #[error(
        "{} is not a rasalint project (run `rasalint init` to create the marker file)",
        .0.display()
    )]
    NotAProject(PathBuf),

    /// There is no project folder to work on.
    #[error("no project folder: {}", .0.display())]
    NoWorkspace(PathBuf),

    /// The interactive line editor failed.
    #[error("editor error: {0}")]
    Editor(String),

    /// The file watcher failed.
    #[error("watch error: {0}")]
    Watch(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file.
    pub source: Option<PathBuf>,
    /// Line number in source (zero-based).
    pub line: Option<u32>,
    /// Column number in source (zero-based).
    pub column: Option<u32>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {}", source.display())?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{}:{}", line + 1, col + 1)?;
            }
        }
        Ok(())
    }
}
