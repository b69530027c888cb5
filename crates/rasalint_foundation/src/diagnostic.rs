//! Position-anchored findings.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::declaration::{Declaration, Range};

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Something is used but never declared.
    Error,
    /// Something is declared but never used or trained.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// The six independently configurable classes of finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum DiagnosticClass {
    /// A declared intent no story or rule uses.
    UnusedIntent,
    /// A declared intent with no NLU examples.
    UntrainedIntent,
    /// A declared action or response no story or rule uses.
    UnusedAction,
    /// An NLU entry for an intent the domain does not declare.
    UndeclaredNluIntent,
    /// A story or rule step naming an intent the domain does not declare.
    UndeclaredIntent,
    /// A story or rule step naming an action the domain does not declare.
    UndeclaredAction,
}

impl DiagnosticClass {
    /// Returns the severity findings of this class are reported with.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::UnusedIntent | Self::UntrainedIntent | Self::UnusedAction => Severity::Warning,
            Self::UndeclaredNluIntent | Self::UndeclaredIntent | Self::UndeclaredAction => {
                Severity::Error
            }
        }
    }
}

/// A finding anchored to a range of one file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Diagnostic {
    /// The highlighted range.
    pub range: Range,
    /// Human-readable message.
    pub message: String,
    /// Error or warning.
    pub severity: Severity,
    /// Which configurable class produced this finding.
    pub class: DiagnosticClass,
}

impl Diagnostic {
    /// Creates a diagnostic of the given class covering a declaration's token.
    #[must_use]
    pub fn at(declaration: &Declaration, class: DiagnosticClass, message: impl Into<String>) -> Self {
        Self {
            range: declaration.range(),
            message: message.into(),
            severity: class.severity(),
            class,
        }
    }

    /// Returns true for error-severity diagnostics.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.range.start, self.severity, self.message)
    }
}
