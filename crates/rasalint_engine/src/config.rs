//! Configuration for the cross-reference checks.
//!
//! Read from an optional `rasalint.toml` at the project root:
//!
//! ```toml
//! [warnings]
//! showWarningsForUnusedIntents = true
//! showWarningsForUntrainedIntents = false
//!
//! [errors]
//! showErrorsForUndeclaredNLU = true
//!
//! [scan]
//! ignore = [".git", "models"]
//! ```
//!
//! Every option defaults to enabled; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use rasalint_foundation::{DiagnosticClass, Error, Result};
use rasalint_syntax::DEFAULT_IGNORE;
use serde::Deserialize;
use tracing::debug;

/// Name of the configuration file looked up at the project root.
pub const CONFIG_FILE: &str = "rasalint.toml";

const fn enabled() -> bool {
    true
}

/// Gates for the warning-severity classes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WarningsConfig {
    /// Warn about declared intents no story or rule uses.
    #[serde(default = "enabled")]
    pub show_warnings_for_unused_intents: bool,
    /// Warn about declared intents without NLU examples.
    #[serde(default = "enabled")]
    pub show_warnings_for_untrained_intents: bool,
    /// Warn about declared actions and responses no story or rule uses.
    #[serde(default = "enabled")]
    pub show_warnings_for_unused_actions: bool,
}

impl Default for WarningsConfig {
    fn default() -> Self {
        Self {
            show_warnings_for_unused_intents: true,
            show_warnings_for_untrained_intents: true,
            show_warnings_for_unused_actions: true,
        }
    }
}

/// Gates for the error-severity classes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ErrorsConfig {
    /// Report NLU entries for undeclared intents.
    #[serde(default = "enabled", rename = "showErrorsForUndeclaredNLU")]
    pub show_errors_for_undeclared_nlu: bool,
    /// Report story and rule steps naming undeclared intents.
    #[serde(default = "enabled")]
    pub show_errors_for_undeclared_intents: bool,
    /// Report story and rule steps naming undeclared actions.
    #[serde(default = "enabled")]
    pub show_errors_for_undeclared_actions: bool,
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            show_errors_for_undeclared_nlu: true,
            show_errors_for_undeclared_intents: true,
            show_errors_for_undeclared_actions: true,
        }
    }
}

/// File discovery options.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Directory names skipped during discovery.
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,
}

fn default_ignore() -> Vec<String> {
    DEFAULT_IGNORE.iter().map(ToString::to_string).collect()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore: default_ignore(),
        }
    }
}

/// Configuration for a check run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Warning gates.
    pub warnings: WarningsConfig,
    /// Error gates.
    pub errors: ErrorsConfig,
    /// Discovery options.
    pub scan: ScanConfig,
}

impl CheckConfig {
    /// Creates a configuration that reports errors only.
    #[must_use]
    pub fn errors_only() -> Self {
        Self::default()
            .with_class(DiagnosticClass::UnusedIntent, false)
            .with_class(DiagnosticClass::UntrainedIntent, false)
            .with_class(DiagnosticClass::UnusedAction, false)
    }

    /// Returns true if findings of `class` should be reported.
    #[must_use]
    pub const fn is_enabled(&self, class: DiagnosticClass) -> bool {
        match class {
            DiagnosticClass::UnusedIntent => self.warnings.show_warnings_for_unused_intents,
            DiagnosticClass::UntrainedIntent => self.warnings.show_warnings_for_untrained_intents,
            DiagnosticClass::UnusedAction => self.warnings.show_warnings_for_unused_actions,
            DiagnosticClass::UndeclaredNluIntent => self.errors.show_errors_for_undeclared_nlu,
            DiagnosticClass::UndeclaredIntent => self.errors.show_errors_for_undeclared_intents,
            DiagnosticClass::UndeclaredAction => self.errors.show_errors_for_undeclared_actions,
        }
    }

    /// Builder method to enable or disable one class of finding.
    #[must_use]
    pub fn with_class(mut self, class: DiagnosticClass, enabled: bool) -> Self {
        let gate = match class {
            DiagnosticClass::UnusedIntent => &mut self.warnings.show_warnings_for_unused_intents,
            DiagnosticClass::UntrainedIntent => {
                &mut self.warnings.show_warnings_for_untrained_intents
            }
            DiagnosticClass::UnusedAction => &mut self.warnings.show_warnings_for_unused_actions,
            DiagnosticClass::UndeclaredNluIntent => &mut self.errors.show_errors_for_undeclared_nlu,
            DiagnosticClass::UndeclaredIntent => {
                &mut self.errors.show_errors_for_undeclared_intents
            }
            DiagnosticClass::UndeclaredAction => {
                &mut self.errors.show_errors_for_undeclared_actions
            }
        };
        *gate = enabled;
        self
    }

    /// Builder method to set the ignored directory names.
    #[must_use]
    pub fn with_ignore<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scan.ignore = names.into_iter().map(Into::into).collect();
        self
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the text is not valid TOML or has unknown
    /// keys or mistyped values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config(e.to_string()))
    }

    /// Path of the configuration file for a project root.
    #[must_use]
    pub fn path_for(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    /// Loads the configuration of a project, falling back to defaults when
    /// there is no `rasalint.toml`.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the file exists but cannot be read, and a
    /// `Config` error if it is malformed.
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::path_for(root);
        if !path.is_file() {
            debug!(root = %root.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path).map_err(|e| Error::io(&path, &e))?;
        toml::from_str(&text).map_err(|e| Error::config(format!("{}: {e}", path.display())))
    }
}
