//! Integration tests for configuration loading and gating

use std::fs;

use rasalint_engine::{CONFIG_FILE, CheckConfig};
use rasalint_foundation::{DiagnosticClass, ErrorKind};

use crate::fixtures::{NLU, STORIES, clean_project, load_with, messages};

#[test]
fn defaults_enable_everything() {
    let config = CheckConfig::default();
    for class in [
        DiagnosticClass::UnusedIntent,
        DiagnosticClass::UntrainedIntent,
        DiagnosticClass::UnusedAction,
        DiagnosticClass::UndeclaredNluIntent,
        DiagnosticClass::UndeclaredIntent,
        DiagnosticClass::UndeclaredAction,
    ] {
        assert!(config.is_enabled(class), "{class:?}");
    }
    assert!(config.scan.ignore.contains(&".git".to_string()));
}

#[test]
fn toml_uses_camel_case_keys() {
    let config = CheckConfig::from_toml_str(
        "\
[warnings]
showWarningsForUntrainedIntents = false

[errors]
showErrorsForUndeclaredNLU = false
",
    )
    .unwrap();
    assert!(!config.is_enabled(DiagnosticClass::UntrainedIntent));
    assert!(!config.is_enabled(DiagnosticClass::UndeclaredNluIntent));
    assert!(config.is_enabled(DiagnosticClass::UnusedIntent));
    assert!(config.is_enabled(DiagnosticClass::UndeclaredAction));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = CheckConfig::from_toml_str("[warnings]\nshowEverything = true\n").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Config(_)));
}

#[test]
fn load_reads_project_file() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(CheckConfig::load(dir.path()).unwrap(), CheckConfig::default());

    fs::write(dir.path().join(CONFIG_FILE), "[scan]\nignore = [\"models\"]\n").unwrap();
    let config = CheckConfig::load(dir.path()).unwrap();
    assert_eq!(config.scan.ignore, vec!["models".to_string()]);

    fs::write(dir.path().join(CONFIG_FILE), "[scan\n").unwrap();
    let err = CheckConfig::load(dir.path()).unwrap_err();
    assert!(err.to_string().contains(CONFIG_FILE));
}

#[test]
fn disabled_classes_are_not_reported() {
    let mut source = clean_project();
    source.insert(
        STORIES,
        "stories:\n  - story: s\n    steps:\n      - intent: book_flight\n      - action: action_book\n",
    );
    source.insert(NLU, "nlu:\n  - intent: chitchat\n    examples: |\n      - hm\n");

    let config = CheckConfig::default()
        .with_class(DiagnosticClass::UndeclaredIntent, false)
        .with_class(DiagnosticClass::UndeclaredNluIntent, false);
    let state = load_with(&source, config);

    assert_eq!(
        messages(&state, STORIES),
        vec!["Action action_book has not been declared in the domain yet."]
    );
    assert!(messages(&state, NLU).is_empty());
}

#[test]
fn errors_only_hides_warnings() {
    let mut source = clean_project();
    source.remove(std::path::Path::new(NLU));
    let state = load_with(&source, CheckConfig::errors_only());
    assert_eq!(state.diagnostics.warning_count(), 0);
}
