//! Whole-project checks through the public surface

use std::fs;

use rasalint::engine::{CONFIG_FILE, MARKER_FILE, ProjectRoot};
use rasalint::foundation::ErrorKind;
use rasalint::runtime::Session;
use rasalint::runtime::render::{diagnostics_json, diagnostics_text};

use crate::fixtures::{project, write};

#[test]
fn uninitialized_directory_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "domain.yml", "intents:\n  - greet\n");

    let err = Session::open(dir.path()).err().unwrap();
    assert!(matches!(err.kind, ErrorKind::NotAProject(_)));
    assert!(err.is_environment());
}

#[test]
fn init_writes_marker_once() {
    let dir = tempfile::tempdir().unwrap();
    ProjectRoot::init(dir.path()).unwrap();
    let marker = fs::read_to_string(dir.path().join(MARKER_FILE)).unwrap();
    ProjectRoot::init(dir.path()).unwrap();
    assert_eq!(fs::read_to_string(dir.path().join(MARKER_FILE)).unwrap(), marker);
}

#[test]
fn clean_project_reports_nothing() {
    let dir = project();
    let session = Session::open(dir.path()).unwrap();
    assert!(session.state().diagnostics.all().next().is_none());
    assert_eq!(
        diagnostics_text(session.state(), session.root()),
        "no problems found\n"
    );
}

#[test]
fn broken_file_does_not_hide_other_findings() {
    let dir = project();
    write(dir.path(), "data/broken.yml", "stories: [\n");
    write(
        dir.path(),
        "data/rules.yml",
        "rules:\n  - rule: r\n    steps:\n      - intent: ask_time\n",
    );

    let session = Session::open(dir.path()).unwrap();
    let text = diagnostics_text(session.state(), session.root());
    assert_eq!(
        text,
        "data/rules.yml:4:17: error: Intent ask_time has not been declared in the domain yet.\n\
         1 error, 0 warnings in 1 file\n"
    );
}

#[test]
fn config_file_gates_and_ignores() {
    let dir = project();
    fs::remove_file(dir.path().join("data/nlu.yml")).unwrap();
    write(dir.path(), "models/domain.yml", "intents:\n  - stale\n");
    write(
        dir.path(),
        CONFIG_FILE,
        "[warnings]\nshowWarningsForUntrainedIntents = false\n\n[scan]\nignore = [\"models\"]\n",
    );

    let session = Session::open(dir.path()).unwrap();
    assert_eq!(session.state().diagnostics.all().count(), 0);
    assert!(!session.state().domain.available_intents().contains(&"stale"));
}

#[test]
fn malformed_config_is_reported() {
    let dir = project();
    write(dir.path(), CONFIG_FILE, "[warnings]\nshowEverything = 1\n");
    let err = Session::open(dir.path()).err().unwrap();
    assert!(matches!(err.kind, ErrorKind::Config(_)));
}

#[test]
fn json_report_is_machine_readable() {
    let dir = project();
    write(dir.path(), "data/nlu.yml", "nlu:\n  - intent: greet\n    examples: |\n      - hi\n");

    let session = Session::open(dir.path()).unwrap();
    let json = diagnostics_json(session.state(), session.root()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["errors"], 0);
    assert_eq!(value["warnings"], 1);
    let diagnostic = &value["files"][0]["diagnostics"][0];
    assert_eq!(diagnostic["class"], "UntrainedIntent");
    assert_eq!(
        diagnostic["message"],
        "Intent goodbye has no training data associated in NLU."
    );
}

#[test]
fn repeated_loads_are_identical() {
    let dir = project();
    write(dir.path(), "data/rules.yml", "rules:\n  - rule: r\n    steps:\n      - action: action_x\n");
    let first = Session::open(dir.path()).unwrap();
    let second = Session::open(dir.path()).unwrap();
    assert_eq!(first.state(), second.state());
}
