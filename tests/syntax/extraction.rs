//! Integration tests for extraction of positioned declarations

use std::fs;
use std::path::Path;

use rasalint_foundation::{Declaration, DeclarationKind, Position};
use rasalint_syntax::{FileRole, extract_file, extract_source};

fn summary(decls: &[Declaration]) -> Vec<(DeclarationKind, &str, Position, u32)> {
    decls
        .iter()
        .map(|d| (d.kind, d.name.as_str(), d.position, d.length))
        .collect()
}

// =============================================================================
// Domain files
// =============================================================================

const DOMAIN: &str = "\
version: \"3.1\"
intents:
  - greet
  - mood_unhappy:
      use_entities: []
actions:
  - action_check
responses:
  utter_greet:
    - text: Hey!
";

#[test]
fn domain_blocks() {
    let out = extract_source(Path::new("/bot/domain.yml"), DOMAIN);
    assert_eq!(
        out.role,
        FileRole {
            domain: true,
            training: false
        }
    );
    assert!(out.training.is_empty());
    assert_eq!(
        summary(&out.domain),
        vec![
            (DeclarationKind::IntentDeclaration, "greet", Position::new(2, 4), 5),
            (DeclarationKind::IntentDeclaration, "mood_unhappy", Position::new(3, 4), 12),
            (DeclarationKind::ActionDeclaration, "action_check", Position::new(6, 4), 12),
            (DeclarationKind::ResponseDeclaration, "utter_greet", Position::new(8, 2), 11),
        ]
    );
    assert!(out.domain.iter().all(|d| d.file == Path::new("/bot/domain.yml")));
}

#[test]
fn quoted_names_are_highlighted_without_quotes() {
    let text = "\
intents:
  - \"greet\"
  - 'goodbye'
responses:
  \"utter_greet\":
    - text: Hey!
nlu:
  - intent: \"greet\"
    examples: |
      - hi
";
    let out = extract_source(Path::new("/bot/domain.yml"), text);
    let lines: Vec<&str> = text.lines().collect();
    for decl in out.domain.iter().chain(&out.training) {
        let line = lines[decl.position.line as usize];
        let start = decl.position.column as usize;
        assert_eq!(&line[start..start + decl.length as usize], decl.name);
    }
    assert_eq!(out.domain[0].position, Position::new(1, 5));
    assert_eq!(out.training[0].position, Position::new(7, 13));
}

// =============================================================================
// Training data files
// =============================================================================

const STORIES: &str = "\
stories:
  - story: happy path
    steps:
      - intent: greet
      - or:
          - intent: affirm
          - intent: thanks
      - action: utter_greet
";

#[test]
fn story_steps_including_alternatives() {
    let out = extract_source(Path::new("/bot/data/stories.yml"), STORIES);
    assert!(out.role.training);
    assert!(!out.role.domain);
    assert_eq!(
        summary(&out.training),
        vec![
            (DeclarationKind::StoryLocation, "happy path", Position::new(1, 11), 10),
            (DeclarationKind::IntentInStory, "greet", Position::new(3, 16), 5),
            (DeclarationKind::IntentInStory, "affirm", Position::new(5, 20), 6),
            (DeclarationKind::IntentInStory, "thanks", Position::new(6, 20), 6),
            (DeclarationKind::ActionInStory, "utter_greet", Position::new(7, 16), 11),
        ]
    );
}

#[test]
fn rule_steps_use_rule_kinds() {
    let text = "rules:\n  - rule: bye\n    steps:\n      - intent: goodbye\n      - action: utter_goodbye\n";
    let out = extract_source(Path::new("/bot/data/rules.yml"), text);
    let kinds: Vec<_> = out.training.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DeclarationKind::RuleLocation,
            DeclarationKind::IntentInRule,
            DeclarationKind::ActionInRule,
        ]
    );
}

#[test]
fn nlu_ignores_synonyms() {
    let text = "\
nlu:
  - intent: greet
    examples: |
      - hi
  - synonym: savings
    examples: |
      - pink pig
";
    let out = extract_source(Path::new("/bot/data/nlu.yml"), text);
    assert_eq!(
        summary(&out.training),
        vec![(DeclarationKind::IntentInNlu, "greet", Position::new(1, 12), 5)]
    );
}

// =============================================================================
// Mixed, irrelevant, and broken files
// =============================================================================

#[test]
fn mixed_file_contributes_to_both_corpora() {
    let text = format!("{DOMAIN}nlu:\n  - intent: greet\n    examples: |\n      - hi\n");
    let out = extract_source(Path::new("/bot/all.yml"), &text);
    assert!(out.role.domain && out.role.training);
    assert_eq!(out.domain.len(), 4);
    assert_eq!(out.training.len(), 1);
}

#[test]
fn pipeline_config_is_irrelevant() {
    let out = extract_source(Path::new("/bot/config.yml"), "language: en\npipeline: []\n");
    assert!(!out.role.is_relevant());
    assert!(out.domain.is_empty() && out.training.is_empty());
}

#[test]
fn unparseable_file_contributes_nothing() {
    let out = extract_source(Path::new("/bot/domain.yml"), "intents: [\n");
    assert_eq!(out.role, FileRole::default());
    assert!(out.domain.is_empty());
}

#[test]
fn unexpected_shapes_are_skipped() {
    let text = "intents: greet_only\nstories: not-a-list\nresponses:\n  - utter_x\n";
    let out = extract_source(Path::new("/bot/domain.yml"), text);
    assert_eq!(
        summary(&out.domain),
        vec![(DeclarationKind::IntentDeclaration, "greet_only", Position::new(0, 9), 10)]
    );
    assert!(out.training.is_empty());
}

#[test]
fn extract_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("domain.yml");
    fs::write(&path, DOMAIN).unwrap();
    let out = extract_file(&path).unwrap();
    assert_eq!(out.file, path);
    assert_eq!(out.domain.len(), 4);

    assert!(extract_file(&dir.path().join("missing.yml")).is_err());
}
