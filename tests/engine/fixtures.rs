//! Shared project fixtures

use std::path::{Path, PathBuf};

use rasalint_engine::{AnalysisState, CheckConfig, MemorySource, load_project};

pub const ROOT: &str = "/bot";
pub const DOMAIN: &str = "/bot/domain.yml";
pub const NLU: &str = "/bot/data/nlu.yml";
pub const STORIES: &str = "/bot/data/stories.yml";
pub const RULES: &str = "/bot/data/rules.yml";

pub fn path(file: &str) -> PathBuf {
    PathBuf::from(file)
}

/// A small, fully consistent project.
pub fn clean_project() -> MemorySource {
    MemorySource::new()
        .with_file(
            DOMAIN,
            "\
version: \"3.1\"
intents:
  - greet
  - goodbye
responses:
  utter_greet:
    - text: Hey!
  utter_goodbye:
    - text: Bye
",
        )
        .with_file(
            NLU,
            "\
nlu:
  - intent: greet
    examples: |
      - hi
  - intent: goodbye
    examples: |
      - bye
",
        )
        .with_file(
            STORIES,
            "\
stories:
  - story: greet
    steps:
      - intent: greet
      - action: utter_greet
",
        )
        .with_file(
            RULES,
            "\
rules:
  - rule: goodbye
    steps:
      - intent: goodbye
      - action: utter_goodbye
",
        )
}

pub fn load(source: &MemorySource) -> AnalysisState {
    load_with(source, CheckConfig::default())
}

pub fn load_with(source: &MemorySource, config: CheckConfig) -> AnalysisState {
    load_project(Path::new(ROOT), source, config).unwrap().0
}

pub fn messages(state: &AnalysisState, file: &str) -> Vec<String> {
    state
        .diagnostics_for(Path::new(file))
        .iter()
        .map(|d| d.message.clone())
        .collect()
}
