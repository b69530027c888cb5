//! Integration tests for the training data store

use std::path::Path;

use rasalint_model::{ContributionStore, TrainingData};
use rasalint_syntax::extract_source;

fn load(training: &mut TrainingData, file: &str, text: &str) {
    let path = Path::new(file);
    training.replace_contributor(path, extract_source(path, text).training);
}

const STORIES: &str = "\
stories:
  - story: greet path
    steps:
      - intent: greet
      - action: utter_greet
";

const RULES: &str = "\
rules:
  - rule: say bye
    steps:
      - intent: goodbye
      - action: utter_goodbye
";

const NLU: &str = "\
nlu:
  - intent: greet
    examples: |
      - hi
  - intent: goodbye
    examples: |
      - bye
";

#[test]
fn stories_and_rules_both_count_as_usage() {
    let mut training = TrainingData::new();
    load(&mut training, "/bot/data/rules.yml", RULES);
    load(&mut training, "/bot/data/stories.yml", STORIES);

    // Path order: rules.yml sorts before stories.yml.
    assert_eq!(training.used_intents(), vec!["goodbye", "greet"]);
    assert_eq!(training.used_actions(), vec!["utter_goodbye", "utter_greet"]);
    assert!(training.trained_intents().is_empty());
}

#[test]
fn nlu_examples_count_as_training_not_usage() {
    let mut training = TrainingData::new();
    load(&mut training, "/bot/data/nlu.yml", NLU);

    assert_eq!(training.trained_intents(), vec!["greet", "goodbye"]);
    assert!(training.used_intents().is_empty());
    assert_eq!(training.nlu_entries().count(), 2);
}

#[test]
fn locations_are_kept_per_flow() {
    let mut training = TrainingData::new();
    load(&mut training, "/bot/data/stories.yml", STORIES);
    load(&mut training, "/bot/data/rules.yml", RULES);

    let stories: Vec<_> = training.story_locations().map(|d| d.name.as_str()).collect();
    let rules: Vec<_> = training.rule_locations().map(|d| d.name.as_str()).collect();
    assert_eq!(stories, vec!["greet path"]);
    assert_eq!(rules, vec!["say bye"]);
}

#[test]
fn contribution_view_per_file() {
    let mut training = TrainingData::new();
    load(&mut training, "/bot/data/stories.yml", STORIES);

    let contribution = training.contribution(Path::new("/bot/data/stories.yml")).unwrap();
    assert_eq!(contribution.stories.intents.len(), 1);
    assert_eq!(contribution.stories.actions.len(), 1);
    assert!(contribution.rules.intents.is_empty());
    assert!(training.contribution(Path::new("/bot/data/rules.yml")).is_none());
}

#[test]
fn emptied_file_stays_registered() {
    let mut training = TrainingData::new();
    load(&mut training, "/bot/data/stories.yml", STORIES);
    load(&mut training, "/bot/data/stories.yml", "stories: []\n");

    assert!(training.contains(Path::new("/bot/data/stories.yml")));
    assert!(training.is_empty());
}
