//! Integration tests for the incremental rescan controller

use std::path::Path;

use rasalint_engine::{Controller, Effect, EventQueue, FileEvent, TreeKind};
use rasalint_model::ContributionStore;

use crate::fixtures::{DOMAIN, NLU, RULES, STORIES, clean_project, load, messages, path};

fn published(effects: &[Effect]) -> Vec<&Path> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Publish { file, .. } => Some(file.as_path()),
            Effect::Refresh(_) => None,
        })
        .collect()
}

fn refreshed(effects: &[Effect]) -> Vec<TreeKind> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Refresh(kind) => Some(*kind),
            Effect::Publish { .. } => None,
        })
        .collect()
}

// =============================================================================
// Saves
// =============================================================================

#[test]
fn saving_a_story_rescans_it_and_the_domain() {
    let source = clean_project();
    let state = load(&source);
    let mut after = source.clone();
    after.insert(
        STORIES,
        "stories:\n  - story: greet\n    steps:\n      - intent: greet\n      - action: utter_hello\n",
    );

    let (state, effects) = Controller::new(after).handle(state, &FileEvent::Saved(path(STORIES)));

    assert_eq!(
        messages(&state, STORIES),
        vec!["Action utter_hello has not been declared in the domain yet."]
    );
    assert_eq!(
        messages(&state, DOMAIN),
        vec!["Response utter_greet is not being used in any rule or story."]
    );
    assert_eq!(published(&effects), vec![Path::new(STORIES), Path::new(DOMAIN)]);
    assert_eq!(refreshed(&effects), vec![TreeKind::TrainingData]);
}

#[test]
fn saving_the_domain_rescans_all_training_data() {
    let source = clean_project();
    let state = load(&source);
    let mut after = source.clone();
    after.insert(DOMAIN, "intents:\n  - greet\nresponses:\n  utter_greet:\n    - text: Hey!\n");

    let (state, effects) = Controller::new(after).handle(state, &FileEvent::Saved(path(DOMAIN)));

    assert_eq!(
        messages(&state, RULES),
        vec![
            "Intent goodbye has not been declared in the domain yet.",
            "Action utter_goodbye has not been declared in the domain yet.",
        ]
    );
    assert_eq!(
        messages(&state, NLU),
        vec!["Intent goodbye has not been declared in the domain yet."]
    );
    assert!(messages(&state, STORIES).is_empty());
    assert_eq!(
        published(&effects),
        vec![Path::new(DOMAIN), Path::new(NLU), Path::new(RULES)]
    );
    assert_eq!(refreshed(&effects), vec![TreeKind::Domain]);
}

#[test]
fn saving_an_irrelevant_file_does_nothing() {
    let source = clean_project().with_file("/bot/config.yml", "pipeline: []\n");
    let state = load(&source);
    let (after, effects) =
        Controller::new(source).handle(state.clone(), &FileEvent::Saved(path("/bot/config.yml")));
    assert!(effects.is_empty());
    assert_eq!(after, state);
}

#[test]
fn emptying_a_file_keeps_it_on_its_side() {
    let source = clean_project();
    let state = load(&source);
    let mut after = source.clone();
    after.insert(NLU, "# nothing here yet\nversion: \"3.1\"\n");

    let (state, effects) = Controller::new(after).handle(state, &FileEvent::Saved(path(NLU)));

    assert!(state.training.contains(Path::new(NLU)));
    assert!(state.training.trained_intents().is_empty());
    assert_eq!(messages(&state, DOMAIN).len(), 2);
    assert_eq!(refreshed(&effects), vec![TreeKind::TrainingData]);
}

// =============================================================================
// Creates and Deletes
// =============================================================================

#[test]
fn creating_a_domain_file_resolves_errors() {
    let mut source = clean_project();
    source.insert(
        STORIES,
        "stories:\n  - story: s\n    steps:\n      - intent: greet\n      - action: action_book\n",
    );
    let state = load(&source);
    assert_eq!(messages(&state, STORIES).len(), 1);

    let extra = "/bot/domain/booking.yml";
    let after = source.with_file(extra, "actions:\n  - action_book\n");
    let (state, effects) = Controller::new(after).handle(state, &FileEvent::Created(path(extra)));

    assert!(messages(&state, STORIES).is_empty());
    assert!(published(&effects).contains(&Path::new(STORIES)));
    assert!(state.domain.available_actions().contains(&"action_book"));
}

#[test]
fn deleting_the_domain_makes_usages_undeclared() {
    let source = clean_project();
    let state = load(&source);
    let mut after = source.clone();
    after.remove(Path::new(DOMAIN));

    let (state, effects) = Controller::new(after).handle(state, &FileEvent::Deleted(path(DOMAIN)));

    assert!(state.domain.available_intents().is_empty());
    assert!(state.domain.available_actions().is_empty());
    assert!(messages(&state, DOMAIN).is_empty());
    assert_eq!(messages(&state, STORIES).len(), 2);
    assert_eq!(messages(&state, RULES).len(), 2);
    assert_eq!(messages(&state, NLU).len(), 2);
    assert_eq!(published(&effects)[0], Path::new(DOMAIN));
}

#[test]
fn unreadable_file_is_treated_as_deleted() {
    let source = clean_project();
    let state = load(&source);
    let mut after = source.clone();
    after.remove(Path::new(NLU));

    let saved = Controller::new(after.clone()).handle(state.clone(), &FileEvent::Saved(path(NLU)));
    let deleted = Controller::new(after).handle(state, &FileEvent::Deleted(path(NLU)));
    assert_eq!(saved, deleted);
}

// =============================================================================
// Queue
// =============================================================================

#[test]
fn queue_applies_events_in_order() {
    let source = clean_project();
    let state = load(&source);
    let mut after = source.clone();
    after.remove(Path::new(DOMAIN));
    after.insert(NLU, "nlu: []\n");

    let mut queue = EventQueue::new();
    assert!(queue.push(FileEvent::Deleted(path(DOMAIN))));
    assert!(queue.push(FileEvent::Saved(path(NLU))));
    assert!(!queue.push(FileEvent::Saved(path(NLU))));
    assert_eq!(queue.len(), 2);

    let (state, _) = queue.drain(&Controller::new(after.clone()), state);
    assert!(queue.is_empty());
    let full = load(&after);
    for file in [DOMAIN, NLU, STORIES, RULES] {
        assert_eq!(messages(&state, file), messages(&full, file), "{file}");
    }
}
