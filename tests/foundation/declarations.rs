//! Integration tests for declarations and positions

use rasalint_foundation::{Corpus, Declaration, DeclarationKind, Position, Range};

// =============================================================================
// Kinds
// =============================================================================

#[test]
fn kinds_split_into_two_corpora() {
    let domain: Vec<_> = DeclarationKind::ALL
        .iter()
        .filter(|k| k.corpus() == Corpus::Domain)
        .collect();
    assert_eq!(
        domain,
        vec![
            &DeclarationKind::IntentDeclaration,
            &DeclarationKind::ActionDeclaration,
            &DeclarationKind::ResponseDeclaration,
        ]
    );
}

#[test]
fn locations_name_neither_intents_nor_actions() {
    for kind in [DeclarationKind::StoryLocation, DeclarationKind::RuleLocation] {
        assert!(!kind.names_intent());
        assert!(!kind.names_action());
    }
}

#[test]
fn responses_count_as_actions() {
    assert!(DeclarationKind::ResponseDeclaration.names_action());
    assert!(!DeclarationKind::ResponseDeclaration.names_intent());
}

#[test]
fn every_kind_names_at_most_one_symbol_class() {
    for kind in DeclarationKind::ALL {
        assert!(!(kind.names_intent() && kind.names_action()), "{kind}");
    }
}

// =============================================================================
// Positions and Ranges
// =============================================================================

#[test]
fn position_display_is_one_based() {
    assert_eq!(Position::new(0, 0).to_string(), "1:1");
    assert_eq!(Position::new(9, 3).to_string(), "10:4");
}

#[test]
fn range_spans_token_on_one_line() {
    let decl = Declaration::new(
        DeclarationKind::ActionInRule,
        "utter_goodbye",
        "/bot/data/rules.yml",
        Position::new(6, 16),
        13,
    );
    assert_eq!(
        decl.range(),
        Range {
            start: Position::new(6, 16),
            end: Position::new(6, 29),
        }
    );
}

#[test]
fn declaration_display() {
    let decl = Declaration::new(
        DeclarationKind::IntentInStory,
        "greet",
        "/bot/data/stories.yml",
        Position::new(2, 8),
        5,
    );
    assert_eq!(
        decl.to_string(),
        "intent in story `greet` at /bot/data/stories.yml:3:9"
    );
}
