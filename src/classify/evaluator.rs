//! Evaluates a single [`Condition`] against a deck's card lists.

use crate::core::deck::Deck;
use crate::rules::condition::{BoardScope, Condition, ConditionKind};

/// Does the deck contain at least one copy of `name` within `scope`?
fn present(deck: &Deck, scope: BoardScope, name: &str) -> bool {
    match scope {
        BoardScope::Mainboard => deck.mainboard_contains(name),
        BoardScope::Sideboard => deck.sideboard_contains(name),
        BoardScope::MainOrSideboard => deck.contains_anywhere(name),
    }
}

/// Evaluate one condition against a deck
///
/// An empty card list is vacuously true for the positive kinds and
/// trivially true for the negative ones; rule-file validation rejects such
/// conditions before they ever reach this function.
#[must_use]
pub fn evaluate(condition: &Condition, deck: &Deck) -> bool {
    let scope = condition.kind.scope();
    let cards = &condition.cards;

    match condition.kind {
        ConditionKind::InMainboard
        | ConditionKind::InSideboard
        | ConditionKind::InMainOrSideboard => {
            cards.iter().all(|name| present(deck, scope, name))
        }

        ConditionKind::OneOrMoreInMainboard
        | ConditionKind::OneOrMoreInSideboard
        | ConditionKind::OneOrMoreInMainOrSideboard => {
            cards.iter().any(|name| present(deck, scope, name))
        }

        // Two or more *distinct* referenced cards, not two copies of one
        ConditionKind::TwoOrMoreInMainboard
        | ConditionKind::TwoOrMoreInSideboard
        | ConditionKind::TwoOrMoreInMainOrSideboard => {
            cards
                .iter()
                .filter(|name| present(deck, scope, name))
                .take(2)
                .count()
                >= 2
        }

        ConditionKind::DoesNotContain
        | ConditionKind::DoesNotContainMainboard
        | ConditionKind::DoesNotContainSideboard => {
            !cards.iter().any(|name| present(deck, scope, name))
        }
    }
}

/// Evaluate a conjunction of conditions, short-circuiting on failure
#[must_use]
pub fn evaluate_all(conditions: &[Condition], deck: &Deck) -> bool {
    conditions.iter().all(|condition| evaluate(condition, deck))
}
