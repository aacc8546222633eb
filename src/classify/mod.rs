//! Deck classification: condition evaluation, color identity detection,
//! and the rule-matching engine.
//!
//! ## Classification algorithm
//!
//! For each deck, in order:
//!
//! 1. Scan [`ArchetypeDefinition`]s in rule-file order; a definition
//!    matches when every one of its conditions holds.
//! 2. If the matched definition has variants, the first variant whose
//!    conditions also hold overrides the archetype name.
//! 3. Otherwise, try [`FallbackDefinition`]s: gate conditions must hold and
//!    the Jaccard similarity between the deck's distinct mainboard names
//!    and the fallback's reference set must reach the configured minimum.
//! 4. Anything else is `Unknown` with zero confidence.
//!
//! The engine borrows a frozen [`RuleRepository`] and holds no mutable
//! state, so decks can be classified on any number of threads.
//!
//! [`ArchetypeDefinition`]: crate::rules::ArchetypeDefinition
//! [`FallbackDefinition`]: crate::rules::FallbackDefinition
//! [`RuleRepository`]: crate::rules::RuleRepository

pub mod colors;
pub mod engine;
pub mod evaluator;
pub mod similarity;

pub use colors::{ColorLookup, ColorSet, ColorSymbol};
pub use engine::{ClassificationEngine, ClassificationResult};
pub use evaluator::evaluate;
