//! Core data types for cards, decks, and tournament records.
//!
//! Everything in this module is a plain immutable input record: decks and
//! tournament results are supplied by an external data-collection
//! collaborator and never mutated by the analysis pipeline.

pub mod card;
pub mod deck;
pub mod record;
pub mod types;

pub use card::CardCount;
pub use deck::Deck;
pub use record::{PairingResult, PlayerResult, Round, Tournament};
pub use types::{ClassificationMethod, ClassifiedDeck};
