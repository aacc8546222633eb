use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::card::CardCount;

/// A single tournament decklist: mainboard plus sideboard
///
/// Card-name sets for both boards are precomputed on construction so that
/// condition evaluation and fallback similarity scoring are set lookups
/// rather than linear scans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Mainboard card counts
    pub mainboard: Vec<CardCount>,

    /// Sideboard card counts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sideboard: Vec<CardCount>,

    // === Pre-computed for condition evaluation ===
    /// Distinct mainboard card names
    #[serde(skip)]
    pub mainboard_names: HashSet<String>,

    /// Distinct sideboard card names
    #[serde(skip)]
    pub sideboard_names: HashSet<String>,
}

impl Deck {
    #[must_use]
    pub fn new(mainboard: Vec<CardCount>, sideboard: Vec<CardCount>) -> Self {
        let mut deck = Self {
            mainboard,
            sideboard,
            mainboard_names: HashSet::new(),
            sideboard_names: HashSet::new(),
        };
        deck.rebuild_indexes();
        deck
    }

    /// Rebuild the name sets after deserialization or modification
    pub fn rebuild_indexes(&mut self) {
        self.mainboard_names = self.mainboard.iter().map(|c| c.name.clone()).collect();
        self.sideboard_names = self.sideboard.iter().map(|c| c.name.clone()).collect();
    }

    /// Total number of cards in the mainboard (sum of counts)
    #[must_use]
    pub fn mainboard_size(&self) -> u32 {
        self.mainboard.iter().map(|c| c.count).sum()
    }

    /// Does the mainboard contain at least one copy of `name`?
    #[must_use]
    pub fn mainboard_contains(&self, name: &str) -> bool {
        self.mainboard_names.contains(name)
    }

    /// Does the sideboard contain at least one copy of `name`?
    #[must_use]
    pub fn sideboard_contains(&self, name: &str) -> bool {
        self.sideboard_names.contains(name)
    }

    /// Does either board contain at least one copy of `name`?
    #[must_use]
    pub fn contains_anywhere(&self, name: &str) -> bool {
        self.mainboard_contains(name) || self.sideboard_contains(name)
    }
}
