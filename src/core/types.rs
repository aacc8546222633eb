use serde::{Deserialize, Serialize};

/// How a deck's classification was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMethod {
    /// All conditions of an archetype definition held
    Archetype,
    /// A variant of a matched archetype held as well
    Variant,
    /// No strict rule matched; a similarity fallback did
    Fallback,
    /// Nothing matched; a valid terminal state, not an error
    Unknown,
}

impl std::fmt::Display for ClassificationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Archetype => write!(f, "archetype"),
            Self::Variant => write!(f, "variant"),
            Self::Fallback => write!(f, "fallback"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// One deck after classification, as consumed by the aggregation pipeline
///
/// A pure function of (deck, rule set, config); discarded at run end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedDeck {
    /// Tournament the deck was played in
    pub tournament: String,

    /// Player handle
    pub player: String,

    /// Final archetype label (color prefix already applied when requested)
    pub archetype: String,

    /// How the classification was reached
    pub method: ClassificationMethod,

    /// Classification confidence in [0, 1]
    pub confidence: f64,

    /// Canonical color identity name (e.g. "Izzet")
    pub color_identity: String,

    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl ClassifiedDeck {
    /// Total matches played (wins + losses + draws)
    #[must_use]
    pub fn matches_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}
