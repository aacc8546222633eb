use serde::{Deserialize, Serialize};

/// A card name with its copy count in one board of a deck
///
/// Counts are strictly positive in well-formed input; a zero count would
/// simply contribute nothing to any condition or color tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCount {
    /// Card name, the lookup key everywhere in the system
    pub name: String,

    /// Number of copies in this board
    pub count: u32,
}

impl CardCount {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

impl std::fmt::Display for CardCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.count, self.name)
    }
}
