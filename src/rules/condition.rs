use serde::{Deserialize, Serialize};

/// Which board(s) a condition inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardScope {
    Mainboard,
    Sideboard,
    MainOrSideboard,
}

/// The twelve condition kinds of the rule language
///
/// Kind names in rule files are the variant names verbatim, e.g.
/// `"TwoOrMoreInMainboard"`. An unknown kind is a deserialization error and
/// fails the whole rule-file load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionKind {
    /// Every referenced card appears at least once
    InMainboard,
    InSideboard,
    InMainOrSideboard,
    /// At least one referenced card appears at least once
    OneOrMoreInMainboard,
    OneOrMoreInSideboard,
    OneOrMoreInMainOrSideboard,
    /// At least two distinct referenced cards each appear at least once
    TwoOrMoreInMainboard,
    TwoOrMoreInSideboard,
    TwoOrMoreInMainOrSideboard,
    /// None of the referenced cards appear in either board
    DoesNotContain,
    DoesNotContainMainboard,
    DoesNotContainSideboard,
}

impl ConditionKind {
    /// The board scope this kind inspects
    #[must_use]
    pub fn scope(self) -> BoardScope {
        match self {
            Self::InMainboard
            | Self::OneOrMoreInMainboard
            | Self::TwoOrMoreInMainboard
            | Self::DoesNotContainMainboard => BoardScope::Mainboard,
            Self::InSideboard
            | Self::OneOrMoreInSideboard
            | Self::TwoOrMoreInSideboard
            | Self::DoesNotContainSideboard => BoardScope::Sideboard,
            Self::InMainOrSideboard
            | Self::OneOrMoreInMainOrSideboard
            | Self::TwoOrMoreInMainOrSideboard
            | Self::DoesNotContain => BoardScope::MainOrSideboard,
        }
    }

    /// Is this a negative (must-not-contain) kind?
    #[must_use]
    pub fn is_negative(self) -> bool {
        matches!(
            self,
            Self::DoesNotContain | Self::DoesNotContainMainboard | Self::DoesNotContainSideboard
        )
    }
}

/// A single structural predicate over a deck's card lists
///
/// Conditions are immutable once loaded; the evaluator dispatches on the
/// kind tag (see `classify::evaluator`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Condition kind tag
    #[serde(rename = "type")]
    pub kind: ConditionKind,

    /// Referenced card names
    pub cards: Vec<String>,
}

impl Condition {
    pub fn new(kind: ConditionKind, cards: Vec<impl Into<String>>) -> Self {
        Self {
            kind,
            cards: cards.into_iter().map(Into::into).collect(),
        }
    }
}
