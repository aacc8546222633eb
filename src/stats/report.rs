use serde::{Deserialize, Serialize};

use crate::core::types::ClassifiedDeck;
use crate::stats::diversity::DiversityMetrics;
use crate::stats::matchups::MatchupMatrix;
use crate::stats::tiers::TierLabel;

/// Aggregate statistics for one archetype
///
/// Filled in stages: the aggregator writes raw counts and shares, the
/// confidence calculator the CI bounds, the normalizer and tier/cluster
/// stages the optional fields. Archetypes below the presence cutoff keep
/// `None` in the optional fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypeStats {
    /// Archetype display label
    pub name: String,

    // I. Raw counts
    /// Number of decks
    pub copies: usize,
    /// Number of unique players
    pub players: usize,
    /// Matches played (wins + losses + draws)
    pub match_count: u64,
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,

    // II. Shares and rates
    /// Share of the population in percent, by the configured measure
    pub presence: f64,
    /// Measured win rate in percent; draws excluded from the denominator,
    /// 50.0 when no decided games exist
    pub win_rate: f64,
    /// Wilson score bounds on the win rate, in percent
    pub ci_lower: f64,
    pub ci_upper: f64,

    // III. Derived scores (cutoff population only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_presence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_win_rate: Option<f64>,
    /// Composite score = normalized presence + normalized win rate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<TierLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<usize>,
}

impl ArchetypeStats {
    /// A zeroed entry for `name`; the aggregation stages fill the rest
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            copies: 0,
            players: 0,
            match_count: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            presence: 0.0,
            win_rate: 0.0,
            ci_lower: 0.0,
            ci_upper: 0.0,
            normalized_presence: None,
            normalized_win_rate: None,
            score: None,
            tier: None,
            cluster: None,
        }
    }

    /// Decided games (draws excluded), the denominator for win rate and CI
    #[must_use]
    pub fn decided(&self) -> u64 {
        self.wins + self.losses
    }
}

/// The full output of one analysis run
///
/// A pure function of (tournaments, rules, config): re-running on
/// identical inputs produces an identical report, byte for byte once
/// serialized. Deliberately carries no timestamp for that reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetagameReport {
    /// Format the rule set applies to
    pub format: String,

    /// Total decks classified
    pub total_decks: usize,

    /// Decks that ended Unknown
    pub unknown_decks: usize,

    /// Per-archetype statistics, sorted by presence descending
    pub archetypes: Vec<ArchetypeStats>,

    /// Diversity metrics over archetype shares
    pub diversity: DiversityMetrics,

    /// Pairwise matchup matrix (top-N plus "Other")
    pub matchups: MatchupMatrix,

    /// Per-deck classification results
    pub decks: Vec<ClassifiedDeck>,

    /// Did the iterative tier recomputation reach a fixed point?
    pub tiers_converged: bool,
}
