//! Analysis configuration.
//!
//! One immutable [`AnalysisConfig`] is threaded by reference through every
//! component of the pipeline. All thresholds live here rather than as
//! module-level constants, so a run is fully described by (inputs, rules,
//! config).

use serde::{Deserialize, Serialize};

/// How an archetype's share of the population is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceMeasure {
    /// Share of matches played (wins + losses + draws)
    #[default]
    Matches,
    /// Share of unique players
    Players,
    /// Share of deck copies
    Copies,
}

/// What to do when several archetype definitions match the same deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictMode {
    /// Take the first matching definition in rule-file order
    #[default]
    PreferFirst,
    /// Take the matching definition with the most conditions; ties fall
    /// back to rule-file order
    MostSpecific,
}

/// Confidence level for Wilson score intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Ninety,
    #[default]
    NinetyFive,
}

impl ConfidenceLevel {
    /// The z value for this confidence level
    #[must_use]
    pub fn z(self) -> f64 {
        match self {
            Self::Ninety => 1.645,
            Self::NinetyFive => 1.96,
        }
    }
}

/// All tunable parameters for one analysis run
///
/// Every field has a sensible default, so a partial JSON config (or none at
/// all) works. Deserialization fills missing fields from `Default`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Presence measure used for shares and matrix ordering
    pub presence_measure: PresenceMeasure,

    /// Conflict handling when several archetypes match one deck
    pub conflict_mode: ConflictMode,

    /// Confidence level for every Wilson interval in the run
    pub confidence_level: ConfidenceLevel,

    /// Minimum Jaccard similarity for a fallback to claim a deck
    pub fallback_min_similarity: f64,

    /// Minimum presence (percent) for normalization, tiering, and clustering
    pub min_presence: f64,

    /// Tier bucket width in standard deviations
    pub tier_sigma: f64,

    /// Re-run tier statistics excluding "Other" members until stable
    pub iterative_tiers: bool,

    /// Bound on tier recomputation iterations
    pub tier_max_iterations: usize,

    /// A color is present when its summed mainboard count reaches
    /// `max(color_floor, ceil(color_fraction * mainboard_size))`
    pub color_floor: u32,
    pub color_fraction: f64,

    /// Number of k-means clusters over (share, win rate, dominance)
    pub cluster_count: usize,

    /// Archetypes kept in the matchup matrix; the rest fold into "Other"
    pub matrix_size: usize,

    /// Cells with fewer decided games than this are flagged
    pub matrix_min_sample: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            presence_measure: PresenceMeasure::default(),
            conflict_mode: ConflictMode::default(),
            confidence_level: ConfidenceLevel::default(),
            fallback_min_similarity: 0.1,
            min_presence: 1.2,
            tier_sigma: 1.0,
            iterative_tiers: true,
            tier_max_iterations: 10,
            color_floor: 3,
            color_fraction: 0.10,
            cluster_count: 3,
            matrix_size: 12,
            matrix_min_sample: 5,
        }
    }
}
