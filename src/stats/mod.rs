//! The metagame statistics pipeline.
//!
//! Runs as a single sequential pass over the complete classified
//! population. Normalization and tiering need global statistics
//! (min/max/mean/SD), so partial or incremental aggregation is not
//! supported by design. Stages, in order:
//!
//! 1. [`aggregator`]: raw counts, presence, win rate per archetype
//! 2. [`confidence`]: Wilson score bounds on each win rate
//! 3. [`normalize`]: log/linear normalization and the composite score
//! 4. [`tiers`]: σ-bucket tier assignment with bounded recomputation
//! 5. [`cluster`]: k-means grouping over standardized features
//! 6. [`diversity`]: Shannon/Simpson/HHI over archetype shares
//! 7. [`matchups`]: top-N pairwise matrix with an "Other" fold
//!
//! All stages write into [`ArchetypeStats`], which is recomputed wholesale
//! each run and never updated incrementally.

pub mod aggregator;
pub mod cluster;
pub mod confidence;
pub mod diversity;
pub mod matchups;
pub mod normalize;
pub mod report;
pub mod tiers;

pub use aggregator::aggregate;
pub use confidence::{wilson_interval, WilsonInterval};
pub use diversity::DiversityMetrics;
pub use matchups::{LabeledPairing, MatchupCell, MatchupMatrix};
pub use report::{ArchetypeStats, MetagameReport};
pub use tiers::{TierLabel, TierOutcome};
