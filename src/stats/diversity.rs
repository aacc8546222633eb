//! Diversity metrics over archetype shares.

use serde::{Deserialize, Serialize};

use crate::stats::report::ArchetypeStats;
use crate::utils::math::count_to_f64;

/// Information-theoretic and concentration metrics over the metagame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiversityMetrics {
    /// Shannon index `H = -Σ p ln p`
    pub shannon: f64,
    /// Simpson diversity `1 - Σ p²`
    pub simpson: f64,
    /// Effective archetype count `e^H`
    pub effective_archetypes: f64,
    /// Herfindahl concentration `Σ p²`
    pub herfindahl: f64,
    /// Evenness `H / ln N`
    pub evenness: f64,
    /// Number of archetypes with nonzero share
    pub archetype_count: usize,
}

impl DiversityMetrics {
    /// An empty-population placeholder (all zeros)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            shannon: 0.0,
            simpson: 0.0,
            effective_archetypes: 0.0,
            herfindahl: 0.0,
            evenness: 0.0,
            archetype_count: 0,
        }
    }

    /// Compute from fractional shares; zero shares are skipped
    ///
    /// Shares are renormalized to sum to 1 so the caller can pass presence
    /// percentages directly.
    #[must_use]
    pub fn from_shares(shares: &[f64]) -> Self {
        let positive: Vec<f64> = shares.iter().copied().filter(|&p| p > 0.0).collect();
        if positive.is_empty() {
            return Self::empty();
        }

        let total: f64 = positive.iter().sum();
        let count = positive.len();

        let mut shannon = 0.0;
        let mut herfindahl = 0.0;
        for share in &positive {
            let p = share / total;
            shannon -= p * p.ln();
            herfindahl += p * p;
        }
        // -0.0 from a single 100% share
        if shannon.abs() < f64::EPSILON {
            shannon = 0.0;
        }

        let evenness = if count > 1 {
            shannon / count_to_f64(count).ln()
        } else {
            // ln(1) = 0; a single archetype is maximally concentrated
            0.0
        };

        Self {
            shannon,
            simpson: 1.0 - herfindahl,
            effective_archetypes: shannon.exp(),
            herfindahl,
            evenness,
            archetype_count: count,
        }
    }

    /// Compute from per-archetype presence percentages
    #[must_use]
    pub fn from_stats(stats: &[ArchetypeStats]) -> Self {
        let shares: Vec<f64> = stats.iter().map(|s| s.presence).collect();
        Self::from_shares(&shares)
    }
}
