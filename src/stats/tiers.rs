//! Tier assignment from the lower bound of the win-rate CI.
//!
//! The primary axis is deliberately the CI lower bound, not the composite
//! score: it rewards archetypes that are provably good over archetypes
//! that merely look good on a small sample. Assignment buckets the
//! standard-deviation distance from the population mean; members that land
//! in "Other" can optionally be excluded from the mean/SD and the whole
//! assignment recomputed until it stops changing, with a hard iteration
//! bound so a non-converging population terminates.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::stats::normalize::cutoff_population;
use crate::stats::report::ArchetypeStats;
use crate::utils::math::{mean, sample_std_dev};

/// Discrete strength tier; lower numbers are stronger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierLabel {
    Tier0,
    Tier1,
    Tier2,
    Tier3,
    Other,
}

impl TierLabel {
    /// Bucket a deviation (in standard deviations from the mean) with the
    /// configured bucket width
    #[must_use]
    pub fn from_deviation(deviation: f64, width: f64) -> Self {
        if deviation >= 3.0 * width {
            Self::Tier0
        } else if deviation >= width {
            Self::Tier1
        } else if deviation >= -width {
            Self::Tier2
        } else if deviation >= -3.0 * width {
            Self::Tier3
        } else {
            Self::Other
        }
    }
}

impl std::fmt::Display for TierLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tier0 => write!(f, "0"),
            Self::Tier1 => write!(f, "1"),
            Self::Tier2 => write!(f, "2"),
            Self::Tier3 => write!(f, "3"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Outcome of the (possibly iterative) tier assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierOutcome {
    /// Iterations actually run
    pub iterations: usize,
    /// False when the iteration bound was hit before a fixed point; the
    /// last computed assignment is kept and flagged approximate
    pub converged: bool,
}

fn assign_once(
    stats: &mut [ArchetypeStats],
    population: &[usize],
    basis: &[usize],
    width: f64,
) -> bool {
    let lowers: Vec<f64> = basis.iter().map(|&i| stats[i].ci_lower).collect();
    let center = mean(&lowers);
    let spread = sample_std_dev(&lowers);

    let mut changed = false;
    for &index in population {
        let deviation = if spread > 0.0 {
            (stats[index].ci_lower - center) / spread
        } else {
            0.0
        };
        let tier = TierLabel::from_deviation(deviation, width);
        if stats[index].tier != Some(tier) {
            stats[index].tier = Some(tier);
            changed = true;
        }
    }
    changed
}

/// Assign tiers to every archetype above the presence cutoff
///
/// With `iterative_tiers` enabled, the mean/SD basis drops "Other" members
/// and the assignment is recomputed until it reaches a fixed point or the
/// iteration bound.
pub fn assign_tiers(stats: &mut [ArchetypeStats], config: &AnalysisConfig) -> TierOutcome {
    let population = cutoff_population(stats, config);
    if population.is_empty() {
        return TierOutcome {
            iterations: 0,
            converged: true,
        };
    }

    let mut iterations = 1;
    assign_once(stats, &population, &population, config.tier_sigma);

    if !config.iterative_tiers {
        return TierOutcome {
            iterations,
            converged: true,
        };
    }

    while iterations < config.tier_max_iterations {
        let basis: Vec<usize> = population
            .iter()
            .copied()
            .filter(|&i| stats[i].tier != Some(TierLabel::Other))
            .collect();
        if basis.is_empty() || basis.len() == population.len() {
            // Nothing excluded (or everything would be): already stable
            return TierOutcome {
                iterations,
                converged: true,
            };
        }

        iterations += 1;
        let changed = assign_once(stats, &population, &basis, config.tier_sigma);
        if !changed {
            return TierOutcome {
                iterations,
                converged: true,
            };
        }
    }

    TierOutcome {
        iterations,
        converged: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, presence: f64, ci_lower: f64) -> ArchetypeStats {
        ArchetypeStats {
            presence,
            ci_lower,
            ..ArchetypeStats::new(name)
        }
    }

    #[test]
    fn test_bucket_thresholds() {
        assert_eq!(TierLabel::from_deviation(3.2, 1.0), TierLabel::Tier0);
        assert_eq!(TierLabel::from_deviation(1.5, 1.0), TierLabel::Tier1);
        assert_eq!(TierLabel::from_deviation(0.0, 1.0), TierLabel::Tier2);
        assert_eq!(TierLabel::from_deviation(-2.0, 1.0), TierLabel::Tier3);
        assert_eq!(TierLabel::from_deviation(-3.5, 1.0), TierLabel::Other);
        // Width rescales every boundary
        assert_eq!(TierLabel::from_deviation(1.5, 0.5), TierLabel::Tier0);
    }

    #[test]
    fn test_tiers_are_monotonic_in_ci_lower() {
        let mut stats = vec![
            entry("A", 10.0, 58.0),
            entry("B", 10.0, 52.0),
            entry("C", 10.0, 49.0),
            entry("D", 10.0, 43.0),
            entry("E", 10.0, 40.0),
        ];
        assign_tiers(&mut stats, &AnalysisConfig::default());

        for pair in stats.windows(2) {
            let (stronger, weaker) = (&pair[0], &pair[1]);
            assert!(
                stronger.tier.unwrap() <= weaker.tier.unwrap(),
                "{} ({:?}) should tier at or above {} ({:?})",
                stronger.name,
                stronger.tier,
                weaker.name,
                weaker.tier
            );
        }
    }

    #[test]
    fn test_uniform_population_is_tier2() {
        // Zero spread: every deviation is 0, the middle bucket
        let mut stats = vec![entry("A", 10.0, 50.0), entry("B", 10.0, 50.0)];
        let outcome = assign_tiers(&mut stats, &AnalysisConfig::default());
        assert!(outcome.converged);
        assert_eq!(stats[0].tier, Some(TierLabel::Tier2));
        assert_eq!(stats[1].tier, Some(TierLabel::Tier2));
    }

    #[test]
    fn test_cutoff_members_keep_none() {
        let mut stats = vec![entry("Big", 10.0, 50.0), entry("Tiny", 0.3, 60.0)];
        assign_tiers(&mut stats, &AnalysisConfig::default());
        assert!(stats[0].tier.is_some());
        assert!(stats[1].tier.is_none());
    }

    #[test]
    fn test_iteration_is_bounded() {
        let mut stats: Vec<ArchetypeStats> = (0..12)
            .map(|i| entry(&format!("A{i}"), 8.0, f64::from(i) * 4.0))
            .collect();
        let config = AnalysisConfig {
            tier_max_iterations: 3,
            ..AnalysisConfig::default()
        };
        let outcome = assign_tiers(&mut stats, &config);
        assert!(outcome.iterations <= 3);
        // Whatever happened, every member has a last-computed assignment
        assert!(stats.iter().all(|s| s.tier.is_some()));
    }

    #[test]
    fn test_non_iterative_mode_runs_once() {
        let mut stats = vec![
            entry("A", 10.0, 60.0),
            entry("B", 10.0, 50.0),
            entry("C", 10.0, 2.0),
        ];
        let config = AnalysisConfig {
            iterative_tiers: false,
            ..AnalysisConfig::default()
        };
        let outcome = assign_tiers(&mut stats, &config);
        assert_eq!(outcome.iterations, 1);
        assert!(outcome.converged);
    }
}
