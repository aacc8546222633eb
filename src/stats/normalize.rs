//! Presence/win-rate normalization and the composite score.
//!
//! Only archetypes at or above the configured presence cutoff take part;
//! everything below keeps `None` in the derived fields. Presence is
//! log-transformed before min-max scaling because raw presence is
//! exponentially distributed across a metagame, where linear scaling would
//! collapse every small archetype to ~0. Win rate is scaled linearly.

use crate::config::AnalysisConfig;
use crate::stats::report::ArchetypeStats;

/// Indices of the archetypes at or above the presence cutoff
pub(crate) fn cutoff_population(stats: &[ArchetypeStats], config: &AnalysisConfig) -> Vec<usize> {
    stats
        .iter()
        .enumerate()
        .filter(|(_, s)| s.presence >= config.min_presence)
        .map(|(index, _)| index)
        .collect()
}

/// Min-max scale `values` in place to [0, 1]
///
/// A zero span (every member equal) maps everything to 0.0 rather than
/// dividing by zero.
fn min_max_scale(values: &mut [f64]) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    for value in values.iter_mut() {
        *value -= min;
    }
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        for value in values.iter_mut() {
            *value /= max;
        }
    }
}

/// Fill normalized presence, normalized win rate, and the composite score
/// for every archetype above the cutoff
pub fn apply_normalization(stats: &mut [ArchetypeStats], config: &AnalysisConfig) {
    // A zero-presence archetype can pass a zero cutoff but has no defined
    // log transform; leave it out of the normalized population.
    let population: Vec<usize> = cutoff_population(stats, config)
        .into_iter()
        .filter(|&index| stats[index].presence > 0.0)
        .collect();
    if population.is_empty() {
        return;
    }

    let mut presence: Vec<f64> = population.iter().map(|&i| stats[i].presence.ln()).collect();
    min_max_scale(&mut presence);

    let mut rates: Vec<f64> = population.iter().map(|&i| stats[i].win_rate).collect();
    min_max_scale(&mut rates);

    for (slot, &index) in population.iter().enumerate() {
        let entry = &mut stats[index];
        entry.normalized_presence = Some(presence[slot]);
        entry.normalized_win_rate = Some(rates[slot]);
        entry.score = Some(presence[slot] + rates[slot]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, presence: f64, win_rate: f64) -> ArchetypeStats {
        ArchetypeStats {
            presence,
            win_rate,
            ..ArchetypeStats::new(name)
        }
    }

    #[test]
    fn test_log_normalization_scenario() {
        // 20%, 5%, and 1% shares: the 20% archetype is the maximum after
        // the log transform and lands exactly on 1.0
        let mut stats = vec![
            entry("Big", 20.0, 52.0),
            entry("Mid", 5.0, 50.0),
            entry("Small", 1.0, 48.0),
        ];
        let config = AnalysisConfig {
            min_presence: 0.5,
            ..AnalysisConfig::default()
        };
        apply_normalization(&mut stats, &config);

        assert!((stats[0].normalized_presence.unwrap() - 1.0).abs() < 1e-9);
        assert!((stats[2].normalized_presence.unwrap() - 0.0).abs() < 1e-9);
        let mid = stats[1].normalized_presence.unwrap();
        // ln(5) - ln(1) over ln(20) - ln(1)
        assert!((mid - (5.0_f64.ln() / 20.0_f64.ln())).abs() < 1e-9);
    }

    #[test]
    fn test_win_rate_scales_linearly() {
        let mut stats = vec![
            entry("A", 10.0, 60.0),
            entry("B", 10.0, 50.0),
            entry("C", 10.0, 40.0),
        ];
        let config = AnalysisConfig::default();
        apply_normalization(&mut stats, &config);

        assert!((stats[0].normalized_win_rate.unwrap() - 1.0).abs() < 1e-9);
        assert!((stats[1].normalized_win_rate.unwrap() - 0.5).abs() < 1e-9);
        assert!((stats[2].normalized_win_rate.unwrap() - 0.0).abs() < 1e-9);
        // Composite = normalized presence + normalized win rate
        assert!((stats[0].score.unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cutoff_excludes_small_archetypes() {
        let mut stats = vec![entry("Big", 20.0, 55.0), entry("Tiny", 0.4, 70.0)];
        apply_normalization(&mut stats, &AnalysisConfig::default());

        assert!(stats[0].normalized_presence.is_some());
        assert!(stats[1].normalized_presence.is_none());
        assert!(stats[1].score.is_none());
    }

    #[test]
    fn test_zero_span_maps_to_zero() {
        let mut stats = vec![entry("A", 10.0, 50.0), entry("B", 10.0, 50.0)];
        apply_normalization(&mut stats, &AnalysisConfig::default());
        assert!((stats[0].normalized_presence.unwrap() - 0.0).abs() < 1e-9);
        assert!((stats[0].normalized_win_rate.unwrap() - 0.0).abs() < 1e-9);
    }
}
