//! Per-archetype raw counts, presence, and win rate.
//!
//! Presence and win rate deliberately disagree about draws: presence by
//! matches counts draws in both numerator and denominator, while win rate
//! excludes them entirely (`wins * 100 / (wins + losses)`). The asymmetry
//! is intentional (a draw is a played match but not a decided one) and
//! must not be "fixed".

use std::collections::{HashMap, HashSet};

use crate::config::{AnalysisConfig, PresenceMeasure};
use crate::core::types::ClassifiedDeck;
use crate::stats::confidence::wilson_interval;
use crate::stats::report::ArchetypeStats;
use crate::utils::math::count_to_f64;

/// Win rate in percent with draws excluded; 50.0 when nothing was decided
#[must_use]
pub fn win_rate(wins: u64, losses: u64) -> f64 {
    let decided = wins + losses;
    if decided == 0 {
        return 50.0;
    }
    #[allow(clippy::cast_precision_loss)]
    {
        wins as f64 * 100.0 / decided as f64
    }
}

/// Aggregate classified decks into per-archetype statistics
///
/// Output is sorted by presence descending (ties by name, so the order is
/// stable across runs). Also fills the Wilson CI bounds at the configured
/// confidence level. Presence percentages over all archetypes, Unknown
/// included, sum to 100 up to floating-point error.
#[must_use]
pub fn aggregate(decks: &[ClassifiedDeck], config: &AnalysisConfig) -> Vec<ArchetypeStats> {
    let mut by_name: HashMap<&str, ArchetypeStats> = HashMap::new();
    let mut players_seen: HashMap<&str, HashSet<&str>> = HashMap::new();

    for deck in decks {
        let entry = by_name
            .entry(&deck.archetype)
            .or_insert_with(|| ArchetypeStats::new(deck.archetype.clone()));
        entry.copies += 1;
        entry.match_count += u64::from(deck.matches_played());
        entry.wins += u64::from(deck.wins);
        entry.losses += u64::from(deck.losses);
        entry.draws += u64::from(deck.draws);

        players_seen
            .entry(&deck.archetype)
            .or_default()
            .insert(&deck.player);
    }

    let mut stats: Vec<ArchetypeStats> = by_name
        .into_iter()
        .map(|(name, mut entry)| {
            entry.players = players_seen.get(name).map_or(0, HashSet::len);
            entry
        })
        .collect();

    let total: f64 = match config.presence_measure {
        PresenceMeasure::Matches => {
            #[allow(clippy::cast_precision_loss)]
            let sum = stats.iter().map(|s| s.match_count).sum::<u64>() as f64;
            sum
        }
        PresenceMeasure::Players => count_to_f64(stats.iter().map(|s| s.players).sum()),
        PresenceMeasure::Copies => count_to_f64(stats.iter().map(|s| s.copies).sum()),
    };

    let z = config.confidence_level.z();
    for entry in &mut stats {
        let share = match config.presence_measure {
            PresenceMeasure::Matches => {
                #[allow(clippy::cast_precision_loss)]
                let played = entry.match_count as f64;
                played
            }
            PresenceMeasure::Players => count_to_f64(entry.players),
            PresenceMeasure::Copies => count_to_f64(entry.copies),
        };
        entry.presence = if total > 0.0 {
            share * 100.0 / total
        } else {
            0.0
        };
        entry.win_rate = win_rate(entry.wins, entry.losses);

        let interval = wilson_interval(entry.wins, entry.losses, z);
        entry.ci_lower = interval.lower;
        entry.ci_upper = interval.upper;
    }

    stats.sort_by(|a, b| {
        b.presence
            .partial_cmp(&a.presence)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ClassificationMethod;

    fn deck(archetype: &str, player: &str, wins: u32, losses: u32, draws: u32) -> ClassifiedDeck {
        ClassifiedDeck {
            tournament: "T1".to_string(),
            player: player.to_string(),
            archetype: archetype.to_string(),
            method: ClassificationMethod::Archetype,
            confidence: 1.0,
            color_identity: "Colorless".to_string(),
            wins,
            losses,
            draws,
        }
    }

    #[test]
    fn test_win_rate_excludes_draws() {
        assert!((win_rate(6, 1) - 85.71428571).abs() < 1e-6);
        // 3-3-4: draws do not dilute the rate
        let stats = aggregate(&[deck("Burn", "a", 3, 3, 4)], &AnalysisConfig::default());
        assert!((stats[0].win_rate - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_decided_games_defaults_to_fifty() {
        assert!((win_rate(0, 0) - 50.0).abs() < 1e-12);
        let stats = aggregate(&[deck("Draws Only", "a", 0, 0, 3)], &AnalysisConfig::default());
        assert!((stats[0].win_rate - 50.0).abs() < 1e-9);
        assert!((stats[0].ci_lower - 0.0).abs() < 1e-9);
        assert!((stats[0].ci_upper - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_presence_by_matches_includes_draws() {
        let decks = vec![
            deck("Burn", "a", 4, 1, 1), // 6 matches
            deck("Tron", "b", 2, 2, 0), // 4 matches
        ];
        let stats = aggregate(&decks, &AnalysisConfig::default());
        assert_eq!(stats[0].name, "Burn");
        assert!((stats[0].presence - 60.0).abs() < 1e-9);
        assert!((stats[1].presence - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_presence_by_players_counts_unique_handles() {
        let decks = vec![
            deck("Burn", "alice", 3, 0, 0),
            deck("Burn", "alice", 2, 1, 0), // same player, second event
            deck("Tron", "bob", 1, 2, 0),
        ];
        let config = AnalysisConfig {
            presence_measure: PresenceMeasure::Players,
            ..AnalysisConfig::default()
        };
        let stats = aggregate(&decks, &config);
        let burn = stats.iter().find(|s| s.name == "Burn").unwrap();
        assert_eq!(burn.players, 1);
        assert_eq!(burn.copies, 2);
        assert!((burn.presence - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_presence_sums_to_one_hundred() {
        let decks = vec![
            deck("Burn", "a", 4, 1, 0),
            deck("Tron", "b", 3, 2, 1),
            deck("Unknown", "c", 0, 3, 0),
        ];
        for measure in [
            PresenceMeasure::Matches,
            PresenceMeasure::Players,
            PresenceMeasure::Copies,
        ] {
            let config = AnalysisConfig {
                presence_measure: measure,
                ..AnalysisConfig::default()
            };
            let total: f64 = aggregate(&decks, &config).iter().map(|s| s.presence).sum();
            assert!((total - 100.0).abs() < 1e-9, "{measure:?} summed to {total}");
        }
    }

    #[test]
    fn test_ci_brackets_win_rate() {
        let stats = aggregate(&[deck("Burn", "a", 6, 1, 0)], &AnalysisConfig::default());
        let entry = &stats[0];
        assert!(entry.ci_lower <= entry.win_rate && entry.win_rate <= entry.ci_upper);
        assert!((entry.ci_lower - 48.65).abs() < 0.1);
        assert!((entry.ci_upper - 97.46).abs() < 0.1);
    }

    #[test]
    fn test_empty_population() {
        let stats = aggregate(&[], &AnalysisConfig::default());
        assert!(stats.is_empty());
    }
}
