//! Pairwise archetype matchup matrix.
//!
//! Keeps the top-N archetypes by presence and folds everything else into a
//! single "Other" row/column. Every pairing result writes both ordered
//! cells, so the mirror invariant `matrix[A][B].wins ==
//! matrix[B][A].losses` holds by construction. Diagonal cells are mirror
//! matches and are reported at a flat 50% win rate.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::stats::aggregator::win_rate;
use crate::stats::confidence::wilson_interval;
use crate::stats::report::ArchetypeStats;

/// Label for the folded remainder of the field
pub const OTHER: &str = "Other";

/// A pairing result already resolved to archetype labels
#[derive(Debug, Clone)]
pub struct LabeledPairing {
    pub archetype_a: String,
    pub archetype_b: String,
    pub wins_a: u32,
    pub wins_b: u32,
    pub draws: u32,
}

/// Aggregated results of one ordered archetype pair
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MatchupCell {
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,

    /// Win rate in percent (row archetype vs. column archetype)
    pub win_rate: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,

    /// Fewer decided games than the configured minimum
    pub insufficient_sample: bool,
}

/// The N×N (+ "Other") matchup matrix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchupMatrix {
    /// Row/column labels, ordered by presence with "Other" last
    pub archetypes: Vec<String>,

    /// `cells[row][column]`, same order as `archetypes`
    pub cells: Vec<Vec<MatchupCell>>,
}

impl MatchupMatrix {
    /// An empty matrix (no archetypes, no pairings)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            archetypes: Vec::new(),
            cells: Vec::new(),
        }
    }

    /// Build from classified pairings and the aggregated stats
    ///
    /// `stats` supplies the presence ordering for the top-N selection;
    /// pairings referencing archetypes outside the top N land in "Other".
    #[must_use]
    pub fn build(
        pairings: &[LabeledPairing],
        stats: &[ArchetypeStats],
        config: &AnalysisConfig,
    ) -> Self {
        if stats.is_empty() {
            return Self::empty();
        }

        // stats arrive sorted by presence descending
        let mut archetypes: Vec<String> = stats
            .iter()
            .take(config.matrix_size)
            .map(|s| s.name.clone())
            .collect();
        archetypes.push(OTHER.to_string());
        let size = archetypes.len();

        let slot_of = |name: &str| -> usize {
            archetypes
                .iter()
                .position(|label| label == name)
                .unwrap_or(size - 1)
        };

        let mut cells = vec![vec![MatchupCell::default(); size]; size];
        for pairing in pairings {
            let a = slot_of(&pairing.archetype_a);
            let b = slot_of(&pairing.archetype_b);

            cells[a][b].wins += u64::from(pairing.wins_a);
            cells[a][b].losses += u64::from(pairing.wins_b);
            cells[a][b].draws += u64::from(pairing.draws);

            cells[b][a].wins += u64::from(pairing.wins_b);
            cells[b][a].losses += u64::from(pairing.wins_a);
            cells[b][a].draws += u64::from(pairing.draws);
        }

        let z = config.confidence_level.z();
        for (row, row_cells) in cells.iter_mut().enumerate() {
            for (column, cell) in row_cells.iter_mut().enumerate() {
                cell.insufficient_sample = cell.wins + cell.losses < config.matrix_min_sample;
                if row == column {
                    // Mirror match: one side's win is the other's loss,
                    // so the true rate is 50% by definition
                    cell.win_rate = 50.0;
                } else {
                    cell.win_rate = win_rate(cell.wins, cell.losses);
                }
                let interval = wilson_interval(cell.wins, cell.losses, z);
                cell.ci_lower = interval.lower;
                cell.ci_upper = interval.upper;
            }
        }

        Self { archetypes, cells }
    }

    /// Look up a cell by archetype labels
    #[must_use]
    pub fn get(&self, row: &str, column: &str) -> Option<&MatchupCell> {
        let r = self.archetypes.iter().position(|label| label == row)?;
        let c = self.archetypes.iter().position(|label| label == column)?;
        Some(&self.cells[r][c])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairing(a: &str, b: &str, wins_a: u32, wins_b: u32, draws: u32) -> LabeledPairing {
        LabeledPairing {
            archetype_a: a.to_string(),
            archetype_b: b.to_string(),
            wins_a,
            wins_b,
            draws,
        }
    }

    fn entry(name: &str, presence: f64) -> ArchetypeStats {
        ArchetypeStats {
            presence,
            ..ArchetypeStats::new(name)
        }
    }

    fn stats() -> Vec<ArchetypeStats> {
        vec![
            entry("Burn", 30.0),
            entry("Tron", 25.0),
            entry("Fringe", 2.0),
        ]
    }

    #[test]
    fn test_mirror_invariant() {
        let pairings = vec![
            pairing("Burn", "Tron", 2, 1, 0),
            pairing("Tron", "Burn", 2, 0, 1),
            pairing("Burn", "Tron", 0, 2, 0),
        ];
        let matrix = MatchupMatrix::build(&pairings, &stats(), &AnalysisConfig::default());

        let forward = matrix.get("Burn", "Tron").unwrap();
        let backward = matrix.get("Tron", "Burn").unwrap();
        assert_eq!(forward.wins, backward.losses);
        assert_eq!(forward.losses, backward.wins);
        assert_eq!(forward.draws, backward.draws);
        assert_eq!(forward.wins, 2);
        assert_eq!(forward.losses, 5);
    }

    #[test]
    fn test_fold_into_other() {
        let config = AnalysisConfig {
            matrix_size: 2,
            ..AnalysisConfig::default()
        };
        let pairings = vec![pairing("Burn", "Fringe", 2, 0, 0)];
        let matrix = MatchupMatrix::build(&pairings, &stats(), &config);

        assert_eq!(matrix.archetypes, vec!["Burn", "Tron", "Other"]);
        let cell = matrix.get("Burn", "Other").unwrap();
        assert_eq!(cell.wins, 2);
        assert_eq!(matrix.get("Other", "Burn").unwrap().losses, 2);
    }

    #[test]
    fn test_diagonal_is_fifty_percent() {
        let pairings = vec![pairing("Burn", "Burn", 2, 1, 0)];
        let matrix = MatchupMatrix::build(&pairings, &stats(), &AnalysisConfig::default());

        let cell = matrix.get("Burn", "Burn").unwrap();
        // Both perspectives land in the same cell
        assert_eq!(cell.wins, 3);
        assert_eq!(cell.losses, 3);
        assert!((cell.win_rate - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_insufficient_sample_flag() {
        let pairings = vec![
            pairing("Burn", "Tron", 2, 1, 0),
            pairing("Burn", "Tron", 2, 1, 0),
        ];
        let matrix = MatchupMatrix::build(&pairings, &stats(), &AnalysisConfig::default());

        // 6 decided games in Burn/Tron, above the default minimum of 5
        assert!(!matrix.get("Burn", "Tron").unwrap().insufficient_sample);
        // Nothing recorded between Burn and Fringe
        let empty = matrix.get("Burn", "Fringe").unwrap();
        assert!(empty.insufficient_sample);
        assert!((empty.win_rate - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_ci_and_rate_per_cell() {
        let pairings = vec![pairing("Burn", "Tron", 6, 1, 0)];
        let matrix = MatchupMatrix::build(&pairings, &stats(), &AnalysisConfig::default());

        let cell = matrix.get("Burn", "Tron").unwrap();
        assert!((cell.win_rate - 85.71428571).abs() < 1e-6);
        assert!(cell.ci_lower <= cell.win_rate && cell.win_rate <= cell.ci_upper);
    }

    #[test]
    fn test_empty_inputs() {
        let matrix = MatchupMatrix::build(&[], &[], &AnalysisConfig::default());
        assert!(matrix.archetypes.is_empty());
    }
}
