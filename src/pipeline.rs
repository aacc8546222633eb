//! End-to-end analysis pipeline.
//!
//! Classification of individual decks is a pure function of (deck, rule
//! set, config) and runs in parallel across worker threads; the rule
//! repository and color lookup are loaded and frozen before the workers
//! start. Aggregation then runs as one sequential pass over the complete
//! classified population, since normalization and tiering need global
//! statistics; partial aggregation is never attempted.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::classify::colors::ColorLookup;
use crate::classify::engine::ClassificationEngine;
use crate::config::AnalysisConfig;
use crate::core::record::Tournament;
use crate::core::types::{ClassificationMethod, ClassifiedDeck};
use crate::rules::repository::RuleRepository;
use crate::stats::aggregator::aggregate;
use crate::stats::cluster::assign_clusters;
use crate::stats::diversity::DiversityMetrics;
use crate::stats::matchups::{LabeledPairing, MatchupMatrix};
use crate::stats::normalize::apply_normalization;
use crate::stats::report::MetagameReport;
use crate::stats::tiers::assign_tiers;

/// Classify every deck of every tournament in parallel
///
/// Output order matches input order (tournament by tournament, player by
/// player), independent of thread scheduling.
#[must_use]
pub fn classify_population(
    tournaments: &[Tournament],
    rules: &RuleRepository,
    colors: &ColorLookup,
    config: &AnalysisConfig,
) -> Vec<ClassifiedDeck> {
    let engine = ClassificationEngine::new(rules, config);

    tournaments
        .par_iter()
        .flat_map(|tournament| {
            tournament.players.par_iter().map(|result| {
                let classification = engine.classify(&result.deck);
                let color_name = if colors.is_empty() {
                    None
                } else {
                    Some(colors.detect(&result.deck, config).canonical_name())
                };

                ClassifiedDeck {
                    tournament: tournament.name.clone(),
                    player: result.player.clone(),
                    archetype: classification.label(color_name),
                    method: classification.method,
                    confidence: classification.confidence,
                    color_identity: color_name.unwrap_or("Colorless").to_string(),
                    wins: result.wins,
                    losses: result.losses,
                    draws: result.draws,
                }
            })
        })
        .collect()
}

/// Resolve per-round pairings to archetype labels
///
/// Players missing from a tournament's deck list (drops, data gaps) make
/// their pairings unusable; those are skipped and counted as a data-quality
/// signal.
fn label_pairings(tournaments: &[Tournament], decks: &[ClassifiedDeck]) -> Vec<LabeledPairing> {
    // (tournament, player) -> archetype label
    let mut archetype_of: HashMap<(&str, &str), &str> = HashMap::new();
    for deck in decks {
        archetype_of.insert(
            (deck.tournament.as_str(), deck.player.as_str()),
            deck.archetype.as_str(),
        );
    }

    let mut pairings = Vec::new();
    let mut skipped = 0usize;
    for tournament in tournaments {
        for round in &tournament.rounds {
            for pairing in &round.matches {
                let a = archetype_of.get(&(tournament.name.as_str(), pairing.player_a.as_str()));
                let b = archetype_of.get(&(tournament.name.as_str(), pairing.player_b.as_str()));
                match (a, b) {
                    (Some(&archetype_a), Some(&archetype_b)) => pairings.push(LabeledPairing {
                        archetype_a: archetype_a.to_string(),
                        archetype_b: archetype_b.to_string(),
                        wins_a: pairing.wins_a,
                        wins_b: pairing.wins_b,
                        draws: pairing.draws,
                    }),
                    _ => skipped += 1,
                }
            }
        }
    }

    if skipped > 0 {
        debug!(skipped, "pairings referenced players without a deck list");
    }
    pairings
}

/// Run the full pipeline: classify, then aggregate
#[must_use]
pub fn analyze(
    tournaments: &[Tournament],
    rules: &RuleRepository,
    colors: &ColorLookup,
    config: &AnalysisConfig,
) -> MetagameReport {
    let decks = classify_population(tournaments, rules, colors, config);
    info!(
        decks = decks.len(),
        tournaments = tournaments.len(),
        "classified population"
    );

    let mut archetypes = aggregate(&decks, config);
    apply_normalization(&mut archetypes, config);
    let tier_outcome = assign_tiers(&mut archetypes, config);
    assign_clusters(&mut archetypes, config);

    let diversity = DiversityMetrics::from_stats(&archetypes);
    let pairings = label_pairings(tournaments, &decks);
    let matchups = MatchupMatrix::build(&pairings, &archetypes, config);

    let unknown_decks = decks
        .iter()
        .filter(|deck| deck.method == ClassificationMethod::Unknown)
        .count();

    MetagameReport {
        format: rules.format.clone(),
        total_decks: decks.len(),
        unknown_decks,
        archetypes,
        diversity,
        matchups,
        decks,
        tiers_converged: tier_outcome.converged,
    }
}
