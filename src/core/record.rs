use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::deck::Deck;

/// One player's result in a tournament: the deck they registered and their
/// overall win/loss/draw record for the event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerResult {
    /// Player handle, unique within a tournament
    pub player: String,

    pub wins: u32,
    pub losses: u32,
    pub draws: u32,

    pub deck: Deck,
}

impl PlayerResult {
    /// Total matches played (wins + losses + draws)
    #[must_use]
    pub fn matches_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

/// A single pairing between two players with its match result
///
/// `wins_a`/`wins_b` are game wins within the match. The matchup matrix
/// aggregates these per ordered archetype pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingResult {
    pub player_a: String,
    pub player_b: String,
    pub wins_a: u32,
    pub wins_b: u32,
    #[serde(default)]
    pub draws: u32,
}

/// One round of pairings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub matches: Vec<PairingResult>,
}

/// A normalized tournament record as handed over by the data-collection
/// collaborator
///
/// Rounds are optional: events scraped without pairing data still feed
/// every statistic except the matchup matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    /// Event name (e.g. "Modern Challenge 64")
    pub name: String,

    /// Format the event was played in
    pub format: String,

    /// Event date
    pub date: NaiveDate,

    /// Per-player deck results
    pub players: Vec<PlayerResult>,

    /// Per-round pairings, when available
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rounds: Vec<Round>,
}

impl Tournament {
    /// Rebuild the precomputed deck indexes after deserialization
    pub fn rebuild_indexes(&mut self) {
        for result in &mut self.players {
            result.deck.rebuild_indexes();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tournament_round_trip() {
        let json = r#"{
            "name": "Test Challenge",
            "format": "Modern",
            "date": "2026-07-12",
            "players": [
                {
                    "player": "alice",
                    "wins": 4, "losses": 1, "draws": 0,
                    "deck": {"mainboard": [{"name": "Island", "count": 24}]}
                }
            ],
            "rounds": [
                {"matches": [{"player_a": "alice", "player_b": "bob", "wins_a": 2, "wins_b": 0}]}
            ]
        }"#;

        let mut tournament: Tournament = serde_json::from_str(json).unwrap();
        tournament.rebuild_indexes();

        assert_eq!(tournament.players.len(), 1);
        assert_eq!(tournament.players[0].matches_played(), 5);
        assert!(tournament.players[0].deck.mainboard_contains("Island"));
        assert_eq!(tournament.rounds[0].matches[0].draws, 0);
    }
}
