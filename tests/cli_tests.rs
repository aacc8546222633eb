//! CLI smoke tests.
//!
//! Drives the compiled binary end to end over fixture files written with
//! tempfile: a full analyze run in both output formats, per-deck
//! classification, and rule-file validation failures.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const TOURNAMENT_JSON: &str = r#"{
    "name": "CLI Challenge",
    "format": "Modern",
    "date": "2026-07-12",
    "players": [
        {
            "player": "alice",
            "wins": 4, "losses": 1, "draws": 0,
            "deck": {
                "mainboard": [
                    {"name": "Lightning Bolt", "count": 4},
                    {"name": "Goblin Guide", "count": 4},
                    {"name": "Monastery Swiftspear", "count": 4},
                    {"name": "Mountain", "count": 18}
                ]
            }
        },
        {
            "player": "bob",
            "wins": 1, "losses": 4, "draws": 0,
            "deck": {
                "mainboard": [
                    {"name": "Urza's Tower", "count": 4},
                    {"name": "Karn Liberated", "count": 4}
                ]
            }
        }
    ],
    "rounds": [
        {"matches": [{"player_a": "alice", "player_b": "bob", "wins_a": 2, "wins_b": 1}]}
    ]
}"#;

fn tournament_file() -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".json").unwrap();
    file.write_all(TOURNAMENT_JSON.as_bytes()).unwrap();
    file
}

#[test]
fn analyze_prints_a_text_report() {
    let input = tournament_file();

    Command::cargo_bin("metascope")
        .unwrap()
        .args(["analyze", input.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Modern metagame"))
        .stdout(predicate::str::contains("Burn"))
        .stdout(predicate::str::contains("Tron"));
}

#[test]
fn analyze_emits_parseable_json() {
    let input = tournament_file();

    let output = Command::cargo_bin("metascope")
        .unwrap()
        .args(["analyze", input.path().to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["format"], "Modern");
    assert_eq!(report["total_decks"], 2);
    assert!(report["archetypes"].as_array().unwrap().len() >= 2);
}

#[test]
fn classify_lists_every_deck() {
    let input = tournament_file();

    Command::cargo_bin("metascope")
        .unwrap()
        .args(["classify", input.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("bob"))
        .stdout(predicate::str::contains("Burn"));
}

#[test]
fn rules_validate_rejects_malformed_files() {
    let mut bad_rules = NamedTempFile::with_suffix(".json").unwrap();
    bad_rules
        .write_all(br#"{"format": "Modern", "archetypes": [{"name": "Empty", "conditions": []}]}"#)
        .unwrap();

    Command::cargo_bin("metascope")
        .unwrap()
        .args(["rules", "validate", bad_rules.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Empty"));
}

#[test]
fn rules_list_shows_embedded_archetypes() {
    Command::cargo_bin("metascope")
        .unwrap()
        .args(["rules", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Burn"))
        .stdout(predicate::str::contains("fallback"));
}

#[test]
fn analyze_fails_cleanly_on_missing_input() {
    Command::cargo_bin("metascope")
        .unwrap()
        .args(["analyze", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.json"));
}
