//! # metascope
//!
//! A library for classifying competitive card-game tournament decks into
//! named archetypes and computing aggregate metagame statistics.
//!
//! Tournament results name players and decklists, but the questions worth
//! asking (what is winning, and is it provably better or just lucky so
//! far) are about archetypes. `metascope` answers them by matching each
//! deck against a declarative rule file and then running a statistics
//! pass over the classified population.
//!
//! ## Features
//!
//! - **Rule-driven classification**: archetypes are data (conditions over
//!   card lists), not code
//! - **Variants and fallbacks**: refine a match, or catch near-misses by
//!   card-set similarity
//! - **Color identity**: deck-level color signatures with canonical names
//! - **Metagame statistics**: presence, win rate, Wilson confidence
//!   intervals, normalization, tier assignment
//! - **Diversity and structure**: Shannon/Simpson indexes, k-means
//!   clustering, pairwise matchup matrices
//!
//! ## Example
//!
//! ```rust,no_run
//! use metascope::{AnalysisConfig, RuleRepository};
//! use metascope::core::{CardCount, Deck};
//! use metascope::classify::ClassificationEngine;
//!
//! // Load the embedded demo ruleset
//! let rules = RuleRepository::load_embedded().unwrap();
//! let config = AnalysisConfig::default();
//!
//! let deck = Deck::new(
//!     vec![
//!         CardCount::new("Lightning Bolt", 4),
//!         CardCount::new("Goblin Guide", 4),
//!         CardCount::new("Monastery Swiftspear", 4),
//!         CardCount::new("Mountain", 18),
//!     ],
//!     vec![],
//! );
//!
//! let engine = ClassificationEngine::new(&rules, &config);
//! let result = engine.classify(&deck);
//! println!("{}: {:.0}%", result.archetype, result.confidence * 100.0);
//! ```
//!
//! ## Modules
//!
//! - [`rules`]: archetype/fallback definitions and the rule repository
//! - [`classify`]: condition evaluation, color identity, matching engine
//! - [`stats`]: the aggregation pipeline (presence, CI, tiers, diversity,
//!   matchups)
//! - [`pipeline`]: parallel classification plus the sequential stats pass
//! - [`core`]: deck and tournament input records
//! - [`cli`]: command-line interface implementation

pub mod classify;
pub mod cli;
pub mod config;
pub mod core;
pub mod pipeline;
pub mod rules;
pub mod stats;
pub mod utils;

// Re-export commonly used types for convenience
pub use classify::colors::{ColorLookup, ColorSet};
pub use classify::engine::{ClassificationEngine, ClassificationResult};
pub use config::{AnalysisConfig, ConfidenceLevel, ConflictMode, PresenceMeasure};
pub use crate::core::types::{ClassificationMethod, ClassifiedDeck};
pub use pipeline::analyze;
pub use rules::repository::RuleRepository;
pub use stats::report::{ArchetypeStats, MetagameReport};
