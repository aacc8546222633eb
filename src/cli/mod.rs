//! Command-line interface for metascope.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **analyze**: Run the full pipeline over tournament files
//! - **classify**: Classify the decks of tournament files, one result per deck
//! - **rules**: List, show, or validate archetype rule files
//!
//! ## Usage
//!
//! ```text
//! # Full metagame report over a set of tournaments
//! metascope analyze results/*.json --rules rulesets/modern.json
//!
//! # JSON output for scripting
//! metascope analyze results/july.json --format json
//!
//! # Per-deck classifications only
//! metascope classify results/july.json --colors colors.json
//!
//! # Validate a rule file without running anything
//! metascope rules validate my_rules.json
//! ```

use clap::{Parser, Subcommand};

pub mod analyze;
pub mod classify;
pub mod rules;

#[derive(Parser)]
#[command(name = "metascope")]
#[command(version)]
#[command(about = "Classify tournament decks into archetypes and compute metagame statistics")]
#[command(
    long_about = "metascope matches tournament decklists against a declarative archetype rule file and computes metagame statistics over the classified population:\n- presence and win rate per archetype (Wilson confidence intervals)\n- tier assignment and composite scores\n- diversity indexes and archetype clusters\n- pairwise matchup matrices"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full analysis pipeline over tournament files
    Analyze(analyze::AnalyzeArgs),

    /// Classify decks and print one result per deck
    Classify(classify::ClassifyArgs),

    /// Inspect or validate archetype rule files
    Rules(rules::RulesArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
