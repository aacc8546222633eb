use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::analyze::load_inputs;
use crate::cli::OutputFormat;
use crate::core::types::ClassifiedDeck;
use crate::pipeline;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Tournament record files (JSON)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Path to the archetype rule file (embedded Modern demo rules by default)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Path to the card color-identity lookup table
    #[arg(long)]
    pub colors: Option<PathBuf>,

    /// Path to an analysis config file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Serialize)]
struct ClassifyOutput<'a> {
    decks: &'a [ClassifiedDeck],
}

/// Execute the classify subcommand
///
/// # Errors
///
/// Returns an error if any input file cannot be read or parsed.
pub fn run(args: &ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (rules, colors, config, tournaments) =
        load_inputs(args.rules.as_ref(), args.colors.as_ref(), args.config.as_ref(), &args.inputs)?;

    if verbose {
        eprintln!(
            "Classifying {} tournaments against {} archetypes",
            tournaments.len(),
            rules.len()
        );
    }

    let decks = pipeline::classify_population(&tournaments, &rules, &colors, &config);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&ClassifyOutput { decks: &decks })?
            );
        }
        OutputFormat::Text => {
            for deck in &decks {
                println!(
                    "{:<16} {:<16} {:<28} {:<10} {:>5.0}%  {}-{}-{}",
                    deck.tournament,
                    deck.player,
                    deck.archetype,
                    deck.method,
                    deck.confidence * 100.0,
                    deck.wins,
                    deck.losses,
                    deck.draws
                );
            }
        }
    }

    Ok(())
}
