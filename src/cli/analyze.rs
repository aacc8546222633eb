use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::config::AnalysisConfig;
use crate::core::record::Tournament;
use crate::pipeline;
use crate::stats::report::MetagameReport;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Tournament record files (JSON)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Path to the archetype rule file (embedded Modern demo rules by default)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Path to the card color-identity lookup table
    #[arg(long)]
    pub colors: Option<PathBuf>,

    /// Path to an analysis config file (JSON); missing fields use defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the minimum presence cutoff (percent)
    #[arg(long)]
    pub min_presence: Option<f64>,

    /// Override the matchup matrix size
    #[arg(long)]
    pub matrix_size: Option<usize>,
}

/// Load rule file, color table, config, and tournaments shared by the
/// analyze and classify commands
pub(crate) fn load_inputs(
    rules_path: Option<&PathBuf>,
    colors_path: Option<&PathBuf>,
    config_path: Option<&PathBuf>,
    inputs: &[PathBuf],
) -> anyhow::Result<(
    crate::rules::repository::RuleRepository,
    crate::classify::colors::ColorLookup,
    AnalysisConfig,
    Vec<Tournament>,
)> {
    let rules = match rules_path {
        Some(path) => crate::rules::repository::RuleRepository::load_from_file(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => crate::rules::repository::RuleRepository::load_embedded()?,
    };

    let colors = match colors_path {
        Some(path) => crate::classify::colors::ColorLookup::load_from_file(path)
            .with_context(|| format!("loading color lookup from {}", path.display()))?,
        None => crate::classify::colors::ColorLookup::new(),
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading config from {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parsing config from {}", path.display()))?
        }
        None => AnalysisConfig::default(),
    };

    let mut tournaments = Vec::with_capacity(inputs.len());
    for path in inputs {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading tournament file {}", path.display()))?;
        let mut tournament: Tournament = serde_json::from_str(&content)
            .with_context(|| format!("parsing tournament file {}", path.display()))?;
        tournament.rebuild_indexes();
        tournaments.push(tournament);
    }

    Ok((rules, colors, config, tournaments))
}

/// Execute the analyze subcommand
///
/// # Errors
///
/// Returns an error if any input file cannot be read or parsed, or if the
/// rule file fails validation.
pub fn run(args: &AnalyzeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (rules, colors, mut config, tournaments) =
        load_inputs(args.rules.as_ref(), args.colors.as_ref(), args.config.as_ref(), &args.inputs)?;

    if let Some(min_presence) = args.min_presence {
        config.min_presence = min_presence;
    }
    if let Some(matrix_size) = args.matrix_size {
        config.matrix_size = matrix_size;
    }

    if verbose {
        eprintln!(
            "Loaded {} archetypes, {} fallbacks, {} color entries, {} tournaments",
            rules.len(),
            rules.fallbacks.len(),
            colors.len(),
            tournaments.len()
        );
    }

    let report = pipeline::analyze(&tournaments, &rules, &colors, &config);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_text(&report),
    }

    Ok(())
}

fn print_text(report: &MetagameReport) {
    println!(
        "{} metagame: {} decks, {} unknown",
        report.format, report.total_decks, report.unknown_decks
    );
    println!();
    println!(
        "{:<28} {:>7} {:>8} {:>8} {:>15} {:>6}",
        "Archetype", "Decks", "Presence", "Win rate", "CI", "Tier"
    );
    for entry in &report.archetypes {
        let tier = entry
            .tier
            .map_or_else(|| "-".to_string(), |t| t.to_string());
        println!(
            "{:<28} {:>7} {:>7.1}% {:>7.1}% {:>6.1}% -{:>6.1}% {:>6}",
            entry.name,
            entry.copies,
            entry.presence,
            entry.win_rate,
            entry.ci_lower,
            entry.ci_upper,
            tier
        );
    }

    println!();
    let diversity = &report.diversity;
    println!(
        "Diversity: Shannon {:.3} (effective {:.1} archetypes), Simpson {:.3}, HHI {:.3}, evenness {:.3}",
        diversity.shannon,
        diversity.effective_archetypes,
        diversity.simpson,
        diversity.herfindahl,
        diversity.evenness
    );
    if !report.tiers_converged {
        println!("Note: tier assignment hit the iteration bound; labels are approximate");
    }

    if report.matchups.archetypes.len() > 1 {
        println!();
        println!("Matchup win rates (row vs. column):");
        let labels = &report.matchups.archetypes;
        print!("{:<20}", "");
        for label in labels {
            print!(" {:>10.10}", label);
        }
        println!();
        for (row, row_cells) in report.matchups.cells.iter().enumerate() {
            print!("{:<20.20}", labels[row]);
            for cell in row_cells {
                if cell.insufficient_sample {
                    print!(" {:>10}", "-");
                } else {
                    print!(" {:>9.1}%", cell.win_rate);
                }
            }
            println!();
        }
    }
}
