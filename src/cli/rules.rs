use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::rules::repository::RuleRepository;

#[derive(Args)]
pub struct RulesArgs {
    #[command(subcommand)]
    pub command: RulesCommand,
}

#[derive(Subcommand)]
pub enum RulesCommand {
    /// List the archetypes of a rule file
    List {
        /// Rule file (embedded Modern demo rules by default)
        path: Option<PathBuf>,
    },

    /// Show one archetype definition
    Show {
        /// Archetype name
        name: String,

        /// Rule file (embedded Modern demo rules by default)
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Validate a rule file and report the first problem found
    Validate {
        /// Rule file to validate
        path: PathBuf,
    },
}

fn load(path: Option<&PathBuf>) -> anyhow::Result<RuleRepository> {
    Ok(match path {
        Some(path) => RuleRepository::load_from_file(path)?,
        None => RuleRepository::load_embedded()?,
    })
}

/// Execute the rules subcommand
///
/// # Errors
///
/// Returns an error if the rule file cannot be read, parsed, or validated.
pub fn run(args: &RulesArgs, format: OutputFormat) -> anyhow::Result<()> {
    match &args.command {
        RulesCommand::List { path } => {
            let repository = load(path.as_ref())?;
            match format {
                OutputFormat::Json => {
                    let names: Vec<&str> = repository
                        .archetypes
                        .iter()
                        .map(|a| a.name.as_str())
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&names)?);
                }
                OutputFormat::Text => {
                    println!("{} ({} archetypes)", repository.format, repository.len());
                    for archetype in &repository.archetypes {
                        let variants = if archetype.variants.is_empty() {
                            String::new()
                        } else {
                            format!(" ({} variants)", archetype.variants.len())
                        };
                        println!(
                            "  {} [{} conditions]{}",
                            archetype.name,
                            archetype.conditions.len(),
                            variants
                        );
                    }
                    for fallback in &repository.fallbacks {
                        println!(
                            "  {} [fallback, {} reference cards]",
                            fallback.name,
                            fallback.common_cards.len()
                        );
                    }
                }
            }
        }

        RulesCommand::Show { name, path } => {
            let repository = load(path.as_ref())?;
            let archetype = repository
                .get(name)
                .ok_or_else(|| anyhow::anyhow!("no archetype named '{name}'"))?;
            println!("{}", serde_json::to_string_pretty(archetype)?);
        }

        RulesCommand::Validate { path } => {
            match RuleRepository::load_from_file(path) {
                Ok(repository) => {
                    println!(
                        "OK: {} archetypes, {} fallbacks",
                        repository.len(),
                        repository.fallbacks.len()
                    );
                }
                Err(error) => {
                    anyhow::bail!("invalid rule file: {error}");
                }
            }
        }
    }

    Ok(())
}
