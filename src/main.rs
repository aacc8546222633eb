use clap::Parser;
use tracing_subscriber::EnvFilter;

use metascope::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("metascope=debug,info")
    } else {
        EnvFilter::new("metascope=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Analyze(args) => {
            cli::analyze::run(&args, cli.format, cli.verbose)?;
        }
        cli::Commands::Classify(args) => {
            cli::classify::run(&args, cli.format, cli.verbose)?;
        }
        cli::Commands::Rules(args) => {
            cli::rules::run(&args, cli.format)?;
        }
    }

    Ok(())
}
