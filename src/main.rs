use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod context;
mod core;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("ref_context=debug,info")
    } else {
        EnvFilter::new("ref_context=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Merge(args) => {
            cli::merge::run(args, cli.format)?;
        }
        cli::Commands::Lookup(args) => {
            cli::lookup::run(args, cli.format)?;
        }
        cli::Commands::Catalog(args) => {
            cli::catalog::run(args, cli.format)?;
        }
    }

    Ok(())
}
