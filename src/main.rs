//! Quote-Ripple main entry point
//!
//! This is the command-line interface for the Quote-Ripple harvester.

use clap::Parser;
use quote_ripple::config::load_or_default;
use quote_ripple::crawler::harvest;
use quote_ripple::output::{log_statistics, AUTHORS_PATH, DEFAULT_QUOTES_PATH};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Quote-Ripple: a quotes-site harvester
///
/// Quote-Ripple walks every listing page of a quotes site, collects the
/// quotes and their authors' biographies, and writes them to two CSV files.
/// The authors table is always written to `authors.csv`.
#[derive(Parser, Debug)]
#[command(name = "quote-ripple")]
#[command(version)]
#[command(about = "A quotes-site harvester", long_about = None)]
struct Cli {
    /// Path of the quotes CSV table
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_QUOTES_PATH)]
    output: PathBuf,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        tracing::error!("Run failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quote_ripple=info,warn"),
            1 => EnvFilter::new("quote_ripple=debug,info"),
            2 => EnvFilter::new("quote_ripple=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Crawls the site, then writes the quotes and authors tables
fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_or_default(cli.config.as_deref())?;
    tracing::info!("Starting crawl at {}", config.site.base_url);

    let stats = harvest(&config, &cli.output, Path::new(AUTHORS_PATH))?;
    log_statistics(&stats);

    Ok(())
}
