//! Quote-Harvest main entry point
//!
//! This is the command-line interface for the Quote-Harvest crawler.

use clap::Parser;
use quote_harvest::config::{load_config, validate, Config};
use quote_harvest::crawler::run_crawl;
use quote_harvest::logging::init_logging;
use std::path::PathBuf;

/// Quote-Harvest: a paginated quote listing crawler
///
/// Walks the listing from the start URL following "next" links, collects
/// every quote and writes them to a JSON file when the walk ends.
#[derive(Parser, Debug)]
#[command(name = "quote-harvest")]
#[command(version)]
#[command(about = "A paginated quote listing crawler", long_about = None)]
struct Cli {
    /// First listing page to fetch
    #[arg(value_name = "START_URL")]
    start_url: Option<String>,

    /// Path of the JSON output file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e);
        }
    };

    // Page, extraction and save failures are logged by the crawl itself;
    // only a crawler that cannot be built is an error here.
    run_crawl(config).await?;

    Ok(())
}

/// Merges the optional config file with command-line overrides
fn build_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    if let Some(start_url) = &cli.start_url {
        config.crawl.start_url = start_url.clone();
    }

    if let Some(output) = &cli.output {
        config.output.output_path = output.to_string_lossy().into_owned();
    }

    validate(&config)?;

    Ok(config)
}
