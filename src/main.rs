//! Poster Sorter CLI
//!
//! A command-line tool for sorting movie, series and collection posters using
//! TMDB, Sonarr and Radarr.

use clap::Parser;
use poster_sorter::cli::{args::Cli, commands::organize};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    organize::organize(&cli).await?;

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("poster_sorter=debug")
    } else {
        EnvFilter::new("poster_sorter=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
