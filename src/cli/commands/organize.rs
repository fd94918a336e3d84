//! Organize command implementation.
//!
//! Loads configuration, collects and validates the sorted/unsorted
//! directories, then runs the organize pipeline against the real services.

use crate::cli::args::Cli;
use crate::cli::prompt::{self, ConsolePrompt};
use crate::core::cleanup::CleanupMode;
use crate::core::pipeline::{self, Pipeline, PipelineConfig};
use crate::core::resolver;
use crate::models::config;
use crate::preflight;
use crate::services::radarr::RadarrClient;
use crate::services::sonarr::SonarrClient;
use crate::services::tmdb::TmdbClient;
use crate::store::DiskStore;
use crate::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Run the full organize pipeline.
pub async fn organize(cli: &Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref())?;

    let sorted = directory_arg(cli.sorted.as_ref(), "Enter the path to the sorted directory: ")?;
    let unsorted = directory_arg(
        cli.unsorted.as_ref(),
        "Enter the path to the unsorted directory: ",
    )?;

    let mut pipeline_config = PipelineConfig::new(sorted, unsorted);
    if cli.prune_nested {
        pipeline_config.cleanup = CleanupMode::BottomUp;
    }

    let store = DiskStore::new();
    pipeline::validate_directories(&store, &pipeline_config)?;

    println!();
    println!("{}", "Sorting posters...".bold().cyan());
    println!("  {} {}", "Sorted:".bold(), pipeline_config.sorted_root.display());
    println!("  {} {}", "Unsorted:".bold(), pipeline_config.unsorted_root.display());
    println!(
        "  {} {}",
        "Mode:".bold(),
        if cli.non_interactive { "non-interactive" } else { "interactive" }
    );

    let tmdb = TmdbClient::new(config.tmdb.clone());
    let sonarr = SonarrClient::new(config.sonarr.clone());
    let radarr = RadarrClient::new(config.radarr.clone());

    if !cli.skip_preflight {
        println!();
        println!("{}", "Running preflight checks...".bold());
        let results = preflight::run_preflight_checks(&tmdb, &sonarr, &radarr).await;
        preflight::print_results(&results);
        if !preflight::all_passed(&results) {
            return Err(crate::Error::other(
                "Preflight checks failed. Fix the issues above and try again.",
            ));
        }
    }

    let mut pipeline = Pipeline::new(pipeline_config, &store, &tmdb, &sonarr, &radarr);
    let report = if cli.non_interactive {
        pipeline.run(&mut resolver::skip_ambiguous()).await?
    } else {
        pipeline.run(&mut ConsolePrompt::new()).await?
    };

    report.print_summary();
    println!();
    println!("{}", "All tasks completed successfully!".bold().green());

    Ok(())
}

fn directory_arg(arg: Option<&PathBuf>, question: &str) -> Result<PathBuf> {
    match arg {
        Some(path) => Ok(path.clone()),
        None => prompt::read_directory(question),
    }
}
