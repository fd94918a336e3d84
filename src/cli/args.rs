//! Command line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Poster Sorter - Sort movie, series and collection posters into an asset tree
#[derive(Parser, Debug)]
#[command(name = "poster-sorter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Sorted (destination) directory; prompted for when omitted
    #[arg(value_name = "SORTED")]
    pub sorted: Option<PathBuf>,

    /// Unsorted (source) directory containing movies/ and series/; prompted for when omitted
    #[arg(value_name = "UNSORTED")]
    pub unsorted: Option<PathBuf>,

    /// Path to config.toml (default: user config directory)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Never prompt: posters without a year match are left unsorted
    #[arg(long)]
    pub non_interactive: bool,

    /// Remove nested empty directories in a single run
    #[arg(long)]
    pub prune_nested: bool,

    /// Skip service connectivity checks
    #[arg(long)]
    pub skip_preflight: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
