//! Run report model.

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// An item that was left unsorted, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedItem {
    pub name: String,
    pub reason: String,
}

/// Counters collected over one organize run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizeReport {
    pub collections_placed: usize,
    pub movie_dirs_created: usize,
    pub series_dirs_created: usize,
    pub movie_posters_moved: usize,
    pub series_posters_moved: usize,
    pub dirs_removed: usize,
    pub movie_posters_renamed: usize,
    pub series_posters_renamed: usize,
    /// Movie files and series groups that could not be matched.
    pub skipped: Vec<SkippedItem>,
}

impl OrganizeReport {
    /// Record a skipped movie file or series group.
    pub fn skip(&mut self, name: impl Into<String>, reason: impl ToString) {
        let item = SkippedItem {
            name: name.into(),
            reason: reason.to_string(),
        };
        tracing::warn!("Skipping '{}': {}", item.name, item.reason);
        self.skipped.push(item);
    }

    /// Print the end-of-run summary.
    pub fn print_summary(&self) {
        println!();
        println!("{}", "[Summary]".bold().green());
        println!("  {} {}", "Collection posters placed:".bold(), self.collections_placed);
        println!("  {} {}", "Movie directories created:".bold(), self.movie_dirs_created);
        println!("  {} {}", "Series directories created:".bold(), self.series_dirs_created);
        println!("  {} {}", "Movie posters moved:".bold(), self.movie_posters_moved);
        println!("  {} {}", "Series posters moved:".bold(), self.series_posters_moved);
        println!("  {} {}", "Empty directories removed:".bold(), self.dirs_removed);
        println!(
            "  {} {}",
            "Posters renamed:".bold(),
            self.movie_posters_renamed + self.series_posters_renamed
        );

        if !self.skipped.is_empty() {
            println!();
            println!("{}", "[Left unsorted]".bold().yellow());
            for item in &self.skipped {
                println!("  {} - {}", item.name.red(), item.reason);
            }
        }
    }
}
