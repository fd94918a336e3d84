//! Organize pipeline.
//!
//! Coordinates the whole run:
//! 1. Move collection posters
//! 2. Match movie posters and create their sorted directories
//! 3. Match series groups and create their sorted directories
//! 4. Move movie posters into their directories
//! 5. Move series posters into their directories
//! 6. Delete empty directories in the unsorted tree
//! 7. Rename movie posters
//! 8. Rename series posters
//!
//! Each movie file and series group is an independent unit of work: any
//! failure is logged, recorded in the report, and the run moves on.

use crate::core::cleanup::{self, CleanupMode};
use crate::core::organizer::{self, MoveMode};
use crate::core::placement::{self, COLLECTIONS_DIR, MOVIES_DIR, SERIES_DIR};
use crate::core::resolver::{self, SelectionPrompt};
use crate::core::scanner;
use crate::models::poster::{MoviePoster, SeriesGroup};
use crate::models::report::OrganizeReport;
use crate::services::catalog::{MovieCatalog, MovieLibrary, SeriesCatalog};
use crate::services::radarr::{self, LibraryMovie};
use crate::store::FileStore;
use crate::{Error, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Unsorted subdirectory holding movie posters.
pub const UNSORTED_MOVIES: &str = "movies";
/// Unsorted subdirectory holding series posters.
pub const UNSORTED_SERIES: &str = "series";

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Root of the sorted tree.
    pub sorted_root: PathBuf,
    /// Root of the unsorted tree.
    pub unsorted_root: PathBuf,
    /// How empty unsorted directories are pruned.
    pub cleanup: CleanupMode,
}

impl PipelineConfig {
    pub fn new(sorted_root: impl Into<PathBuf>, unsorted_root: impl Into<PathBuf>) -> Self {
        Self {
            sorted_root: sorted_root.into(),
            unsorted_root: unsorted_root.into(),
            cleanup: CleanupMode::default(),
        }
    }

    pub fn unsorted_movies(&self) -> PathBuf {
        self.unsorted_root.join(UNSORTED_MOVIES)
    }

    pub fn unsorted_series(&self) -> PathBuf {
        self.unsorted_root.join(UNSORTED_SERIES)
    }

    pub fn sorted_movies(&self) -> PathBuf {
        self.sorted_root.join(MOVIES_DIR)
    }

    pub fn sorted_series(&self) -> PathBuf {
        self.sorted_root.join(SERIES_DIR)
    }
}

/// Organize pipeline over a file store and the three catalog services.
pub struct Pipeline<'a, S, M, T, L> {
    config: PipelineConfig,
    store: &'a S,
    movies: &'a M,
    series: &'a T,
    library: &'a L,
    /// Library listing, fetched on first use.
    library_cache: Option<Vec<LibraryMovie>>,
}

impl<'a, S, M, T, L> Pipeline<'a, S, M, T, L>
where
    S: FileStore,
    M: MovieCatalog,
    T: SeriesCatalog,
    L: MovieLibrary,
{
    pub fn new(
        config: PipelineConfig,
        store: &'a S,
        movies: &'a M,
        series: &'a T,
        library: &'a L,
    ) -> Self {
        Self {
            config,
            store,
            movies,
            series,
            library,
            library_cache: None,
        }
    }

    /// Run every step in order.
    pub async fn run<P: SelectionPrompt>(&mut self, prompt: &mut P) -> Result<OrganizeReport> {
        tracing::info!("Sorted directory: {}", self.config.sorted_root.display());
        tracing::info!("Unsorted directory: {}", self.config.unsorted_root.display());

        let mut report = OrganizeReport::default();

        for branch in [MOVIES_DIR, SERIES_DIR, COLLECTIONS_DIR] {
            placement::ensure_dir(self.store, &self.config.sorted_root.join(branch))?;
        }

        step("Organizing collection posters...");
        report.collections_placed = organizer::place_collection_posters(
            self.store,
            &self.config.unsorted_root,
            &self.config.sorted_root,
        )?;

        step("Processing movie posters...");
        self.create_movie_directories(prompt, &mut report).await?;

        step("Processing series posters...");
        self.create_series_directories(prompt, &mut report).await?;

        step("Organizing unsorted movie posters...");
        report.movie_posters_moved = organizer::move_matching_posters(
            self.store,
            &self.config.sorted_movies(),
            &self.config.unsorted_root,
            MoveMode::FirstMatch,
        )?;

        step("Organizing unsorted series posters...");
        report.series_posters_moved = organizer::move_matching_posters(
            self.store,
            &self.config.sorted_series(),
            &self.config.unsorted_root,
            MoveMode::AllMatches,
        )?;

        step("Deleting empty directories in the unsorted directory...");
        report.dirs_removed = cleanup::delete_empty_directories(
            self.store,
            &self.config.unsorted_root,
            self.config.cleanup,
        )?;

        step("Renaming movie posters...");
        report.movie_posters_renamed =
            organizer::rename_movie_posters(self.store, &self.config.sorted_movies())?;

        step("Renaming series posters (including seasons and specials)...");
        report.series_posters_renamed =
            organizer::rename_series_posters(self.store, &self.config.sorted_series())?;

        Ok(report)
    }

    /// Match every unsorted movie poster and create its sorted directory.
    pub async fn create_movie_directories<P: SelectionPrompt>(
        &mut self,
        prompt: &mut P,
        report: &mut OrganizeReport,
    ) -> Result<()> {
        let root = self.config.unsorted_movies();
        if !self.store.is_dir(&root) {
            tracing::warn!("No unsorted movies directory at {}", root.display());
            return Ok(());
        }

        for poster in scanner::scan_movie_posters(self.store, &root)? {
            println!();
            println!("{} {}", "Found image file:".bold(), poster.file_name);

            if !poster.parsed.is_searchable() {
                report.skip(&poster.file_name, "no search query could be extracted");
                continue;
            }

            match self.place_movie(prompt, &poster).await {
                Ok(created) => {
                    if created {
                        report.movie_dirs_created += 1;
                    }
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => report.skip(&poster.file_name, e),
            }
        }
        Ok(())
    }

    async fn place_movie<P: SelectionPrompt>(
        &mut self,
        prompt: &mut P,
        poster: &MoviePoster,
    ) -> Result<bool> {
        tracing::info!("Using search query: '{}'", poster.parsed.query);
        if let Some(year) = &poster.parsed.year {
            tracing::info!("Extracted year from file name: {}", year);
        }

        let matched = resolver::resolve_movie(self.movies, prompt, &poster.parsed)
            .await?
            .into_inner();
        tracing::info!("Selected movie: {} (TMDB ID: {})", matched.title, matched.id);

        self.load_library().await?;
        let library = self.library_cache.as_deref().unwrap_or_default();
        let entry = radarr::find_by_tmdb_id(library, matched.id)
            .ok_or_else(|| Error::NotInLibrary(format!("{} (TMDB ID: {})", matched.title, matched.id)))?;

        let target = placement::movie_target(&self.config.sorted_root, entry)?;
        placement::ensure_dir(self.store, &target)
    }

    async fn load_library(&mut self) -> Result<()> {
        if self.library_cache.is_none() {
            let movies = self.library.library_movies().await?;
            tracing::debug!("Loaded {} movies from the library", movies.len());
            self.library_cache = Some(movies);
        }
        Ok(())
    }

    /// Match every series group and create its sorted directory.
    pub async fn create_series_directories<P: SelectionPrompt>(
        &mut self,
        prompt: &mut P,
        report: &mut OrganizeReport,
    ) -> Result<()> {
        let root = self.config.unsorted_series();
        if !self.store.is_dir(&root) {
            tracing::warn!("No unsorted series directory at {}", root.display());
            return Ok(());
        }

        let scan = scanner::scan_series_groups(self.store, &root)?;
        for path in &scan.unmatched {
            report.skip(
                crate::utils::fs::file_name(path),
                "does not start with \"NAME (YEAR)\"",
            );
        }

        for group in &scan.groups {
            println!();
            println!("{} {}", "Processing series group:".bold(), group.key);
            for file in &group.files {
                println!("  - {}", crate::utils::fs::file_name(file));
            }

            match self.place_series(prompt, group).await {
                Ok(created) => {
                    if created {
                        report.series_dirs_created += 1;
                    }
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => report.skip(&group.key, e),
            }
        }
        Ok(())
    }

    async fn place_series<P: SelectionPrompt>(
        &mut self,
        prompt: &mut P,
        group: &SeriesGroup,
    ) -> Result<bool> {
        tracing::info!(
            "Using search query: '{}' with year: {}",
            group.query(),
            group.year
        );

        let matched = resolver::resolve_series(self.series, prompt, group)
            .await?
            .into_inner();
        let target = placement::series_target(&self.config.sorted_root, &matched)?;
        placement::ensure_dir(self.store, &target)
    }
}

fn step(message: &str) {
    println!();
    println!("{}", message.bold().cyan());
}

/// Check that the sorted and unsorted roots (and the unsorted movie and
/// series subdirectories) exist.
pub fn validate_directories<S: FileStore>(store: &S, config: &PipelineConfig) -> Result<()> {
    for dir in [
        config.sorted_root.clone(),
        config.unsorted_root.clone(),
        config.unsorted_movies(),
        config.unsorted_series(),
    ] {
        check_dir(store, &dir)?;
    }
    Ok(())
}

fn check_dir<S: FileStore>(store: &S, dir: &Path) -> Result<()> {
    if !store.exists(dir) {
        return Err(Error::PathNotFound(dir.display().to_string()));
    }
    if !store.is_dir(dir) {
        return Err(Error::NotADirectory(dir.display().to_string()));
    }
    Ok(())
}
