//! Unsorted tree scanner.
//!
//! Collects poster images from the unsorted tree and groups them for the
//! movie, series and collection passes. All listings are sorted by path.

use crate::core::parser;
use crate::models::poster::{MoviePoster, SeriesGroup};
use crate::store::FileStore;
use crate::utils::fs as fs_utils;
use crate::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Token marking a collection poster.
const COLLECTION_TOKEN: &str = "collection";

/// Result of grouping series posters.
#[derive(Debug, Default)]
pub struct SeriesScan {
    /// Groups ordered by key.
    pub groups: Vec<SeriesGroup>,
    /// Files whose names do not start with `NAME (YEAR)`.
    pub unmatched: Vec<PathBuf>,
}

/// All poster images below `root`.
pub fn scan_images<S: FileStore>(store: &S, root: &Path) -> Result<Vec<PathBuf>> {
    let images: Vec<PathBuf> = store
        .walk_files(root)?
        .into_iter()
        .filter(|p| fs_utils::is_image_file(p))
        .collect();

    tracing::debug!("Found {} images under {}", images.len(), root.display());
    Ok(images)
}

/// Movie posters below `root`, with their parsed names.
pub fn scan_movie_posters<S: FileStore>(store: &S, root: &Path) -> Result<Vec<MoviePoster>> {
    Ok(scan_images(store, root)?
        .iter()
        .map(|p| MoviePoster::from_path(p))
        .collect())
}

/// Group series posters below `root` by their `NAME (YEAR)` prefix.
pub fn scan_series_groups<S: FileStore>(store: &S, root: &Path) -> Result<SeriesScan> {
    Ok(group_series(scan_images(store, root)?))
}

/// Group already-collected series poster paths.
///
/// Paths are sorted first so the representative year always comes from the
/// lexicographically first file, whatever order the file system listed them in.
pub fn group_series(mut files: Vec<PathBuf>) -> SeriesScan {
    files.sort();

    let mut groups: BTreeMap<String, SeriesGroup> = BTreeMap::new();
    let mut unmatched = Vec::new();

    for path in files {
        let name = fs_utils::file_name(&path);
        match parser::parse_series_name(&name) {
            Some(key) => {
                groups
                    .entry(key.key.clone())
                    .or_insert_with(|| SeriesGroup {
                        key: key.key,
                        year: key.year,
                        files: Vec::new(),
                    })
                    .files
                    .push(path);
            }
            None => unmatched.push(path),
        }
    }

    SeriesScan {
        groups: groups.into_values().collect(),
        unmatched,
    }
}

/// Whether a file name marks a collection poster (case-insensitive).
pub fn is_collection_poster(file_name: &str) -> bool {
    file_name.to_lowercase().contains(COLLECTION_TOKEN)
}

/// Collection posters anywhere below `root`.
pub fn scan_collection_posters<S: FileStore>(store: &S, root: &Path) -> Result<Vec<PathBuf>> {
    Ok(scan_images(store, root)?
        .into_iter()
        .filter(|p| is_collection_poster(&fs_utils::file_name(p)))
        .collect())
}
