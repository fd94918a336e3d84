//! Placement planner.
//!
//! Computes where a matched poster belongs in the sorted tree:
//!
//! - movies: `<sorted>/movies/<library path relative to its root folder>`
//! - series: `<sorted>/series/<last component of the library path>`
//! - collections: `<sorted>/collections/<name without "collection">/poster.<ext>`

use crate::services::radarr::LibraryMovie;
use crate::services::sonarr::SeriesLookupItem;
use crate::store::FileStore;
use crate::utils::fs as fs_utils;
use crate::{Error, Result};
use std::path::{Component, Path, PathBuf};

pub const MOVIES_DIR: &str = "movies";
pub const SERIES_DIR: &str = "series";
pub const COLLECTIONS_DIR: &str = "collections";

/// Movie folder relative to the library root folder.
pub fn movie_relative_path(movie: &LibraryMovie) -> Result<PathBuf> {
    let label = movie
        .title
        .clone()
        .unwrap_or_else(|| format!("tmdb {}", movie.tmdb_id));

    let (path, root) = match (movie.path.as_deref(), movie.root_folder_path.as_deref()) {
        (Some(path), Some(root)) if !path.is_empty() && !root.is_empty() => (path, root),
        _ => return Err(Error::MissingPath(label)),
    };

    let relative = Path::new(path)
        .strip_prefix(root)
        .map_err(|_| Error::PathOutsideRoot {
            path: path.to_string(),
            root: root.to_string(),
        })?;

    if relative.as_os_str().is_empty() {
        return Err(Error::MissingPath(label));
    }
    Ok(relative.to_path_buf())
}

/// Target directory for a movie.
pub fn movie_target(sorted_root: &Path, movie: &LibraryMovie) -> Result<PathBuf> {
    Ok(sorted_root.join(MOVIES_DIR).join(movie_relative_path(movie)?))
}

/// Target directory for a series.
pub fn series_target(sorted_root: &Path, series: &SeriesLookupItem) -> Result<PathBuf> {
    let folder = series
        .path
        .as_deref()
        .and_then(|p| Path::new(p).file_name())
        .ok_or_else(|| Error::MissingPath(series.title.clone()))?;
    Ok(sorted_root.join(SERIES_DIR).join(folder))
}

/// Collection folder name: the file stem with every "collection" removed.
///
/// Returns `None` when what is left is not a single plain folder name
/// (empty, `.` or `..`).
pub fn collection_dir_name(file_stem: &str) -> Option<String> {
    let name = regex::Regex::new(r"(?i)collection")
        .map(|re| re.replace_all(file_stem, "").to_string())
        .unwrap_or_else(|_| file_stem.to_string());
    let name = name.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut components = Path::new(&name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Some(name),
        _ => None,
    }
}

/// Destination of a collection poster file.
pub fn collection_target(sorted_root: &Path, file: &Path) -> Option<PathBuf> {
    let stem = file.file_stem()?.to_string_lossy();
    let dir_name = collection_dir_name(&stem)?;
    Some(
        sorted_root
            .join(COLLECTIONS_DIR)
            .join(dir_name)
            .join(format!("poster.{}", fs_utils::raw_extension(file))),
    )
}

/// Create `dir` if needed. Returns whether it was newly created.
pub fn ensure_dir<S: FileStore>(store: &S, dir: &Path) -> Result<bool> {
    if store.is_dir(dir) {
        tracing::debug!("Directory already exists: {}", dir.display());
        return Ok(false);
    }
    store.create_dir_all(dir)?;
    tracing::info!("Created directory: {}", dir.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn library_movie(path: Option<&str>, root: Option<&str>) -> LibraryMovie {
        LibraryMovie {
            tmdb_id: 348,
            title: Some("Alien".to_string()),
            path: path.map(str::to_string),
            root_folder_path: root.map(str::to_string),
        }
    }

    #[test]
    fn test_movie_target() {
        let movie = library_movie(Some("/data/movies/Sci-Fi/Alien (1979)"), Some("/data/movies/"));
        assert_eq!(
            movie_target(Path::new("/sorted"), &movie).unwrap(),
            PathBuf::from("/sorted/movies/Sci-Fi/Alien (1979)")
        );
    }

    #[test]
    fn test_movie_target_missing_fields() {
        let movie = library_movie(None, Some("/data/movies"));
        assert!(matches!(movie_relative_path(&movie), Err(Error::MissingPath(_))));
        let movie = library_movie(Some("/data/movies/Alien (1979)"), None);
        assert!(matches!(movie_relative_path(&movie), Err(Error::MissingPath(_))));
    }

    #[test]
    fn test_movie_outside_root() {
        let movie = library_movie(Some("/other/Alien (1979)"), Some("/data/movies"));
        assert!(matches!(
            movie_relative_path(&movie),
            Err(Error::PathOutsideRoot { .. })
        ));
    }

    #[test]
    fn test_series_target() {
        let series = SeriesLookupItem {
            title: "Severance".to_string(),
            year: Some(2022),
            overview: None,
            path: Some("/data/tv/Severance (2022)/".to_string()),
            tvdb_id: None,
        };
        assert_eq!(
            series_target(Path::new("/sorted"), &series).unwrap(),
            PathBuf::from("/sorted/series/Severance (2022)")
        );

        let no_path = SeriesLookupItem { path: None, ..series };
        assert!(series_target(Path::new("/sorted"), &no_path).is_err());
    }

    #[test]
    fn test_collection_dir_name() {
        assert_eq!(collection_dir_name("Marvel Collection").as_deref(), Some("Marvel"));
        assert_eq!(
            collection_dir_name("The Alien collection Posters").as_deref(),
            Some("The Alien Posters")
        );
        assert_eq!(collection_dir_name(" Collection "), None);
        // Leftovers that would escape the collections folder
        assert_eq!(collection_dir_name("..Collection"), None);
        assert_eq!(collection_dir_name(".collection"), None);
        assert_eq!(collection_dir_name("collection .."), None);
        assert_eq!(
            collection_dir_name("..Marvel Collection").as_deref(),
            Some("..Marvel")
        );
    }

    #[test]
    fn test_collection_target_stays_in_collections() {
        assert_eq!(
            collection_target(Path::new("/sorted"), Path::new("/u/..Collection.jpg")),
            None
        );
        assert_eq!(
            collection_target(Path::new("/sorted"), Path::new("/u/.collection.jpg")),
            None
        );
    }

    #[test]
    fn test_collection_target() {
        assert_eq!(
            collection_target(Path::new("/sorted"), Path::new("/u/x/Marvel Collection.jpg")),
            Some(PathBuf::from("/sorted/collections/Marvel/poster.jpg"))
        );
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let store = MemoryStore::new();
        let dir = Path::new("/sorted/movies/Alien (1979)");
        assert!(ensure_dir(&store, dir).unwrap());
        assert!(!ensure_dir(&store, dir).unwrap());
        assert!(store.is_dir(dir));
    }
}
