//! Integration tests for the organizer passes on a real file system.
//!
//! Tests cover:
//! - Collection poster placement
//! - Moving posters into matched directories
//! - Renaming, including skip-on-conflict
//! - Empty directory cleanup

use poster_sorter::core::cleanup::{self, CleanupMode};
use poster_sorter::core::organizer::{self, MoveMode};
use poster_sorter::store::DiskStore;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

// ========== COLLECTION TESTS ==========

#[test]
fn test_collection_posters_are_placed() {
    let temp = TempDir::new().unwrap();
    let unsorted = temp.path().join("unsorted");
    let sorted = temp.path().join("sorted");
    touch(&unsorted.join("Marvel Collection.jpg"), "marvel");
    touch(&unsorted.join("movies/nested/alien collection.PNG"), "alien");
    touch(&unsorted.join("movies/Alien (1979).jpg"), "poster");

    let placed =
        organizer::place_collection_posters(&DiskStore::new(), &unsorted, &sorted).unwrap();

    assert_eq!(placed, 2);
    let marvel = sorted.join("collections/Marvel/poster.jpg");
    assert_eq!(fs::read_to_string(&marvel).unwrap(), "marvel");
    assert!(sorted.join("collections/alien/poster.PNG").exists());
    assert!(!unsorted.join("Marvel Collection.jpg").exists());
    assert!(unsorted.join("movies/Alien (1979).jpg").exists());
}

#[test]
fn test_collection_poster_never_overwrites() {
    let temp = TempDir::new().unwrap();
    let unsorted = temp.path().join("unsorted");
    let sorted = temp.path().join("sorted");
    touch(&unsorted.join("Marvel Collection.jpg"), "new");
    touch(&sorted.join("collections/Marvel/poster.jpg"), "old");

    let placed =
        organizer::place_collection_posters(&DiskStore::new(), &unsorted, &sorted).unwrap();

    assert_eq!(placed, 0);
    assert_eq!(
        fs::read_to_string(sorted.join("collections/Marvel/poster.jpg")).unwrap(),
        "old"
    );
    assert!(unsorted.join("Marvel Collection.jpg").exists());
}

#[test]
fn test_collection_name_cannot_leave_collections_dir() {
    let temp = TempDir::new().unwrap();
    let unsorted = temp.path().join("unsorted");
    let sorted = temp.path().join("sorted");
    fs::create_dir_all(&sorted).unwrap();
    touch(&unsorted.join("..Collection.jpg"), "dotdot");
    touch(&unsorted.join(".collection.png"), "dot");

    let placed =
        organizer::place_collection_posters(&DiskStore::new(), &unsorted, &sorted).unwrap();

    assert_eq!(placed, 0);
    assert!(!sorted.join("poster.jpg").exists());
    assert!(!sorted.join("collections/poster.png").exists());
    assert!(unsorted.join("..Collection.jpg").exists());
    assert!(unsorted.join(".collection.png").exists());
}

// ========== MOVE TESTS ==========

#[test]
fn test_movie_move_takes_first_match_only() {
    let temp = TempDir::new().unwrap();
    let unsorted = temp.path().join("unsorted");
    let movies = temp.path().join("sorted/movies");
    fs::create_dir_all(movies.join("Alien (1979) {tmdb-348}")).unwrap();
    touch(&unsorted.join("movies/a/Alien (1979).jpg"), "a");
    touch(&unsorted.join("movies/b/ALIEN (1979) alt.png"), "b");

    let moved =
        organizer::move_matching_posters(&DiskStore::new(), &movies, &unsorted, MoveMode::FirstMatch)
            .unwrap();

    assert_eq!(moved, 1);
    assert!(movies.join("Alien (1979) {tmdb-348}/Alien (1979).jpg").exists());
    assert!(unsorted.join("movies/b/ALIEN (1979) alt.png").exists());
}

#[test]
fn test_series_move_takes_all_matches() {
    let temp = TempDir::new().unwrap();
    let unsorted = temp.path().join("unsorted");
    let series = temp.path().join("sorted/series");
    fs::create_dir_all(series.join("Severance (2022)")).unwrap();
    touch(&unsorted.join("series/Severance (2022).jpg"), "");
    touch(&unsorted.join("series/Severance (2022) - Season 1.jpg"), "");
    touch(&unsorted.join("series/Severance (2022) - Season 2.jpg"), "");
    touch(&unsorted.join("series/Severance (2022) notes.txt"), "");

    let moved =
        organizer::move_matching_posters(&DiskStore::new(), &series, &unsorted, MoveMode::AllMatches)
            .unwrap();

    assert_eq!(moved, 3);
    assert!(series.join("Severance (2022)/Severance (2022) - Season 2.jpg").exists());
    assert!(unsorted.join("series/Severance (2022) notes.txt").exists());
}

#[test]
fn test_move_skips_existing_destination() {
    let temp = TempDir::new().unwrap();
    let unsorted = temp.path().join("unsorted");
    let movies = temp.path().join("sorted/movies");
    touch(&movies.join("Heat (1995)/Heat (1995).jpg"), "sorted");
    touch(&unsorted.join("movies/Heat (1995).jpg"), "unsorted");

    let moved =
        organizer::move_matching_posters(&DiskStore::new(), &movies, &unsorted, MoveMode::FirstMatch)
            .unwrap();

    assert_eq!(moved, 0);
    assert_eq!(
        fs::read_to_string(movies.join("Heat (1995)/Heat (1995).jpg")).unwrap(),
        "sorted"
    );
    assert!(unsorted.join("movies/Heat (1995).jpg").exists());
}

// ========== RENAME TESTS ==========

#[test]
fn test_rename_movie_posters() {
    let temp = TempDir::new().unwrap();
    let movies = temp.path().join("movies");
    touch(&movies.join("Alien (1979)/Alien (1979).jpg"), "");
    touch(&movies.join("Heat (1995)/Heat (1995).jpg"), "");
    touch(&movies.join("Heat (1995)/Heat alt.jpg"), "");
    touch(&movies.join("Heat (1995)/Heat.nfo"), "");

    let renamed = organizer::rename_movie_posters(&DiskStore::new(), &movies).unwrap();

    // The second Heat image would collide with poster.jpg and stays as is
    assert_eq!(renamed, 2);
    assert!(movies.join("Alien (1979)/poster.jpg").exists());
    assert!(movies.join("Heat (1995)/poster.jpg").exists());
    assert!(movies.join("Heat (1995)/Heat alt.jpg").exists());
    assert!(movies.join("Heat (1995)/Heat.nfo").exists());
}

#[test]
fn test_rename_series_posters() {
    let temp = TempDir::new().unwrap();
    let series = temp.path().join("series");
    let show = series.join("Severance (2022)");
    touch(&show.join("Severance (2022).jpg"), "");
    touch(&show.join("Severance (2022) - Season 1.jpg"), "");
    touch(&show.join("Severance (2022) - Season 12.png"), "");
    touch(&show.join("Severance (2022) - Specials.jpg"), "");

    let renamed = organizer::rename_series_posters(&DiskStore::new(), &series).unwrap();

    assert_eq!(renamed, 4);
    for name in ["poster.jpg", "Season01.jpg", "Season12.png", "Season00.jpg"] {
        assert!(show.join(name).exists(), "missing {}", name);
    }

    // Already canonical names are left alone on a second pass
    let renamed = organizer::rename_series_posters(&DiskStore::new(), &series).unwrap();
    assert_eq!(renamed, 0);
}

// ========== CLEANUP TESTS ==========

#[test]
fn test_cleanup_on_disk() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("unsorted");
    fs::create_dir_all(root.join("movies/empty")).unwrap();
    fs::create_dir_all(root.join("series/a/b/c")).unwrap();
    touch(&root.join("movies/keep/poster.jpg"), "");

    let removed =
        cleanup::delete_empty_directories(&DiskStore::new(), &root, CleanupMode::BottomUp).unwrap();

    assert_eq!(removed, 5);
    assert!(root.exists());
    assert!(root.join("movies/keep/poster.jpg").exists());
    assert!(!root.join("series").exists());
    assert!(!root.join("movies/empty").exists());
}
