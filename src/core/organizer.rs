//! File organizer.
//!
//! Moves posters from the unsorted tree into the directories created for them
//! and gives them the names the media server expects. Nothing is ever
//! overwritten: a move or rename whose destination exists is skipped.

use crate::core::placement;
use crate::core::scanner;
use crate::store::FileStore;
use crate::utils::fs as fs_utils;
use crate::Result;
use std::path::Path;

/// How many matching posters a sorted directory takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMode {
    /// Stop after the first poster moved (movies).
    FirstMatch,
    /// Take every matching poster (series, which carry season posters too).
    AllMatches,
}

/// Part of a sorted directory name used to find its posters: everything up
/// to and including the last `)`.
pub fn match_name(dir_name: &str) -> &str {
    match dir_name.rfind(')') {
        Some(idx) => &dir_name[..=idx],
        None => dir_name,
    }
}

/// Move an unsorted file to `to` unless something is already there.
///
/// Returns whether the file was moved.
fn move_if_free<S: FileStore>(store: &S, from: &Path, to: &Path) -> Result<bool> {
    if store.exists(to) {
        tracing::debug!("Destination exists, skipping: {}", to.display());
        return Ok(false);
    }
    store.move_file(from, to)?;
    Ok(true)
}

/// Move collection posters anywhere under `unsorted_root` into
/// `<sorted_root>/collections/<name>/poster.<ext>`.
pub fn place_collection_posters<S: FileStore>(
    store: &S,
    unsorted_root: &Path,
    sorted_root: &Path,
) -> Result<usize> {
    let mut placed = 0;

    for file in scanner::scan_collection_posters(store, unsorted_root)? {
        let Some(target) = placement::collection_target(sorted_root, &file) else {
            tracing::warn!("No collection name left in '{}'", fs_utils::file_name(&file));
            continue;
        };
        if let Some(dir) = target.parent() {
            placement::ensure_dir(store, dir)?;
        }
        match move_if_free(store, &file, &target) {
            Ok(true) => {
                tracing::info!("Moved {} to {}", file.display(), target.display());
                placed += 1;
            }
            Ok(false) => {}
            Err(e) => tracing::warn!("Failed to move {}: {}", file.display(), e),
        }
    }

    Ok(placed)
}

/// Move posters whose names contain a sorted directory's match name into
/// that directory.
///
/// `sorted_branch` is `<sorted>/movies` or `<sorted>/series`; the whole
/// unsorted tree is searched for every directory in it.
pub fn move_matching_posters<S: FileStore>(
    store: &S,
    sorted_branch: &Path,
    unsorted_root: &Path,
    mode: MoveMode,
) -> Result<usize> {
    if !store.is_dir(sorted_branch) {
        tracing::debug!("No sorted directory at {}", sorted_branch.display());
        return Ok(0);
    }

    let mut moved = 0;
    for dir in store.list_dir(sorted_branch)?.into_iter().filter(|e| e.is_dir) {
        let dir_name = fs_utils::file_name(&dir.path);
        let needle = match_name(&dir_name).trim().to_lowercase();
        if needle.is_empty() {
            continue;
        }

        for image in scanner::scan_images(store, unsorted_root)? {
            let image_name = fs_utils::file_name(&image);
            if !image_name.to_lowercase().contains(&needle) {
                continue;
            }

            let target = dir.path.join(&image_name);
            match move_if_free(store, &image, &target) {
                Ok(true) => {
                    tracing::info!("Moved {} to {}", image_name, dir.path.display());
                    moved += 1;
                    if mode == MoveMode::FirstMatch {
                        break;
                    }
                }
                Ok(false) => {}
                Err(e) => tracing::warn!("Failed to move {}: {}", image.display(), e),
            }
        }
    }

    Ok(moved)
}

/// Rename a file inside its directory unless the new name is taken.
fn rename_in_place<S: FileStore>(store: &S, file: &Path, new_name: &str) -> Result<bool> {
    let Some(dir) = file.parent() else {
        return Ok(false);
    };
    let target = dir.join(new_name);
    if move_if_free(store, file, &target)? {
        tracing::info!("Renamed {} to {}", file.display(), target.display());
        return Ok(true);
    }
    Ok(false)
}

/// Image files directly inside each directory of `branch`.
fn for_each_image<S, F>(store: &S, branch: &Path, mut f: F) -> Result<usize>
where
    S: FileStore,
    F: FnMut(&Path) -> Option<String>,
{
    if !store.is_dir(branch) {
        return Ok(0);
    }

    let mut renamed = 0;
    for dir in store.list_dir(branch)?.into_iter().filter(|e| e.is_dir) {
        for file in store.list_dir(&dir.path)? {
            if file.is_dir || !fs_utils::is_image_file(&file.path) {
                continue;
            }
            let Some(new_name) = f(&file.path) else {
                continue;
            };
            match rename_in_place(store, &file.path, &new_name) {
                Ok(true) => renamed += 1,
                Ok(false) => {}
                Err(e) => tracing::warn!("Failed to rename {}: {}", file.path.display(), e),
            }
        }
    }
    Ok(renamed)
}

/// Rename every image in each movie directory to `poster.<ext>`.
///
/// Only the first image per extension gets the name; the rest stay as they are.
pub fn rename_movie_posters<S: FileStore>(store: &S, movies_dir: &Path) -> Result<usize> {
    for_each_image(store, movies_dir, |file| {
        Some(format!("poster.{}", fs_utils::raw_extension(file)))
    })
}

/// Rename series images to `SeasonNN`, `Season00` or `poster`.
pub fn rename_series_posters<S: FileStore>(store: &S, series_dir: &Path) -> Result<usize> {
    for_each_image(store, series_dir, |file| {
        series_poster_name(&fs_utils::file_name(file), &fs_utils::raw_extension(file))
    })
}

/// Canonical name for a series poster, or `None` to leave it alone.
///
/// In order of precedence:
/// 1. `Season N` (1-9) becomes `Season0N`
/// 2. `Season NN` (10-99) becomes `SeasonNN`
/// 3. `Specials` becomes `Season00`
/// 4. anything else becomes `poster`
///
/// Names mentioning `Season` or `Specials` that fit none of the first three
/// rules are left as they are, which also covers files already renamed.
pub fn series_poster_name(file_name: &str, ext: &str) -> Option<String> {
    if file_name.contains("Season ") {
        let season = regex::Regex::new(r"Season (\d+)")
            .ok()?
            .captures(file_name)
            .and_then(|caps| caps[1].parse::<u32>().ok());
        if let Some(n @ 1..=99) = season {
            return Some(format!("Season{:02}.{}", n, ext));
        }
    }

    if file_name.contains("Specials") {
        return Some(format!("Season00.{}", ext));
    }

    if file_name.contains("Season") {
        return None;
    }

    Some(format!("poster.{}", ext))
}
