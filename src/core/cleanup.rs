//! Empty directory cleanup for the unsorted tree.

use crate::store::FileStore;
use crate::Result;
use std::path::Path;

/// Traversal used when pruning empty directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupMode {
    /// Parents are checked before their children, so a directory that only
    /// becomes empty during this pass survives until the next run.
    #[default]
    SinglePass,
    /// Children are checked before their parents; nested empty chains go in
    /// one run.
    BottomUp,
}

/// Remove empty directories below `root` (never `root` itself).
///
/// Returns the number of directories removed. Failures are logged and the
/// pass continues.
pub fn delete_empty_directories<S: FileStore>(
    store: &S,
    root: &Path,
    mode: CleanupMode,
) -> Result<usize> {
    let mut dirs = store.walk_dirs(root)?;
    if mode == CleanupMode::BottomUp {
        // Reversed pre-order puts every directory after all of its descendants.
        dirs.reverse();
    }

    let mut removed = 0;
    for dir in dirs {
        if !store.is_dir(&dir) {
            continue;
        }
        match store.is_empty_dir(&dir) {
            Ok(true) => match store.remove_dir(&dir) {
                Ok(()) => {
                    tracing::debug!("Removed empty directory {}", dir.display());
                    removed += 1;
                }
                Err(e) => tracing::warn!("Failed to delete directory {}: {}", dir.display(), e),
            },
            Ok(false) => {}
            Err(e) => tracing::warn!("Failed to read directory {}: {}", dir.display(), e),
        }
    }

    Ok(removed)
}
