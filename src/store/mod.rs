//! File store abstraction.
//!
//! The sorter keeps no database: the state of the sorted and unsorted trees
//! on disk is its only memory. Every file system access goes through
//! [`FileStore`] so the organizer and cleanup passes can run against an
//! in-memory tree in tests.

mod disk;
mod memory;

pub use disk::DiskStore;
pub use memory::MemoryStore;

use crate::Result;
use std::path::{Path, PathBuf};

/// A directory entry returned by [`FileStore::list_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// File system operations used by the sorter.
///
/// Listings are always sorted by path so that runs are deterministic
/// regardless of the underlying directory order.
pub trait FileStore {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all missing parents. Existing directories are fine.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Immediate children of a directory, sorted by name.
    fn list_dir(&self, path: &Path) -> Result<Vec<Entry>>;

    /// All files below `root`, recursively, sorted by path.
    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// All directories below `root` (excluding `root`) in pre-order.
    fn walk_dirs(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Move a file. The destination parent must exist.
    fn move_file(&self, from: &Path, to: &Path) -> Result<()>;

    /// Remove an empty directory.
    fn remove_dir(&self, path: &Path) -> Result<()>;

    /// Whether a directory has no entries.
    fn is_empty_dir(&self, path: &Path) -> Result<bool> {
        Ok(self.list_dir(path)?.is_empty())
    }
}
