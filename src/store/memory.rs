//! In-memory store for tests and dry experiments.

use super::{Entry, FileStore};
use crate::Result;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::{Error as IoError, ErrorKind};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Dir,
    File,
}

/// [`FileStore`] holding a directory tree in memory.
///
/// Paths are kept in a `BTreeMap`, whose component-wise ordering already
/// yields the pre-order traversal the disk store produces.
#[derive(Debug, Default)]
pub struct MemoryStore {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty file, creating parent directories as needed.
    pub fn add_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.insert_dirs(parent);
        }
        self.nodes.borrow_mut().insert(path.to_path_buf(), Node::File);
    }

    /// Add a directory and its parents.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.insert_dirs(path.as_ref());
    }

    /// Whether a file (not a directory) exists at `path`.
    pub fn has_file(&self, path: impl AsRef<Path>) -> bool {
        self.nodes.borrow().get(path.as_ref()) == Some(&Node::File)
    }

    /// Every file path currently stored, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        self.nodes
            .borrow()
            .iter()
            .filter(|(_, node)| **node == Node::File)
            .map(|(path, _)| path.clone())
            .collect()
    }

    fn insert_dirs(&self, path: &Path) {
        let mut nodes = self.nodes.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }

    fn node(&self, path: &Path) -> Option<Node> {
        self.nodes.borrow().get(path).copied()
    }
}

fn not_found(path: &Path) -> crate::Error {
    IoError::new(ErrorKind::NotFound, path.display().to_string()).into()
}

impl FileStore for MemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.node(path).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.node(path) == Some(Node::Dir)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        if self.node(path) == Some(Node::File) {
            return Err(crate::Error::FileAlreadyExists(path.display().to_string()));
        }
        self.insert_dirs(path);
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<Entry>> {
        if !self.is_dir(path) {
            return Err(not_found(path));
        }
        Ok(self
            .nodes
            .borrow()
            .iter()
            .filter(|(p, _)| p.parent() == Some(path))
            .map(|(p, node)| Entry {
                path: p.clone(),
                is_dir: *node == Node::Dir,
            })
            .collect())
    }

    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !self.exists(root) {
            return Err(not_found(root));
        }
        Ok(self
            .nodes
            .borrow()
            .iter()
            .filter(|(p, node)| **node == Node::File && p.starts_with(root))
            .map(|(p, _)| p.clone())
            .collect())
    }

    fn walk_dirs(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !self.exists(root) {
            return Err(not_found(root));
        }
        Ok(self
            .nodes
            .borrow()
            .iter()
            .filter(|(p, node)| **node == Node::Dir && p.starts_with(root) && p.as_path() != root)
            .map(|(p, _)| p.clone())
            .collect())
    }

    fn move_file(&self, from: &Path, to: &Path) -> Result<()> {
        if self.node(from) != Some(Node::File) {
            return Err(not_found(from));
        }
        match to.parent() {
            Some(parent) if self.is_dir(parent) => {}
            _ => return Err(not_found(to)),
        }
        if self.is_dir(to) {
            return Err(crate::Error::FileAlreadyExists(to.display().to_string()));
        }
        let mut nodes = self.nodes.borrow_mut();
        nodes.remove(from);
        nodes.insert(to.to_path_buf(), Node::File);
        Ok(())
    }

    fn remove_dir(&self, path: &Path) -> Result<()> {
        if !self.is_dir(path) {
            return Err(not_found(path));
        }
        if !self.is_empty_dir(path)? {
            return Err(IoError::new(ErrorKind::Other, format!("directory not empty: {}", path.display())).into());
        }
        self.nodes.borrow_mut().remove(path);
        Ok(())
    }
}
