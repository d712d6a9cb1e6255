//! In-memory filesystem.
//!
//! Lets the validator run against a tree described in code, for tests and
//! for callers that already hold a listing of a build (for example from an
//! upload manifest).

use super::{DirEntry, EntryKind, FileSystem};
use crate::PreflightError;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    File { size: u64 },
    Dir,
}

/// A fake tree of files and folders.
///
/// Parent folders are created implicitly when a file or folder is added.
///
/// ```
/// use std::path::Path;
/// use webgl_preflight::platform::{FileSystem, MemoryFileSystem};
///
/// let fs = MemoryFileSystem::new().with_file("out/Build/web.wasm", 2048);
/// assert!(fs.exists(Path::new("out/Build")));
/// assert_eq!(fs.file_size(Path::new("out/Build/web.wasm")).unwrap(), 2048);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    nodes: BTreeMap<PathBuf, Node>,
    unreadable: BTreeSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a folder (and its parents)
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.add_parents(path);
        self.nodes.insert(path.to_path_buf(), Node::Dir);
        self
    }

    /// Add a file of `size` bytes (and its parent folders)
    pub fn with_file(mut self, path: impl AsRef<Path>, size: u64) -> Self {
        let path = path.as_ref();
        self.add_parents(path);
        self.nodes.insert(path.to_path_buf(), Node::File { size });
        self
    }

    /// Make listing or sizing `path` fail with "permission denied"
    pub fn with_unreadable(mut self, path: impl AsRef<Path>) -> Self {
        self.unreadable.insert(path.as_ref().to_path_buf());
        self
    }

    fn add_parents(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }

    fn check_readable(&self, path: &Path) -> Result<(), PreflightError> {
        if self.unreadable.contains(path) {
            return Err(PreflightError::io(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }
        Ok(())
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.nodes.contains_key(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>, PreflightError> {
        self.check_readable(path)?;

        match self.nodes.get(path) {
            None => Err(PreflightError::NotFound {
                path: path.to_path_buf(),
            }),
            Some(Node::File { .. }) => Err(PreflightError::NotADirectory {
                path: path.to_path_buf(),
            }),
            Some(Node::Dir) => {
                let mut entries: Vec<DirEntry> = self
                    .nodes
                    .iter()
                    .filter(|(child, _)| child.parent() == Some(path))
                    .filter_map(|(child, node)| {
                        let name = child.file_name()?.to_string_lossy().into_owned();
                        let kind = match node {
                            Node::File { .. } => EntryKind::File,
                            Node::Dir => EntryKind::Directory,
                        };
                        Some(DirEntry::new(name, kind))
                    })
                    .collect();
                entries.sort_by(|a, b| a.name.cmp(&b.name));
                Ok(entries)
            }
        }
    }

    fn file_size(&self, path: &Path) -> Result<u64, PreflightError> {
        self.check_readable(path)?;

        match self.nodes.get(path) {
            Some(Node::File { size }) => Ok(*size),
            Some(Node::Dir) => Ok(0),
            None => Err(PreflightError::NotFound {
                path: path.to_path_buf(),
            }),
        }
    }
}
