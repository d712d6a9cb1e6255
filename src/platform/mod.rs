//! Platform abstraction layer.
//!
//! The validator needs three things from a filesystem:
//! - whether a path exists
//! - the immediate entries of a directory, with their kind
//! - the size of a file
//!
//! [`LocalFileSystem`] answers them from disk, [`MemoryFileSystem`] from an
//! in-memory tree.

pub mod local;
pub mod memory;

pub use local::LocalFileSystem;
pub use memory::MemoryFileSystem;

use crate::PreflightError;
use std::path::Path;

/// Kind of a directory entry.
///
/// Symbolic links are not followed when listing, so a link to a folder is
/// reported as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// An immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        DirEntry {
            name: name.into(),
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Read-only filesystem capability used by the validator.
pub trait FileSystem {
    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// List the immediate entries of a directory, sorted by name
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>, PreflightError>;

    /// Size of the entry at `path` in bytes
    fn file_size(&self, path: &Path) -> Result<u64, PreflightError>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>, PreflightError> {
        (**self).read_dir(path)
    }

    fn file_size(&self, path: &Path) -> Result<u64, PreflightError> {
        (**self).file_size(path)
    }
}
