//! Read phase of a validation run.
//!
//! All filesystem access happens here, once, before any check runs. The
//! checks then work on the captured [`TreeSnapshot`] and never touch the
//! filesystem themselves.

use crate::checks::{BUILD_DIR, ENTRY_POINT};
use crate::platform::{EntryKind, FileSystem};
use crate::PreflightError;
use std::path::{Path, PathBuf};

/// Size information for an entry of the `Build` folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySize {
    Bytes(u64),
    /// Sub-folders are not sized
    Directory,
    /// The size query failed; holds the cause
    Unreadable(String),
}

/// An entry of the `Build` folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEntry {
    pub name: String,
    pub size: EntrySize,
}

impl BuildEntry {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        BuildEntry {
            name: name.into(),
            size: EntrySize::Bytes(size),
        }
    }
}

/// Everything the checks need to know about a build folder.
#[derive(Debug)]
pub struct TreeSnapshot {
    pub root: PathBuf,
    pub root_exists: bool,
    /// `index.html` is present as a file directly under the root
    pub entry_point: bool,
    /// Names of the immediate sub-folders of the root, in listing order
    pub folders: Result<Vec<String>, PreflightError>,
    /// Entries of the exact-case `Build` folder, `None` if there is no such folder
    pub build: Option<Result<Vec<BuildEntry>, PreflightError>>,
}

impl TreeSnapshot {
    /// Read the tree rooted at `root`.
    pub fn capture<F: FileSystem>(fs: &F, root: &Path) -> Self {
        if !fs.exists(root) {
            tracing::debug!(root = %root.display(), "build folder does not exist");
            return TreeSnapshot {
                root: root.to_path_buf(),
                root_exists: false,
                entry_point: false,
                folders: Err(PreflightError::NotFound {
                    path: root.to_path_buf(),
                }),
                build: None,
            };
        }

        let (entry_point, folders) = match fs.read_dir(root) {
            Ok(entries) => {
                // symlinks are listed as Other; accept one that resolves
                let entry_point = entries.iter().any(|e| {
                    e.name == ENTRY_POINT
                        && match e.kind {
                            EntryKind::File => true,
                            EntryKind::Other => fs.exists(&root.join(ENTRY_POINT)),
                            EntryKind::Directory => false,
                        }
                });
                let folders = entries
                    .into_iter()
                    .filter(|e| e.is_dir())
                    .map(|e| e.name)
                    .collect::<Vec<_>>();
                (entry_point, Ok(folders))
            }
            Err(e) => {
                tracing::warn!(root = %root.display(), error = %e, "failed to list build folder");
                (fs.exists(&root.join(ENTRY_POINT)), Err(e))
            }
        };

        let build = match &folders {
            Ok(names) if names.iter().any(|n| n == BUILD_DIR) => {
                Some(capture_build_dir(fs, &root.join(BUILD_DIR)))
            }
            _ => None,
        };

        let snapshot = TreeSnapshot {
            root: root.to_path_buf(),
            root_exists: true,
            entry_point,
            folders,
            build,
        };

        tracing::debug!(
            root = %root.display(),
            entry_point = snapshot.entry_point,
            folders = snapshot.folders.as_ref().map(Vec::len).unwrap_or(0),
            build_entries = snapshot.build_entry_count(),
            "captured build tree"
        );

        snapshot
    }

    fn build_entry_count(&self) -> usize {
        match &self.build {
            Some(Ok(entries)) => entries.len(),
            _ => 0,
        }
    }
}

fn capture_build_dir<F: FileSystem>(fs: &F, dir: &Path) -> Result<Vec<BuildEntry>, PreflightError> {
    let entries = fs.read_dir(dir).inspect_err(|e| {
        tracing::warn!(dir = %dir.display(), error = %e, "failed to list Build folder");
    })?;

    Ok(entries
        .into_iter()
        .map(|entry| {
            let size = if entry.is_dir() {
                EntrySize::Directory
            } else {
                match fs.file_size(&dir.join(&entry.name)) {
                    Ok(bytes) => EntrySize::Bytes(bytes),
                    Err(e) => {
                        tracing::warn!(file = %entry.name, error = %e, "failed to read file size");
                        EntrySize::Unreadable(e.to_string())
                    }
                }
            };
            BuildEntry {
                name: entry.name,
                size,
            }
        })
        .collect())
}
