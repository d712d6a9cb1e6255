//! Local disk access through `std::fs`.
//!
//! # Graceful Degradation
//!
//! - Permission denied: Returns `PreflightError::Io` with the offending path
//! - Not a directory: Returns `PreflightError::NotADirectory`
//! - Non-UTF8 names: Converted lossily
//!
//! No function in this module will panic.

use super::{DirEntry, EntryKind, FileSystem};
use crate::PreflightError;
use std::fs;
use std::path::Path;

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>, PreflightError> {
        if path.exists() && !path.is_dir() {
            return Err(PreflightError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| PreflightError::io(path, e))? {
            let entry = entry.map_err(|e| PreflightError::io(path, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| PreflightError::io(&entry.path(), e))?;

            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };

            entries.push(DirEntry::new(
                entry.file_name().to_string_lossy().into_owned(),
                kind,
            ));
        }

        // read_dir order is platform dependent
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn file_size(&self, path: &Path) -> Result<u64, PreflightError> {
        fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| PreflightError::io(path, e))
    }
}
