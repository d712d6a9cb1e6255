//! Validation of real directories on disk.

use crate::mocks::MockBuildTree;
use std::fs;
use std::path::Path;
use webgl_preflight::platform::{EntryKind, FileSystem, LocalFileSystem};
use webgl_preflight::validate;

fn build_on_disk(tree: &MockBuildTree) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    tree.write_to(dir.path()).unwrap();
    dir
}

#[test]
fn test_nonexistent_path() {
    let dir = tempfile::tempdir().unwrap();
    let result = validate(dir.path().join("no-such-build"));

    assert!(!result.valid);
    assert_eq!(result.errors, vec!["Build folder does not exist!"]);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_healthy_build_on_disk() {
    let dir = build_on_disk(&MockBuildTree::healthy());
    let result = validate(dir.path());

    assert!(result.valid, "{:?}", result);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_empty_folder() {
    let dir = tempfile::tempdir().unwrap();
    let result = validate(dir.path());

    assert_eq!(
        result.errors,
        vec!["index.html missing in root folder.", "Build folder missing."]
    );
    assert_eq!(
        result.warnings,
        vec![
            "TemplateData folder missing (optional).",
            "StreamingAssets folder missing (optional).",
        ]
    );
}

#[test]
fn test_zero_byte_and_stray_files_on_disk() {
    let tree = MockBuildTree::zero_byte_wasm().with_build_file("readme.txt", 12);
    let dir = build_on_disk(&tree);
    let result = validate(dir.path());

    assert!(result.valid);
    assert_eq!(
        result.warnings,
        vec![
            "Unexpected file found in Build folder: readme.txt",
            "File web.wasm is 0 bytes (possibly corrupted).",
        ]
    );
}

#[test]
fn test_files_at_root_are_not_folders() {
    let tree = MockBuildTree::healthy().with_root_file("TemplateData", 10);
    let dir = build_on_disk(&tree.without_folder("TemplateData"));
    let result = validate(dir.path());

    assert_eq!(result.warnings, vec!["TemplateData folder missing (optional)."]);
}

#[test]
fn test_subfolder_inside_build_is_not_sized() {
    let dir = build_on_disk(&MockBuildTree::healthy());
    fs::create_dir(dir.path().join("Build").join("web.data.parts")).unwrap();

    let result = validate(dir.path());
    assert!(result.valid);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_relative_path_is_resolved() {
    let result = validate(Path::new("definitely/not/a/build/folder"));
    assert_eq!(result.errors, vec!["Build folder does not exist!"]);
}

#[test]
fn test_local_filesystem_listing_sorted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), b"b").unwrap();
    fs::create_dir(dir.path().join("a")).unwrap();

    let entries = LocalFileSystem.read_dir(dir.path()).unwrap();
    let listed: Vec<_> = entries.iter().map(|e| (e.name.as_str(), e.kind)).collect();
    assert_eq!(listed, vec![("a", EntryKind::Directory), ("b.txt", EntryKind::File)]);
    assert_eq!(LocalFileSystem.file_size(&dir.path().join("b.txt")).unwrap(), 1);
}

#[test]
fn test_local_filesystem_rejects_file_listing() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("index.html");
    fs::write(&file, b"<html></html>").unwrap();

    assert!(LocalFileSystem.read_dir(&file).is_err());
}

#[cfg(unix)]
#[test]
fn test_symlinked_entry_point_accepted() {
    let dir = build_on_disk(&MockBuildTree::healthy().without_root_file("index.html"));
    let target = dir.path().join("TemplateData").join("index.html");
    fs::write(&target, b"<html></html>").unwrap();
    std::os::unix::fs::symlink(&target, dir.path().join("index.html")).unwrap();

    let result = validate(dir.path());
    assert!(result.valid, "{:?}", result);
    assert!(result.errors.is_empty());
}

#[cfg(unix)]
#[test]
fn test_dangling_entry_point_symlink_rejected() {
    let dir = build_on_disk(&MockBuildTree::healthy().without_root_file("index.html"));
    std::os::unix::fs::symlink(dir.path().join("gone.html"), dir.path().join("index.html"))
        .unwrap();

    let result = validate(dir.path());
    assert_eq!(result.errors, vec!["index.html missing in root folder."]);
}
