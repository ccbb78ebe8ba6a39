//! Tests for RealFileSystem directory copies

use std::fs;

use tempfile::TempDir;

use mkdocs_merge::infrastructure::traits::{FileSystem, RealFileSystem};

// ============================================================
// copy_dir tests
// ============================================================

#[test]
fn given_nested_directory_when_copy_dir_then_copies_recursively() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let src_dir = temp.path().join("source");
    let dst_dir = temp.path().join("master/docs/site");
    fs::create_dir_all(src_dir.join("nested/deeper")).unwrap();
    fs::write(src_dir.join("index.md"), "# Index").unwrap();
    fs::write(src_dir.join("nested/deeper/page.md"), "# Page").unwrap();

    // Act
    RealFileSystem.copy_dir(&src_dir, &dst_dir).unwrap();

    // Assert
    assert_eq!(
        fs::read_to_string(dst_dir.join("index.md")).unwrap(),
        "# Index"
    );
    assert_eq!(
        fs::read_to_string(dst_dir.join("nested/deeper/page.md")).unwrap(),
        "# Page"
    );
    // Source should still exist (copy, not move)
    assert!(src_dir.join("index.md").exists());
}

#[test]
fn given_existing_destination_when_copy_dir_then_overwrites_and_keeps_extra_files() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let src_dir = temp.path().join("source");
    let dst_dir = temp.path().join("dest");
    fs::create_dir_all(&src_dir).unwrap();
    fs::create_dir_all(&dst_dir).unwrap();
    fs::write(src_dir.join("index.md"), "new").unwrap();
    fs::write(dst_dir.join("index.md"), "old").unwrap();
    fs::write(dst_dir.join("stale.md"), "stale").unwrap();

    // Act
    RealFileSystem.copy_dir(&src_dir, &dst_dir).unwrap();

    // Assert
    assert_eq!(fs::read_to_string(dst_dir.join("index.md")).unwrap(), "new");
    assert!(dst_dir.join("stale.md").exists());
}

#[test]
fn given_empty_directory_when_copy_dir_then_creates_destination() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let src_dir = temp.path().join("empty");
    let dst_dir = temp.path().join("out/empty");
    fs::create_dir_all(&src_dir).unwrap();

    // Act
    RealFileSystem.copy_dir(&src_dir, &dst_dir).unwrap();

    // Assert
    assert!(dst_dir.is_dir());
}

#[test]
fn given_missing_source_when_copy_dir_then_error() {
    // Arrange
    let temp = TempDir::new().unwrap();

    // Act
    let result = RealFileSystem.copy_dir(&temp.path().join("missing"), &temp.path().join("dest"));

    // Assert
    assert!(result.is_err());
}
