//! Store operations
//!
//! Handles the file store operations: list, create directory, create file,
//! read, and write. Every creating operation enforces the sibling
//! name-uniqueness invariant across both entry kinds before touching the
//! filesystem.

use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::store::resolver::{join_logical, logical_to_real, validate_name};
use crate::store::results::{DirListing, EntryKind};

/// Lists the immediate children of a directory, split by kind
pub fn list_directory(root: &Path, path: &str) -> Result<DirListing, StoreError> {
    let real_path = resolve_directory(root, path)?;

    let entries = match fs::read_dir(&real_path) {
        Ok(entries) => entries,
        Err(e) => {
            error!(
                "Failed to list {} (real: {}): {}",
                path,
                real_path.display(),
                e
            );
            return Err(StoreError::from(e));
        }
    };

    let mut files = Vec::new();
    let mut directories = Vec::new();

    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            directories.push(name);
        } else {
            files.push(name);
        }
    }

    files.sort();
    directories.sort();

    info!(
        "Listed {} (real: {}) - {} files, {} directories",
        path,
        real_path.display(),
        files.len(),
        directories.len()
    );

    Ok(DirListing { files, directories })
}

/// Creates a new empty directory under an existing parent
///
/// Returns the logical path of the new directory.
pub fn create_directory(root: &Path, parent: &str, name: &str) -> Result<String, StoreError> {
    validate_name(name)?;
    let parent_real = resolve_directory(root, parent)?;
    check_collision(&parent_real, name)?;

    let real_path = parent_real.join(name);
    if let Err(e) = fs::create_dir(&real_path) {
        error!(
            "Failed to create directory {}: {}",
            real_path.display(),
            e
        );
        return Err(StoreError::from(e));
    }

    let logical = join_logical(parent, name);
    info!("Created directory {} (real: {})", logical, real_path.display());
    Ok(logical)
}

/// Creates a new file with the given content under an existing parent
///
/// Returns the logical path of the new file.
pub fn create_file(
    root: &Path,
    parent: &str,
    name: &str,
    content: &str,
) -> Result<String, StoreError> {
    validate_name(name)?;
    let parent_real = resolve_directory(root, parent)?;
    check_collision(&parent_real, name)?;

    let real_path = parent_real.join(name);
    if let Err(e) = fs::write(&real_path, content) {
        error!("Failed to create file {}: {}", real_path.display(), e);
        return Err(StoreError::from(e));
    }

    let logical = join_logical(parent, name);
    info!(
        "Created file {} (real: {}) - {} bytes",
        logical,
        real_path.display(),
        content.len()
    );
    Ok(logical)
}

/// Reads the content of a file
///
/// Content is UTF-8 text; file bytes that are not valid UTF-8 surface as an
/// IO error of kind `InvalidData`.
pub fn read_file(root: &Path, path: &str) -> Result<String, StoreError> {
    let real_path = resolve_file(root, path)?;

    let content = fs::read_to_string(&real_path)?;
    info!(
        "Read file {} (real: {}) - {} bytes",
        path,
        real_path.display(),
        content.len()
    );
    Ok(content)
}

/// Overwrites the content of an existing file
///
/// Writing to a path that does not exist fails with `NotFound`;
/// `create_file` is the only creation path.
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<(), StoreError> {
    let real_path = resolve_file(root, path)?;

    if let Err(e) = fs::write(&real_path, content) {
        error!("Failed to write file {}: {}", real_path.display(), e);
        return Err(StoreError::from(e));
    }
    info!(
        "Wrote file {} (real: {}) - {} bytes",
        path,
        real_path.display(),
        content.len()
    );
    Ok(())
}

/// Resolve a logical path that must be an existing directory
pub(crate) fn resolve_directory(root: &Path, path: &str) -> Result<PathBuf, StoreError> {
    let real_path = logical_to_real(root, path)?;

    if !real_path.exists() {
        return Err(StoreError::NotFound(path.to_string()));
    }
    if !real_path.is_dir() {
        return Err(StoreError::WrongKind {
            path: path.to_string(),
            expected: EntryKind::Directory,
            found: EntryKind::File,
        });
    }

    Ok(real_path)
}

/// Resolve a logical path that must be an existing file
fn resolve_file(root: &Path, path: &str) -> Result<PathBuf, StoreError> {
    let real_path = logical_to_real(root, path)?;

    if !real_path.exists() {
        return Err(StoreError::NotFound(path.to_string()));
    }
    if real_path.is_dir() {
        return Err(StoreError::WrongKind {
            path: path.to_string(),
            expected: EntryKind::File,
            found: EntryKind::Directory,
        });
    }

    Ok(real_path)
}

/// Checks the collision invariant: no sibling of either kind may share the name
fn check_collision(parent_real: &Path, name: &str) -> Result<(), StoreError> {
    for entry in fs::read_dir(parent_real)?.flatten() {
        if entry.file_name().to_string_lossy() == name {
            let existing = if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            return Err(StoreError::NameCollision {
                name: name.to_string(),
                existing,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scratch_root() -> TempDir {
        TempDir::new().unwrap()
    }

    #[test]
    fn test_list_empty_directory() {
        let root = scratch_root();
        let listing = list_directory(root.path(), "/").unwrap();
        assert!(listing.files.is_empty());
        assert!(listing.directories.is_empty());
    }

    #[test]
    fn test_list_splits_and_sorts_kinds() {
        let root = scratch_root();
        create_directory(root.path(), "/", "zeta").unwrap();
        create_directory(root.path(), "/", "alpha").unwrap();
        create_file(root.path(), "/", "b.txt", "b").unwrap();
        create_file(root.path(), "/", "a.txt", "a").unwrap();

        let listing = list_directory(root.path(), "/").unwrap();
        assert_eq!(listing.files, vec!["a.txt", "b.txt"]);
        assert_eq!(listing.directories, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_list_missing_directory() {
        let root = scratch_root();
        let result = list_directory(root.path(), "missing");
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_list_on_file_is_wrong_kind() {
        let root = scratch_root();
        create_file(root.path(), "/", "plain.txt", "x").unwrap();
        let result = list_directory(root.path(), "plain.txt");
        assert!(matches!(
            result,
            Err(StoreError::WrongKind {
                expected: EntryKind::Directory,
                ..
            })
        ));
    }

    #[test]
    fn test_create_directory_returns_logical_path() {
        let root = scratch_root();
        assert_eq!(create_directory(root.path(), "/", "docs").unwrap(), "docs");
        assert_eq!(
            create_directory(root.path(), "docs", "notes").unwrap(),
            "docs/notes"
        );
        assert!(root.path().join("docs").join("notes").is_dir());
    }

    #[test]
    fn test_create_file_returns_logical_path() {
        let root = scratch_root();
        create_directory(root.path(), "/", "docs").unwrap();
        let path = create_file(root.path(), "docs", "readme.txt", "hello").unwrap();
        assert_eq!(path, "docs/readme.txt");
        assert_eq!(read_file(root.path(), "docs/readme.txt").unwrap(), "hello");
    }

    #[test]
    fn test_directory_blocks_file_with_same_name() {
        let root = scratch_root();
        create_directory(root.path(), "/", "shared").unwrap();
        let result = create_file(root.path(), "/", "shared", "content");
        match result {
            Err(StoreError::NameCollision { name, existing }) => {
                assert_eq!(name, "shared");
                assert_eq!(existing, EntryKind::Directory);
            }
            other => panic!("Expected name collision, got {:?}", other),
        }
    }

    #[test]
    fn test_file_blocks_directory_with_same_name() {
        let root = scratch_root();
        create_file(root.path(), "/", "shared", "content").unwrap();
        let result = create_directory(root.path(), "/", "shared");
        match result {
            Err(StoreError::NameCollision { name, existing }) => {
                assert_eq!(name, "shared");
                assert_eq!(existing, EntryKind::File);
            }
            other => panic!("Expected name collision, got {:?}", other),
        }
    }

    #[test]
    fn test_create_in_missing_parent() {
        let root = scratch_root();
        let result = create_file(root.path(), "missing", "a.txt", "a");
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_create_rejects_invalid_name() {
        let root = scratch_root();
        assert!(matches!(
            create_directory(root.path(), "/", ".."),
            Err(StoreError::InvalidPath(_))
        ));
        assert!(matches!(
            create_file(root.path(), "/", "a/b", "x"),
            Err(StoreError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_write_read_round_trip() {
        let root = scratch_root();
        create_file(root.path(), "/", "note.txt", "first").unwrap();
        write_file(root.path(), "note.txt", "second").unwrap();
        assert_eq!(read_file(root.path(), "note.txt").unwrap(), "second");
    }

    #[test]
    fn test_write_missing_file_fails() {
        let root = scratch_root();
        let result = write_file(root.path(), "missing.txt", "content");
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let root = scratch_root();
        let result = read_file(root.path(), "missing/path.txt");
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_read_and_write_on_directory_are_wrong_kind() {
        let root = scratch_root();
        create_directory(root.path(), "/", "docs").unwrap();
        assert!(matches!(
            read_file(root.path(), "docs"),
            Err(StoreError::WrongKind {
                expected: EntryKind::File,
                ..
            })
        ));
        assert!(matches!(
            write_file(root.path(), "docs", "x"),
            Err(StoreError::WrongKind {
                expected: EntryKind::File,
                ..
            })
        ));
    }
}
