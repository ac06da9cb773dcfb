//! Logical path resolution
//!
//! Translates slash-separated logical paths into real paths under the store
//! root and validates entry names before create operations. Resolution is
//! purely lexical; `.` and `..` components are rejected so every resolved
//! path stays inside the root.

use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Maximum number of components a logical path may have
pub const MAX_PATH_DEPTH: usize = 32;

/// Validate a single entry name
pub fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.is_empty() {
        return Err(StoreError::InvalidPath("Empty name".into()));
    }
    if name == "." || name == ".." {
        return Err(StoreError::InvalidPath(format!(
            "Relative component not allowed: {}",
            name
        )));
    }
    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return Err(StoreError::InvalidPath(format!(
            "Illegal character in name: {}",
            name
        )));
    }
    Ok(())
}

/// Split a logical path into validated components
///
/// `"/"` and `""` both denote the root and yield no components. Leading and
/// trailing slashes are tolerated.
pub fn split_path(path: &str) -> Result<Vec<&str>, StoreError> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let mut components = Vec::new();
    for component in trimmed.split('/') {
        validate_name(component)?;
        components.push(component);
    }

    if components.len() > MAX_PATH_DEPTH {
        return Err(StoreError::InvalidPath(format!(
            "Path exceeds maximum depth of {}: {}",
            MAX_PATH_DEPTH, path
        )));
    }

    Ok(components)
}

/// Translate a logical path into a real path under the root
pub fn logical_to_real(root: &Path, path: &str) -> Result<PathBuf, StoreError> {
    let mut real = root.to_path_buf();
    for component in split_path(path)? {
        real.push(component);
    }
    Ok(real)
}

/// Canonical logical form of a child entry path
pub fn join_logical(parent: &str, name: &str) -> String {
    let trimmed = parent.trim_matches('/');
    if trimmed.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", trimmed, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_root_aliases() {
        assert_eq!(split_path("/").unwrap(), Vec::<&str>::new());
        assert_eq!(split_path("").unwrap(), Vec::<&str>::new());
        assert_eq!(split_path("//").unwrap(), Vec::<&str>::new());
    }

    #[test]
    fn test_split_relative_paths() {
        assert_eq!(split_path("docs").unwrap(), vec!["docs"]);
        assert_eq!(
            split_path("docs/readme.txt").unwrap(),
            vec!["docs", "readme.txt"]
        );
        assert_eq!(split_path("/docs/sub/").unwrap(), vec!["docs", "sub"]);
    }

    #[test]
    fn test_split_rejects_malformed_paths() {
        assert!(split_path("a//b").is_err());
        assert!(split_path("../escape").is_err());
        assert!(split_path("docs/./readme.txt").is_err());
        assert!(split_path("docs\\readme.txt").is_err());
        assert!(split_path("docs/nul\0name").is_err());
    }

    #[test]
    fn test_split_depth_limit() {
        let too_deep = vec!["d"; MAX_PATH_DEPTH + 1].join("/");
        assert!(split_path(&too_deep).is_err());
        let at_limit = vec!["d"; MAX_PATH_DEPTH].join("/");
        assert_eq!(split_path(&at_limit).unwrap().len(), MAX_PATH_DEPTH);
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("readme.txt").is_ok());
        assert!(validate_name("sub_dir").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(".").is_err());
        assert!(validate_name("..").is_err());
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("a\\b").is_err());
    }

    #[test]
    fn test_join_logical() {
        assert_eq!(join_logical("/", "docs"), "docs");
        assert_eq!(join_logical("", "docs"), "docs");
        assert_eq!(join_logical("docs", "readme.txt"), "docs/readme.txt");
        assert_eq!(join_logical("/docs/", "readme.txt"), "docs/readme.txt");
    }

    #[test]
    fn test_logical_to_real() {
        let root = Path::new("/srv/store");
        assert_eq!(
            logical_to_real(root, "docs/a.txt").unwrap(),
            root.join("docs").join("a.txt")
        );
        assert_eq!(logical_to_real(root, "/").unwrap(), root);
    }
}
