//! File store facade
//!
//! Owns the store root and exposes the store operations against it.

use log::info;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::search::{self, Search};
use crate::store::operations;
use crate::store::results::{DirListing, EntryKind};

/// In-process file store rooted at one directory
///
/// The store holds no copy of the tree; the underlying filesystem is the
/// source of truth and every call re-resolves its paths. Calls are
/// synchronous and assume a single caller thread; callers that share a store
/// across threads must add their own synchronization.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at an existing directory
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, StoreError> {
        let root = root.as_ref();

        if !root.exists() {
            return Err(StoreError::NotFound(root.to_string_lossy().to_string()));
        }
        if !root.is_dir() {
            return Err(StoreError::WrongKind {
                path: root.to_string_lossy().to_string(),
                expected: EntryKind::Directory,
                found: EntryKind::File,
            });
        }

        let root = root.canonicalize()?;
        info!("Opened file store rooted at {}", root.display());
        Ok(Self { root })
    }

    /// The real root directory backing this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists the immediate child files and directories of the directory at `path`
    pub fn list(&self, path: &str) -> Result<DirListing, StoreError> {
        operations::list_directory(&self.root, path)
    }

    /// Creates a new empty directory named `name` under `parent`
    pub fn create_directory(&self, parent: &str, name: &str) -> Result<String, StoreError> {
        operations::create_directory(&self.root, parent, name)
    }

    /// Creates a new file named `name` under `parent` with the given content
    pub fn create_file(
        &self,
        parent: &str,
        name: &str,
        content: &str,
    ) -> Result<String, StoreError> {
        operations::create_file(&self.root, parent, name, content)
    }

    /// Returns the content of the file at `path`
    pub fn read(&self, path: &str) -> Result<String, StoreError> {
        operations::read_file(&self.root, path)
    }

    /// Overwrites the content of the existing file at `path`
    pub fn write(&self, path: &str, content: &str) -> Result<(), StoreError> {
        operations::write_file(&self.root, path, content)
    }

    /// Searches the subtree at `search_path` for entries whose name contains `query`
    pub fn search(&self, query: &str, search_path: &str) -> Result<Search, StoreError> {
        search::search_tree(&self.root, query, search_path)
    }
}
