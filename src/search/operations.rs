//! Search operations implementation

use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::search::results::SearchMatch;
use crate::store::operations::resolve_directory;
use crate::store::resolver::join_logical;
use crate::store::results::EntryKind;

/// Searches the subtree rooted at `search_path` for entries whose name
/// contains `query` as a substring
///
/// Matching is case-sensitive and applies to entry names only, never to
/// full paths. The returned iterator walks the subtree depth-first with
/// each directory's entries in sorted order; a matching directory is
/// yielded before its children. Every call builds a fresh walk, so the
/// sequence is restartable. IO failures below the entry directory are
/// yielded as `Err` items rather than aborting the walk.
pub fn search_tree(root: &Path, query: &str, search_path: &str) -> Result<Search, StoreError> {
    let real_path = resolve_directory(root, search_path)?;

    info!(
        "Searching for '{}' under {} (real: {})",
        query,
        search_path,
        real_path.display()
    );

    Ok(Search {
        query: query.to_string(),
        stack: vec![Frame::Scan {
            real: real_path,
            logical: search_path.trim_matches('/').to_string(),
        }],
    })
}

/// Lazy depth-first iterator over search matches
pub struct Search {
    query: String,
    stack: Vec<Frame>,
}

enum Frame {
    /// Directory whose children have not been scanned yet
    Scan { real: PathBuf, logical: String },
    /// Entry awaiting the substring test
    Candidate {
        name: String,
        logical: String,
        kind: EntryKind,
    },
    /// Failure while reading a directory, surfaced to the caller
    Failed(StoreError),
}

impl Search {
    /// Push the children of a directory, sorted by name, onto the stack
    ///
    /// Children are pushed in reverse so the stack pops them in ascending
    /// order; a directory's `Scan` frame sits under its `Candidate` frame so
    /// the directory itself is tested before its subtree is walked.
    fn scan(&mut self, real: &Path, logical: &str) {
        let entries = match fs::read_dir(real) {
            Ok(entries) => entries,
            Err(e) => {
                self.stack.push(Frame::Failed(StoreError::from(e)));
                return;
            }
        };

        let mut children: Vec<(String, EntryKind)> = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            let kind = if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            children.push((name, kind));
        }
        // Sibling names are unique within a directory
        children.sort_by(|a, b| a.0.cmp(&b.0));

        for (name, kind) in children.into_iter().rev() {
            let child_logical = join_logical(logical, &name);
            if kind == EntryKind::Directory {
                self.stack.push(Frame::Scan {
                    real: real.join(&name),
                    logical: child_logical.clone(),
                });
            }
            self.stack.push(Frame::Candidate {
                name,
                logical: child_logical,
                kind,
            });
        }
    }
}

impl Iterator for Search {
    type Item = Result<SearchMatch, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Failed(e) => return Some(Err(e)),
                Frame::Scan { real, logical } => self.scan(&real, &logical),
                Frame::Candidate {
                    name,
                    logical,
                    kind,
                } => {
                    if name.contains(&self.query) {
                        return Some(Ok(SearchMatch {
                            name,
                            path: logical,
                            kind,
                        }));
                    }
                }
            }
        }
        None
    }
}
