//! Result types for search operations

use crate::store::results::EntryKind;

/// A single search hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// Entry name that matched the query
    pub name: String,
    /// Logical path of the entry, relative to the store root
    pub path: String,
    /// Kind of the matching entry
    pub kind: EntryKind,
}
