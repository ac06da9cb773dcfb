//! Error types
//!
//! Defines domain-specific error types for the file store.

use std::fmt;
use std::io;

use crate::store::results::EntryKind;

/// File store errors
#[derive(Debug)]
pub enum StoreError {
    /// Path does not resolve to an existing entry of the expected category
    NotFound(String),
    /// Operation expected one entry kind but found the other
    WrongKind {
        path: String,
        expected: EntryKind,
        found: EntryKind,
    },
    /// Create would duplicate a sibling name, regardless of the sibling's kind
    NameCollision { name: String, existing: EntryKind },
    /// Malformed logical path or entry name
    InvalidPath(String),
    /// Underlying storage operation failed
    Io(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(p) => write!(f, "Not found: {}", p),
            StoreError::WrongKind {
                path,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Wrong kind: {} is a {}, expected a {}",
                    path, found, expected
                )
            }
            StoreError::NameCollision { name, existing } => {
                write!(
                    f,
                    "Name collision: '{}' already exists as a {}",
                    name, existing
                )
            }
            StoreError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            StoreError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}
