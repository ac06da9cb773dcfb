//! Error handling
//!
//! Defines error types for the file store.

pub mod types;

pub use types::*;
