//! Infrastructure adapters for apidiff.
//!
//! This crate implements the ports defined in `apidiff-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod source;

// Re-export commonly used adapters
pub use source::{FileDocumentSource, MemoryDocumentSource, STDIN_PATH};
