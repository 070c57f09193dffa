// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for apidiff.
//!
//! This module contains the pure API-surface logic: parse, index, diff.
//! Loading documents from disk or elsewhere is handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: `Symbol` and `SourceFile` expose accessors only
//! - **Derived, borrowed views**: the index and the classification borrow
//!   from the parsed forest instead of copying it
//!
// Public API - what the world sees
pub mod differ;
pub mod entities;
pub mod error;
pub mod index;
pub mod parser;
pub mod value_objects;

// Re-exports for convenience
pub use differ::{ClassificationResult, diff};
pub use entities::{SourceFile, Symbol, SymbolBuilder};
pub use error::DomainError;
pub use index::{PublicSymbolIndex, build_index};
pub use parser::{parse_document, parse_file, parse_symbol};
pub use value_objects::{AccessLevel, normalize_kind};
