//! apidiff Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the apidiff
//! public API surface differ, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           apidiff-cli (CLI)             │
//! │   (Renders DiffReport, owns config)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ApiDiffService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Driven: DocumentSource)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    apidiff-adapters (Infrastructure)    │
//! │ (FileDocumentSource, MemoryDocumentSource)
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (parser, index, differ, Symbol tree)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use apidiff_core::domain::{build_index, diff, parse_document};
//! use serde_json::json;
//!
//! let old = json!([{ "A.swift": { "key.substructure": [
//!     { "key.name": "foo", "key.usr": "A", "key.accessibility": "source.lang.swift.accessibility.public" },
//!     { "key.name": "bar", "key.usr": "B", "key.accessibility": "source.lang.swift.accessibility.public" }
//! ]}}]);
//! let new = json!([{ "A.swift": { "key.substructure": [
//!     { "key.name": "foo", "key.usr": "A", "key.accessibility": "source.lang.swift.accessibility.public" }
//! ]}}]);
//!
//! let old_files = parse_document(&old).unwrap();
//! let new_files = parse_document(&new).unwrap();
//! let result = diff(&build_index(&old_files), &build_index(&new_files));
//!
//! assert_eq!(result.stable.len(), 1);
//! assert_eq!(result.missing_or_changed[0].name(), Some(".bar"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApiDiffService, DiffReport, DiffSummary, ReportEntry, Revision, ports::DocumentSource,
    };
    pub use crate::domain::{
        AccessLevel, ClassificationResult, PublicSymbolIndex, SourceFile, Symbol, build_index,
        diff, parse_document,
    };
    pub use crate::error::{ApiDiffError, ApiDiffResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
