//! Application layer for apidiff.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ApiDiffService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! parsing or diffing rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod revision;
pub mod services;

// Re-export main services
pub use services::{
    ApiDiffService,
    DiffReport, // DTO handed to renderers
    DiffSummary,
    ReportEntry,
};

// Re-export port traits (for adapter implementation)
pub use ports::DocumentSource;

pub use error::ApplicationError;
pub use revision::Revision;
