//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "diff two revisions" or "load one revision".

pub mod diff_service;

pub use diff_service::{ApiDiffService, DiffReport, DiffSummary, ReportEntry};
