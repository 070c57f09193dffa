//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `apidiff-adapters` crate provides implementations.

use serde_json::Value;

use crate::application::Revision;
use crate::error::ApiDiffResult;

/// Port for obtaining the raw symbol dump of a revision.
///
/// Implemented by:
/// - `apidiff_adapters::source::FileDocumentSource` (production)
/// - `apidiff_adapters::source::MemoryDocumentSource` (testing, embedding)
///
/// ## Design Notes
///
/// - The document is returned as a generic JSON value; the domain parser
///   owns every shape decision
/// - Implementations report I/O and JSON decoding failures as
///   `ApplicationError`s naming the revision
#[cfg_attr(test, mockall::automock)]
pub trait DocumentSource: Send + Sync {
    /// Load the raw document for `revision`.
    fn load(&self, revision: Revision) -> ApiDiffResult<Value>;

    /// Human-readable origin of `revision`'s document (a path, `<stdin>`,
    /// `<memory>`), used in log events.
    fn describe(&self, revision: Revision) -> String;
}
