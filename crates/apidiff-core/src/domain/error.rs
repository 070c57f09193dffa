// ============================================================================
// domain/error.rs - DOCUMENT SHAPE ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so a revision failure can be reported and kept)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// The raw document does not have the shape required at `location`.
    ///
    /// `location` is a ` > `-separated breadcrumb such as
    /// `[0] > Sources/App.swift > .Foo > [2]`, `<document>` for the
    /// top-level value.
    #[error("Malformed document at {location}: {reason}")]
    MalformedDocument { location: String, reason: String },
}

impl DomainError {
    pub(crate) fn malformed(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedDocument { location, .. } => vec![
                format!("Inspect the dump near: {}", location),
                "The dump must be the JSON array printed by `sourcekitten doc`".into(),
                "Both revisions should be dumped with the same SourceKitten version".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedDocument { .. } => ErrorCategory::Validation,
        }
    }
}
