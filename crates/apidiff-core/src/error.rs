//! Unified error handling for apidiff Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for apidiff Core operations.
///
/// This enum wraps all possible errors that can occur when using apidiff-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum ApiDiffError {
    /// Errors from the domain layer (document shape violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (loading and attribution).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ApiDiffError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in apidiff".into(),
                "Please report this issue at: https://github.com/cosecruz/apidiff/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type ApiDiffResult<T> = Result<T, ApiDiffError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Revision;

    fn malformed() -> DomainError {
        DomainError::MalformedDocument {
            location: "<document>".into(),
            reason: "expected an array of file mappings, found a mapping".into(),
        }
    }

    #[test]
    fn revision_parse_failure_names_the_revision() {
        let err: ApiDiffError = ApplicationError::RevisionParseFailed {
            revision: Revision::New,
            source: malformed(),
        }
        .into();

        let msg = err.to_string();
        assert!(msg.contains("new revision"), "message: {msg}");
        assert!(msg.contains("<document>"), "message: {msg}");
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn malformed_suggestions_mention_tool_version() {
        let err = ApiDiffError::Domain(malformed());
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("SourceKitten version")));
    }

    #[test]
    fn missing_dump_is_not_found() {
        let err: ApiDiffError = ApplicationError::DocumentUnavailable {
            revision: Revision::Old,
            path: "old.json".into(),
            reason: "No such file or directory".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("old dump"));
    }

    #[test]
    fn internal_errors_ask_for_a_report() {
        let err = ApiDiffError::Internal {
            message: "worker panicked".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.suggestions().iter().any(|s| s.contains("report")));
    }
}
