//! Application layer errors.
//!
//! These errors represent failures in orchestration (loading a revision,
//! attributing a parse failure to it), not document-shape rules. Shape
//! errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::Revision;
use crate::domain::DomainError;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The dump for a revision could not be read.
    #[error("Cannot read {revision} dump at {path}: {reason}")]
    DocumentUnavailable {
        revision: Revision,
        path: PathBuf,
        reason: String,
    },

    /// The dump for a revision is not valid JSON.
    #[error("The {revision} dump is not valid JSON: {reason}")]
    InvalidJson { revision: Revision, reason: String },

    /// The dump was valid JSON but not a well-formed symbol document.
    #[error("Failed to parse the {revision} revision: {source}")]
    RevisionParseFailed {
        revision: Revision,
        #[source]
        source: DomainError,
    },

    /// Both revisions were pointed at standard input.
    #[error("Only one revision can be read from stdin")]
    StdinAlreadyUsed,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DocumentUnavailable { path, .. } => vec![
                format!("Check that {} exists and is readable", path.display()),
                "Generate it with: sourcekitten doc -- <xcodebuild args> > dump.json".into(),
            ],
            Self::InvalidJson { revision, .. } => vec![
                format!("The {} dump could not be decoded", revision),
                "Make sure the file holds only SourceKitten's stdout, not its log output".into(),
            ],
            Self::RevisionParseFailed { revision, source } => {
                let mut suggestions = vec![format!(
                    "The {} revision's dump has an unexpected shape",
                    revision
                )];
                suggestions.extend(source.suggestions());
                suggestions
            }
            Self::StdinAlreadyUsed => vec![
                "Pass a file path for at least one of the two revisions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DocumentUnavailable { .. } => ErrorCategory::NotFound,
            Self::InvalidJson { .. } | Self::RevisionParseFailed { .. } => {
                ErrorCategory::Validation
            }
            Self::StdinAlreadyUsed => ErrorCategory::Validation,
        }
    }

    /// The revision this error is attributed to, if any.
    pub fn revision(&self) -> Option<Revision> {
        match self {
            Self::DocumentUnavailable { revision, .. }
            | Self::InvalidJson { revision, .. }
            | Self::RevisionParseFailed { revision, .. } => Some(*revision),
            Self::StdinAlreadyUsed => None,
        }
    }
}
