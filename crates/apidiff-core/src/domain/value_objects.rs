//! Domain value objects: AccessLevel and the raw classifier strings.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! The classifier constants are the exact strings SourceKitten writes under
//! `key.accessibility`; matching is exact, never prefix or case-folded.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const ACCESSIBILITY_PUBLIC: &str = "source.lang.swift.accessibility.public";
pub const ACCESSIBILITY_PRIVATE: &str = "source.lang.swift.accessibility.private";
pub const ACCESSIBILITY_INTERNAL: &str = "source.lang.swift.accessibility.internal";

// ── AccessLevel ───────────────────────────────────────────────────────────────

/// Visibility of a declaration.
///
/// Only [`AccessLevel::Public`] symbols take part in the API surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Public,
    Private,
    Internal,
    /// Unrecognized or absent classifier.
    #[default]
    Unknown,
}

impl AccessLevel {
    /// Map a raw accessibility classifier.
    ///
    /// `None` and every string other than the three known classifiers map to
    /// [`AccessLevel::Unknown`].
    pub fn from_classifier(raw: Option<&str>) -> Self {
        match raw {
            Some(ACCESSIBILITY_PUBLIC) => Self::Public,
            Some(ACCESSIBILITY_PRIVATE) => Self::Private,
            Some(ACCESSIBILITY_INTERNAL) => Self::Internal,
            _ => Self::Unknown,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Internal => "internal",
            Self::Unknown => "unknown",
        }
    }

    pub const fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a raw kind classifier to its last dotted segment.
///
/// `source.lang.swift.decl.struct` becomes `struct`; an absent classifier
/// becomes the empty string.
pub fn normalize_kind(raw: Option<&str>) -> String {
    raw.and_then(|k| k.rsplit('.').next())
        .unwrap_or_default()
        .to_string()
}
