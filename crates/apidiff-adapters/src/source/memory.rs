//! In-memory document source for testing and embedding.

use serde_json::Value;

use apidiff_core::{
    application::{ApplicationError, Revision, ports::DocumentSource},
    error::ApiDiffResult,
};

/// Document source holding both revisions in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentSource {
    old: Value,
    new: Value,
}

impl MemoryDocumentSource {
    pub fn new(old: Value, new: Value) -> Self {
        Self { old, new }
    }

    /// Decode both revisions from JSON text.
    pub fn from_strs(old: &str, new: &str) -> ApiDiffResult<Self> {
        Ok(Self {
            old: decode(Revision::Old, old)?,
            new: decode(Revision::New, new)?,
        })
    }
}

impl DocumentSource for MemoryDocumentSource {
    fn load(&self, revision: Revision) -> ApiDiffResult<Value> {
        Ok(match revision {
            Revision::Old => self.old.clone(),
            Revision::New => self.new.clone(),
        })
    }

    fn describe(&self, _revision: Revision) -> String {
        "<memory>".into()
    }
}

fn decode(revision: Revision, text: &str) -> ApiDiffResult<Value> {
    serde_json::from_str(text).map_err(|e| {
        ApplicationError::InvalidJson {
            revision,
            reason: e.to_string(),
        }
        .into()
    })
}
