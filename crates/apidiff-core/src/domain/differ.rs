//! Surface differ: three-way classification of two public indexes.
//!
//! Classification is by USR presence only. A symbol whose USR survives but
//! whose type, kind, or access changed is still `stable`.

use crate::domain::{entities::Symbol, index::PublicSymbolIndex};

/// Output of [`diff`]: every indexed symbol lands in exactly one sequence.
///
/// Each sequence is in ascending USR order. `stable` and
/// `missing_or_changed` hold symbols of the old revision, `new` holds
/// symbols of the new revision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult<'a> {
    pub stable: Vec<&'a Symbol>,
    pub missing_or_changed: Vec<&'a Symbol>,
    pub new: Vec<&'a Symbol>,
}

impl ClassificationResult<'_> {
    /// `true` when nothing was removed and nothing was added.
    pub fn is_unchanged(&self) -> bool {
        self.missing_or_changed.is_empty() && self.new.is_empty()
    }

    /// Total number of classified symbols.
    pub fn len(&self) -> usize {
        self.stable.len() + self.missing_or_changed.len() + self.new.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify `old` and `new` into stable, missing-or-changed and new.
pub fn diff<'a>(
    old: &PublicSymbolIndex<'a>,
    new: &PublicSymbolIndex<'a>,
) -> ClassificationResult<'a> {
    let mut result = ClassificationResult::default();

    for (usr, symbol) in old {
        if new.contains(usr) {
            result.stable.push(symbol);
        } else {
            result.missing_or_changed.push(symbol);
        }
    }

    result.new = new
        .iter()
        .filter(|(usr, _)| !old.contains(usr))
        .map(|(_, symbol)| symbol)
        .collect();

    result
}
