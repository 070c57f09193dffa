//! Public symbol index: USR → symbol, restricted to the public API surface.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::domain::entities::{SourceFile, Symbol};

/// Flat mapping from USR to the public symbol carrying it.
///
/// Iteration is in ascending USR order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicSymbolIndex<'a> {
    entries: BTreeMap<&'a str, &'a Symbol>,
}

impl<'a> PublicSymbolIndex<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `symbol` if it is indexable, replacing any earlier entry with
    /// the same USR. Returns whether the symbol was inserted.
    pub fn insert(&mut self, symbol: &'a Symbol) -> bool {
        match symbol.usr() {
            Some(usr) if symbol.is_indexable() => {
                self.entries.insert(usr, symbol);
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, usr: &str) -> Option<&'a Symbol> {
        self.entries.get(usr).copied()
    }

    pub fn contains(&self, usr: &str) -> bool {
        self.entries.contains_key(usr)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, 'a> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'a Symbol> + '_ {
        self.entries.values().copied()
    }
}

pub struct Iter<'i, 'a> {
    inner: btree_map::Iter<'i, &'a str, &'a Symbol>,
}

impl<'a> Iterator for Iter<'_, 'a> {
    type Item = (&'a str, &'a Symbol);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(usr, symbol)| (*usr, *symbol))
    }
}

impl<'i, 'a> IntoIterator for &'i PublicSymbolIndex<'a> {
    type Item = (&'a str, &'a Symbol);
    type IntoIter = Iter<'i, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build the public index over every symbol of every file.
///
/// Files are visited in order and each tree pre-order, so on a USR collision
/// the symbol visited last wins. Non-public symbols and symbols without a
/// USR are never indexed.
pub fn build_index(files: &[SourceFile]) -> PublicSymbolIndex<'_> {
    let mut index = PublicSymbolIndex::new();
    for symbol in files.iter().flat_map(SourceFile::walk) {
        index.insert(symbol);
    }
    index
}
