use super::symbol::Symbol;

/// A named root container: one file path and its top-level declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    symbols: Vec<Symbol>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, symbols: Vec<Symbol>) -> Self {
        Self {
            name: name.into(),
            symbols,
        }
    }

    /// File path, as given by the document's outer mapping key.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Pre-order walk over every symbol in the file, in declaration order.
    pub fn walk(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter().flat_map(Symbol::walk)
    }

    /// Total number of symbols in the file at every depth.
    pub fn symbol_count(&self) -> usize {
        self.walk().count()
    }
}
