use std::fmt;

use crate::domain::value_objects::AccessLevel;

/// One declaration reported by the analysis tool.
///
/// Invariant: a `Symbol` exclusively owns its children and is never mutated
/// after construction. Identity for diffing is the USR, never the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    kind: String,
    name: Option<String>,
    type_name: Option<String>,
    usr: Option<String>,
    type_usr: Option<String>,
    access_level: AccessLevel,
    children: Vec<Symbol>,
}

impl Symbol {
    pub fn builder() -> SymbolBuilder {
        SymbolBuilder::default()
    }

    /// Normalized declaration category (`struct`, `class`, `instance`, ...).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Dotted fully-qualified name, e.g. `.Foo.bar`.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Unique Symbol Reference.
    pub fn usr(&self) -> Option<&str> {
        self.usr.as_deref()
    }

    pub fn type_usr(&self) -> Option<&str> {
        self.type_usr.as_deref()
    }

    pub fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    pub fn children(&self) -> &[Symbol] {
        &self.children
    }

    /// Whether this symbol belongs in the public index.
    pub fn is_indexable(&self) -> bool {
        self.access_level.is_public() && self.usr.as_deref().is_some_and(|u| !u.is_empty())
    }

    /// `"<name> <usr>"`, with empty strings for absent parts.
    pub fn loggable(&self) -> String {
        format!(
            "{} {}",
            self.name.as_deref().unwrap_or_default(),
            self.usr.as_deref().unwrap_or_default()
        )
    }

    /// Pre-order walk over this symbol and all of its descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or_default())
    }
}

/// Depth-first, parent-before-children iterator returned by [`Symbol::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a Symbol>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        // reversed so the first child is visited first
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct SymbolBuilder {
    kind: String,
    name: Option<String>,
    type_name: Option<String>,
    usr: Option<String>,
    type_usr: Option<String>,
    access_level: AccessLevel,
    children: Vec<Symbol>,
}

impl SymbolBuilder {
    /// Kind as already normalized; see [`crate::domain::normalize_kind`].
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn type_name(mut self, type_name: Option<String>) -> Self {
        self.type_name = type_name;
        self
    }

    pub fn usr(mut self, usr: impl Into<String>) -> Self {
        self.usr = Some(usr.into());
        self
    }

    pub fn maybe_usr(mut self, usr: Option<String>) -> Self {
        self.usr = usr;
        self
    }

    pub fn type_usr(mut self, type_usr: Option<String>) -> Self {
        self.type_usr = type_usr;
        self
    }

    pub fn access_level(mut self, access_level: AccessLevel) -> Self {
        self.access_level = access_level;
        self
    }

    pub fn child(mut self, child: Symbol) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: Vec<Symbol>) -> Self {
        self.children = children;
        self
    }

    pub fn build(self) -> Symbol {
        Symbol {
            kind: self.kind,
            name: self.name,
            type_name: self.type_name,
            usr: self.usr,
            type_usr: self.type_usr,
            access_level: self.access_level,
            children: self.children,
        }
    }
}
