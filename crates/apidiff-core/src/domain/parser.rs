//! Symbol tree parser.
//!
//! Decodes a SourceKitten `doc` dump, held as a generic [`serde_json::Value`],
//! into a forest of [`SourceFile`]s. The dump's schema drifts between tool
//! versions, so the parser reads it through narrow accessors instead of a
//! fixed serde schema:
//!
//! - a missing (or `null`) field gets its default,
//! - a non-string `key.name` or `key.accessibility` reads as absent,
//! - any other field of the wrong JSON type is a
//!   [`DomainError::MalformedDocument`],
//! - a top-level element that is not a mapping is skipped with a warning.
//!
//! Qualified names are built as `inherited + "." + own`, with an empty
//! inherited name at the root of a file, so root symbols read `.Foo` and
//! their members `.Foo.bar`.

use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use crate::domain::{
    entities::{SourceFile, Symbol},
    error::DomainError,
    value_objects::{AccessLevel, normalize_kind},
};

pub const KEY_KIND: &str = "key.kind";
pub const KEY_NAME: &str = "key.name";
pub const KEY_TYPENAME: &str = "key.typename";
pub const KEY_USR: &str = "key.usr";
pub const KEY_TYPEUSR: &str = "key.typeusr";
pub const KEY_ACCESSIBILITY: &str = "key.accessibility";
pub const KEY_SUBSTRUCTURE: &str = "key.substructure";

/// Parse a whole dump: an array whose elements map file paths to nodes.
///
/// Files are returned in encounter order: array order first, then key
/// order within each element.
pub fn parse_document(raw: &Value) -> Result<Vec<SourceFile>, DomainError> {
    let root = Crumb::root("<document>");
    let docs = raw.as_array().ok_or_else(|| {
        DomainError::malformed(
            root.render(),
            format!("expected an array of file mappings, found {}", describe(raw)),
        )
    })?;

    let mut files = Vec::new();
    for (index, doc) in docs.iter().enumerate() {
        let Some(entries) = doc.as_object() else {
            warn!(index, found = describe(doc), "Skipping non-mapping document element");
            continue;
        };

        let element = root.index(index);
        for (path, node) in entries {
            files.push(parse_file_at(path, node, &element.key(path))?);
        }
    }

    debug!(files = files.len(), "Document parsed");
    Ok(files)
}

/// Parse one `(path, node)` pair of the document into a [`SourceFile`].
///
/// The file's symbols are the node's `key.substructure`, parsed with an
/// empty inherited name.
pub fn parse_file(path: &str, raw_node: &Value) -> Result<SourceFile, DomainError> {
    parse_file_at(path, raw_node, &Crumb::root("<file>").key(path))
}

/// Parse one symbol node and its descendants.
///
/// `inherited_name` is the qualified name accumulated from the ancestors
/// (empty at the root of a file).
pub fn parse_symbol(raw: &Value, inherited_name: &str) -> Result<Symbol, DomainError> {
    parse_symbol_at(raw, inherited_name, &Crumb::root("<symbol>"))
}

// ── Internals ────────────────────────────────────────────────────────────────

fn parse_file_at(path: &str, raw_node: &Value, at: &Crumb<'_>) -> Result<SourceFile, DomainError> {
    let node = as_mapping(raw_node, at, "file node")?;
    let symbols = parse_children(node, "", at)?;

    trace!(file = path, symbols = symbols.len(), "File parsed");
    Ok(SourceFile::new(path, symbols))
}

fn parse_symbol_at(raw: &Value, inherited_name: &str, at: &Crumb<'_>) -> Result<Symbol, DomainError> {
    let node = as_mapping(raw, at, "symbol mapping")?;

    let own_name = lenient_string(node, KEY_NAME).unwrap_or_default();
    let qualified = format!("{inherited_name}.{own_name}");
    let children = parse_children(node, &qualified, &at.key(&qualified))?;

    Ok(Symbol::builder()
        .kind(normalize_kind(string_field(node, KEY_KIND, at)?))
        .name(qualified)
        .type_name(string_field(node, KEY_TYPENAME, at)?.map(String::from))
        .maybe_usr(string_field(node, KEY_USR, at)?.map(String::from))
        .type_usr(string_field(node, KEY_TYPEUSR, at)?.map(String::from))
        .access_level(AccessLevel::from_classifier(lenient_string(
            node,
            KEY_ACCESSIBILITY,
        )))
        .children(children)
        .build())
}

fn parse_children(
    node: &Map<String, Value>,
    qualified: &str,
    at: &Crumb<'_>,
) -> Result<Vec<Symbol>, DomainError> {
    let items = match node.get(KEY_SUBSTRUCTURE) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(DomainError::malformed(
                at.render(),
                format!("`{KEY_SUBSTRUCTURE}` must be an array, found {}", describe(other)),
            ));
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(i, child)| parse_symbol_at(child, qualified, &at.index(i)))
        .collect()
}

fn as_mapping<'v>(
    raw: &'v Value,
    at: &Crumb<'_>,
    expected: &str,
) -> Result<&'v Map<String, Value>, DomainError> {
    raw.as_object().ok_or_else(|| {
        DomainError::malformed(
            at.render(),
            format!("expected a {expected}, found {}", describe(raw)),
        )
    })
}

fn string_field<'v>(
    node: &'v Map<String, Value>,
    key: &str,
    at: &Crumb<'_>,
) -> Result<Option<&'v str>, DomainError> {
    match node.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(DomainError::malformed(
            at.render(),
            format!("`{key}` must be a string, found {}", describe(other)),
        )),
    }
}

fn lenient_string<'v>(node: &'v Map<String, Value>, key: &str) -> Option<&'v str> {
    node.get(key).and_then(Value::as_str)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}

/// Breadcrumb to the node being parsed; only rendered when an error occurs.
struct Crumb<'a> {
    parent: Option<&'a Crumb<'a>>,
    segment: Segment<'a>,
}

enum Segment<'a> {
    Root(&'static str),
    Index(usize),
    Key(&'a str),
}

impl<'a> Crumb<'a> {
    fn root(label: &'static str) -> Self {
        Self {
            parent: None,
            segment: Segment::Root(label),
        }
    }

    fn index(&'a self, i: usize) -> Crumb<'a> {
        Crumb {
            parent: Some(self),
            segment: Segment::Index(i),
        }
    }

    fn key(&'a self, key: &'a str) -> Crumb<'a> {
        Crumb {
            parent: Some(self),
            segment: Segment::Key(key),
        }
    }

    fn render(&self) -> String {
        let mut parts = Vec::new();
        let mut root = "";
        let mut current = Some(self);
        while let Some(crumb) = current {
            match crumb.segment {
                Segment::Root(label) => root = label,
                Segment::Index(i) => parts.push(format!("[{i}]")),
                Segment::Key(key) => parts.push(key.to_string()),
            }
            current = crumb.parent;
        }

        if parts.is_empty() {
            return root.to_string();
        }
        parts.reverse();
        parts.join(" > ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn public() -> &'static str {
        crate::domain::value_objects::ACCESSIBILITY_PUBLIC
    }

    // ── parse_symbol ──────────────────────────────────────────────────────────

    #[test]
    fn root_symbol_gets_leading_dot() {
        let sym = parse_symbol(&json!({ "key.name": "Foo" }), "").unwrap();
        assert_eq!(sym.name(), Some(".Foo"));
    }

    #[test]
    fn child_name_is_qualified_by_parent() {
        let raw = json!({
            "key.name": "Foo",
            "key.substructure": [
                { "key.name": "bar", "key.substructure": [{ "key.name": "baz" }] }
            ]
        });
        let sym = parse_symbol(&raw, "").unwrap();
        let bar = &sym.children()[0];
        assert_eq!(bar.name(), Some(".Foo.bar"));
        assert_eq!(bar.children()[0].name(), Some(".Foo.bar.baz"));
    }

    #[test]
    fn absent_name_still_concatenates() {
        let raw = json!({ "key.substructure": [{ "key.name": "x" }, {}] });
        let sym = parse_symbol(&raw, ".Outer").unwrap();
        assert_eq!(sym.name(), Some(".Outer."));
        assert_eq!(sym.children()[0].name(), Some(".Outer..x"));
        assert_eq!(sym.children()[1].name(), Some(".Outer.."));
    }

    #[test]
    fn fields_are_read_and_normalized() {
        let raw = json!({
            "key.kind": "source.lang.swift.decl.var.instance",
            "key.name": "count",
            "key.typename": "Int",
            "key.usr": "s:4main3FooV5countSivp",
            "key.typeusr": "$sSiD",
            "key.accessibility": public(),
        });
        let sym = parse_symbol(&raw, ".Foo").unwrap();
        assert_eq!(sym.kind(), "instance");
        assert_eq!(sym.name(), Some(".Foo.count"));
        assert_eq!(sym.type_name(), Some("Int"));
        assert_eq!(sym.usr(), Some("s:4main3FooV5countSivp"));
        assert_eq!(sym.type_usr(), Some("$sSiD"));
        assert_eq!(sym.access_level(), AccessLevel::Public);
    }

    #[test]
    fn absent_fields_get_defaults() {
        let sym = parse_symbol(&json!({}), "").unwrap();
        assert_eq!(sym.kind(), "");
        assert_eq!(sym.usr(), None);
        assert_eq!(sym.type_name(), None);
        assert_eq!(sym.access_level(), AccessLevel::Unknown);
        assert!(sym.children().is_empty());
    }

    #[test]
    fn null_fields_count_as_absent() {
        let raw = json!({ "key.usr": null, "key.substructure": null, "key.kind": null });
        let sym = parse_symbol(&raw, "").unwrap();
        assert_eq!(sym.usr(), None);
        assert_eq!(sym.kind(), "");
        assert!(sym.children().is_empty());
    }

    #[test]
    fn non_mapping_symbol_is_malformed() {
        for raw in [json!("Foo"), json!(3), json!([]), json!(null)] {
            assert!(matches!(
                parse_symbol(&raw, ""),
                Err(DomainError::MalformedDocument { .. })
            ));
        }
    }

    #[test]
    fn wrongly_typed_field_is_malformed() {
        let err = parse_symbol(&json!({ "key.usr": 42 }), "").unwrap_err();
        match err {
            DomainError::MalformedDocument { reason, .. } => {
                assert!(reason.contains("key.usr"), "reason: {reason}");
            }
        }
    }

    #[test]
    fn non_string_accessibility_is_unknown() {
        for level in [json!(5), json!(true), json!(["public"]), json!({})] {
            let raw = json!({ "key.name": "Foo", "key.accessibility": level });
            let sym = parse_symbol(&raw, "").unwrap();
            assert_eq!(sym.access_level(), AccessLevel::Unknown);
            assert_eq!(sym.name(), Some(".Foo"));
        }
    }

    #[test]
    fn non_string_name_reads_as_empty() {
        let raw = json!({
            "key.name": 42,
            "key.substructure": [{ "key.name": "bar" }, { "key.name": false }]
        });
        let sym = parse_symbol(&raw, ".Outer").unwrap();
        assert_eq!(sym.name(), Some(".Outer."));
        assert_eq!(sym.children()[0].name(), Some(".Outer..bar"));
        assert_eq!(sym.children()[1].name(), Some(".Outer.."));
    }

    #[test]
    fn substructure_must_be_an_array() {
        let err = parse_symbol(&json!({ "key.substructure": {} }), "").unwrap_err();
        assert!(err.to_string().contains("key.substructure"));
    }

    #[test]
    fn malformed_child_reports_its_location() {
        let raw = json!({ "key.name": "Foo", "key.substructure": [{}, "oops"] });
        let err = parse_symbol(&raw, "").unwrap_err();
        match err {
            DomainError::MalformedDocument { location, .. } => {
                assert_eq!(location, ".Foo > [1]");
            }
        }
    }

    // ── parse_file ────────────────────────────────────────────────────────────

    #[test]
    fn file_symbols_come_from_substructure() {
        let raw = json!({
            "key.diagnostic_stage": "source.diagnostic.stage.swift.parse",
            "key.substructure": [{ "key.name": "A" }, { "key.name": "B" }]
        });
        let file = parse_file("Sources/App/A.swift", &raw).unwrap();
        assert_eq!(file.name(), "Sources/App/A.swift");
        let names: Vec<_> = file.symbols().iter().filter_map(Symbol::name).collect();
        assert_eq!(names, vec![".A", ".B"]);
    }

    #[test]
    fn file_without_substructure_is_empty() {
        let file = parse_file("Empty.swift", &json!({})).unwrap();
        assert!(file.symbols().is_empty());
    }

    #[test]
    fn non_mapping_file_node_is_malformed() {
        let err = parse_file("A.swift", &json!([1, 2])).unwrap_err();
        match err {
            DomainError::MalformedDocument { location, .. } => assert_eq!(location, "A.swift"),
        }
    }

    // ── parse_document ────────────────────────────────────────────────────────

    #[test]
    fn document_must_be_an_array() {
        let err = parse_document(&json!({ "A.swift": {} })).unwrap_err();
        match err {
            DomainError::MalformedDocument { location, reason } => {
                assert_eq!(location, "<document>");
                assert!(reason.contains("a mapping"));
            }
        }
    }

    #[test]
    fn document_preserves_encounter_order() {
        let raw = json!([
            { "Z.swift": {}, "A.swift": {} },
            { "M.swift": {} }
        ]);
        let files = parse_document(&raw).unwrap();
        let names: Vec<_> = files.iter().map(SourceFile::name).collect();
        assert_eq!(names, vec!["Z.swift", "A.swift", "M.swift"]);
    }

    #[test]
    fn non_mapping_elements_are_skipped() {
        let raw = json!([
            "warning: something",
            { "A.swift": { "key.substructure": [{ "key.name": "A" }] } },
            42,
            null,
            { "B.swift": {} }
        ]);
        let files = parse_document(&raw).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].symbols()[0].name(), Some(".A"));
    }

    #[test]
    fn empty_document_has_no_files() {
        assert!(parse_document(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn malformed_nested_node_fails_whole_document() {
        let raw = json!([
            { "A.swift": { "key.substructure": [{ "key.name": "A", "key.substructure": [7] }] } }
        ]);
        let err = parse_document(&raw).unwrap_err();
        match err {
            DomainError::MalformedDocument { location, .. } => {
                assert_eq!(location, "[0] > A.swift > [0] > .A > [0]");
            }
        }
    }
}
