//! `apidiff tree`: list the symbol tree of one dump.

use serde::Serialize;
use tracing::{debug, instrument};

use apidiff_adapters::FileDocumentSource;
use apidiff_core::prelude::{AccessLevel, ApiDiffService, Revision, SourceFile, Symbol};

use crate::{
    cli::{OutputFormat, TreeArgs},
    error::CliResult,
    output::OutputManager,
};

/// One listed symbol with its nesting depth.
#[derive(Debug, Serialize)]
struct TreeRow<'a> {
    file: &'a str,
    depth: usize,
    name: Option<&'a str>,
    usr: Option<&'a str>,
    kind: &'a str,
    access_level: AccessLevel,
    #[serde(skip)]
    symbol: &'a Symbol,
}

impl TreeRow<'_> {
    /// `loggable()` indented with one tab per depth level.
    fn line(&self) -> String {
        format!("{}{}", "\t".repeat(self.depth), self.symbol.loggable())
    }
}

#[instrument(skip_all, fields(file = %args.file.display(), public_only = args.public_only))]
pub fn execute(args: TreeArgs, output: OutputManager) -> CliResult<()> {
    let source = FileDocumentSource::single(&args.file);
    let files = ApiDiffService::new(Box::new(source)).tree(Revision::New)?;

    let rows = tree_rows(&files, args.public_only);
    debug!(files = files.len(), rows = rows.len(), "Symbol tree collected");

    if output.format() == OutputFormat::Json {
        output.json(&rows)?;
        return Ok(());
    }

    let mut current_file = None;
    for row in &rows {
        if current_file != Some(row.file) {
            output.header(row.file)?;
            current_file = Some(row.file);
        }
        output.print(&row.line())?;
    }
    Ok(())
}

fn tree_rows(files: &[SourceFile], public_only: bool) -> Vec<TreeRow<'_>> {
    let mut rows = Vec::new();
    for file in files {
        for symbol in file.symbols() {
            collect(file.name(), symbol, 0, public_only, &mut rows);
        }
    }
    rows
}

// Pre-order; a hidden parent does not hide its public children.
fn collect<'a>(
    file: &'a str,
    symbol: &'a Symbol,
    depth: usize,
    public_only: bool,
    rows: &mut Vec<TreeRow<'a>>,
) {
    if !public_only || symbol.access_level().is_public() {
        rows.push(TreeRow {
            file,
            depth,
            name: symbol.name(),
            usr: symbol.usr(),
            kind: symbol.kind(),
            access_level: symbol.access_level(),
            symbol,
        });
    }
    for child in symbol.children() {
        collect(file, child, depth + 1, public_only, rows);
    }
}
