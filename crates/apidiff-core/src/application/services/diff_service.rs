//! API Diff Service - main application orchestrator.
//!
//! This service coordinates the entire diff workflow:
//! 1. Load the raw document of each revision
//! 2. Parse both revisions (in parallel)
//! 3. Index the public surface of each and classify
//! 4. Hand back an owned, serializable report
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use serde::Serialize;
use serde_json::Value;
use tracing::{Span, debug, info, instrument};

use crate::{
    application::{ApplicationError, Revision, ports::DocumentSource},
    domain::{
        AccessLevel, ClassificationResult, SourceFile, Symbol, build_index, diff, parse_document,
    },
    error::{ApiDiffError, ApiDiffResult},
};

/// One classified symbol, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub name: Option<String>,
    pub usr: Option<String>,
    pub kind: String,
    pub type_name: Option<String>,
    pub access_level: AccessLevel,
}

impl ReportEntry {
    /// Name to show, `n/a` when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("n/a")
    }

    /// USR to show, `n/a` when absent.
    pub fn display_usr(&self) -> &str {
        self.usr.as_deref().unwrap_or("n/a")
    }
}

impl From<&Symbol> for ReportEntry {
    fn from(symbol: &Symbol) -> Self {
        Self {
            name: symbol.name().map(String::from),
            usr: symbol.usr().map(String::from),
            kind: symbol.kind().to_string(),
            type_name: symbol.type_name().map(String::from),
            access_level: symbol.access_level(),
        }
    }
}

/// Partition sizes of a [`DiffReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub stable: usize,
    pub missing_or_changed: usize,
    pub new: usize,
}

/// Owned copy of a [`ClassificationResult`], handed to renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    pub summary: DiffSummary,
    pub stable: Vec<ReportEntry>,
    pub missing_or_changed: Vec<ReportEntry>,
    pub new: Vec<ReportEntry>,
}

impl DiffReport {
    pub fn is_unchanged(&self) -> bool {
        self.missing_or_changed.is_empty() && self.new.is_empty()
    }
}

impl From<&ClassificationResult<'_>> for DiffReport {
    fn from(result: &ClassificationResult<'_>) -> Self {
        fn entries(seq: &[&Symbol]) -> Vec<ReportEntry> {
            seq.iter().map(|s| ReportEntry::from(*s)).collect()
        }

        Self {
            summary: DiffSummary {
                stable: result.stable.len(),
                missing_or_changed: result.missing_or_changed.len(),
                new: result.new.len(),
            },
            stable: entries(&result.stable),
            missing_or_changed: entries(&result.missing_or_changed),
            new: entries(&result.new),
        }
    }
}

/// Main diff service.
///
/// Orchestrates loading, parsing, indexing, and classification.
pub struct ApiDiffService {
    source: Box<dyn DocumentSource>,
}

impl ApiDiffService {
    /// Create a new diff service reading from `source`.
    pub fn new(source: Box<dyn DocumentSource>) -> Self {
        Self { source }
    }

    /// Load and parse one revision.
    ///
    /// A shape error is attributed to `revision` so the caller can tell which
    /// dump is at fault.
    #[instrument(skip(self), fields(origin = %self.source.describe(revision)))]
    pub fn load_revision(&self, revision: Revision) -> ApiDiffResult<Vec<SourceFile>> {
        let raw = self.source.load(revision)?;
        parse_revision(revision, &raw)
    }

    /// Full symbol forest of one revision, for listing.
    pub fn tree(&self, revision: Revision) -> ApiDiffResult<Vec<SourceFile>> {
        self.load_revision(revision)
    }

    /// Diff the public API surface of the old revision against the new one.
    #[instrument(
        skip_all,
        fields(
            old = %self.source.describe(Revision::Old),
            new = %self.source.describe(Revision::New)
        )
    )]
    pub fn diff(&self) -> ApiDiffResult<DiffReport> {
        let old_raw = self.source.load(Revision::Old)?;
        let new_raw = self.source.load(Revision::New)?;

        let (old_files, new_files) = parse_both(&old_raw, &new_raw)?;

        let old_index = build_index(&old_files);
        let new_index = build_index(&new_files);
        debug!(
            old_public = old_index.len(),
            new_public = new_index.len(),
            "Public indexes built"
        );

        let report = DiffReport::from(&diff(&old_index, &new_index));
        info!(
            stable = report.summary.stable,
            missing_or_changed = report.summary.missing_or_changed,
            new = report.summary.new,
            "Diff completed"
        );

        Ok(report)
    }
}

// -------------------------------------------------------------------------
// Internal Helpers
// -------------------------------------------------------------------------

fn parse_revision(revision: Revision, raw: &Value) -> ApiDiffResult<Vec<SourceFile>> {
    let files = parse_document(raw)
        .map_err(|source| ApplicationError::RevisionParseFailed { revision, source })?;

    debug!(
        %revision,
        files = files.len(),
        symbols = files.iter().map(SourceFile::symbol_count).sum::<usize>(),
        "Revision parsed"
    );
    Ok(files)
}

/// Parse both revisions on two scoped threads; both finish before return.
///
/// When both fail, the old revision's error is reported.
fn parse_both(old: &Value, new: &Value) -> ApiDiffResult<(Vec<SourceFile>, Vec<SourceFile>)> {
    let span = Span::current();

    let (old_files, new_files) = std::thread::scope(|scope| {
        let old_handle = scope.spawn(|| span.in_scope(|| parse_revision(Revision::Old, old)));
        let new_files = parse_revision(Revision::New, new);

        let old_files = old_handle.join().unwrap_or_else(|_| {
            Err(ApiDiffError::Internal {
                message: "the old revision's parser thread panicked".into(),
            })
        });
        (old_files, new_files)
    });

    Ok((old_files?, new_files?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockDocumentSource;
    use crate::domain::value_objects::{ACCESSIBILITY_INTERNAL, ACCESSIBILITY_PUBLIC};
    use serde_json::json;

    fn dump(symbols: Value) -> Value {
        json!([{ "Sources/App/App.swift": { "key.substructure": symbols } }])
    }

    fn public(name: &str, usr: &str) -> Value {
        json!({ "key.name": name, "key.usr": usr, "key.accessibility": ACCESSIBILITY_PUBLIC })
    }

    fn service_with(old: Value, new: Value) -> ApiDiffService {
        let mut source = MockDocumentSource::new();
        source
            .expect_describe()
            .returning(|revision| format!("<{revision}>"));
        source.expect_load().returning(move |revision| match revision {
            Revision::Old => Ok(old.clone()),
            Revision::New => Ok(new.clone()),
        });
        ApiDiffService::new(Box::new(source))
    }

    #[test]
    fn diff_reports_all_three_partitions() {
        let service = service_with(
            dump(json!([public("foo", "A"), public("bar", "B")])),
            dump(json!([public("foo", "A"), public("baz", "C")])),
        );

        let report = service.diff().unwrap();

        assert_eq!(
            report.summary,
            DiffSummary {
                stable: 1,
                missing_or_changed: 1,
                new: 1
            }
        );
        assert_eq!(report.stable[0].display_name(), ".foo");
        assert_eq!(report.missing_or_changed[0].display_name(), ".bar");
        assert_eq!(report.new[0].display_name(), ".baz");
        assert_eq!(report.new[0].display_usr(), "C");
        assert!(!report.is_unchanged());
    }

    #[test]
    fn diff_of_identical_dumps_is_unchanged() {
        let doc = dump(json!([public("foo", "A"), public("bar", "B")]));
        let report = service_with(doc.clone(), doc).diff().unwrap();

        assert!(report.is_unchanged());
        assert_eq!(report.summary.stable, 2);
    }

    #[test]
    fn internal_symbols_do_not_count() {
        let internal = json!({
            "key.name": "helper",
            "key.usr": "H",
            "key.accessibility": ACCESSIBILITY_INTERNAL
        });
        let report = service_with(dump(json!([internal])), dump(json!([])))
            .diff()
            .unwrap();

        assert_eq!(report, DiffReport::default());
    }

    #[test]
    fn malformed_new_revision_is_named() {
        let service = service_with(dump(json!([])), json!({ "not": "an array" }));

        let err = service.diff().unwrap_err();

        match &err {
            ApiDiffError::Application(app) => assert_eq!(app.revision(), Some(Revision::New)),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("new revision"));
    }

    #[test]
    fn old_revision_error_wins_when_both_fail() {
        let service = service_with(json!(1), json!(2));

        let err = service.diff().unwrap_err();

        assert!(matches!(
            err,
            ApiDiffError::Application(ApplicationError::RevisionParseFailed {
                revision: Revision::Old,
                ..
            })
        ));
    }

    #[test]
    fn load_failure_is_propagated_unchanged() {
        let mut source = MockDocumentSource::new();
        source.expect_describe().returning(|_| "old.json".into());
        source.expect_load().returning(|revision| {
            Err(ApplicationError::DocumentUnavailable {
                revision,
                path: "old.json".into(),
                reason: "No such file or directory".into(),
            }
            .into())
        });
        let service = ApiDiffService::new(Box::new(source));

        assert!(matches!(
            service.diff(),
            Err(ApiDiffError::Application(
                ApplicationError::DocumentUnavailable {
                    revision: Revision::Old,
                    ..
                }
            ))
        ));
    }

    #[test]
    fn load_revision_parses_one_side_only() {
        let mut source = MockDocumentSource::new();
        source.expect_describe().returning(|_| "<memory>".into());
        source
            .expect_load()
            .withf(|revision| *revision == Revision::New)
            .times(1)
            .returning(|_| {
                Ok(json!([{ "A.swift": { "key.substructure": [{ "key.name": "A" }] } }]))
            });
        let service = ApiDiffService::new(Box::new(source));

        let files = service.tree(Revision::New).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].symbols()[0].name(), Some(".A"));
    }

    #[test]
    fn report_serializes_partitions_and_access_levels() {
        let service = service_with(dump(json!([public("foo", "A")])), dump(json!([])));
        let report = service.diff().unwrap();

        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["summary"]["missing_or_changed"], 1);
        assert_eq!(value["missing_or_changed"][0]["name"], ".foo");
        assert_eq!(value["missing_or_changed"][0]["access_level"], "public");
        assert!(value["new"].as_array().unwrap().is_empty());
    }
}
