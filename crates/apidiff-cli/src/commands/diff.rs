//! `apidiff diff`: classify the public API of two dumps and render the report.

use tracing::{info, instrument};

use apidiff_adapters::FileDocumentSource;
use apidiff_core::prelude::{ApiDiffService, DiffReport, ReportEntry};

use crate::{
    cli::{DiffArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Which partition a line belongs to; picks the output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Header,
    Stable,
    Missing,
    New,
    Summary,
}

/// What the human and plain renderers include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RenderOptions {
    show_usr: bool,
    show_stable: bool,
}

impl RenderOptions {
    fn resolve(args: &DiffArgs, config: &AppConfig) -> Self {
        Self {
            show_usr: config.diff.show_usr && !args.no_usr,
            show_stable: config.diff.show_stable && !args.hide_stable,
        }
    }
}

#[instrument(skip_all, fields(old = %args.old.display(), new = %args.new.display()))]
pub fn execute(args: DiffArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = RenderOptions::resolve(&args, &config);

    let source = FileDocumentSource::new(&args.old, &args.new)?;
    let report = ApiDiffService::new(Box::new(source)).diff()?;
    info!(
        unchanged = report.is_unchanged(),
        format = ?output.format(),
        "Rendering report"
    );

    if output.format() == OutputFormat::Json {
        output.json(&report)?;
        return Ok(());
    }

    for (tone, line) in report_lines(&report, options) {
        match tone {
            Tone::Header => output.header(&line)?,
            Tone::Stable => output.success(&line)?,
            Tone::Missing => output.warning(&line)?,
            Tone::New => output.info(&line)?,
            Tone::Summary => output.print(&line)?,
        }
    }
    Ok(())
}

// ── rendering ─────────────────────────────────────────────────────────────────

fn report_lines(report: &DiffReport, options: RenderOptions) -> Vec<(Tone, String)> {
    let mut lines = Vec::new();

    if options.show_stable {
        section(&mut lines, "Stable", Tone::Stable, &report.stable, options);
    }
    section(
        &mut lines,
        "Missing or changed",
        Tone::Missing,
        &report.missing_or_changed,
        options,
    );
    section(&mut lines, "New", Tone::New, &report.new, options);

    let summary = report.summary;
    lines.push((
        Tone::Summary,
        format!(
            "{} stable, {} missing or changed, {} new",
            summary.stable, summary.missing_or_changed, summary.new
        ),
    ));
    lines
}

fn section(
    lines: &mut Vec<(Tone, String)>,
    title: &str,
    tone: Tone,
    entries: &[ReportEntry],
    options: RenderOptions,
) {
    lines.push((Tone::Header, format!("{title} ({})", entries.len())));
    lines.extend(entries.iter().map(|e| (tone, entry_line(e, options.show_usr))));
}

/// `name`, or `name usr` when USRs are shown; absent values print as `n/a`.
fn entry_line(entry: &ReportEntry, show_usr: bool) -> String {
    if show_usr {
        format!("{} {}", entry.display_name(), entry.display_usr())
    } else {
        entry.display_name().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::GlobalArgs;
    use crate::error::CliError;
    use apidiff_adapters::MemoryDocumentSource;
    use tempfile::TempDir;

    const ALL: RenderOptions = RenderOptions {
        show_usr: true,
        show_stable: true,
    };

    fn report() -> DiffReport {
        let old = r#"[{"A.swift": {"key.substructure": [
            {"key.name": "foo", "key.usr": "A", "key.accessibility": "source.lang.swift.accessibility.public"},
            {"key.name": "bar", "key.usr": "B", "key.accessibility": "source.lang.swift.accessibility.public"}
        ]}}]"#;
        let new = r#"[{"A.swift": {"key.substructure": [
            {"key.name": "foo", "key.usr": "A", "key.accessibility": "source.lang.swift.accessibility.public"},
            {"key.name": "baz", "key.usr": "C", "key.accessibility": "source.lang.swift.accessibility.public"}
        ]}}]"#;
        let source = MemoryDocumentSource::from_strs(old, new).unwrap();
        ApiDiffService::new(Box::new(source)).diff().unwrap()
    }

    fn entry(name: Option<&str>, usr: Option<&str>) -> ReportEntry {
        ReportEntry {
            name: name.map(String::from),
            usr: usr.map(String::from),
            kind: String::new(),
            type_name: None,
            access_level: Default::default(),
        }
    }

    #[test]
    fn sections_follow_partitions() {
        let lines = report_lines(&report(), ALL);

        assert_eq!(
            lines,
            vec![
                (Tone::Header, "Stable (1)".to_string()),
                (Tone::Stable, ".foo A".to_string()),
                (Tone::Header, "Missing or changed (1)".to_string()),
                (Tone::Missing, ".bar B".to_string()),
                (Tone::Header, "New (1)".to_string()),
                (Tone::New, ".baz C".to_string()),
                (Tone::Summary, "1 stable, 1 missing or changed, 1 new".to_string()),
            ]
        );
    }

    #[test]
    fn hidden_stable_section_keeps_its_count() {
        let options = RenderOptions {
            show_stable: false,
            ..ALL
        };
        let lines = report_lines(&report(), options);

        assert!(lines.iter().all(|(tone, _)| *tone != Tone::Stable));
        assert_eq!(
            lines.last().map(|(_, l)| l.as_str()),
            Some("1 stable, 1 missing or changed, 1 new")
        );
    }

    #[test]
    fn absent_name_and_usr_print_as_na() {
        assert_eq!(entry_line(&entry(None, None), true), "n/a n/a");
        assert_eq!(entry_line(&entry(Some(".Foo"), None), true), ".Foo n/a");
        assert_eq!(entry_line(&entry(Some(".Foo"), Some("s:3Foo")), false), ".Foo");
    }

    #[test]
    fn flags_narrow_config() {
        let config = AppConfig::default();
        let args = DiffArgs {
            old: "a.json".into(),
            new: "b.json".into(),
            hide_stable: true,
            no_usr: false,
        };
        assert_eq!(
            RenderOptions::resolve(&args, &config),
            RenderOptions {
                show_usr: true,
                show_stable: false
            }
        );

        let mut quiet_config = AppConfig::default();
        quiet_config.diff.show_usr = false;
        let args = DiffArgs {
            hide_stable: false,
            ..args
        };
        assert!(!RenderOptions::resolve(&args, &quiet_config).show_usr);
    }

    fn quiet_output(config: &AppConfig) -> OutputManager {
        let global = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&global, config)
    }

    #[test]
    fn execute_reads_both_dumps_from_disk() {
        let dir = TempDir::new().unwrap();
        let old = dir.path().join("old.json");
        let new = dir.path().join("new.json");
        std::fs::write(&old, r#"[{"A.swift": {"key.substructure": [{"key.name": "foo", "key.usr": "A"}]}}]"#).unwrap();
        std::fs::write(&new, "[]").unwrap();

        let config = AppConfig::default();
        let args = DiffArgs {
            old,
            new,
            hide_stable: false,
            no_usr: false,
        };
        assert!(execute(args, config.clone(), quiet_output(&config)).is_ok());
    }

    #[test]
    fn execute_surfaces_missing_dump() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::default();
        let args = DiffArgs {
            old: dir.path().join("absent.json"),
            new: dir.path().join("absent-too.json"),
            hide_stable: false,
            no_usr: false,
        };
        assert!(matches!(
            execute(args, config.clone(), quiet_output(&config)),
            Err(CliError::Core(_))
        ));
    }
}
