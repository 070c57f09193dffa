//! Dump files on disk, with `-` meaning standard input.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, instrument};

use apidiff_core::{
    application::{ApplicationError, Revision, ports::DocumentSource},
    error::{ApiDiffError, ApiDiffResult},
};

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Production document source reading SourceKitten dumps from disk.
#[derive(Debug, Clone)]
pub struct FileDocumentSource {
    old: PathBuf,
    new: PathBuf,
}

impl FileDocumentSource {
    /// Create a source for the two dump paths.
    ///
    /// At most one of them may be [`STDIN_PATH`].
    pub fn new(old: impl Into<PathBuf>, new: impl Into<PathBuf>) -> ApiDiffResult<Self> {
        let (old, new) = (old.into(), new.into());
        if is_stdin(&old) && is_stdin(&new) {
            return Err(ApplicationError::StdinAlreadyUsed.into());
        }
        Ok(Self { old, new })
    }

    /// Source for a single dump, used for both revisions.
    pub fn single(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            old: path.clone(),
            new: path,
        }
    }

    pub fn path(&self, revision: Revision) -> &Path {
        match revision {
            Revision::Old => &self.old,
            Revision::New => &self.new,
        }
    }
}

impl DocumentSource for FileDocumentSource {
    #[instrument(skip(self), fields(path = %self.describe(revision)))]
    fn load(&self, revision: Revision) -> ApiDiffResult<Value> {
        let path = self.path(revision);

        if is_stdin(path) {
            debug!("Reading dump from stdin");
            read_json(io::stdin().lock(), revision, path)
        } else {
            debug!("Reading dump from file");
            let file = File::open(path).map_err(|e| unavailable(revision, path, &e))?;
            read_json(BufReader::new(file), revision, path)
        }
    }

    fn describe(&self, revision: Revision) -> String {
        let path = self.path(revision);
        if is_stdin(path) {
            "<stdin>".into()
        } else {
            path.display().to_string()
        }
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

// Shared by stdin and files.
fn read_json(reader: impl Read, revision: Revision, path: &Path) -> ApiDiffResult<Value> {
    serde_json::from_reader(reader).map_err(|e| map_json_error(revision, path, e))
}

fn unavailable(revision: Revision, path: &Path, e: &io::Error) -> ApiDiffError {
    ApplicationError::DocumentUnavailable {
        revision,
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

fn map_json_error(revision: Revision, path: &Path, e: serde_json::Error) -> ApiDiffError {
    if e.is_io() {
        return ApplicationError::DocumentUnavailable {
            revision,
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into();
    }
    ApplicationError::InvalidJson {
        revision,
        reason: e.to_string(),
    }
    .into()
}
