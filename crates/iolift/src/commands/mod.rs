//! Command handlers for the iolift CLI.
//!
//! Each submodule implements one command. The per-file pipeline they share
//! (read, transform, diff or write) and the batch loop around it live here
//! in the module root.

use std::fs;
use std::path::Path;

use iolift_notebook::NotebookEdit;
use iolift_scan::{Rewrite, MAX_SOURCE_LEN};

use crate::config::RunConfig;
use crate::discovery::{discover, SourceKind};
use crate::report::{BatchReport, LineDiff};
use crate::{UnitError, UnitFailure};

mod notebook;
mod regions;
mod rewrite;

pub use notebook::{normalize_notebooks, rewrite_notebooks};
pub use regions::{region_listing, render_regions};
pub use rewrite::rewrite_java;

/// Result of processing a single file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    /// The transform left the text as it was.
    Unchanged,
    /// The new text was written back.
    Rewritten,
    /// The text changed but the run does not write.
    WouldRewrite,
}

/// New text produced by a transform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    pub changed: bool,
    pub output: String,
}

impl From<Rewrite> for Edit {
    fn from(rewrite: Rewrite) -> Self {
        Edit {
            changed: rewrite.changed,
            output: rewrite.output,
        }
    }
}

impl From<NotebookEdit> for Edit {
    fn from(edit: NotebookEdit) -> Self {
        Edit {
            changed: edit.changed,
            output: edit.output,
        }
    }
}

/// Read a source file as UTF-8 text.
pub(crate) fn read_source(path: &Path) -> Result<String, UnitError> {
    let bytes = fs::read(path).map_err(UnitError::Read)?;
    if bytes.len() > MAX_SOURCE_LEN {
        return Err(UnitError::TooLarge { len: bytes.len() });
    }
    String::from_utf8(bytes).map_err(|_| UnitError::InvalidUtf8)
}

/// Run `transform` over one file and apply the result as `config` says.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub(crate) fn process_file<F>(
    path: &Path,
    config: &RunConfig,
    transform: F,
) -> Result<FileOutcome, UnitError>
where
    F: FnOnce(&str) -> Result<Edit, UnitError>,
{
    let content = read_source(path)?;
    let edit = transform(&content)?;
    if !edit.changed {
        return Ok(FileOutcome::Unchanged);
    }

    if config.diff {
        print!("{}", LineDiff::new(path, &content, &edit.output));
    }
    if !config.writes() {
        return Ok(FileOutcome::WouldRewrite);
    }

    fs::write(path, &edit.output).map_err(UnitError::Write)?;
    tracing::debug!("written");
    Ok(FileOutcome::Rewritten)
}

/// Discover the files of `kind` under `target` and process each one.
///
/// Files for which `skip` returns `true` count as scanned but are never
/// read. Failures are collected into the report; they never stop the batch.
pub(crate) fn run_batch<S, F>(
    target: &str,
    kind: SourceKind,
    config: &RunConfig,
    skip: S,
    transform: F,
) -> BatchReport
where
    S: Fn(&Path) -> bool,
    F: Fn(&str) -> Result<Edit, UnitError>,
{
    let _span = tracing::info_span!("batch", root = target, kind = kind.extension()).entered();

    let found = discover(Path::new(target), kind, config.no_ignore);
    let mut report = BatchReport::new(target, kind, !config.writes());
    report.scanned = found.files.len();
    report.errors = found.errors;

    for path in found.files {
        if skip(&path) {
            tracing::debug!(path = %path.display(), "skipped");
            continue;
        }
        match process_file(&path, config, &transform) {
            Ok(FileOutcome::Unchanged) => {}
            Ok(FileOutcome::Rewritten | FileOutcome::WouldRewrite) => report.changed.push(path),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "file failed");
                report.errors.push(UnitFailure::new(path, error));
            }
        }
    }

    tracing::info!(
        scanned = report.scanned,
        changed = report.changed.len(),
        errors = report.errors.len(),
        "batch finished"
    );
    report
}
