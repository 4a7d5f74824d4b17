//! Per-unit errors.
//!
//! A unit is one target path, directory, or file. Its failure is recorded
//! against its path and never stops the rest of the batch.

use std::io;
use std::path::{Path, PathBuf};

use iolift_notebook::NotebookError;

/// Why a single unit could not be processed.
#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    #[error("path does not exist")]
    NotFound,
    #[error("not a .{expected} file")]
    WrongExtension { expected: &'static str },
    #[error("unsupported path type")]
    UnsupportedPath,
    #[error("readdir error: {0}")]
    ReadDir(#[source] io::Error),
    #[error("read error: {0}")]
    Read(#[source] io::Error),
    #[error("file contains invalid UTF-8 data")]
    InvalidUtf8,
    #[error("write error: {0}")]
    Write(#[source] io::Error),
    #[error("file too large ({len} bytes)")]
    TooLarge { len: usize },
    #[error(transparent)]
    Notebook(#[from] NotebookError),
}

/// A [`UnitError`] attached to the path it concerns.
#[derive(Debug, thiserror::Error)]
#[error("{}: {error}", .path.display())]
pub struct UnitFailure {
    pub path: PathBuf,
    #[source]
    pub error: UnitError,
}

impl UnitFailure {
    pub fn new(path: impl AsRef<Path>, error: UnitError) -> Self {
        UnitFailure {
            path: path.as_ref().to_path_buf(),
            error,
        }
    }
}
