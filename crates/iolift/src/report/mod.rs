//! Batch summaries and line diffs.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::discovery::SourceKind;
use crate::helper::HELPER_FILE_NAME;
use crate::UnitFailure;

/// What one batch command did to one target.
#[derive(Debug)]
pub struct BatchReport {
    /// The target as given on the command line.
    pub target: String,
    pub kind: SourceKind,
    /// Nothing was written (`--check` or `--diff`).
    pub dry_run: bool,
    /// Number of matching files found, helpers included.
    pub scanned: usize,
    /// Files that changed (or would change), in processing order.
    pub changed: Vec<PathBuf>,
    /// Helper files created (or that would be created).
    pub helpers: Vec<PathBuf>,
    pub errors: Vec<UnitFailure>,
}

impl BatchReport {
    pub fn new(target: impl Into<String>, kind: SourceKind, dry_run: bool) -> Self {
        BatchReport {
            target: target.into(),
            kind,
            dry_run,
            scanned: 0,
            changed: Vec::new(),
            helpers: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Whether any unit failed. A failed batch exits with status 1.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Target: {}", self.target)?;
        writeln!(f, "Scanned {} .{} file(s)", self.scanned, self.kind.extension())?;
        let verb = if self.dry_run {
            "would be modified (dry-run)"
        } else {
            "modified"
        };
        writeln!(f, "{} file(s) {verb}.", self.changed.len())?;

        if !self.helpers.is_empty() {
            let count = self.helpers.len();
            let noun = if count == 1 { "directory" } else { "directories" };
            let verb = if self.dry_run { "Would create" } else { "Created" };
            writeln!(f, "\n{verb} {HELPER_FILE_NAME} in {count} {noun}:")?;
            for helper in &self.helpers {
                if self.dry_run {
                    writeln!(f, "- {} (would create)", helper.display())?;
                } else {
                    writeln!(f, "- {}", helper.display())?;
                }
            }
        }

        if !self.errors.is_empty() {
            writeln!(f, "\nErrors ({}):", self.errors.len())?;
            for failure in &self.errors {
                writeln!(f, "- {failure}")?;
            }
        }

        if !self.changed.is_empty() {
            writeln!(f, "\n{}:", if self.dry_run { "Would change" } else { "Changed" })?;
            for path in &self.changed {
                writeln!(f, "- {}", path.display())?;
            }
        }
        Ok(())
    }
}

/// A line-by-line diff between a file and its rewritten text.
///
/// Lines are compared by index, which is exact for Java rewrites: they
/// never add or remove lines. Notebooks are re-serialized as pretty JSON, so
/// a compact or differently indented notebook shifts its lines and the diff
/// is only approximate. Each changed region is shown with up to two lines
/// of context on either side.
pub struct LineDiff<'a> {
    path: &'a Path,
    original: &'a str,
    updated: &'a str,
}

impl<'a> LineDiff<'a> {
    pub fn new(path: &'a Path, original: &'a str, updated: &'a str) -> Self {
        LineDiff {
            path,
            original,
            updated,
        }
    }
}

impl fmt::Display for LineDiff<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        writeln!(f, "--- {path}")?;
        writeln!(f, "+++ {path}")?;

        let before: Vec<&str> = self.original.lines().collect();
        let after: Vec<&str> = self.updated.lines().collect();
        let total = before.len().max(after.len());

        let mut i = 0;
        while i < total {
            if before.get(i) == after.get(i) {
                i += 1;
                continue;
            }

            let start = i.saturating_sub(2);
            let mut end = (i + 3).min(total);
            // Merge changes whose context would overlap this hunk.
            while let Some(next) =
                (end..(end + 2).min(total)).find(|&k| before.get(k) != after.get(k))
            {
                end = (next + 3).min(total);
            }

            let span = end - start;
            writeln!(f, "@@ -{},{span} +{},{span} @@", start + 1, start + 1)?;
            for j in start..end {
                match (before.get(j), after.get(j)) {
                    (Some(old), Some(new)) if old == new => writeln!(f, " {old}")?,
                    (Some(old), Some(new)) => {
                        writeln!(f, "-{old}")?;
                        writeln!(f, "+{new}")?;
                    }
                    (Some(old), None) => writeln!(f, "-{old}")?,
                    (None, Some(new)) => writeln!(f, "+{new}")?,
                    (None, None) => {}
                }
            }
            i = end;
        }
        Ok(())
    }
}
