//! Target resolution and directory walking.
//!
//! A target is either a single file, which must carry the command's
//! extension, or a directory, which is walked recursively. Directory walks
//! skip [`IGNORED_DIRS`] and anything matched by an [`IGNORE_FILE`] at the
//! walk root. Unreadable directories become [`UnitFailure`]s; the walk
//! carries on with the rest of the tree.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{UnitError, UnitFailure};

/// Directory names never descended into.
pub const IGNORED_DIRS: &[&str] = &[".git", "node_modules", ".vscode", "out", "build", "target"];

/// Per-root ignore file. One pattern per line; `#` starts a comment.
pub const IGNORE_FILE: &str = ".ioliftignore";

/// The kind of file a command operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// `.java` source files.
    Java,
    /// `.ijnb` interactive Java notebooks.
    Notebook,
}

impl SourceKind {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            SourceKind::Java => "java",
            SourceKind::Notebook => "ijnb",
        }
    }

    pub fn matches(self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == self.extension())
    }
}

/// Files found under a target, plus the failures met on the way.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Matching files, sorted by path.
    pub files: Vec<PathBuf>,
    pub errors: Vec<UnitFailure>,
}

/// Resolve `target` into the files of `kind` it names.
pub fn discover(target: &Path, kind: SourceKind, no_ignore: bool) -> Discovery {
    let mut found = Discovery::default();

    if target.is_file() {
        if kind.matches(target) {
            found.files.push(target.to_path_buf());
        } else {
            let error = UnitError::WrongExtension {
                expected: kind.extension(),
            };
            found.errors.push(UnitFailure::new(target, error));
        }
    } else if target.is_dir() {
        let ignore = if no_ignore {
            IgnorePatterns::default()
        } else {
            IgnorePatterns::load(target)
        };
        walk(target, target, kind, &ignore, &mut found);
        found.files.sort();
        found.errors.sort_by(|a, b| a.path.cmp(&b.path));
    } else if target.exists() {
        found
            .errors
            .push(UnitFailure::new(target, UnitError::UnsupportedPath));
    } else {
        found.errors.push(UnitFailure::new(target, UnitError::NotFound));
    }

    tracing::debug!(
        target_path = %target.display(),
        files = found.files.len(),
        errors = found.errors.len(),
        "discovered"
    );
    found
}

fn walk(dir: &Path, root: &Path, kind: SourceKind, ignore: &IgnorePatterns, found: &mut Discovery) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            found.errors.push(UnitFailure::new(dir, UnitError::ReadDir(e)));
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                found.errors.push(UnitFailure::new(dir, UnitError::ReadDir(e)));
                continue;
            }
        };
        let path = entry.path();
        // Symlinks are neither followed nor processed.
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if ignore.is_ignored(&path, root) {
            continue;
        }

        if file_type.is_dir() {
            let skipped = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| IGNORED_DIRS.contains(&name));
            if !skipped {
                walk(&path, root, kind, ignore, found);
            }
        } else if file_type.is_file() && kind.matches(&path) {
            found.files.push(path);
        }
    }
}

/// Patterns read from an [`IGNORE_FILE`].
///
/// - `**` matches across directories: `gen/**`, `**/Generated.java`
/// - `*` matches within one path segment: `*.java` only at the root
/// - anything else matches a root-relative path, a directory prefix, or a
///   file name anywhere
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IgnorePatterns {
    patterns: Vec<String>,
}

impl IgnorePatterns {
    /// Read `root/.ioliftignore`. A missing or unreadable file yields no
    /// patterns.
    pub fn load(root: &Path) -> Self {
        fs::read_to_string(root.join(IGNORE_FILE))
            .map(|text| Self::parse(&text))
            .unwrap_or_default()
    }

    pub fn parse(text: &str) -> Self {
        let patterns = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();
        IgnorePatterns { patterns }
    }

    /// Whether `path`, found while walking `root`, is ignored.
    pub fn is_ignored(&self, path: &Path, root: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            return false;
        };
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        self.patterns
            .iter()
            .any(|pattern| pattern_matches(pattern, &relative, name))
    }
}

fn pattern_matches(pattern: &str, relative: &str, name: &str) -> bool {
    if let Some((prefix, suffix)) = pattern.split_once("**") {
        let prefix = prefix.trim_end_matches('/');
        let suffix = suffix.trim_start_matches('/');
        let rest = if prefix.is_empty() {
            Some(relative)
        } else if relative == prefix {
            Some("")
        } else {
            relative
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('/'))
        };
        // The suffix must start at a segment boundary.
        rest.is_some_and(|rest| {
            suffix.is_empty() || rest == suffix || rest.ends_with(&format!("/{suffix}"))
        })
    } else if let Some((prefix, suffix)) = pattern.split_once('*') {
        relative.len() >= prefix.len() + suffix.len()
            && relative.starts_with(prefix)
            && relative.ends_with(suffix)
            && !relative[prefix.len()..relative.len() - suffix.len()].contains('/')
    } else {
        relative == pattern
            || relative
                .strip_prefix(pattern)
                .is_some_and(|rest| rest.starts_with('/'))
            || name == pattern
    }
}
