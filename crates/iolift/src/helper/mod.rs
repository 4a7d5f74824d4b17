//! The companion `IO.java` helper.
//!
//! Rewritten code calls `IO.println(...)`. Until the platform's own `IO`
//! class is available, each directory holding a rewritten file gets a small
//! package-less helper that forwards to `System.out`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::UnitError;

/// File name of the helper; files with this name are never rewritten.
pub const HELPER_FILE_NAME: &str = "IO.java";

/// Contents of a freshly created helper.
pub const HELPER_SOURCE: &str = "\
public final class IO {
    private IO() {}
    public static void println() { System.out.println(); }
    public static void println(Object o) { System.out.println(String.valueOf(o)); }
}
";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HelperOutcome {
    /// A helper already exists; nothing was done.
    Present,
    /// The helper was written.
    Created(PathBuf),
    /// Dry run: the helper would have been written.
    WouldCreate(PathBuf),
}

pub fn is_helper(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == HELPER_FILE_NAME)
}

/// Make sure `dir` holds a helper, writing one only if `write` is set.
pub fn ensure_helper(dir: &Path, write: bool) -> Result<HelperOutcome, UnitError> {
    let path = dir.join(HELPER_FILE_NAME);
    if path.exists() {
        return Ok(HelperOutcome::Present);
    }
    if !write {
        return Ok(HelperOutcome::WouldCreate(path));
    }
    fs::write(&path, HELPER_SOURCE).map_err(UnitError::Write)?;
    tracing::debug!(path = %path.display(), "created helper");
    Ok(HelperOutcome::Created(path))
}
