//! The `rewrite` command: migrate `.java` files to `IO.println`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::RunConfig;
use crate::discovery::SourceKind;
use crate::helper::{ensure_helper, is_helper, HelperOutcome, HELPER_FILE_NAME};
use crate::report::BatchReport;
use crate::UnitFailure;

use super::{run_batch, Edit};

/// Rewrite every `.java` file under `target`.
///
/// Existing `IO.java` files are never rewritten. Every directory that ends
/// up with a changed file gets an `IO.java` helper if it has none.
pub fn rewrite_java(target: &str, config: &RunConfig) -> BatchReport {
    let mut report = run_batch(target, SourceKind::Java, config, is_helper, |source| {
        Ok(Edit::from(iolift_scan::rewrite(source)))
    });

    let dirs: BTreeSet<PathBuf> = report
        .changed
        .iter()
        .filter_map(|path| path.parent())
        .map(Path::to_path_buf)
        .collect();

    for dir in dirs {
        match ensure_helper(&dir, config.writes()) {
            Ok(HelperOutcome::Present) => {}
            Ok(HelperOutcome::Created(path) | HelperOutcome::WouldCreate(path)) => {
                report.helpers.push(path);
            }
            Err(error) => {
                tracing::warn!(dir = %dir.display(), %error, "helper failed");
                report
                    .errors
                    .push(UnitFailure::new(dir.join(HELPER_FILE_NAME), error));
            }
        }
    }
    report
}
