//! The `notebook` and `normalize` commands over `.ijnb` files.

use iolift_notebook::{normalize_notebook, rewrite_notebook};

use crate::config::RunConfig;
use crate::discovery::SourceKind;
use crate::report::BatchReport;

use super::{run_batch, Edit};

/// Rewrite `System.out.println(` in the code cells of every notebook under
/// `target`.
pub fn rewrite_notebooks(target: &str, config: &RunConfig) -> BatchReport {
    run_batch(target, SourceKind::Notebook, config, |_| false, |text| {
        Ok(Edit::from(rewrite_notebook(text)?))
    })
}

/// Give every code cell of every notebook under `target` a numeric
/// `execution_count` and an `outputs` array.
pub fn normalize_notebooks(target: &str, config: &RunConfig) -> BatchReport {
    run_batch(target, SourceKind::Notebook, config, |_| false, |text| {
        Ok(Edit::from(normalize_notebook(text)?))
    })
}
