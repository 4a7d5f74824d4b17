//! The `regions` debug command: show how the scanner classifies a file.

use std::fmt::Write as _;
use std::path::Path;

use iolift_scan::regions;

use crate::UnitError;

use super::read_source;

/// Read `path` and render its region tokens.
pub fn region_listing(path: &Path) -> Result<String, UnitError> {
    let source = read_source(path)?;
    let tokens = render_regions(&source);
    Ok(format!("Regions for '{}':\n{tokens}", path.display()))
}

/// One line per region token: byte range, region name, and the text.
pub fn render_regions(source: &str) -> String {
    let mut out = String::new();
    let mut start = 0usize;
    for token in regions(source) {
        let end = start + token.len as usize;
        let text = source.get(start..end).unwrap_or_default();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "  {start}..{end} {:<13} {text:?}", token.region.name());
        start = end;
    }
    out
}
