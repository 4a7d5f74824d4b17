//! Code-cell `source` rewriting.

use iolift_scan::Rewriter;
use serde_json::Value;

/// Rewrite a code cell's `source` in place. Returns `true` if it changed.
///
/// A string source is rewritten as one text. An array source is rewritten
/// element by element, keeping the element boundaries; the region state
/// carries from one element into the next so a comment or text block that
/// spans several lines is still recognized. Non-string elements and any
/// other source shape are left alone.
pub fn rewrite_source(source: &mut Value) -> bool {
    let mut rewriter = Rewriter::default();
    match source {
        Value::String(text) => rewrite_text(&mut rewriter, text),
        Value::Array(lines) => {
            let mut changed = false;
            for line in lines.iter_mut() {
                if let Value::String(text) = line {
                    changed |= rewrite_text(&mut rewriter, text);
                }
            }
            changed
        }
        _ => false,
    }
}

fn rewrite_text(rewriter: &mut Rewriter, text: &mut String) -> bool {
    let result = rewriter.rewrite_chunk(text);
    if result.changed {
        *text = result.output;
    }
    result.changed
}
