//! Interactive Java notebook (`.ijnb`) documents.
//!
//! A notebook is a JSON object whose `cells` array holds code and markdown
//! cells. Only cells with `"cell_type": "code"` are touched: their `source`
//! is rewritten with [`iolift_scan::Rewriter`], and [`normalize_notebook`]
//! makes sure they carry a numeric `execution_count` and an `outputs` array.
//!
//! Documents are edited as [`serde_json::Value`] so unknown fields and key
//! order survive the round trip. Unchanged documents are never
//! re-serialized: callers get the original text back.

mod cell;
mod normalize;

use serde_json::{Map, Value};

pub use cell::rewrite_source;
pub use normalize::normalize_cell;

/// Errors produced while reading or writing a notebook document.
#[derive(Debug, thiserror::Error)]
pub enum NotebookError {
    #[error("JSON parse error: {0}")]
    Json(#[source] serde_json::Error),
    #[error("JSON serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Outcome of editing one notebook document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotebookEdit {
    /// `true` if any code cell was modified.
    pub changed: bool,
    /// The new document text, or the original text when nothing changed.
    pub output: String,
}

/// A parsed notebook document.
#[derive(Clone, Debug)]
pub struct Notebook {
    root: Value,
}

impl Notebook {
    pub fn parse(text: &str) -> Result<Self, NotebookError> {
        let root = serde_json::from_str(text).map_err(NotebookError::Json)?;
        Ok(Notebook { root })
    }

    /// Mutable access to every code cell, in document order.
    ///
    /// Documents without a `cells` array, and cells that are not objects,
    /// yield nothing.
    pub fn code_cells_mut(&mut self) -> impl Iterator<Item = &mut Map<String, Value>> {
        self.root
            .get_mut("cells")
            .and_then(Value::as_array_mut)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object_mut)
            .filter(|cell| cell.get("cell_type").and_then(Value::as_str) == Some("code"))
    }

    /// Serialize as 2-space indented JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, NotebookError> {
        let mut text = serde_json::to_string_pretty(&self.root).map_err(NotebookError::Serialize)?;
        text.push('\n');
        Ok(text)
    }

    /// Apply `edit` to every code cell and collect the outcome.
    fn edit_cells(
        mut self,
        original: &str,
        mut edit: impl FnMut(&mut Map<String, Value>) -> bool,
    ) -> Result<NotebookEdit, NotebookError> {
        let mut changed = false;
        for cell in self.code_cells_mut() {
            changed |= edit(cell);
        }
        if !changed {
            return Ok(NotebookEdit {
                changed,
                output: original.to_owned(),
            });
        }
        Ok(NotebookEdit {
            changed,
            output: self.to_json()?,
        })
    }
}

/// Rewrite `System.out.println(` to `IO.println(` in every code cell.
pub fn rewrite_notebook(text: &str) -> Result<NotebookEdit, NotebookError> {
    Notebook::parse(text)?.edit_cells(text, |cell| {
        cell.get_mut("source").is_some_and(rewrite_source)
    })
}

/// Give every code cell a numeric `execution_count` and an `outputs` array.
pub fn normalize_notebook(text: &str) -> Result<NotebookEdit, NotebookError> {
    Notebook::parse(text)?.edit_cells(text, normalize_cell)
}
