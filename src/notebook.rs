//! Jupyter notebook code extraction.
//!
//! Notebooks arrive as JSON with a top-level `cells` array. Code-cell
//! sources are concatenated in cell order; markdown and raw cells are
//! skipped.

use crate::error::NotebookError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Notebook {
    cells: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
struct Cell {
    cell_type: String,
    #[serde(default)]
    source: Source,
}

/// Cell source is a list of lines in nbformat 4, but single-string sources
/// also appear in the wild.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Source {
    Lines(Vec<String>),
    Text(String),
}

impl Default for Source {
    fn default() -> Self {
        Source::Lines(Vec::new())
    }
}

impl Source {
    fn into_text(self) -> String {
        match self {
            Source::Lines(lines) => lines.concat(),
            Source::Text(text) => text,
        }
    }
}

/// Extracts the concatenated code-cell source from a notebook payload.
///
/// Fails with [`NotebookError`] if the payload is not valid notebook JSON;
/// the section builder turns that into a placeholder body rather than
/// aborting the document.
pub fn extract(bytes: &[u8]) -> Result<String, NotebookError> {
    let notebook: Notebook = serde_json::from_slice(bytes)?;

    let code: Vec<String> = notebook
        .cells
        .into_iter()
        .filter(|cell| cell.cell_type == "code")
        .map(|cell| cell.source.into_text())
        .collect();

    Ok(code.join("\n\n"))
}
