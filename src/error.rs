//! Error types for projdoc.
//!
//! Per-item extraction failures are recovered by the section builder and
//! never abort a generation; only output serialization is fatal.

use thiserror::Error;

/// The payload of an `.ipynb` upload could not be interpreted as a notebook.
///
/// Recovered locally: the section builder substitutes a placeholder body.
#[derive(Debug, Error)]
#[error("not a valid notebook: {0}")]
pub struct NotebookError(#[from] serde_json::Error);

/// The assembled document could not be serialized.
///
/// This is the only fatal error of a generation; no partial document is
/// returned when it occurs.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not serialize document: {0}")]
    Pdf(String),
}
