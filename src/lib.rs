//! # projdoc Library
//!
//! This crate assembles a set of project files (source code, SQL scripts,
//! Jupyter notebooks, screenshots, arbitrary attachments) plus free-text
//! notes into a single PDF document:
//!
//! - Each uploaded file is classified by extension and content hints
//! - One document section is produced per file, in input order
//! - The finished document is serialized into an in-memory byte buffer
//!
//! A file whose content cannot be extracted degrades to a placeholder
//! section; only a failure to serialize the finished document is fatal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use projdoc::{DocRequest, UploadItem, assemble};
//!
//! fn main() -> anyhow::Result<()> {
//!     let request = DocRequest {
//!         title: "My Project".into(),
//!         author: "Me".into(),
//!         notes: Some("First draft.".into()),
//!         items: vec![UploadItem::new("main.py", b"import os\n".to_vec())],
//!     };
//!
//!     let pdf = assemble(&request)?;
//!     std::fs::write("my_project.pdf", pdf)?;
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod cli;
pub mod document;
pub mod error;
pub mod filewalker;
pub mod notebook;
pub mod section;
pub mod utils;
pub mod writer;

pub use classify::{Kind, classify};
pub use cli::Config;
pub use document::{DocRequest, assemble, build_sections};
pub use error::{NotebookError, RenderError};
pub use filewalker::collect_items;
pub use section::{Section, SectionBody, UploadItem, build_section};

use anyhow::{Context, Result};
use log::info;

/// Collects the configured input files, assembles the document and writes
/// the PDF to the configured output path.
pub async fn run_projdoc(config: Config) -> Result<()> {
    let items = collect_items(&config.paths, config.fail_fast)?;
    info!("Collected {} input files", items.len());

    let request = DocRequest {
        title: config.title,
        author: config.author,
        notes: config.notes,
        items,
    };

    let pdf = assemble(&request).context("Document generation failed")?;

    tokio::fs::write(&config.output_path, &pdf)
        .await
        .with_context(|| format!("Failed to write output: {}", config.output_path.display()))?;

    info!("Wrote {} ({} bytes)", config.output_path.display(), pdf.len());
    Ok(())
}
