//! Top-level document assembly.
//!
//! Takes an explicit request object (title, author, notes and the ordered
//! uploads), renders one section per item and serializes the whole thing
//! into an in-memory PDF buffer.

use crate::error::RenderError;
use crate::section::{Section, SectionBody, UploadItem, build_section};
use crate::writer::PdfWriter;
use log::info;

/// Everything needed to generate one document.
#[derive(Debug, Clone)]
pub struct DocRequest {
    pub title: String,
    pub author: String,
    pub notes: Option<String>,
    pub items: Vec<UploadItem>,
}

/// Builds one section per uploaded item, preserving input order.
pub fn build_sections(items: &[UploadItem]) -> Vec<Section> {
    items.iter().map(build_section).collect()
}

/// Assembles the full document and serializes it to a PDF byte buffer.
///
/// Per-item extraction failures degrade to placeholder sections and never
/// abort the call; the only fatal error is a failure to serialize the
/// finished document, in which case no partial output is returned.
pub fn assemble(request: &DocRequest) -> Result<Vec<u8>, RenderError> {
    let mut writer = PdfWriter::new(&request.title)?;
    writer.title_block(&request.title, &request.author);

    let sections = build_sections(&request.items);
    info!("Rendering {} sections", sections.len());

    for section in &sections {
        writer.heading(&section.heading);
        match &section.body {
            SectionBody::Lines(lines) => writer.code_lines(lines),
            SectionBody::Image(bytes) => writer.image(&section.heading, bytes),
        }
    }

    if let Some(notes) = request.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        writer.page_break();
        writer.heading("Notes");
        writer.paragraph(notes);
    }

    writer.attribution(&format!(
        "Generated by projdoc v{}",
        env!("CARGO_PKG_VERSION")
    ));

    writer.finish()
}
