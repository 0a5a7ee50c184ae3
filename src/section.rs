//! Per-item section construction.
//!
//! One section is produced for every uploaded item, in input order. An item
//! whose payload cannot be extracted degrades to a placeholder body instead
//! of failing the whole document.

use crate::classify::{Kind, classify};
use crate::notebook;
use crate::utils::normalize;
use log::{debug, warn};

/// Placeholder body for notebooks that fail to parse.
pub const UNREADABLE_NOTEBOOK: &str = "(notebook could not be parsed)";
/// Placeholder body for binary attachments.
pub const BINARY_OMITTED: &str = "(binary file omitted)";
/// Placeholder body for files with no renderable content.
pub const EMPTY_FILE: &str = "(empty file)";

/// One uploaded file: a name plus an opaque byte payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadItem {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadItem {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// A heading plus body block of the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub body: SectionBody,
}

/// Section content: text lines, or an image embedded from raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Lines(Vec<String>),
    Image(Vec<u8>),
}

/// Builds the document section for a single uploaded item.
pub fn build_section(item: &UploadItem) -> Section {
    let kind = classify(&item.name, &item.bytes);
    debug!("Classified {} as {:?}", item.name, kind);

    match kind {
        Kind::Image => Section {
            heading: format!("Screenshot: {}", item.name),
            body: SectionBody::Image(item.bytes.clone()),
        },
        Kind::Notebook => {
            let heading = format!("Notebook: {}", item.name);
            match notebook::extract(&item.bytes) {
                Ok(code) => Section {
                    heading,
                    body: text_body(&code),
                },
                Err(err) => {
                    warn!("Could not extract notebook {}: {}", item.name, err);
                    Section {
                        heading,
                        body: SectionBody::Lines(vec![UNREADABLE_NOTEBOOK.to_string()]),
                    }
                }
            }
        }
        Kind::OtherBinary => Section {
            heading: format!("{} File: {}", kind.label(), item.name),
            body: SectionBody::Lines(vec![BINARY_OMITTED.to_string()]),
        },
        Kind::SourceCode | Kind::SqlScript | Kind::Text => {
            // Lossy decode: invalid byte sequences are replaced, never fatal
            let text = String::from_utf8_lossy(&item.bytes);
            Section {
                heading: format!("{} File: {}", kind.label(), item.name),
                body: text_body(&text),
            }
        }
    }
}

fn text_body(text: &str) -> SectionBody {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return SectionBody::Lines(vec![EMPTY_FILE.to_string()]);
    }
    SectionBody::Lines(normalized.lines().map(str::to_string).collect())
}
