//! Upload classification.
//!
//! Decides how each uploaded file will be rendered in the output document.
//! Extensions take precedence where they are unambiguous (images, notebooks);
//! everything else is sniffed line by line for keyword hints. SQL hints are
//! checked before source-code hints, so a file containing both `SELECT` and
//! `def ` counts as a SQL script.

use content_inspector::{ContentType, inspect};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ffi::OsStr;
use std::path::Path;

/// Extensions that are always treated as embeddable images, whatever the
/// payload contains.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tiff"];

static SQL_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bselect\b|\bcreate\s+table\b").unwrap());

static CODE_HINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:def|import)\s").unwrap());

/// The inferred category of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    SourceCode,
    SqlScript,
    Notebook,
    Image,
    Text,
    OtherBinary,
}

impl Kind {
    /// Label used in section headings, e.g. `Source Code File: app.py`.
    pub fn label(self) -> &'static str {
        match self {
            Kind::SourceCode => "Source Code",
            Kind::SqlScript => "SQL Script",
            Kind::Notebook => "Notebook",
            Kind::Image => "Image",
            Kind::Text => "Text",
            Kind::OtherBinary => "Attached",
        }
    }
}

/// Classifies an uploaded file from its name and payload.
///
/// Total function: content that cannot be decoded as text classifies as
/// [`Kind::OtherBinary`], and anything without a recognizable hint falls
/// through to [`Kind::Text`]. There is no error path.
pub fn classify(name: &str, bytes: &[u8]) -> Kind {
    match extension(name).as_deref() {
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext) => return Kind::Image,
        Some("ipynb") => return Kind::Notebook,
        _ => {}
    }

    let sample_size = std::cmp::min(8192, bytes.len());
    if inspect(&bytes[..sample_size]) == ContentType::BINARY {
        return Kind::OtherBinary;
    }

    let text = String::from_utf8_lossy(bytes);
    if text.lines().any(|line| SQL_HINT.is_match(line)) {
        Kind::SqlScript
    } else if text.lines().any(|line| CODE_HINT.is_match(line)) {
        Kind::SourceCode
    } else {
        Kind::Text
    }
}

fn extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.to_lowercase())
}
