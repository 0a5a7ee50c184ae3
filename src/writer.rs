//! PDF document writer.
//!
//! Renders headings, monospaced text blocks and embedded images onto A4
//! pages, breaking pages as the cursor runs out of room. Only built-in PDF
//! fonts are used, so no font files ship with the binary.

use crate::error::RenderError;
use log::{debug, warn};
use printpdf::image_crate;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;

const TITLE_SIZE: f32 = 22.0;
const HEADING_SIZE: f32 = 13.0;
const BODY_SIZE: f32 = 9.0;
const NOTE_SIZE: f32 = 11.0;

const BODY_LEADING_MM: f32 = 4.2;
const NOTE_LEADING_MM: f32 = 5.2;

/// Fixed display width for embedded images: five inches.
const IMAGE_WIDTH_MM: f32 = 127.0;

/// Column limit for Courier at `BODY_SIZE` on the usable page width.
const MAX_COLS: usize = 92;
const NOTE_COLS: usize = 88;

pub struct PdfWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    heading_font: IndirectFontRef,
    body_font: IndirectFontRef,
    text_font: IndirectFontRef,
    attribution_font: IndirectFontRef,
    y: f32,
    pages: usize,
}

impl PdfWriter {
    pub fn new(title: &str) -> Result<Self, RenderError> {
        let (doc, page, layer) = PdfDocument::new(
            title,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Page 1",
        );

        let heading_font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_err)?;
        let text_font = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
        let attribution_font = doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(pdf_err)?;
        let body_font = doc.add_builtin_font(BuiltinFont::Courier).map_err(pdf_err)?;

        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            heading_font,
            body_font,
            text_font,
            attribution_font,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
            pages: 1,
        })
    }

    /// Writes the document title and author line at the top of the first page.
    pub fn title_block(&mut self, title: &str, author: &str) {
        self.y -= 10.0;
        self.layer.use_text(
            sanitize(title),
            TITLE_SIZE,
            Mm(MARGIN_MM),
            Mm(self.y),
            &self.heading_font,
        );
        self.y -= 9.0;
        self.layer.use_text(
            sanitize(&format!("Author: {author}")),
            NOTE_SIZE,
            Mm(MARGIN_MM),
            Mm(self.y),
            &self.text_font,
        );
        self.y -= 12.0;
    }

    /// Writes a section heading, breaking the page first if there is no room
    /// left for the heading plus at least one body line.
    pub fn heading(&mut self, text: &str) {
        self.ensure_room(18.0);
        self.y -= 4.0;
        self.layer.use_text(
            sanitize(text),
            HEADING_SIZE,
            Mm(MARGIN_MM),
            Mm(self.y),
            &self.heading_font,
        );
        self.y -= 7.0;
    }

    /// Writes a block of monospaced lines, hard-wrapping anything wider than
    /// the column limit.
    pub fn code_lines(&mut self, lines: &[String]) {
        for line in lines {
            for chunk in wrap(&sanitize(line), MAX_COLS) {
                self.ensure_room(BODY_LEADING_MM);
                self.layer.use_text(
                    chunk,
                    BODY_SIZE,
                    Mm(MARGIN_MM),
                    Mm(self.y),
                    &self.body_font,
                );
                self.y -= BODY_LEADING_MM;
            }
        }
        self.y -= 3.0;
    }

    /// Writes proportional text verbatim, line by line.
    pub fn paragraph(&mut self, text: &str) {
        for line in text.lines() {
            for chunk in wrap(&sanitize(line), NOTE_COLS) {
                self.ensure_room(NOTE_LEADING_MM);
                self.layer.use_text(
                    chunk,
                    NOTE_SIZE,
                    Mm(MARGIN_MM),
                    Mm(self.y),
                    &self.text_font,
                );
                self.y -= NOTE_LEADING_MM;
            }
        }
        self.y -= 3.0;
    }

    /// Writes the trailing attribution line.
    pub fn attribution(&mut self, text: &str) {
        self.ensure_room(12.0);
        self.y -= 6.0;
        self.layer.use_text(
            sanitize(text),
            BODY_SIZE,
            Mm(MARGIN_MM),
            Mm(self.y),
            &self.attribution_font,
        );
        self.y -= 5.0;
    }

    /// Embeds an image scaled to the fixed display width. A payload that
    /// cannot be decoded degrades to a placeholder line.
    pub fn image(&mut self, label: &str, bytes: &[u8]) {
        let decoded = match image_crate::load_from_memory(bytes) {
            Ok(img) => img,
            Err(err) => {
                warn!("Could not decode image for {label}: {err}");
                self.code_lines(&["(image could not be embedded)".to_string()]);
                return;
            }
        };

        let image = Image::from_dynamic_image(&decoded);
        let dpi = 96.0_f32;
        let width_mm = image.image.width.0 as f32 * 25.4 / dpi;
        let height_mm = image.image.height.0 as f32 * 25.4 / dpi;
        if width_mm <= 0.0 || height_mm <= 0.0 {
            warn!("Image for {label} has no pixels, skipping");
            self.code_lines(&["(image could not be embedded)".to_string()]);
            return;
        }

        let mut scale = IMAGE_WIDTH_MM / width_mm;
        let usable_height = PAGE_HEIGHT_MM - 2.0 * MARGIN_MM - 10.0;
        let mut display_height = height_mm * scale;
        if display_height > usable_height {
            scale *= usable_height / display_height;
            display_height = usable_height;
        }

        self.ensure_room(display_height + 4.0);
        self.y -= display_height;

        let transform = ImageTransform {
            translate_x: Some(Mm(MARGIN_MM)),
            translate_y: Some(Mm(self.y)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(dpi),
            ..Default::default()
        };
        image.add_to_layer(self.layer.clone(), transform);

        debug!("Embedded image for {label} ({display_height:.0} mm tall)");
        self.y -= 6.0;
    }

    /// Starts a fresh page.
    pub fn page_break(&mut self) {
        self.pages += 1;
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            format!("Page {}", self.pages),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT_MM - MARGIN_MM;
    }

    /// Serializes the document into an in-memory PDF buffer.
    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        self.doc.save_to_bytes().map_err(pdf_err)
    }

    fn ensure_room(&mut self, needed_mm: f32) {
        if self.y - needed_mm < MARGIN_MM {
            self.page_break();
        }
    }
}

fn pdf_err<E: std::fmt::Debug>(err: E) -> RenderError {
    RenderError::Pdf(format!("{err:?}"))
}

/// Built-in PDF fonts are WinAnsi encoded; anything outside Latin-1 would
/// corrupt the text stream, so it renders as `?`.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            c if (c as u32) < 0x20 => ' ',
            c if (c as u32) > 0xFF => '?',
            c => c,
        })
        .collect()
}

/// Hard-wraps a line to the given column limit.
fn wrap(line: &str, cols: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut count = 0;
    for c in line.chars() {
        current.push(c);
        count += 1;
        if count == cols {
            parts.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() || parts.is_empty() {
        parts.push(current);
    }
    parts
}
