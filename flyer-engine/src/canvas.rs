//! Drawing surface for the flyer blocks.
//!
//! A thin layer over [`PdfDocument`] that keeps a record of the text,
//! codes and images each block puts on the page.

use std::io;

use flyer_pdf::{BuiltinFont, Color, FontMetrics, ImageData, ImageFit, PdfDocument, Rect, TextStyle};

use crate::error::Result;
use crate::qr;

/// One line of text as it was placed on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Baseline start, in points from the bottom-left page corner.
    pub x: f64,
    pub y: f64,
    pub font: BuiltinFont,
    pub size: f64,
}

/// Everything drawn since the last [`Canvas::start_block`].
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Recording {
    pub runs: Vec<TextRun>,
    pub codes: Vec<String>,
    pub images: usize,
}

pub(crate) struct Canvas {
    doc: PdfDocument<Vec<u8>>,
    recording: Recording,
}

impl Canvas {
    pub fn new(compress: bool) -> Result<Self> {
        let mut doc = PdfDocument::new(Vec::new())?;
        doc.set_compression(compress);
        Ok(Canvas {
            doc,
            recording: Recording::default(),
        })
    }

    /// Raw access for path and state operators.
    pub fn pdf(&mut self) -> &mut PdfDocument<Vec<u8>> {
        &mut self.doc
    }

    pub fn set_title(&mut self, title: &str) {
        self.doc.set_info("Title", title);
    }

    pub fn set_creator(&mut self, creator: &str) {
        self.doc.set_info("Creator", creator);
    }

    pub fn begin_page(&mut self, width: f64, height: f64) -> Result<()> {
        self.doc.begin_page(width, height)?;
        Ok(())
    }

    pub fn start_block(&mut self) {
        self.recording = Recording::default();
    }

    pub fn take_recording(&mut self) -> Recording {
        std::mem::take(&mut self.recording)
    }

    /// Width of `text` in points.
    pub fn text_width(text: &str, font: BuiltinFont, size: f64) -> f64 {
        FontMetrics::measure_text(text, font, size)
    }

    pub fn text(&mut self, text: &str, font: BuiltinFont, size: f64, color: Color, x: f64, y: f64) {
        self.doc
            .set_fill_color(color)
            .place_text(text, &TextStyle::new(font, size), x, y);
        self.recording.runs.push(TextRun {
            text: text.to_string(),
            x,
            y,
            font,
            size,
        });
    }

    /// Axis-aligned filled rectangle.
    pub fn fill_rect(&mut self, rect: &Rect, color: Color) {
        self.doc.set_fill_color(color).rect(rect).fill();
    }

    pub fn fill_rounded(&mut self, rect: &Rect, radius: f64, color: Color) {
        self.doc.set_fill_color(color).rounded_rect(rect, radius).fill();
    }

    /// Rounded rectangle filled with `color` at `alpha` opacity.
    pub fn tinted_panel(&mut self, rect: &Rect, radius: f64, color: Color, alpha: f64) {
        self.doc
            .save_state()
            .set_fill_alpha(alpha)
            .set_fill_color(color)
            .rounded_rect(rect, radius)
            .fill()
            .restore_state();
    }

    /// Rectangle outline.
    pub fn frame(&mut self, rect: &Rect, line_width: f64, color: Color) {
        self.doc
            .set_stroke_color(color)
            .set_line_width(line_width)
            .rect(rect)
            .stroke();
    }

    /// Embed `image` and draw it inside `rect`.
    pub fn image(&mut self, image: &ImageData, rect: &Rect, fit: ImageFit) -> Result<()> {
        let id = self.doc.add_image(image)?;
        self.doc.place_image(&id, rect, fit);
        self.recording.images += 1;
        Ok(())
    }

    /// Render `payload` as a `px`-pixel QR code stretched over `rect`.
    pub fn qr_code(&mut self, payload: &str, px: u32, rect: &Rect) -> Result<()> {
        let code = qr::encode(payload, px)?;
        let (w, h) = code.dimensions();
        let image = ImageData::from_gray(w, h, code.into_raw()).map_err(io::Error::other)?;
        self.image(&image, rect, ImageFit::Stretch)?;
        self.recording.codes.push(payload.to_string());
        Ok(())
    }

    pub fn finish(mut self) -> Result<Vec<u8>> {
        self.doc.end_page()?;
        Ok(self.doc.end_document()?)
    }
}
