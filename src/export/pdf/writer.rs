//! Cursor-based A4 page writer
//!
//! Wraps a printpdf document and tracks a vertical cursor, measured in
//! millimetres from the top of the current page. Blocks ask for space
//! before drawing and a fresh page is started when they do not fit.

use image::{DynamicImage, GenericImageView};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Polygon, Rgb as PdfRgb,
};
use tracing::{debug, warn};

use crate::charts::Rgb;
use crate::display::report::truncate;
use crate::error::{DashboardError, DashboardResult};

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const MARGIN: f32 = 15.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

const PT_TO_MM: f32 = 25.4 / 72.0;
/// Rough advance of an average Helvetica glyph, as a fraction of the font size
const GLYPH_WIDTH: f32 = 0.5;
/// Horizontal padding inside table cells
const CELL_PADDING: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// One cell of a table row
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub color: Rgb,
}

impl Cell {
    pub fn new(text: impl Into<String>, color: Rgb) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

pub struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Distance from the top of the page, in mm
    cursor: f32,
    pages: usize,
}

impl PageWriter {
    pub fn new(title: &str) -> DashboardResult<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            cursor: MARGIN,
            pages: 1,
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Distance of the cursor from the top of the page, in mm
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Vertical space left on the current page, in mm
    pub fn remaining(&self) -> f32 {
        PAGE_HEIGHT - MARGIN - self.cursor
    }

    pub fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            format!("Layer {}", self.pages + 1),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor = MARGIN;
        self.pages += 1;
        debug!("Started PDF page {}", self.pages);
    }

    /// Start a new page unless `height` mm still fit on this one.
    ///
    /// Returns `true` when a page break happened. A block taller than a
    /// whole page is placed at the top of a fresh page and allowed to run
    /// past the bottom margin.
    pub fn ensure_space(&mut self, height: f32) -> bool {
        if height <= self.remaining() || self.cursor <= MARGIN {
            return false;
        }
        self.new_page();
        true
    }

    pub fn advance(&mut self, height: f32) {
        self.cursor += height;
    }

    /// Height of one line of text at `size` points
    pub fn line_height(size: f32) -> f32 {
        size * PT_TO_MM * 1.4
    }

    /// Write a line of text at the left margin and move below it
    pub fn text(&mut self, text: &str, size: f32, style: FontStyle, color: Rgb) {
        let height = Self::line_height(size);
        self.ensure_space(height);
        self.text_at(text, size, style, color, MARGIN, self.cursor + size * PT_TO_MM);
        self.advance(height);
    }

    /// Write text with its baseline `baseline` mm from the top of the page
    pub fn text_at(
        &self,
        text: &str,
        size: f32,
        style: FontStyle,
        color: Rgb,
        x: f32,
        baseline: f32,
    ) {
        let font = match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
        };
        self.layer.set_fill_color(pdf_color(color));
        self.layer
            .use_text(text, size, Mm(x), Mm(PAGE_HEIGHT - baseline), font);
    }

    /// Draw a rectangle whose top-left corner is `top` mm from the top
    pub fn rect(
        &self,
        x: f32,
        top: f32,
        width: f32,
        height: f32,
        fill: Option<Rgb>,
        stroke: Option<Rgb>,
    ) {
        let mode = match (fill, stroke) {
            (Some(_), Some(_)) => PaintMode::FillStroke,
            (Some(_), None) => PaintMode::Fill,
            (None, Some(_)) => PaintMode::Stroke,
            (None, None) => return,
        };
        if let Some(color) = fill {
            self.layer.set_fill_color(pdf_color(color));
        }
        if let Some(color) = stroke {
            self.layer.set_outline_color(pdf_color(color));
            self.layer.set_outline_thickness(0.5);
        }

        let bottom = PAGE_HEIGHT - top - height;
        let ring = vec![
            (Point::new(Mm(x), Mm(bottom)), false),
            (Point::new(Mm(x + width), Mm(bottom)), false),
            (Point::new(Mm(x + width), Mm(bottom + height)), false),
            (Point::new(Mm(x), Mm(bottom + height)), false),
        ];
        self.layer.add_polygon(Polygon {
            rings: vec![ring],
            mode,
            winding_order: WindingOrder::NonZero,
        });
    }

    /// Draw one table row at the cursor and move below it.
    ///
    /// Cell text is cut to fit its column.
    pub fn table_row(
        &mut self,
        widths: &[f32],
        cells: &[Cell],
        size: f32,
        style: FontStyle,
        fill: Option<Rgb>,
        grid: Rgb,
    ) {
        let height = Self::line_height(size) + 2.0;
        let baseline = self.cursor + (height + size * PT_TO_MM * 0.7) / 2.0;
        let mut x = MARGIN;
        for (width, cell) in widths.iter().zip(cells) {
            self.rect(x, self.cursor, *width, height, fill, Some(grid));
            let fitted = fit_to_width(&cell.text, *width - 2.0 * CELL_PADDING, size);
            self.text_at(&fitted, size, style, cell.color, x + CELL_PADDING, baseline);
            x += width;
        }
        self.advance(height);
    }

    /// Height a table row takes at `size` points
    pub fn row_height(size: f32) -> f32 {
        Self::line_height(size) + 2.0
    }

    /// Embed a PNG (or any format the image crate reads) centred in the
    /// content width, scaled into a `max_width` x `max_height` mm box.
    ///
    /// Returns `false`, after logging a warning, if the image cannot be
    /// decoded or has no pixels; nothing is drawn in that case.
    pub fn image(&mut self, bytes: &[u8], max_width: f32, max_height: f32, name: &str) -> bool {
        let decoded = match image::load_from_memory(bytes) {
            Ok(img) => img,
            Err(e) => {
                warn!("Could not embed image '{}': {}", name, e);
                return false;
            }
        };
        let (px_width, px_height) = decoded.dimensions();
        if px_width == 0 || px_height == 0 {
            warn!("Could not embed image '{}': image has no pixels", name);
            return false;
        }

        let (width, height) = fit_box(px_width, px_height, max_width, max_height);
        self.ensure_space(height);

        // Alpha channels are dropped; the page background is white anyway
        let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());
        Image::from_dynamic_image(&rgb).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(MARGIN + (CONTENT_WIDTH - width) / 2.0)),
                translate_y: Some(Mm(PAGE_HEIGHT - self.cursor - height)),
                dpi: Some(px_width as f32 * 25.4 / width),
                ..Default::default()
            },
        );
        self.advance(height);
        true
    }

    pub fn finish(self) -> DashboardResult<Vec<u8>> {
        debug!("Saving PDF with {} pages", self.pages);
        self.doc.save_to_bytes().map_err(pdf_error)
    }
}

/// Size in mm of a `px_width` x `px_height` image scaled into a box,
/// aspect ratio preserved
pub fn fit_box(px_width: u32, px_height: u32, max_width: f32, max_height: f32) -> (f32, f32) {
    let aspect = px_height as f32 / px_width as f32;
    let width = max_width.min(max_height / aspect);
    (width, width * aspect)
}

/// Cut `text` so it fits in `width` mm at `size` points
fn fit_to_width(text: &str, width: f32, size: f32) -> String {
    let glyph = size * PT_TO_MM * GLYPH_WIDTH;
    let max_chars = (width / glyph).floor().max(1.0) as usize;
    truncate(text, max_chars)
}

fn pdf_color(color: Rgb) -> Color {
    let (r, g, b) = color.to_unit();
    Color::Rgb(PdfRgb::new(r, g, b, None))
}

fn pdf_error<E: std::fmt::Display>(err: E) -> DashboardError {
    DashboardError::Export(format!("PDF: {}", err))
}
