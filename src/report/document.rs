//! Report document description and PDF rendering.
//!
//! `ReportDocument` is the complete, render-ready content of the report. The
//! PDF backend (`printpdf`) only lays it out top to bottom: title, summary
//! sections, then every chart image, starting a new page whenever the next
//! element does not fit.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::image_crate::codecs::jpeg::JpegEncoder;
use printpdf::image_crate::{self, ColorType, DynamicImage, ImageError};
use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, Image, ImageFilter, ImageTransform, ImageXObject, IndirectFontRef, Mm,
    PdfDocument, PdfDocumentReference, PdfLayerReference, Px,
};
use tracing::debug;

use crate::error::ReportError;

/// A heading followed by pre-formatted text lines.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSection {
    pub heading: String,
    pub lines: Vec<String>,
}

/// Everything that goes into the report, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub subtitle: Option<String>,
    pub sections: Vec<DocumentSection>,
    pub charts_heading: String,
    pub images: Vec<PathBuf>,
}

/// Something that turns a report document into a file.
pub trait DocumentRenderer {
    fn render(&mut self, document: &ReportDocument, path: &Path) -> Result<(), ReportError>;
}

const TOP_MARGIN: f32 = 10.0;
const LEFT_MARGIN: f32 = 10.0;
const BOTTOM_MARGIN: f32 = 5.0;
const IMAGE_LEFT: f32 = 30.0;
const MM_PER_INCH: f32 = 25.4;
const JPEG_QUALITY: u8 = 90;

/// Vertical position on the current page, measured in mm from the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PageCursor {
    y: f32,
    page_height: f32,
    pages: usize,
}

impl PageCursor {
    fn new(page_height: f32) -> Self {
        Self {
            y: TOP_MARGIN,
            page_height,
            pages: 1,
        }
    }

    /// Claim `height` mm. Returns `true` when a new page had to be started;
    /// the claimed block then begins at the top margin.
    fn reserve(&mut self, height: f32) -> bool {
        let fits = self.y + height <= self.page_height - BOTTOM_MARGIN;
        // An element taller than a page still goes on a fresh page, once.
        let new_page = !fits && self.y > TOP_MARGIN;
        if new_page {
            self.y = TOP_MARGIN;
            self.pages += 1;
        }
        new_page
    }

    fn advance(&mut self, height: f32) {
        self.y += height;
    }

    /// PDF y coordinate (from the bottom edge) for a point `offset` mm below
    /// the cursor.
    fn pdf_y(&self, offset: f32) -> f32 {
        self.page_height - self.y - offset
    }
}

/// A4 portrait PDF output.
#[derive(Debug, Clone, Copy)]
pub struct PdfRenderer {
    pub page_width: f32,
    pub page_height: f32,
    /// Image edge length as a fraction of the page width.
    pub image_scale: f32,
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            image_scale: 0.65,
        }
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Renders onto the current layer, adding pages as needed.
struct Layout<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    cursor: PageCursor,
    page_width: f32,
}

impl Layout<'_> {
    fn ensure_room(&mut self, height: f32) {
        if self.cursor.reserve(height) {
            let (page, layer) = self.doc.add_page(
                Mm(self.page_width),
                Mm(self.cursor.page_height),
                format!("Page {}", self.cursor.pages),
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
        }
    }

    fn text(&mut self, text: &str, font_size: f32, line_height: f32, font: &IndirectFontRef) {
        self.ensure_room(line_height);
        // Baseline sits at roughly three quarters of the line box.
        let baseline = self.cursor.pdf_y(line_height * 0.75);
        self.layer
            .use_text(text, font_size, Mm(LEFT_MARGIN), Mm(baseline), font);
        self.cursor.advance(line_height);
    }

    fn gap(&mut self, height: f32) {
        self.cursor.advance(height);
    }

    fn image(&mut self, image: ImageXObject, edge: f32) {
        let (px_w, px_h) = (image.width.0, image.height.0);
        let dpi = px_w.max(1) as f32 * MM_PER_INCH / edge;
        let height = px_h as f32 * MM_PER_INCH / dpi;

        self.ensure_room(height);
        let bottom = self.cursor.pdf_y(height);

        Image::from(image).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(IMAGE_LEFT)),
                translate_y: Some(Mm(bottom)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );
        self.cursor.advance(height);
    }
}

/// Re-encode an image as a DCT (JPEG) stream so the PDF stays small.
///
/// Alpha channels are dropped; chart PNGs are opaque.
fn jpeg_xobject(image: &DynamicImage) -> Result<ImageXObject, ImageError> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut data = Vec::new();
    JpegEncoder::new_with_quality(&mut data, JPEG_QUALITY).encode(rgb.as_raw(), width, height, ColorType::Rgb8)?;

    Ok(ImageXObject {
        width: Px(width as usize),
        height: Px(height as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: data,
        image_filter: Some(ImageFilter::DCT),
        smask: None,
        clipping_bbox: None,
    })
}

impl DocumentRenderer for PdfRenderer {
    fn render(&mut self, document: &ReportDocument, path: &Path) -> Result<(), ReportError> {
        self.write(document, path).map(|_| ())
    }
}

impl PdfRenderer {
    /// Lay out and save `document`, returning the number of pages.
    pub fn write(&self, document: &ReportDocument, path: &Path) -> Result<usize, ReportError> {
        let doc_err = |message: String| ReportError::Document {
            path: path.to_path_buf(),
            message,
        };

        let (doc, page, layer) = PdfDocument::new(
            document.title.as_str(),
            Mm(self.page_width),
            Mm(self.page_height),
            "Page 1",
        );
        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| doc_err(format!("font: {e}")))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| doc_err(format!("font: {e}")))?,
        };

        let mut layout = Layout {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            cursor: PageCursor::new(self.page_height),
            page_width: self.page_width,
        };

        layout.text(&document.title, 24.0, 12.0, &fonts.bold);
        if let Some(subtitle) = &document.subtitle {
            layout.text(subtitle, 11.0, 6.0, &fonts.regular);
        }
        layout.gap(4.0);

        for section in &document.sections {
            layout.text(&section.heading, 18.0, 9.0, &fonts.bold);
            for line in &section.lines {
                layout.text(line, 14.0, 7.0, &fonts.regular);
            }
            layout.gap(8.0);
        }

        layout.text(&document.charts_heading, 18.0, 7.0, &fonts.bold);
        layout.gap(18.0);

        let edge = self.page_width * self.image_scale;
        for image_path in &document.images {
            let image = image_crate::open(image_path)
                .and_then(|img| jpeg_xobject(&img))
                .map_err(|e| doc_err(format!("cannot load image '{}': {e}", image_path.display())))?;
            layout.image(image, edge);
            debug!(image = %image_path.display(), page = layout.cursor.pages, "embedded image");
        }

        let pages = layout.cursor.pages;
        let file = File::create(path).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| doc_err(e.to_string()))?;

        debug!(path = %path.display(), pages, "saved document");
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::{ChartRenderer, ChartSeries, LineChart, PngChartRenderer};

    #[test]
    fn cursor_breaks_pages_only_when_needed() {
        let mut cursor = PageCursor::new(297.0);
        cursor.advance(120.0);

        // 130 + 136.5 fits above the bottom margin.
        assert!(!cursor.reserve(136.5));
        cursor.advance(136.5);

        // The next image does not.
        assert!(cursor.reserve(136.5));
        assert_eq!(cursor.pages, 2);
        assert_eq!(cursor.y, TOP_MARGIN);
    }

    #[test]
    fn oversized_element_on_a_fresh_page_does_not_loop() {
        let mut cursor = PageCursor::new(100.0);
        assert!(!cursor.reserve(500.0));
        assert_eq!(cursor.pages, 1);
    }

    #[test]
    fn pdf_coordinates_are_measured_from_the_bottom() {
        let mut cursor = PageCursor::new(297.0);
        cursor.advance(20.0);
        // Top margin + 20mm of content + 10mm offset.
        assert_eq!(cursor.pdf_y(10.0), 297.0 - 40.0);
    }

    #[test]
    fn renders_pdf_with_embedded_chart() {
        let dir = tempfile::tempdir().unwrap();
        let chart_path = dir.path().join("chart.png");
        let chart = LineChart {
            title: "Weekly".to_string(),
            x_label: "Time".to_string(),
            y_label: "Profit".to_string(),
            series: vec![ChartSeries::new("Basic", &[1.0, 3.0, 2.0])],
        };
        PngChartRenderer::new(200, 200).render(&chart, &chart_path).unwrap();

        let document = ReportDocument {
            title: "Test bakery".to_string(),
            subtitle: Some("Generated on 2026-01-01".to_string()),
            sections: vec![DocumentSection {
                heading: "How much?".to_string(),
                lines: vec!["Basic:\t10.00 EUR".to_string()],
            }],
            charts_heading: "Charts".to_string(),
            images: vec![chart_path.clone(), chart_path],
        };

        let out = dir.path().join("report.pdf");
        PdfRenderer::default().render(&document, &out).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn five_square_images_flow_onto_three_pages() {
        let dir = tempfile::tempdir().unwrap();
        let images: Vec<PathBuf> = (0..5)
            .map(|i| {
                let p = dir.path().join(format!("{i}.png"));
                image_crate::RgbImage::from_pixel(512, 512, image_crate::Rgb([200, 60, 60]))
                    .save(&p)
                    .unwrap();
                p
            })
            .collect();

        let document = ReportDocument {
            title: "Test bakery".to_string(),
            subtitle: None,
            sections: vec![DocumentSection {
                heading: "How much?".to_string(),
                lines: vec!["Basic:\t10.00 EUR".to_string()],
            }],
            charts_heading: "Charts".to_string(),
            images,
        };

        let out = dir.path().join("report.pdf");
        // Content ends at 75mm: one image fits on page 1, then two per page.
        let pages = PdfRenderer::default().write(&document, &out).unwrap();
        assert_eq!(pages, 3);

        let bytes = std::fs::read(&out).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        // Five 512x512 images as raw RGB would be close to 4 MB.
        assert!(bytes.len() < 1_000_000, "pdf is {} bytes", bytes.len());

        let saved = printpdf::lopdf::Document::load(&out).unwrap();
        assert_eq!(saved.get_pages().len(), 3);
    }

    #[test]
    fn jpeg_stream_keeps_pixel_dimensions() {
        let img = DynamicImage::ImageRgb8(image_crate::RgbImage::from_pixel(40, 30, image_crate::Rgb([0, 0, 0])));
        let xobject = jpeg_xobject(&img).unwrap();
        assert_eq!((xobject.width.0, xobject.height.0), (40, 30));
        assert!(matches!(xobject.image_filter, Some(ImageFilter::DCT)));
        assert!(xobject.image_data.starts_with(&[0xFF, 0xD8]));
    }

    #[test]
    fn non_image_file_is_a_document_error() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("notes.txt");
        std::fs::write(&bogus, "not an image").unwrap();

        let document = ReportDocument {
            title: "Broken".to_string(),
            subtitle: None,
            sections: vec![],
            charts_heading: "Charts".to_string(),
            images: vec![bogus],
        };

        let err = PdfRenderer::default()
            .render(&document, &dir.path().join("report.pdf"))
            .unwrap_err();
        assert!(matches!(err, ReportError::Document { .. }));
        assert_eq!(err.exit_code(), 4);
    }
}
