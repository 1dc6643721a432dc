use std::io::{self, Write};

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::fonts::BuiltinFont;
use crate::graphics::{Color, Rect, KAPPA};
use crate::images::{calculate_placement, ImageData, ImageFit, ImageFormat, ImageId};
use crate::objects::{ObjId, PdfObject};
use crate::writer::{escape_pdf_bytes, PdfWriter};

const CATALOG_OBJ: ObjId = ObjId(1, 0);
const PAGES_OBJ: ObjId = ObjId(2, 0);
const FIRST_FONT_OBJ_NUM: u32 = 3;

/// Font and size for a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: BuiltinFont,
    pub font_size: f64,
}

impl TextStyle {
    pub fn new(font: BuiltinFont, font_size: f64) -> Self {
        TextStyle { font, font_size }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font: BuiltinFont::Helvetica,
            font_size: 12.0,
        }
    }
}

/// High-level API for building PDF documents.
///
/// Generic over `Write` so it works with in-memory buffers
/// (`Vec<u8>`) or any other writer. Objects are numbered in the
/// order they are written, so identical drawing calls always yield
/// identical bytes.
pub struct PdfDocument<W: Write> {
    writer: PdfWriter<W>,
    info: Vec<(String, String)>,
    page_obj_ids: Vec<ObjId>,
    current_page: Option<PageBuilder>,
    images: Vec<EmbeddedImage>,
    fill_alphas: Vec<f64>,
    next_obj_num: u32,
    compress: bool,
}

struct PageBuilder {
    width: f64,
    height: f64,
    content_ops: Vec<u8>,
}

struct EmbeddedImage {
    obj: ObjId,
    width: u32,
    height: u32,
}

impl<W: Write> PdfDocument<W> {
    /// Create a document writing to `writer`. The header and the
    /// shared font objects are written immediately.
    pub fn new(writer: W) -> io::Result<Self> {
        let mut pdf_writer = PdfWriter::new(writer);
        pdf_writer.write_header()?;

        let mut next_obj_num = FIRST_FONT_OBJ_NUM;
        for font in BuiltinFont::ALL {
            let mut entries = vec![
                ("Type", PdfObject::name("Font")),
                ("Subtype", PdfObject::name("Type1")),
                ("BaseFont", PdfObject::name(font.pdf_base_name())),
            ];
            if !font.is_symbolic() {
                entries.push(("Encoding", PdfObject::name("WinAnsiEncoding")));
            }
            pdf_writer.write_object(ObjId(next_obj_num, 0), &PdfObject::dict(entries))?;
            next_obj_num += 1;
        }

        Ok(PdfDocument {
            writer: pdf_writer,
            info: Vec::new(),
            page_obj_ids: Vec::new(),
            current_page: None,
            images: Vec::new(),
            fill_alphas: Vec::new(),
            next_obj_num,
            compress: true,
        })
    }

    /// Toggle FlateDecode compression of page content streams.
    /// Image samples are always compressed.
    pub fn set_compression(&mut self, compress: bool) -> &mut Self {
        self.compress = compress;
        self
    }

    /// Set a document info entry (e.g. "Creator", "Title").
    pub fn set_info(&mut self, key: &str, value: &str) -> &mut Self {
        self.info.push((key.to_string(), value.to_string()));
        self
    }

    /// Begin a new page with the given dimensions in points.
    /// An open page is closed first.
    pub fn begin_page(&mut self, width: f64, height: f64) -> io::Result<&mut Self> {
        if self.current_page.is_some() {
            self.end_page()?;
        }
        self.current_page = Some(PageBuilder {
            width,
            height,
            content_ops: Vec::new(),
        });
        Ok(self)
    }

    fn push_op(&mut self, op: &str) -> &mut Self {
        let page = self
            .current_page
            .as_mut()
            .expect("drawing operation with no open page");
        page.content_ops.extend_from_slice(op.as_bytes());
        self
    }

    // -------------------------------------------------------
    // Graphics state
    // -------------------------------------------------------

    pub fn save_state(&mut self) -> &mut Self {
        self.push_op("q\n")
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.push_op("Q\n")
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        let op = format!("{} rg\n", color_operands(color));
        self.push_op(&op)
    }

    pub fn set_stroke_color(&mut self, color: Color) -> &mut Self {
        let op = format!("{} RG\n", color_operands(color));
        self.push_op(&op)
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        let op = format!("{} w\n", format_coord(width));
        self.push_op(&op)
    }

    /// Set the constant fill opacity through an ExtGState resource.
    /// Stays in effect until the graphics state is restored.
    pub fn set_fill_alpha(&mut self, alpha: f64) -> &mut Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let index = match self.fill_alphas.iter().position(|a| *a == alpha) {
            Some(i) => i,
            None => {
                self.fill_alphas.push(alpha);
                self.fill_alphas.len() - 1
            }
        };
        let op = format!("/GS{} gs\n", index + 1);
        self.push_op(&op)
    }

    // -------------------------------------------------------
    // Paths
    // -------------------------------------------------------

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        let op = format!("{} {} m\n", format_coord(x), format_coord(y));
        self.push_op(&op)
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        let op = format!("{} {} l\n", format_coord(x), format_coord(y));
        self.push_op(&op)
    }

    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> &mut Self {
        let op = format!(
            "{} {} {} {} {} {} c\n",
            format_coord(x1),
            format_coord(y1),
            format_coord(x2),
            format_coord(y2),
            format_coord(x3),
            format_coord(y3),
        );
        self.push_op(&op)
    }

    pub fn close_path(&mut self) -> &mut Self {
        self.push_op("h\n")
    }

    pub fn rect(&mut self, rect: &Rect) -> &mut Self {
        let op = format!(
            "{} {} {} {} re\n",
            format_coord(rect.x),
            format_coord(rect.y),
            format_coord(rect.width),
            format_coord(rect.height),
        );
        self.push_op(&op)
    }

    /// Rectangle with circular corners. The radius is capped at half
    /// the shorter side.
    pub fn rounded_rect(&mut self, rect: &Rect, radius: f64) -> &mut Self {
        let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
        if r == 0.0 {
            return self.rect(rect);
        }
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.x + rect.width, rect.y + rect.height);
        let k = r * KAPPA;
        self.move_to(x0 + r, y0)
            .line_to(x1 - r, y0)
            .curve_to(x1 - r + k, y0, x1, y0 + r - k, x1, y0 + r)
            .line_to(x1, y1 - r)
            .curve_to(x1, y1 - r + k, x1 - r + k, y1, x1 - r, y1)
            .line_to(x0 + r, y1)
            .curve_to(x0 + r - k, y1, x0, y1 - r + k, x0, y1 - r)
            .line_to(x0, y0 + r)
            .curve_to(x0, y0 + r - k, x0 + r - k, y0, x0 + r, y0)
            .close_path()
    }

    /// Full circle built from four Bezier quarter arcs.
    pub fn circle(&mut self, cx: f64, cy: f64, r: f64) -> &mut Self {
        let k = r * KAPPA;
        self.move_to(cx + r, cy)
            .curve_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r)
            .curve_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy)
            .curve_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r)
            .curve_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy)
            .close_path()
    }

    pub fn fill(&mut self) -> &mut Self {
        self.push_op("f\n")
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.push_op("S\n")
    }

    pub fn fill_stroke(&mut self) -> &mut Self {
        self.push_op("B\n")
    }

    /// Intersect the clipping path with the current path and end it
    /// without painting.
    pub fn clip(&mut self) -> &mut Self {
        self.push_op("W n\n")
    }

    // -------------------------------------------------------
    // Text
    // -------------------------------------------------------

    /// Place a single line of text with its baseline starting at
    /// (x, y), painted in the current fill color.
    pub fn place_text(&mut self, text: &str, style: &TextStyle, x: f64, y: f64) -> &mut Self {
        let mut op = format!(
            "BT\n/{} {} Tf\n{} {} Td\n(",
            style.font.pdf_name(),
            format_coord(style.font_size),
            format_coord(x),
            format_coord(y),
        )
        .into_bytes();
        op.extend_from_slice(&escape_pdf_bytes(&style.font.encode(text)));
        op.extend_from_slice(b") Tj\nET\n");

        let page = self
            .current_page
            .as_mut()
            .expect("place_text called with no open page");
        page.content_ops.extend_from_slice(&op);
        self
    }

    // -------------------------------------------------------
    // Images
    // -------------------------------------------------------

    /// Embed an image as an XObject and return its handle. The
    /// pixel data is written out right away.
    pub fn add_image(&mut self, image: &ImageData) -> io::Result<ImageId> {
        let smask = match &image.smask_data {
            Some(alpha) => {
                let id = self.allocate();
                let mask = PdfObject::stream(
                    image_dict(image.width, image.height, "DeviceGray", "FlateDecode"),
                    deflate(alpha)?,
                );
                self.writer.write_object(id, &mask)?;
                Some(id)
            }
            None => None,
        };

        let (filter, data) = match image.format {
            ImageFormat::Jpeg => ("DCTDecode", image.data.clone()),
            ImageFormat::Raw => ("FlateDecode", deflate(&image.data)?),
        };
        let mut dict = image_dict(
            image.width,
            image.height,
            image.color_space.pdf_name(),
            filter,
        );
        if let Some(mask_id) = smask {
            dict.push(("SMask", PdfObject::Reference(mask_id)));
        }
        let id = self.allocate();
        self.writer.write_object(id, &PdfObject::stream(dict, data))?;

        self.images.push(EmbeddedImage {
            obj: id,
            width: image.width,
            height: image.height,
        });
        Ok(ImageId(self.images.len() - 1))
    }

    /// Draw an embedded image inside `rect` using `fit`.
    pub fn place_image(&mut self, image: &ImageId, rect: &Rect, fit: ImageFit) -> &mut Self {
        let embedded = &self.images[image.0];
        let p = calculate_placement(embedded.width, embedded.height, rect, fit);
        let op = format!(
            "q\n{} 0 0 {} {} {} cm\n/Im{} Do\nQ\n",
            format_coord(p.width),
            format_coord(p.height),
            format_coord(p.x),
            format_coord(p.y),
            image.0 + 1,
        );
        self.push_op(&op)
    }

    // -------------------------------------------------------
    // Output
    // -------------------------------------------------------

    fn allocate(&mut self) -> ObjId {
        let id = ObjId(self.next_obj_num, 0);
        self.next_obj_num += 1;
        id
    }

    /// End the current page and write its content stream and page
    /// dictionary.
    pub fn end_page(&mut self) -> io::Result<()> {
        let page = self
            .current_page
            .take()
            .expect("end_page called with no open page");

        let content = if self.compress {
            PdfObject::stream(
                vec![("Filter", PdfObject::name("FlateDecode"))],
                deflate(&page.content_ops)?,
            )
        } else {
            PdfObject::stream(vec![], page.content_ops)
        };
        let content_id = self.allocate();
        self.writer.write_object(content_id, &content)?;

        let page_id = self.allocate();
        let page_dict = PdfObject::dict(vec![
            ("Type", PdfObject::name("Page")),
            ("Parent", PdfObject::Reference(PAGES_OBJ)),
            ("MediaBox", PdfObject::reals(&[0.0, 0.0, page.width, page.height])),
            ("Contents", PdfObject::Reference(content_id)),
            ("Resources", self.resources()),
        ]);
        self.writer.write_object(page_id, &page_dict)?;

        self.page_obj_ids.push(page_id);
        Ok(())
    }

    fn resources(&self) -> PdfObject {
        let fonts = BuiltinFont::ALL
            .iter()
            .enumerate()
            .map(|(i, font)| {
                (
                    font.pdf_name().to_string(),
                    PdfObject::Reference(ObjId(FIRST_FONT_OBJ_NUM + i as u32, 0)),
                )
            })
            .collect();
        let mut entries = vec![("Font".to_string(), PdfObject::Dictionary(fonts))];

        if !self.images.is_empty() {
            let xobjects = self
                .images
                .iter()
                .enumerate()
                .map(|(i, img)| (format!("Im{}", i + 1), PdfObject::Reference(img.obj)))
                .collect();
            entries.push(("XObject".to_string(), PdfObject::Dictionary(xobjects)));
        }

        if !self.fill_alphas.is_empty() {
            let states = self
                .fill_alphas
                .iter()
                .enumerate()
                .map(|(i, alpha)| {
                    (
                        format!("GS{}", i + 1),
                        PdfObject::dict(vec![
                            ("Type", PdfObject::name("ExtGState")),
                            ("ca", PdfObject::Real(*alpha)),
                        ]),
                    )
                })
                .collect();
            entries.push(("ExtGState".to_string(), PdfObject::Dictionary(states)));
        }

        PdfObject::Dictionary(entries)
    }

    /// Finish the document: info dictionary, page tree, catalog,
    /// xref and trailer. Returns the inner writer.
    pub fn end_document(mut self) -> io::Result<W> {
        if self.current_page.is_some() {
            self.end_page()?;
        }

        let info_id = if self.info.is_empty() {
            None
        } else {
            let id = self.allocate();
            let entries = self
                .info
                .iter()
                .map(|(k, v)| (k.as_str(), PdfObject::text(v)))
                .collect();
            self.writer.write_object(id, &PdfObject::dict(entries))?;
            Some(id)
        };

        let kids = self
            .page_obj_ids
            .iter()
            .map(|id| PdfObject::Reference(*id))
            .collect();
        let pages = PdfObject::dict(vec![
            ("Type", PdfObject::name("Pages")),
            ("Kids", PdfObject::Array(kids)),
            ("Count", PdfObject::Integer(self.page_obj_ids.len() as i64)),
        ]);
        self.writer.write_object(PAGES_OBJ, &pages)?;

        let catalog = PdfObject::dict(vec![
            ("Type", PdfObject::name("Catalog")),
            ("Pages", PdfObject::Reference(PAGES_OBJ)),
        ]);
        self.writer.write_object(CATALOG_OBJ, &catalog)?;

        self.writer.write_xref_and_trailer(CATALOG_OBJ, info_id)?;
        Ok(self.writer.into_inner())
    }
}

fn image_dict(
    width: u32,
    height: u32,
    color_space: &str,
    filter: &str,
) -> Vec<(&'static str, PdfObject)> {
    vec![
        ("Type", PdfObject::name("XObject")),
        ("Subtype", PdfObject::name("Image")),
        ("Width", PdfObject::Integer(width as i64)),
        ("Height", PdfObject::Integer(height as i64)),
        ("ColorSpace", PdfObject::name(color_space)),
        ("BitsPerComponent", PdfObject::Integer(8)),
        ("Filter", PdfObject::name(filter)),
    ]
}

fn deflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

fn color_operands(color: Color) -> String {
    format!(
        "{} {} {}",
        format_coord(color.r),
        format_coord(color.g),
        format_coord(color.b),
    )
}

/// Format a coordinate value for PDF content streams.
pub(crate) fn format_coord(v: f64) -> String {
    if v == v.floor() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.4}", v);
        let s = s.trim_end_matches('0').trim_end_matches('.');
        if s == "-0" {
            "0".to_string()
        } else {
            s.to_string()
        }
    }
}
