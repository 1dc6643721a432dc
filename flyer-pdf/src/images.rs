use crate::graphics::Rect;

/// Opaque handle to an image embedded in a PdfDocument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub usize);

/// How pixel data is stored in the PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Original JPEG bytes, embedded with DCTDecode.
    Jpeg,
    /// Raw 8-bit samples, compressed by the document on write.
    Raw,
}

/// How an image should be scaled to fit a bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFit {
    /// Scale to fit within the rect, preserving aspect ratio.
    Fit,
    /// Stretch to fill the rect exactly (may distort).
    Stretch,
}

/// PDF color space for image data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    DeviceRGB,
    DeviceGray,
}

impl ColorSpace {
    pub fn pdf_name(&self) -> &'static str {
        match self {
            ColorSpace::DeviceRGB => "DeviceRGB",
            ColorSpace::DeviceGray => "DeviceGray",
        }
    }
}

/// Image data ready for embedding into a PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub color_space: ColorSpace,
    /// Raw samples (RGB or Gray) or the untouched JPEG file.
    pub data: Vec<u8>,
    /// Separate 8-bit alpha channel, if the source had transparency.
    pub smask_data: Option<Vec<u8>>,
}

impl ImageData {
    /// Wrap 8-bit grayscale samples.
    pub fn from_gray(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, String> {
        check_len(width, height, 1, pixels.len())?;
        Ok(ImageData {
            width,
            height,
            format: ImageFormat::Raw,
            color_space: ColorSpace::DeviceGray,
            data: pixels,
            smask_data: None,
        })
    }

    /// Split interleaved RGBA samples into RGB plus an alpha mask.
    /// The mask is dropped when every pixel is opaque.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, String> {
        check_len(width, height, 4, rgba.len())?;
        let pixel_count = rgba.len() / 4;
        let mut rgb = Vec::with_capacity(pixel_count * 3);
        let mut alpha = Vec::with_capacity(pixel_count);
        for chunk in rgba.chunks_exact(4) {
            rgb.extend_from_slice(&chunk[..3]);
            alpha.push(chunk[3]);
        }
        let opaque = alpha.iter().all(|&a| a == 255);
        Ok(ImageData {
            width,
            height,
            format: ImageFormat::Raw,
            color_space: ColorSpace::DeviceRGB,
            data: rgb,
            smask_data: if opaque { None } else { Some(alpha) },
        })
    }
}

fn check_len(width: u32, height: u32, components: usize, len: usize) -> Result<(), String> {
    let expected = width as usize * height as usize * components;
    if width == 0 || height == 0 || len != expected {
        return Err(format!(
            "Pixel buffer of {} bytes does not match {}x{} with {} components",
            len, width, height, components
        ));
    }
    Ok(())
}

/// Load JPEG or PNG bytes. JPEG is kept as-is; PNG is decoded to
/// raw samples. Other formats, and JPEG layouts PDF viewers cannot
/// take directly (CMYK), are rejected so callers can decode them
/// another way.
pub fn load_image(data: Vec<u8>) -> Result<ImageData, String> {
    if data.len() < 4 {
        return Err("Image data too short to detect format".to_string());
    }
    if data[0] == 0xFF && data[1] == 0xD8 {
        parse_jpeg(data)
    } else if data[..4] == [0x89, b'P', b'N', b'G'] {
        parse_png(&data)
    } else {
        Err("Unsupported image format (expected JPEG or PNG)".to_string())
    }
}

fn parse_jpeg(data: Vec<u8>) -> Result<ImageData, String> {
    let (width, height, components) = jpeg_dimensions(&data)?;
    let color_space = match components {
        1 => ColorSpace::DeviceGray,
        3 => ColorSpace::DeviceRGB,
        _ => {
            return Err(format!(
                "Unsupported JPEG component count: {} (expected 1 or 3)",
                components
            ))
        }
    };
    Ok(ImageData {
        width,
        height,
        format: ImageFormat::Jpeg,
        color_space,
        data,
        smask_data: None,
    })
}

/// Scan JPEG data for a SOF0-SOF3 marker and read width, height and
/// component count from it.
fn jpeg_dimensions(data: &[u8]) -> Result<(u32, u32, u8), String> {
    let len = data.len();
    let mut i = 0;
    while i + 1 < len {
        if data[i] != 0xFF {
            i += 1;
            continue;
        }
        let marker = data[i + 1];
        if (0xC0..=0xC3).contains(&marker) {
            if i + 9 >= len {
                return Err("JPEG SOF marker truncated".to_string());
            }
            let height = u16::from_be_bytes([data[i + 5], data[i + 6]]) as u32;
            let width = u16::from_be_bytes([data[i + 7], data[i + 8]]) as u32;
            return Ok((width, height, data[i + 9]));
        }
        match marker {
            0xFF | 0x00 => i += 1,
            0xD8 | 0xD9 | 0xD0..=0xD7 => i += 2,
            _ => {
                if i + 3 >= len {
                    break;
                }
                let seg_len = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
                i += 2 + seg_len;
            }
        }
    }
    Err("No SOF marker found in JPEG data".to_string())
}

/// Decode PNG to 8-bit samples. Palette and low bit depths are
/// expanded, 16-bit channels stripped.
fn parse_png(data: &[u8]) -> Result<ImageData, String> {
    let mut decoder = png::Decoder::new(data);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| format!("PNG decode error: {}", e))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| format!("PNG frame error: {}", e))?;
    buf.truncate(info.buffer_size());

    let (width, height) = (info.width, info.height);
    match info.color_type {
        png::ColorType::Rgb => Ok(ImageData {
            width,
            height,
            format: ImageFormat::Raw,
            color_space: ColorSpace::DeviceRGB,
            data: buf,
            smask_data: None,
        }),
        png::ColorType::Rgba => ImageData::from_rgba(width, height, &buf),
        png::ColorType::Grayscale => ImageData::from_gray(width, height, buf),
        png::ColorType::GrayscaleAlpha => {
            let mut gray = Vec::with_capacity(buf.len() / 2);
            let mut alpha = Vec::with_capacity(buf.len() / 2);
            for chunk in buf.chunks_exact(2) {
                gray.push(chunk[0]);
                alpha.push(chunk[1]);
            }
            let mut image = ImageData::from_gray(width, height, gray)?;
            image.smask_data = Some(alpha);
            Ok(image)
        }
        other => Err(format!("Unsupported PNG color type: {:?}", other)),
    }
}

/// Where an image lands on the page, in PDF coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Compute image placement inside `rect` for the given fit mode.
/// `Fit` centers the scaled image in the rect.
pub fn calculate_placement(img_w: u32, img_h: u32, rect: &Rect, fit: ImageFit) -> ImagePlacement {
    match fit {
        ImageFit::Fit => {
            let (iw, ih) = (img_w.max(1) as f64, img_h.max(1) as f64);
            let scale = (rect.width / iw).min(rect.height / ih);
            let (w, h) = (iw * scale, ih * scale);
            ImagePlacement {
                x: rect.x + (rect.width - w) / 2.0,
                y: rect.y + (rect.height - h) / 2.0,
                width: w,
                height: h,
            }
        }
        ImageFit::Stretch => ImagePlacement {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_centers_wide_image() {
        let rect = Rect::new(10.0, 20.0, 100.0, 100.0);
        let p = calculate_placement(200, 100, &rect, ImageFit::Fit);
        assert_eq!(p.width, 100.0);
        assert_eq!(p.height, 50.0);
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 45.0);
    }

    #[test]
    fn stretch_fills_rect() {
        let rect = Rect::new(0.0, 0.0, 30.0, 60.0);
        let p = calculate_placement(5, 5, &rect, ImageFit::Stretch);
        assert_eq!((p.width, p.height), (30.0, 60.0));
    }

    #[test]
    fn opaque_rgba_drops_mask() {
        let img = ImageData::from_rgba(1, 2, &[1, 2, 3, 255, 4, 5, 6, 255]).unwrap();
        assert_eq!(img.data, vec![1, 2, 3, 4, 5, 6]);
        assert!(img.smask_data.is_none());
    }

    #[test]
    fn translucent_rgba_keeps_mask() {
        let img = ImageData::from_rgba(1, 1, &[9, 9, 9, 10]).unwrap();
        assert_eq!(img.smask_data, Some(vec![10]));
    }

    #[test]
    fn mismatched_buffer_is_rejected() {
        assert!(ImageData::from_gray(2, 2, vec![0; 3]).is_err());
    }

    #[test]
    fn jpeg_sof_dimensions() {
        // SOI, then SOF0 with height 2, width 3, three components.
        let data = vec![
            0xFF, 0xD8, 0xFF, 0xC0, 0x00, 0x11, 0x08, 0x00, 0x02, 0x00, 0x03, 0x03,
        ];
        assert_eq!(jpeg_dimensions(&data).unwrap(), (3, 2, 3));
    }
}
