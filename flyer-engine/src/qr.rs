//! QR code images for URLs.

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use qrcode::{EcLevel, QrCode};

use crate::error::{FlyerError, Result};

/// Light modules around the symbol, in modules.
pub const QUIET_ZONE: u32 = 2;

/// Pixels per module before resampling.
pub const MODULE_PIXELS: u32 = 10;

/// Build the smallest QR symbol holding `payload` at error-correction
/// level M.
fn symbol(payload: &str) -> Result<QrCode> {
    QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M).map_err(|e| {
        FlyerError::CodeCapacity {
            len: payload.len(),
            reason: e.to_string(),
        }
    })
}

/// Side length of the symbol for `payload`, in modules, without the
/// quiet zone.
pub fn module_count(payload: &str) -> Result<usize> {
    Ok(symbol(payload)?.width())
}

/// Render `payload` as a square grayscale image of exactly
/// `target_px` pixels per side.
///
/// The symbol is drawn at [`MODULE_PIXELS`] per module with a
/// [`QUIET_ZONE`] border and then resampled with a Lanczos filter.
pub fn encode(payload: &str, target_px: u32) -> Result<GrayImage> {
    let code = symbol(payload)?;
    let modules = code.width() as u32;
    let side = (modules + 2 * QUIET_ZONE) * MODULE_PIXELS;

    let mut img = GrayImage::from_pixel(side, side, Luma([255u8]));
    for (i, color) in code.to_colors().iter().enumerate() {
        if *color != qrcode::Color::Dark {
            continue;
        }
        let x0 = (QUIET_ZONE + i as u32 % modules) * MODULE_PIXELS;
        let y0 = (QUIET_ZONE + i as u32 / modules) * MODULE_PIXELS;
        for dy in 0..MODULE_PIXELS {
            for dx in 0..MODULE_PIXELS {
                img.put_pixel(x0 + dx, y0 + dy, Luma([0u8]));
            }
        }
    }

    let target = target_px.max(1);
    Ok(imageops::resize(&img, target, target, FilterType::Lanczos3))
}
