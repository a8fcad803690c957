//! QR code rendering to base64 PNG.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode};
use std::io::Cursor;
use thiserror::Error;

/// Pixels per QR module.
const MODULE_SCALE: u32 = 10;
/// Quiet zone width around the symbol, in modules.
const QUIET_ZONE: u32 = 4;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("PNG rendering failed: {0}")]
    Render(#[from] image::ImageError),
}

/// Renders text as a black-on-white QR code PNG, base64-encoded.
///
/// Error correction level L with a 4-module quiet zone and 10 px modules.
/// The symbol version is chosen automatically for the input length; input
/// too long for any version is an error, never partial output.
pub struct QrService;

impl QrService {
    pub fn new() -> Self {
        Self
    }

    /// Encodes `text` and returns the PNG bytes as a base64 string.
    ///
    /// # Errors
    ///
    /// Returns [`QrError`] if the input does not fit a QR symbol or the PNG
    /// encoder fails.
    pub fn encode_base64_png(&self, text: &str) -> Result<String, QrError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::L)?;
        let modules = code.to_colors();
        let width = code.width() as u32;

        let size = (width + 2 * QUIET_ZONE) * MODULE_SCALE;
        let mut img = GrayImage::from_pixel(size, size, Luma([255u8]));

        for y in 0..width {
            for x in 0..width {
                if modules[(y * width + x) as usize] == Color::Dark {
                    fill_module(&mut img, x + QUIET_ZONE, y + QUIET_ZONE);
                }
            }
        }

        let mut png = Vec::new();
        img.write_to(&mut Cursor::new(&mut png), image::ImageOutputFormat::Png)?;

        Ok(STANDARD.encode(png))
    }
}

impl Default for QrService {
    fn default() -> Self {
        Self::new()
    }
}

fn fill_module(img: &mut GrayImage, module_x: u32, module_y: u32) {
    for dy in 0..MODULE_SCALE {
        for dx in 0..MODULE_SCALE {
            img.put_pixel(
                module_x * MODULE_SCALE + dx,
                module_y * MODULE_SCALE + dy,
                Luma([0u8]),
            );
        }
    }
}
