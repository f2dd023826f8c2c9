//! QR code rendering into short-lived PNG files.

use image::{GrayImage, ImageFormat, Luma};
use qrcode::{Color, EcLevel, QrCode};
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Side length of rendered QR images, in pixels
pub const QR_PIXELS: u32 = 256;

/// Light modules kept around the code so scanners can find its edges
const QUIET_ZONE: u32 = 4;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("could not encode QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A rendered QR code on disk. The file is deleted when this is dropped, whether or
/// not it was ever embedded anywhere.
#[derive(Debug)]
pub struct QrImage {
    file: NamedTempFile,
}

impl QrImage {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Encode `data` (medium error correction) and write it as a square greyscale PNG no
/// larger than `size` pixels into a fresh temporary file
pub fn render_qr(data: &str, size: u32) -> Result<QrImage, QrError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)?;
    let image = paint(&code, size);

    let file = tempfile::Builder::new()
        .prefix("qr_")
        .suffix(".png")
        .tempfile()?;
    image.save_with_format(file.path(), ImageFormat::Png)?;

    Ok(QrImage { file })
}

fn paint(code: &QrCode, size: u32) -> GrayImage {
    let module_count = code.width() as u32;
    let total = module_count + QUIET_ZONE * 2;
    let scale = (size / total).max(1);
    let side = total * scale;

    let mut img = GrayImage::from_pixel(side, side, Luma([255u8]));
    for (i, color) in code.to_colors().iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let x = (i as u32 % module_count + QUIET_ZONE) * scale;
        let y = (i as u32 / module_count + QUIET_ZONE) * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(x + dx, y + dy, Luma([0u8]));
            }
        }
    }
    img
}
