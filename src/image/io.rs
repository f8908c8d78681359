//! I/O helpers for grayscale images and plot bitmaps.
//!
//! - `load_grayscale_image`: read a PNM/PNG/JPEG/etc. into an owned 8-bit
//!   gray buffer, distinguishing a missing file from an undecodable one.
//! - `save_grayscale_u8`: write an owned 8-bit gray buffer to a PNG.
//! - `save_rgba_png`: write a rendered RGBA bitmap to a PNG.
use image::RgbaImage;
use std::fs;
use std::path::Path;

use super::GrayImageU8;
use crate::error::TraceError;

/// Load an image from disk and convert to 8-bit grayscale.
///
/// The existence check runs before the decoder so a missing file reports
/// `NotFound` rather than a decoder error.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, TraceError> {
    if !path.exists() {
        return Err(TraceError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let img = image::open(path)
        .map_err(|e| TraceError::DecodeFailure {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(GrayImageU8::new(width, height, img.into_raw()))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), TraceError> {
    ensure_parent_dir(path)?;
    let image = image::GrayImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.data().to_vec(),
    )
    .ok_or_else(|| TraceError::IoWrite {
        path: path.to_path_buf(),
        reason: "failed to create image buffer".to_string(),
    })?;
    image.save(path).map_err(|e| TraceError::IoWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Save a rendered RGBA bitmap to a PNG.
pub fn save_rgba_png(image: &RgbaImage, path: &Path) -> Result<(), TraceError> {
    ensure_parent_dir(path)?;
    image.save(path).map_err(|e| TraceError::IoWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), TraceError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| TraceError::IoWrite {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })?;
        }
    }
    Ok(())
}
