//! I/O helpers for the command-line tools.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned RGBA buffer.
//! - `save_luma_png`: write a [`LumaImage`] (grayscale or edges) to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::luma::LumaImage;
use image::{GrayImage, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned packed RGBA buffer loaded from disk.
#[derive(Clone, Debug)]
pub struct OwnedRgba {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

/// Load an image from disk and convert to 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<OwnedRgba, String> {
    let img: RgbaImage = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(OwnedRgba {
        width,
        height,
        data: img.into_raw(),
    })
}

/// Save a single-channel buffer to a grayscale PNG.
pub fn save_luma_png(image: &LumaImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let out = GrayImage::from_raw(image.w as u32, image.h as u32, image.data.clone())
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
