//! I/O helpers for 8-bit images and JSON.
//!
//! - `load_image`: read a PNG/JPEG/etc. into an owned gray or RGB buffer.
//! - `save_image`: write an `Image8u` to a PNG (or any format implied by the
//!   extension).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{Channels, Image8u, ImageView};
use image::{DynamicImage, GrayImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Channel layout requested when decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadMode {
    Gray,
    Rgb,
}

/// Load an image from disk and convert it to the requested layout.
pub fn load_image(path: &Path, mode: LoadMode) -> Result<Image8u, String> {
    let decoded = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let (width, height, channels, data) = match mode {
        LoadMode::Gray => {
            let img = decoded.into_luma8();
            (img.width(), img.height(), Channels::Gray, img.into_raw())
        }
        LoadMode::Rgb => {
            let img = decoded.into_rgb8();
            (img.width(), img.height(), Channels::Rgb, img.into_raw())
        }
    };
    log::debug!(
        "loaded {} ({}x{}, {} channel(s))",
        path.display(),
        width,
        height,
        channels.count()
    );
    Image8u::from_raw(width as usize, height as usize, channels, data)
        .map_err(|e| format!("Failed to decode {}: {e}", path.display()))
}

/// Save an 8-bit buffer, creating parent directories.
pub fn save_image(image: &Image8u, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let (w, h) = (image.width() as u32, image.height() as u32);
    let data = image.data().to_vec();
    let dynamic = match image.channel_layout() {
        Channels::Gray => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
        Channels::Rgb => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
    }
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    dynamic
        .save(path)
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
