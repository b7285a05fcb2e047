//! File I/O for ARGB buffers and JSON reports.
//!
//! - `load_argb`: read a PNG/JPEG/etc. into an owned ARGB buffer.
//! - `save_png`: write an `ImageArgb` to a PNG, keeping the alpha channel.
//! - `save_jpeg`: write an `ImageArgb` to a JPEG at a given quality,
//!   dropping alpha.
//! - `write_json_file`: pretty-print a serializable value to disk.

use super::argb::{alpha, argb, blue, green, red};
use super::{ImageArgb, ImageView};
use crate::error::Error;
use image::{ImageOutputFormat, RgbImage, RgbaImage};
use serde::Serialize;
use std::fs;
use std::io::BufWriter;
use std::path::Path;

/// Load an image from disk and convert to a packed ARGB buffer.
pub fn load_argb(path: &Path) -> Result<ImageArgb, Error> {
    let img = image::open(path)?.into_rgba8();
    Ok(from_rgba(img))
}

/// Save an ARGB buffer to a PNG.
pub fn save_png(img: &ImageArgb, path: &Path) -> Result<(), Error> {
    ensure_parent_dir(path)?;
    to_rgba(img).save(path)?;
    Ok(())
}

/// Save an ARGB buffer to a JPEG with the given quality (0-100).
///
/// JPEG has no alpha channel; the alpha byte is discarded.
pub fn save_jpeg(img: &ImageArgb, path: &Path, quality: u8) -> Result<(), Error> {
    ensure_parent_dir(path)?;
    let mut out = BufWriter::new(fs::File::create(path)?);
    image::DynamicImage::ImageRgb8(to_rgb(img))
        .write_to(&mut out, ImageOutputFormat::Jpeg(quality))?;
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

pub(crate) fn from_rgba(img: RgbaImage) -> ImageArgb {
    let w = img.width() as usize;
    let h = img.height() as usize;
    let mut out = ImageArgb::new(w, h);
    for (dst, px) in out.data.iter_mut().zip(img.pixels()) {
        let [r, g, b, a] = px.0;
        *dst = argb(a as u32, r as u32, g as u32, b as u32);
    }
    out
}

pub(crate) fn to_rgba(img: &ImageArgb) -> RgbaImage {
    let mut out = RgbaImage::new(img.w as u32, img.h as u32);
    for (px, dst) in img.rows().flatten().zip(out.pixels_mut()) {
        dst.0 = [
            red(*px) as u8,
            green(*px) as u8,
            blue(*px) as u8,
            alpha(*px) as u8,
        ];
    }
    out
}

fn to_rgb(img: &ImageArgb) -> RgbImage {
    let mut out = RgbImage::new(img.w as u32, img.h as u32);
    for (px, dst) in img.rows().flatten().zip(out.pixels_mut()) {
        dst.0 = [red(*px) as u8, green(*px) as u8, blue(*px) as u8];
    }
    out
}

fn ensure_parent_dir(path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
