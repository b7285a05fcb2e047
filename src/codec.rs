//! Byte and base64 interchange for ARGB buffers.
//!
//! PNG is used as the container so the alpha channel survives the trip,
//! matching the original utility's bitmap-to-bytes behaviour. Base64
//! strings use the standard alphabet without line wrapping.

use crate::error::Error;
use crate::image::io::{from_rgba, to_rgba};
use crate::image::ImageArgb;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageOutputFormat;
use std::io::Cursor;

/// Encode an image to PNG bytes.
pub fn encode_png(img: &ImageArgb) -> Result<Vec<u8>, Error> {
    let mut bytes = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(to_rgba(img)).write_to(&mut bytes, ImageOutputFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Decode an image from an in-memory encoded byte buffer (PNG, JPEG, ...).
pub fn decode(bytes: &[u8]) -> Result<ImageArgb, Error> {
    let img = image::load_from_memory(bytes)?.into_rgba8();
    Ok(from_rgba(img))
}

/// PNG-encode an image and return it as a base64 string.
pub fn to_base64_png(img: &ImageArgb) -> Result<String, Error> {
    Ok(STANDARD.encode(encode_png(img)?))
}

/// Decode an image from a base64 string produced by [`to_base64_png`].
pub fn from_base64(data: &str) -> Result<ImageArgb, Error> {
    let bytes = STANDARD.decode(data.as_bytes())?;
    decode(&bytes)
}
