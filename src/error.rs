use thiserror::Error;

/// Unified error type for pixelbox operations.
///
/// Allocation failure is recoverable by design: callers treat it as
/// "operation unavailable" rather than a crash.
#[derive(Debug, Error)]
pub enum Error {
    #[error("pixel buffer allocation failed ({pixels} pixels)")]
    Allocation { pixels: usize },

    #[error("crop rectangle {x},{y} {w}x{h} exceeds image bounds {width}x{height}")]
    CropOutOfBounds {
        x: usize,
        y: usize,
        w: usize,
        h: usize,
        width: usize,
        height: usize,
    },

    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
