//! Gaussian-weighted soften pass.
//!
//! A single 3×3 convolution with the binomial kernel `[1 2 1; 2 4 2; 1 2 1]`
//! and a caller-chosen divisor. With a divisor of 16 (the kernel sum) the
//! overall brightness is preserved; larger divisors darken, smaller ones
//! brighten and saturate.

use crate::error::Error;
use crate::image::argb::{argb, blue, green, red, try_clone_buffer};
use crate::image::ImageArgb;

const KERNEL: [u32; 9] = [1, 2, 1, 2, 4, 2, 1, 2, 1];

/// Divisor that makes [`soften`] brightness-preserving.
pub const SOFTEN_DELTA: u32 = 16;

/// Soften an image with one weighted 3×3 pass.
///
/// The pass updates pixels in place in scan order, so each window reads
/// already-softened values above and to the left of it. Only interior
/// pixels are convolved; the outermost row and column on each side are
/// carried over untouched, alpha included. Convolved pixels come out fully
/// opaque. Channel sums divide by `delta` with truncation and clamp to 255.
pub fn soften(src: &ImageArgb, delta: u32) -> Result<ImageArgb, Error> {
    assert!(delta > 0, "soften divisor must be positive");
    let mut out = ImageArgb {
        w: src.w,
        h: src.h,
        stride: src.stride,
        data: try_clone_buffer(&src.data)?,
    };
    if src.w < 3 || src.h < 3 {
        return Ok(out);
    }

    for y in 1..src.h - 1 {
        for x in 1..src.w - 1 {
            let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
            let mut k = 0;
            for dy in 0..3 {
                for dx in 0..3 {
                    let px = out.get(x + dx - 1, y + dy - 1);
                    r += red(px) * KERNEL[k];
                    g += green(px) * KERNEL[k];
                    b += blue(px) * KERNEL[k];
                    k += 1;
                }
            }
            out.set(
                x,
                y,
                argb(
                    255,
                    (r / delta).min(255),
                    (g / delta).min(255),
                    (b / delta).min(255),
                ),
            );
        }
    }
    Ok(out)
}
