//! Bilinear scaling on ARGB buffers.

use crate::error::Error;
use crate::image::argb::{alpha, argb, blue, green, red};
use crate::image::ImageArgb;

/// Scale by independent width/height factors.
pub fn scale_by(src: &ImageArgb, sx: f32, sy: f32) -> Result<ImageArgb, Error> {
    assert!(sx > 0.0 && sy > 0.0, "scale factors must be positive");
    let nw = ((src.w as f32 * sx).round() as usize).max(1);
    let nh = ((src.h as f32 * sy).round() as usize).max(1);
    scale_to(src, nw, nh)
}

/// Scale to an exact pixel size with bilinear sampling.
///
/// Sample coordinates clamp at the image edges, matching the edge policy
/// of the blur passes.
pub fn scale_to(src: &ImageArgb, new_w: usize, new_h: usize) -> Result<ImageArgb, Error> {
    assert!(src.w > 0 && src.h > 0, "source image must be non-empty");
    assert!(new_w > 0 && new_h > 0, "target size must be non-zero");

    let mut out = ImageArgb::try_new(new_w, new_h)?;
    let x_ratio = src.w as f32 / new_w as f32;
    let y_ratio = src.h as f32 / new_h as f32;
    let max_sx = (src.w - 1) as f32;
    let max_sy = (src.h - 1) as f32;

    for y in 0..new_h {
        let sy = ((y as f32 + 0.5) * y_ratio - 0.5).clamp(0.0, max_sy);
        let y0 = sy as usize;
        let y1 = (y0 + 1).min(src.h - 1);
        let fy = sy - y0 as f32;

        for x in 0..new_w {
            let sx = ((x as f32 + 0.5) * x_ratio - 0.5).clamp(0.0, max_sx);
            let x0 = sx as usize;
            let x1 = (x0 + 1).min(src.w - 1);
            let fx = sx - x0 as f32;

            let p00 = src.get(x0, y0);
            let p10 = src.get(x1, y0);
            let p01 = src.get(x0, y1);
            let p11 = src.get(x1, y1);

            let px = argb(
                lerp2(alpha(p00), alpha(p10), alpha(p01), alpha(p11), fx, fy),
                lerp2(red(p00), red(p10), red(p01), red(p11), fx, fy),
                lerp2(green(p00), green(p10), green(p01), green(p11), fx, fy),
                lerp2(blue(p00), blue(p10), blue(p01), blue(p11), fx, fy),
            );
            out.set(x, y, px);
        }
    }
    Ok(out)
}

#[inline]
fn lerp2(c00: u32, c10: u32, c01: u32, c11: u32, fx: f32, fy: f32) -> u32 {
    let top = c00 as f32 + (c10 as f32 - c00 as f32) * fx;
    let bottom = c01 as f32 + (c11 as f32 - c01 as f32) * fx;
    (top + (bottom - top) * fy + 0.5) as u32
}
