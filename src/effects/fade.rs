//! Edge fades and vignette lightening.

use crate::error::Error;
use crate::image::argb::{argb, blue, green, red};
use crate::image::ImageArgb;

/// Fade the left and right edges to transparent over `side_width` columns.
pub fn edge_fade(src: &ImageArgb, side_width: usize) -> Result<ImageArgb, Error> {
    let mut out = ImageArgb::try_new(src.w, src.h)?;
    out.data.copy_from_slice(&src.data);
    let side = side_width.min(src.w / 2);
    if side == 0 {
        return Ok(out);
    }

    for y in 0..src.h {
        for x in 0..side {
            let px = src.get(x, y);
            let a = (255 * x / side).min(255) as u32;
            out.set(x, y, argb(a, red(px), green(px), blue(px)));
        }
        for x in src.w - side..src.w {
            let px = src.get(x, y);
            let a = (255 * (src.w - x) / side).min(255) as u32;
            out.set(x, y, argb(a, red(px), green(px), blue(px)));
        }
    }
    Ok(out)
}

/// Lighten pixels towards the image border, leaving the centre untouched.
///
/// `strength` in (0, 1] controls how far the lightening reaches inward;
/// the original feathering effect used 0.5.
pub fn vignette(src: &ImageArgb, strength: f32) -> Result<ImageArgb, Error> {
    assert!(
        strength > 0.0 && strength <= 1.0,
        "vignette strength must be in (0, 1]"
    );
    let mut out = ImageArgb::try_new(src.w, src.h)?;
    if src.w == 0 || src.h == 0 {
        return Ok(out);
    }

    // 15-bit fixed-point aspect correction so the falloff stays circular.
    const SHIFT: i64 = 15;
    let (w, h) = (src.w as i64, src.h as i64);
    let ratio = if w > h {
        (h << SHIFT) / w
    } else {
        (w << SHIFT) / h
    };

    let cx = w >> 1;
    let cy = h >> 1;
    let max = cx * cx + cy * cy;
    let diff = ((max as f32) * strength).max(1.0);

    for y in 0..src.h {
        for x in 0..src.w {
            let px = src.get(x, y);
            let mut dx = cx - x as i64;
            let mut dy = cy - y as i64;
            if w > h {
                dx = (dx * ratio) >> SHIFT;
            } else {
                dy = (dy * ratio) >> SHIFT;
            }
            let dist_sq = (dx * dx + dy * dy) as f32;
            let v = dist_sq / diff * 255.0;

            let lift = |c: u32| ((c as f32 + v) as i64).clamp(0, 255) as u32;
            out.set(
                x,
                y,
                (px & 0xff00_0000) | argb(0, lift(red(px)), lift(green(px)), lift(blue(px))),
            );
        }
    }
    Ok(out)
}
