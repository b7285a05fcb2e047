//! Rounded-corner masks and round thumbnails.

use crate::error::Error;
use crate::image::argb::{alpha, argb, blue, green, red};
use crate::image::ImageArgb;
use crate::transform::center_crop;

/// Apply a rounded-rectangle alpha mask with corner radius `radius` pixels.
///
/// Pixels outside the rounded rectangle become transparent; the corner arc
/// gets a one-pixel coverage ramp so the edge is not jagged.
pub fn round_corners(src: &ImageArgb, radius: f32) -> Result<ImageArgb, Error> {
    assert!(radius >= 0.0, "corner radius must be non-negative");
    let mut out = ImageArgb::try_new(src.w, src.h)?;
    let r = radius
        .min(src.w as f32 / 2.0)
        .min(src.h as f32 / 2.0);

    for y in 0..src.h {
        for x in 0..src.w {
            let px = src.get(x, y);
            let cov = corner_coverage(x, y, src.w, src.h, r);
            let a = (alpha(px) as f32 * cov) as u32;
            out.set(x, y, argb(a, red(px), green(px), blue(px)));
        }
    }
    Ok(out)
}

/// Solid single-colour rounded rectangle, e.g. for plain backgrounds.
pub fn solid_round_rect(color: u32, radius: f32, w: usize, h: usize) -> Result<ImageArgb, Error> {
    let base = ImageArgb::filled(w, h, color);
    round_corners(&base, radius)
}

/// Circular thumbnail: centred square crop with corner radius of half the
/// side, which rounds the square into a disc.
pub fn round_thumbnail(src: &ImageArgb) -> Result<ImageArgb, Error> {
    let side = src.w.min(src.h);
    let square = center_crop(src, side, side)?;
    round_corners(&square, side as f32 / 2.0)
}

/// Coverage in [0, 1] of the rounded-rect mask at pixel centre (x, y).
fn corner_coverage(x: usize, y: usize, w: usize, h: usize, r: f32) -> f32 {
    let px = x as f32 + 0.5;
    let py = y as f32 + 0.5;

    let cx = if px < r {
        r
    } else if px > w as f32 - r {
        w as f32 - r
    } else {
        return 1.0;
    };
    let cy = if py < r {
        r
    } else if py > h as f32 - r {
        h as f32 - r
    } else {
        return 1.0;
    };

    let dist = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
    (r - dist + 0.5).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_become_transparent_and_center_survives() {
        let src = ImageArgb::filled(16, 16, 0xffff0000);
        let out = round_corners(&src, 6.0).unwrap();
        assert_eq!(alpha(out.get(0, 0)), 0);
        assert_eq!(alpha(out.get(15, 0)), 0);
        assert_eq!(alpha(out.get(0, 15)), 0);
        assert_eq!(alpha(out.get(15, 15)), 0);
        assert_eq!(out.get(8, 8), 0xffff0000);
        // Edge midpoints are outside every corner region.
        assert_eq!(out.get(8, 0), 0xffff0000);
        assert_eq!(out.get(0, 8), 0xffff0000);
    }

    #[test]
    fn zero_radius_is_identity() {
        let src = ImageArgb::filled(5, 4, 0xff112233);
        let out = round_corners(&src, 0.0).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn thumbnail_is_square() {
        let src = ImageArgb::filled(12, 8, 0xff445566);
        let out = round_thumbnail(&src).unwrap();
        assert_eq!((out.w, out.h), (8, 8));
        assert_eq!(alpha(out.get(0, 0)), 0);
    }
}
