//! Compositing: overlays, watermarks, and image mosaics.

use crate::error::Error;
use crate::image::argb::{alpha, argb, blue, green, red, try_clone_buffer};
use crate::image::ImageArgb;
use serde::{Deserialize, Serialize};

/// Placement of the second image when joining two into one canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Top,
    Bottom,
}

/// Source-over blend of one straight-alpha pixel onto another.
#[inline]
fn blend(dst: u32, src: u32) -> u32 {
    let sa = alpha(src);
    if sa == 255 {
        return src;
    }
    if sa == 0 {
        return dst;
    }
    let da = alpha(dst);
    let inv = 255 - sa;
    let oa = sa + da * inv / 255;
    if oa == 0 {
        return 0;
    }
    let ch = |s: u32, d: u32| ((s * sa * 255 + d * da * inv) / (oa * 255)).min(255);
    argb(
        oa,
        ch(red(src), red(dst)),
        ch(green(src), green(dst)),
        ch(blue(src), blue(dst)),
    )
}

/// Draw `top` onto `dst` at offset (x, y), clipping to the canvas.
pub fn overlay_at(dst: &mut ImageArgb, top: &ImageArgb, x: i64, y: i64) {
    for ty in 0..top.h as i64 {
        let dy = y + ty;
        if dy < 0 || dy >= dst.h as i64 {
            continue;
        }
        for tx in 0..top.w as i64 {
            let dx = x + tx;
            if dx < 0 || dx >= dst.w as i64 {
                continue;
            }
            let under = dst.get(dx as usize, dy as usize);
            let over = top.get(tx as usize, ty as usize);
            dst.set(dx as usize, dy as usize, blend(under, over));
        }
    }
}

/// Stamp a watermark near the bottom-right corner.
///
/// The mark is placed 5 pixels past the corner so it bleeds off the edge,
/// the way the original utility positioned it; the overflow is clipped.
pub fn watermark(src: &ImageArgb, mark: &ImageArgb) -> Result<ImageArgb, Error> {
    let mut out = ImageArgb {
        w: src.w,
        h: src.h,
        stride: src.stride,
        data: try_clone_buffer(&src.data)?,
    };
    let x = src.w as i64 - mark.w as i64 + 5;
    let y = src.h as i64 - mark.h as i64 + 5;
    overlay_at(&mut out, mark, x, y);
    Ok(out)
}

/// Join images side by side (or stacked) into one canvas.
///
/// With a single image this returns a copy; joining proceeds pairwise in
/// order, so mixed sizes accumulate onto a growing transparent canvas.
pub fn mosaic(direction: Direction, images: &[ImageArgb]) -> Result<ImageArgb, Error> {
    assert!(!images.is_empty(), "mosaic requires at least one image");
    let mut acc = ImageArgb {
        w: images[0].w,
        h: images[0].h,
        stride: images[0].stride,
        data: try_clone_buffer(&images[0].data)?,
    };
    for next in &images[1..] {
        acc = join(&acc, next, direction)?;
    }
    Ok(acc)
}

fn join(first: &ImageArgb, second: &ImageArgb, direction: Direction) -> Result<ImageArgb, Error> {
    let (fw, fh) = (first.w, first.h);
    let (sw, sh) = (second.w, second.h);
    let mut canvas = match direction {
        Direction::Left | Direction::Right => ImageArgb::try_new(fw + sw, fh.max(sh))?,
        Direction::Top | Direction::Bottom => ImageArgb::try_new(fw.max(sw), fh + sh)?,
    };
    match direction {
        Direction::Left => {
            overlay_at(&mut canvas, first, sw as i64, 0);
            overlay_at(&mut canvas, second, 0, 0);
        }
        Direction::Right => {
            overlay_at(&mut canvas, first, 0, 0);
            overlay_at(&mut canvas, second, fw as i64, 0);
        }
        Direction::Top => {
            overlay_at(&mut canvas, first, 0, sh as i64);
            overlay_at(&mut canvas, second, 0, 0);
        }
        Direction::Bottom => {
            overlay_at(&mut canvas, first, 0, 0);
            overlay_at(&mut canvas, second, 0, fh as i64);
        }
    }
    Ok(canvas)
}

/// Centre `above` on top of `below`.
pub fn overlay_centered(below: &ImageArgb, above: &ImageArgb) -> Result<ImageArgb, Error> {
    let mut out = ImageArgb {
        w: below.w,
        h: below.h,
        stride: below.stride,
        data: try_clone_buffer(&below.data)?,
    };
    let x = (below.w as i64 - above.w as i64) / 2;
    let y = (below.h as i64 - above.h as i64) / 2;
    overlay_at(&mut out, above, x, y);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_overlay_replaces_pixels() {
        let mut dst = ImageArgb::filled(4, 4, 0xffff0000);
        let top = ImageArgb::filled(2, 2, 0xff0000ff);
        overlay_at(&mut dst, &top, 1, 1);
        assert_eq!(dst.get(0, 0), 0xffff0000);
        assert_eq!(dst.get(1, 1), 0xff0000ff);
        assert_eq!(dst.get(2, 2), 0xff0000ff);
        assert_eq!(dst.get(3, 3), 0xffff0000);
    }

    #[test]
    fn transparent_overlay_leaves_canvas_alone() {
        let mut dst = ImageArgb::filled(3, 3, 0xff123456);
        let top = ImageArgb::filled(3, 3, 0x00000000);
        overlay_at(&mut dst, &top, 0, 0);
        assert!(dst.data.iter().all(|&px| px == 0xff123456));
    }

    #[test]
    fn offscreen_overlay_is_clipped() {
        let mut dst = ImageArgb::filled(3, 3, 0xff000000);
        let top = ImageArgb::filled(2, 2, 0xffffffff);
        overlay_at(&mut dst, &top, -1, -1);
        assert_eq!(dst.get(0, 0), 0xffffffff);
        assert_eq!(dst.get(1, 1), 0xff000000);
    }
}
