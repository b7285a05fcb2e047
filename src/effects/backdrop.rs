//! Blurred backdrop composites for detail/player style screens.

use crate::blur::{box_blur, BlurOptions};
use crate::effects::compose::overlay_centered;
use crate::effects::fade::edge_fade;
use crate::error::Error;
use crate::image::ImageArgb;
use crate::transform::{center_crop, scale_to};
use log::debug;

/// Blur settings used for backdrops: the default radius pair with the
/// heavy iteration count the original background helpers ran.
pub const BACKDROP_BLUR: BlurOptions = BlurOptions {
    h_radius: 10.0,
    v_radius: 10.0,
    iterations: 12,
};

/// Width of the edge fade applied to the backdrop foreground.
const FOREGROUND_FADE_PX: usize = 50;

/// Cover-scale the source to `to_w × to_h`, centre-crop, and blur.
pub fn blurred_backdrop(
    src: &ImageArgb,
    to_w: usize,
    to_h: usize,
    opts: &BlurOptions,
) -> Result<ImageArgb, Error> {
    assert!(to_w > 0 && to_h > 0, "backdrop size must be non-zero");
    assert!(src.w > 0 && src.h > 0, "source image must be non-empty");

    let sx = to_w as f32 / src.w as f32;
    let sy = to_h as f32 / src.h as f32;
    let scale = sx.max(sy);
    let nw = ((src.w as f32 * scale).round() as usize).max(to_w);
    let nh = ((src.h as f32 * scale).round() as usize).max(to_h);
    debug!(
        "backdrop: cover-scaling {}x{} -> {}x{} (crop {}x{})",
        src.w, src.h, nw, nh, to_w, to_h
    );

    let scaled = scale_to(src, nw, nh)?;
    let cut = center_crop(&scaled, to_w, to_h)?;
    box_blur(&cut, opts)
}

/// Full backdrop composite: blurred cover background with a square,
/// edge-faded foreground centred on top.
pub fn detail_backdrop(src: &ImageArgb, to_w: usize, to_h: usize) -> Result<ImageArgb, Error> {
    let below = blurred_backdrop(src, to_w, to_h, &BACKDROP_BLUR)?;

    // Foreground: fit the shorter source side to the backdrop height.
    let side = src.w.min(src.h);
    let scale = to_h as f32 / side as f32;
    let nw = ((src.w as f32 * scale).round() as usize).max(to_h);
    let nh = ((src.h as f32 * scale).round() as usize).max(to_h);
    let scaled = scale_to(src, nw, nh)?;
    let square = center_crop(&scaled, to_h, to_h)?;
    let faded = edge_fade(&square, FOREGROUND_FADE_PX)?;

    overlay_centered(&below, &faded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_has_requested_size() {
        let src = ImageArgb::filled(30, 20, 0xff336699);
        let out = blurred_backdrop(&src, 16, 24, &BlurOptions::new(2.0)).unwrap();
        assert_eq!((out.w, out.h), (16, 24));
    }

    #[test]
    fn uniform_source_yields_uniform_backdrop() {
        let src = ImageArgb::filled(20, 10, 0xff804020);
        let out = blurred_backdrop(&src, 8, 8, &BlurOptions::new(3.0)).unwrap();
        assert!(out.data.iter().all(|&px| px == 0xff804020));
    }

    #[test]
    fn detail_backdrop_matches_canvas() {
        let src = ImageArgb::filled(40, 25, 0xff102030);
        let out = detail_backdrop(&src, 32, 18).unwrap();
        assert_eq!((out.w, out.h), (32, 18));
    }
}
