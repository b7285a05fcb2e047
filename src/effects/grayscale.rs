//! Desaturation via luma weighting.

use crate::error::Error;
use crate::image::argb::{alpha, argb, blue, green, red};
use crate::image::ImageArgb;

// Rec. 709 luma weights, matching a saturation-zero colour matrix.
const WR: f32 = 0.213;
const WG: f32 = 0.715;
const WB: f32 = 0.072;

/// Convert to grayscale, preserving the alpha channel.
pub fn grayscale(src: &ImageArgb) -> Result<ImageArgb, Error> {
    let mut out = ImageArgb::try_new(src.w, src.h)?;
    for (dst, &px) in out.data.iter_mut().zip(src.data.iter()) {
        let luma = (WR * red(px) as f32 + WG * green(px) as f32 + WB * blue(px) as f32 + 0.5)
            as u32;
        let luma = luma.min(255);
        *dst = argb(alpha(px), luma, luma, luma);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_input_is_unchanged() {
        let src = ImageArgb::filled(3, 3, 0xff808080);
        let out = grayscale(&src).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn output_channels_are_equal_and_alpha_survives() {
        let src = ImageArgb::filled(2, 2, 0x80fa3c10);
        let out = grayscale(&src).unwrap();
        for &px in &out.data {
            assert_eq!(alpha(px), 0x80);
            assert_eq!(red(px), green(px));
            assert_eq!(green(px), blue(px));
        }
    }
}
